//! Single-player match against the computer paddle

use glam::Vec2;
use hecs::{Entity, World};

use crate::{
    create_ball, create_paddle, step, Ball, Config, Cooldown, Events, FsmState, GameAction,
    GameFsm, GameRng, InputQueue, Paddle, Score, Side, Time, Trail,
};

/// Everything the renderer needs for one frame
#[derive(Debug, Clone, PartialEq)]
pub struct Snapshot {
    pub ball: Vec2,
    pub trail: Vec<Vec2>, // Newest first
    pub player_y: f32,    // Paddle centres
    pub ai_y: f32,
    pub score: Score,
    pub state: FsmState,
    pub winner: Option<Side>,
}

pub struct Game {
    pub world: World,
    pub time: Time,
    pub config: Config,
    pub score: Score,
    pub events: Events,
    pub input_queue: InputQueue,
    pub rng: GameRng,
    pub fsm: GameFsm,
    pub cooldown: Cooldown,
    ball: Entity,
    player: Entity,
    ai: Entity,
}

impl Game {
    pub fn new(seed: u64) -> Self {
        let config = Config::new();
        let mut world = World::new();
        let center = config.arena_center();

        let player = create_paddle(&mut world, Side::Player, center.y);
        let ai = create_paddle(&mut world, Side::Ai, center.y);
        let ball = create_ball(&mut world, center, Vec2::ZERO);

        let mut game = Self {
            world,
            time: Time::default(),
            config,
            score: Score::new(),
            events: Events::new(),
            input_queue: InputQueue::new(),
            rng: GameRng::new(seed),
            fsm: GameFsm::new(),
            cooldown: Cooldown::new(),
            ball,
            player,
            ai,
        };
        game.reset();
        game
    }

    /// Back to the start screen with a fresh score
    pub fn reset(&mut self) {
        let center_y = self.config.arena_center().y;
        for (_entity, paddle) in self.world.query_mut::<&mut Paddle>() {
            paddle.y = center_y;
        }

        self.score.reset();
        self.events.clear();
        self.input_queue.clear();
        self.cooldown = Cooldown::new();
        self.time.accumulator = 0.0;

        let toward = self.rng.side();
        self.serve(toward);
        self.fsm.transition(GameAction::Reset);
    }

    /// Click, tap or key press on a menu screen
    ///
    /// Returns false when no match can start right now (already playing, or
    /// still inside the pause after the winning point).
    pub fn start(&mut self) -> bool {
        if !self.fsm.is_waiting() {
            return false;
        }
        if self.fsm.state() == FsmState::GameOver {
            self.reset();
        }

        let toward = self.rng.side();
        self.serve(toward);
        self.events.clear();
        self.time.accumulator = 0.0;
        self.fsm.transition(GameAction::Start).success
    }

    /// Move the player's paddle centre to `y` (arena units) on the next frame
    pub fn set_pointer_y(&mut self, y: f32) {
        self.input_queue.push_input(Side::Player, y);
    }

    /// Run one animation frame of `dt` seconds
    pub fn advance(&mut self, dt: f32) -> &Events {
        self.time.dt = dt;
        step(
            &mut self.world,
            &mut self.time,
            &self.config,
            &mut self.score,
            &mut self.events,
            &mut self.input_queue,
            &mut self.rng,
            &mut self.fsm,
            &mut self.cooldown,
        );
        &self.events
    }

    pub fn state(&self) -> FsmState {
        self.fsm.state()
    }

    /// Winner of the finished match, if any
    pub fn winner(&self) -> Option<Side> {
        if self.fsm.is_game_over() {
            self.score.has_winner(self.config.max_score)
        } else {
            None
        }
    }

    pub fn snapshot(&self) -> Snapshot {
        let (ball, trail) = self
            .world
            .query_one::<(&Ball, &Trail)>(self.ball)
            .ok()
            .and_then(|mut query| {
                query
                    .get()
                    .map(|(ball, trail)| (ball.pos, trail.iter().copied().collect::<Vec<_>>()))
            })
            .unwrap_or_else(|| (self.config.arena_center(), Vec::new()));

        Snapshot {
            ball,
            trail,
            player_y: self.paddle_y(self.player),
            ai_y: self.paddle_y(self.ai),
            score: self.score,
            state: self.fsm.state(),
            winner: self.winner(),
        }
    }

    fn paddle_y(&self, entity: Entity) -> f32 {
        self.world
            .get::<&Paddle>(entity)
            .map(|paddle| paddle.y)
            .unwrap_or_else(|_| self.config.arena_center().y)
    }

    fn serve(&mut self, toward: Side) {
        if let Ok((ball, trail)) = self
            .world
            .query_one_mut::<(&mut Ball, &mut Trail)>(self.ball)
        {
            ball.serve(toward, &self.config, &mut self.rng);
            trail.clear();
        }
        log::debug!("serve toward {:?}", toward);
    }
}
