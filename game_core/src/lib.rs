pub mod components;
pub mod config;
pub mod fsm;
pub mod game;
pub mod params;
pub mod resources;
pub mod systems;

pub use components::*;
pub use config::*;
pub use fsm::*;
pub use game::*;
pub use params::*;
pub use resources::*;

use hecs::World;
use systems::*;

/// Run one frame of the deterministic Pong simulation
///
/// `time.dt` is added to the fixed-step accumulator and as many whole ticks
/// as fit are run. `events` describes everything that happened this frame.
#[allow(clippy::too_many_arguments)]
pub fn step(
    world: &mut World,
    time: &mut Time,
    config: &Config,
    score: &mut Score,
    events: &mut Events,
    input_queue: &mut InputQueue,
    rng: &mut GameRng,
    fsm: &mut GameFsm,
    cooldown: &mut Cooldown,
) {
    // Clamp dt to prevent large jumps; non-finite frames count as zero
    let clamped_dt = if time.dt.is_finite() {
        time.dt.clamp(0.0, Params::MAX_DT)
    } else {
        0.0
    };

    events.clear();

    // Pointer input applies in every phase so the paddle follows on menus
    ingest_inputs(world, input_queue, config);

    time.accumulator += clamped_dt;
    while time.accumulator >= Params::FIXED_DT {
        time.accumulator -= Params::FIXED_DT;
        tick(world, config, score, events, rng, fsm, cooldown);
    }

    time.now += clamped_dt;
}

/// Advance the simulation by exactly one fixed tick
fn tick(
    world: &mut World,
    config: &Config,
    score: &mut Score,
    events: &mut Events,
    rng: &mut GameRng,
    fsm: &mut GameFsm,
    cooldown: &mut Cooldown,
) {
    match fsm.state() {
        FsmState::Running => {
            move_ball(world, config);
            check_wall_collisions(world, config, events);
            check_paddle_collisions(world, config, events, rng);
            check_scoring(world, config, score, events, rng);
            move_ai_paddle(world, config);
            clamp_paddles(world, config);

            if score.has_winner(config.max_score).is_some() {
                fsm.transition(GameAction::Win);
                cooldown.start_delay(config.win_delay);
            }
        }
        FsmState::Won => {
            cooldown.update(Params::FIXED_DT);
            if cooldown.is_elapsed() {
                fsm.transition(GameAction::DelayElapsed);
            }
        }
        FsmState::Waiting | FsmState::GameOver => {}
    }
}

/// Helper to create a paddle entity
pub fn create_paddle(world: &mut World, side: Side, y: f32) -> hecs::Entity {
    match side {
        Side::Player => world.spawn((Paddle::new(side, y),)),
        Side::Ai => world.spawn((Paddle::new(side, y), AiControlled)),
    }
}

/// Helper to create the ball entity
pub fn create_ball(world: &mut World, pos: glam::Vec2, vel: glam::Vec2) -> hecs::Entity {
    world.spawn((Ball::new(pos, vel), Trail::new()))
}
