use crate::Side;

/// Time resource for tracking simulation time
#[derive(Debug, Clone, Copy, Default)]
pub struct Time {
    pub dt: f32,          // Frame delta handed to `step`
    pub now: f32,         // Total simulated time
    pub accumulator: f32, // Leftover time not yet consumed by a whole tick
}

/// Game score tracking
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Score {
    pub player: u8,
    pub ai: u8,
}

impl Score {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn increment(&mut self, side: Side) {
        match side {
            Side::Player => self.player = self.player.saturating_add(1),
            Side::Ai => self.ai = self.ai.saturating_add(1),
        }
    }

    pub fn get(&self, side: Side) -> u8 {
        match side {
            Side::Player => self.player,
            Side::Ai => self.ai,
        }
    }

    pub fn has_winner(&self, max_score: u8) -> Option<Side> {
        if self.player >= max_score {
            Some(Side::Player)
        } else if self.ai >= max_score {
            Some(Side::Ai)
        } else {
            None
        }
    }

    pub fn reset(&mut self) {
        *self = Self::default();
    }
}

/// Random number generator
pub struct GameRng(pub rand::rngs::StdRng);

impl GameRng {
    pub fn new(seed: u64) -> Self {
        use rand::SeedableRng;
        Self(rand::rngs::StdRng::seed_from_u64(seed))
    }

    /// Fair coin between the two sides
    pub fn side(&mut self) -> Side {
        use rand::Rng;
        if self.0.gen_bool(0.5) {
            Side::Ai
        } else {
            Side::Player
        }
    }
}

impl Default for GameRng {
    fn default() -> Self {
        Self::new(12345)
    }
}

/// Events that occurred during the last frame
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Events {
    pub ball_hit_wall: bool,
    pub ball_hit_paddle: bool,
    pub scored: Option<Side>,
    pub winner: Option<Side>,
}

impl Events {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn clear(&mut self) {
        *self = Self::default();
    }

    pub fn is_empty(&self) -> bool {
        *self == Self::default()
    }
}

/// Pointer target for a paddle, in arena units (paddle centre)
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PaddleInput {
    pub side: Side,
    pub y: f32,
}

/// Pending paddle inputs gathered between frames
#[derive(Debug, Clone, Default)]
pub struct InputQueue {
    pub inputs: Vec<PaddleInput>,
}

impl InputQueue {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn clear(&mut self) {
        self.inputs.clear();
    }

    pub fn push_input(&mut self, side: Side, y: f32) {
        self.inputs.push(PaddleInput { side, y });
    }

    pub fn drain(&mut self) -> std::vec::Drain<'_, PaddleInput> {
        self.inputs.drain(..)
    }
}

/// Countdown used to hold the win screen back before a rematch
#[derive(Debug, Clone, Copy, Default)]
pub struct Cooldown {
    pub timer: f32, // Seconds remaining (0 = elapsed)
}

impl Cooldown {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn start_delay(&mut self, delay: f32) {
        self.timer = delay;
    }

    pub fn update(&mut self, dt: f32) {
        if self.timer > 0.0 {
            self.timer = (self.timer - dt).max(0.0);
        }
    }

    pub fn is_elapsed(&self) -> bool {
        self.timer <= 0.0
    }
}
