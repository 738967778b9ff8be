/// Game tuning parameters for Pong
///
/// Distances are in arena units (the 700x420 base board). Velocities are in
/// arena units per simulation tick.
#[derive(Debug, Clone, Copy)]
pub struct Params;

impl Params {
    // Arena
    pub const ARENA_WIDTH: f32 = 700.0;
    pub const ARENA_HEIGHT: f32 = 420.0;

    // Paddle
    pub const PADDLE_WIDTH: f32 = 16.0;
    pub const PADDLE_HEIGHT: f32 = 100.0;
    pub const PADDLE_RADIUS: f32 = 16.0; // Corner rounding, render only
    pub const PADDLE_MARGIN: f32 = 22.0; // Gap between paddle and side edge

    // Ball
    pub const BALL_RADIUS: f32 = 15.0;
    pub const BALL_BASE_SPEED: f32 = 6.0;
    pub const BALL_SPEED_SPREAD: f32 = 2.0; // Serve speed is base + [0, spread)
    pub const SERVE_ANGLE_SPREAD: f32 = 0.3; // Radians either side of horizontal
    pub const BALL_SPEEDUP: f32 = 1.022; // Multiply |vx| on paddle hit
    pub const DEFLECTION: f32 = 7.8; // vy at the very edge of a paddle
    pub const DEFLECTION_JITTER: f32 = 0.35;
    pub const PADDLE_PUSH_OUT: f32 = 0.1;
    pub const TRAIL_LENGTH: usize = 14;

    // AI
    pub const AI_SPEED: f32 = 4.2;
    pub const AI_DEADZONE: f32 = 14.0;

    // Score
    pub const MAX_SCORE: u8 = 7;
    pub const WIN_DELAY: f32 = 0.8; // Seconds before a rematch is accepted

    // Physics
    pub const FIXED_DT: f32 = 1.0 / 60.0;
    pub const MAX_DT: f32 = 0.1; // Clamp to prevent large jumps
}
