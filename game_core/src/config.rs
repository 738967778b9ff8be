use crate::{Params, Side};
use glam::Vec2;

/// Game configuration
#[derive(Debug, Clone)]
pub struct Config {
    pub arena_width: f32,
    pub arena_height: f32,
    pub paddle_width: f32,
    pub paddle_height: f32,
    pub paddle_margin: f32,
    pub ball_radius: f32,
    pub ball_base_speed: f32,
    pub ball_speed_spread: f32,
    pub serve_angle_spread: f32,
    pub ball_speedup: f32,
    pub deflection: f32,
    pub deflection_jitter: f32,
    pub paddle_push_out: f32,
    pub trail_length: usize,
    pub ai_speed: f32,
    pub ai_deadzone: f32,
    pub max_score: u8,
    pub win_delay: f32,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            arena_width: Params::ARENA_WIDTH,
            arena_height: Params::ARENA_HEIGHT,
            paddle_width: Params::PADDLE_WIDTH,
            paddle_height: Params::PADDLE_HEIGHT,
            paddle_margin: Params::PADDLE_MARGIN,
            ball_radius: Params::BALL_RADIUS,
            ball_base_speed: Params::BALL_BASE_SPEED,
            ball_speed_spread: Params::BALL_SPEED_SPREAD,
            serve_angle_spread: Params::SERVE_ANGLE_SPREAD,
            ball_speedup: Params::BALL_SPEEDUP,
            deflection: Params::DEFLECTION,
            deflection_jitter: Params::DEFLECTION_JITTER,
            paddle_push_out: Params::PADDLE_PUSH_OUT,
            trail_length: Params::TRAIL_LENGTH,
            ai_speed: Params::AI_SPEED,
            ai_deadzone: Params::AI_DEADZONE,
            max_score: Params::MAX_SCORE,
            win_delay: Params::WIN_DELAY,
        }
    }
}

impl Config {
    pub fn new() -> Self {
        Self::default()
    }

    /// Left edge X of a side's paddle
    pub fn paddle_x(&self, side: Side) -> f32 {
        match side {
            Side::Player => self.paddle_margin,
            Side::Ai => self.arena_width - self.paddle_width - self.paddle_margin,
        }
    }

    /// Clamp a paddle centre Y so the whole paddle stays inside the arena
    pub fn clamp_paddle_y(&self, y: f32) -> f32 {
        let half_height = self.paddle_height / 2.0;
        y.clamp(half_height, self.arena_height - half_height)
    }

    pub fn arena_center(&self) -> Vec2 {
        Vec2::new(self.arena_width / 2.0, self.arena_height / 2.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_config_paddle_x() {
        let config = Config::new();
        assert_eq!(config.paddle_x(Side::Player), 22.0, "Player paddle X");
        assert_eq!(config.paddle_x(Side::Ai), 662.0, "AI paddle X");
    }

    #[test]
    fn test_config_clamp_paddle_y() {
        let config = Config::new();
        let half_height = config.paddle_height / 2.0;
        assert_eq!(config.clamp_paddle_y(-40.0), half_height);
        assert_eq!(
            config.clamp_paddle_y(1000.0),
            config.arena_height - half_height
        );
        let valid_y = 200.0;
        assert_eq!(config.clamp_paddle_y(valid_y), valid_y);
    }

    #[test]
    fn test_arena_center() {
        let config = Config::new();
        assert_eq!(config.arena_center(), Vec2::new(350.0, 210.0));
    }
}
