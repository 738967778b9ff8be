//! Colours and type for the neon look

use game_core::Side;

pub const PLAYER_COLOR: &str = "#0ff";
pub const AI_COLOR: &str = "#f0f";
pub const BALL_COLOR: &str = "#fff";
pub const TEXT_COLOR: &str = "#fff";
pub const GLOW_COLOR: &str = "#0ff";
pub const TRAIL_COLOR: &str = "#11fff750";
pub const MIDLINE_COLOR: &str = "#0ff7";

pub const FONT_FAMILY: &str = "'Segoe UI', Arial";

pub fn side_color(side: Side) -> &'static str {
    match side {
        Side::Player => PLAYER_COLOR,
        Side::Ai => AI_COLOR,
    }
}

/// Bold font at `px` canvas pixels
pub fn bold_font(px: f64) -> String {
    format!("bold {px}px {FONT_FAMILY}")
}
