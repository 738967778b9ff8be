//! Pointer and keyboard input mapping

use crate::viewport::Viewport;

/// Keys that start a match from the start or win screen
pub fn is_start_key(key: &str) -> bool {
    key == " " || key.eq_ignore_ascii_case("r")
}

/// Paddle centre in arena units for a pointer at `client_y`
///
/// `canvas_top` is the canvas' bounding-rect top in client coordinates.
pub fn paddle_target(client_y: f64, canvas_top: f64, viewport: &Viewport) -> f32 {
    viewport.to_arena_y(client_y - canvas_top)
}
