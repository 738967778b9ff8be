//! Mapping between arena units and canvas pixels
//!
//! The canvas keeps the arena's aspect ratio and never grows past 1:1.

use game_core::Params;

/// Share of the window the canvas may occupy
const WIDTH_SHARE: f64 = 0.98;
const HEIGHT_SHARE: f64 = 0.70;

/// Canvas size in pixels
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Viewport {
    pub width: f64,
    pub height: f64,
}

impl Viewport {
    /// Unscaled 1:1 viewport
    pub fn base() -> Self {
        Self {
            width: Params::ARENA_WIDTH as f64,
            height: Params::ARENA_HEIGHT as f64,
        }
    }

    /// Largest arena-shaped canvas that fits the window, capped at 1:1
    pub fn fit(window_width: f64, window_height: f64) -> Self {
        let base = Self::base();
        let scale = (window_width * WIDTH_SHARE / base.width)
            .min(window_height * HEIGHT_SHARE / base.height)
            .clamp(0.0, 1.0);
        Self {
            width: base.width * scale,
            height: base.height * scale,
        }
    }

    pub fn sx(&self, x: f32) -> f64 {
        x as f64 * self.width / Params::ARENA_WIDTH as f64
    }

    pub fn sy(&self, y: f32) -> f64 {
        y as f64 * self.height / Params::ARENA_HEIGHT as f64
    }

    /// Canvas-relative pixel Y back to arena units
    pub fn to_arena_y(&self, canvas_y: f64) -> f32 {
        if self.height <= 0.0 {
            return 0.0;
        }
        (canvas_y * Params::ARENA_HEIGHT as f64 / self.height) as f32
    }
}

impl Default for Viewport {
    fn default() -> Self {
        Self::base()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_large_window_caps_at_base_size() {
        assert_eq!(Viewport::fit(4000.0, 3000.0), Viewport::base());
    }

    #[test]
    fn test_narrow_window_scales_by_width() {
        let vp = Viewport::fit(357.0, 2000.0);
        assert!((vp.width - 349.86).abs() < 1e-9);
        assert!((vp.height / vp.width - 420.0 / 700.0).abs() < 1e-9);
    }

    #[test]
    fn test_short_window_scales_by_height() {
        let vp = Viewport::fit(2000.0, 300.0);
        assert!((vp.height - 210.0).abs() < 1e-9);
        assert!((vp.width - 350.0).abs() < 1e-9);
    }

    #[test]
    fn test_scaling_round_trip() {
        let vp = Viewport::fit(2000.0, 300.0);
        assert_eq!(vp.sx(700.0), vp.width);
        assert_eq!(vp.sy(210.0), vp.height / 2.0);
        assert!((vp.to_arena_y(vp.sy(123.0)) - 123.0).abs() < 1e-3);
    }

    #[test]
    fn test_zero_height_is_safe() {
        let vp = Viewport::fit(0.0, 0.0);
        assert_eq!(vp.to_arena_y(50.0), 0.0);
    }
}
