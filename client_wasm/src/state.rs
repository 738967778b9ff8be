//! Presentation state that lives outside the simulation
//!
//! Score flash and backdrop animation advance with wall-clock time; rates are
//! expressed per 60 Hz frame and scaled by the real frame delta.

use crate::color::Rgba;
use game_core::Side;

const REFERENCE_FPS: f32 = 60.0;

/// Flash alpha lost per reference frame
const FLASH_DECAY: f32 = 0.07;

/// Backdrop clock advance per reference frame
const BACKDROP_RATE: f64 = 0.005;

/// Three-stop gradients the backdrop cycles through
pub const BG_PALETTES: [[&str; 3]; 3] = [
    ["#0ff8", "#232960", "#f0f8"],
    ["#fa00ff77", "#0ff8", "#222a"],
    ["#00ffe0", "#181f2a", "#ff00c8"],
];

/// Brief highlight on the score that just changed
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct ScoreFlash {
    pub side: Option<Side>,
    pub alpha: f32,
}

impl ScoreFlash {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn trigger(&mut self, side: Side) {
        self.side = Some(side);
        self.alpha = 1.0;
    }

    pub fn clear(&mut self) {
        *self = Self::default();
    }

    pub fn update(&mut self, dt: f32) {
        if self.alpha > 0.0 {
            self.alpha = (self.alpha - FLASH_DECAY * dt * REFERENCE_FPS).max(0.0);
        }
    }

    pub fn is_active(&self) -> bool {
        self.side.is_some() && self.alpha > 0.0
    }
}

/// Slow clock behind the gradient and midline animation
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct Backdrop {
    pub clock: f64,
}

impl Backdrop {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn advance(&mut self, dt: f32) {
        self.clock += BACKDROP_RATE * (dt * REFERENCE_FPS) as f64;
    }

    /// Current palette index and how far the fade to the next one has got
    pub fn palette_blend(&self) -> (usize, usize, f32) {
        let from = (self.clock.floor() as usize) % BG_PALETTES.len();
        let to = (from + 1) % BG_PALETTES.len();
        (from, to, self.clock.fract() as f32)
    }

    /// Gradient stop colours at offsets 0, 0.5 and 1
    pub fn gradient_stops(&self) -> [Rgba; 3] {
        let (from, to, t) = self.palette_blend();
        let fallback = Rgba::new(0, 0, 0, 1.0);
        std::array::from_fn(|i| {
            let a = Rgba::from_hex(BG_PALETTES[from][i], 1.0 - t).unwrap_or(fallback);
            let b = Rgba::from_hex(BG_PALETTES[to][i], t).unwrap_or(fallback);
            a.lerp(b, t)
        })
    }

    /// Vertical reach of the gradient line as a share of canvas height
    pub fn gradient_reach(&self) -> f64 {
        0.6 + 0.4 * (self.clock / 2.0).sin()
    }

    pub fn midline_alpha(&self) -> f64 {
        0.42 + 0.18 * (self.clock * 2.0).sin()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const FRAME: f32 = 1.0 / 60.0;

    #[test]
    fn test_flash_decays_to_zero() {
        let mut flash = ScoreFlash::new();
        assert!(!flash.is_active());

        flash.trigger(Side::Ai);
        assert!(flash.is_active());
        flash.update(FRAME);
        assert!((flash.alpha - 0.93).abs() < 1e-4);

        for _ in 0..20 {
            flash.update(FRAME);
        }
        assert_eq!(flash.alpha, 0.0);
        assert!(!flash.is_active());
        assert_eq!(flash.side, Some(Side::Ai));
    }

    #[test]
    fn test_flash_clear() {
        let mut flash = ScoreFlash::new();
        flash.trigger(Side::Player);
        flash.clear();
        assert_eq!(flash, ScoreFlash::new());
    }

    #[test]
    fn test_backdrop_cycles_palettes() {
        let mut backdrop = Backdrop::new();
        assert_eq!(backdrop.palette_blend(), (0, 1, 0.0));

        backdrop.clock = 2.25;
        let (from, to, t) = backdrop.palette_blend();
        assert_eq!((from, to), (2, 0));
        assert!((t - 0.25).abs() < 1e-6);
    }

    #[test]
    fn test_backdrop_advances_per_frame() {
        let mut backdrop = Backdrop::new();
        for _ in 0..200 {
            backdrop.advance(FRAME);
        }
        assert!((backdrop.clock - 1.0).abs() < 1e-4);
    }

    #[test]
    fn test_gradient_stops_start_on_first_palette() {
        let stops = Backdrop::new().gradient_stops();
        // "#232960" has no alpha digits, so it fades with the blend factor
        assert_eq!((stops[1].r, stops[1].g, stops[1].b), (0x23, 0x29, 0x60));
        assert!((stops[1].a - 1.0).abs() < 1e-6);
        // "#0ff8" carries its own alpha
        assert_eq!((stops[0].r, stops[0].g, stops[0].b), (0, 255, 255));
    }

    #[test]
    fn test_animation_curves_stay_in_range() {
        let mut backdrop = Backdrop::new();
        for _ in 0..2000 {
            backdrop.advance(FRAME);
            let reach = backdrop.gradient_reach();
            let alpha = backdrop.midline_alpha();
            assert!((0.19..=1.01).contains(&reach));
            assert!((0.23..=0.61).contains(&alpha));
        }
    }
}
