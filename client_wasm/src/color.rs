//! CSS colour helpers for the animated backdrop

/// Straight (non-premultiplied) RGBA colour
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Rgba {
    pub r: u8,
    pub g: u8,
    pub b: u8,
    pub a: f32, // 0.0..=1.0
}

impl Rgba {
    pub const fn new(r: u8, g: u8, b: u8, a: f32) -> Self {
        Self { r, g, b, a }
    }

    /// Parse `#rgb`, `#rgba`, `#rrggbb` or `#rrggbbaa`
    ///
    /// `default_alpha` is used when the literal carries no alpha digits.
    pub fn from_hex(hex: &str, default_alpha: f32) -> Option<Self> {
        let digits = hex.strip_prefix('#').unwrap_or(hex);
        if !digits.chars().all(|c| c.is_ascii_hexdigit()) {
            return None;
        }

        let expanded: String = match digits.len() {
            3 | 4 => digits.chars().flat_map(|c| [c, c]).collect(),
            6 | 8 => digits.to_string(),
            _ => return None,
        };

        let channel = |i: usize| u8::from_str_radix(&expanded[i..i + 2], 16).ok();
        let a = if expanded.len() == 8 {
            channel(6)? as f32 / 255.0
        } else {
            default_alpha
        };

        Some(Self::new(channel(0)?, channel(2)?, channel(4)?, a))
    }

    /// Linear blend toward `other`; `t` = 0 gives `self`, 1 gives `other`
    pub fn lerp(self, other: Self, t: f32) -> Self {
        let mix = |a: u8, b: u8| {
            (a as f32 + (b as f32 - a as f32) * t)
                .round()
                .clamp(0.0, 255.0) as u8
        };
        Self {
            r: mix(self.r, other.r),
            g: mix(self.g, other.g),
            b: mix(self.b, other.b),
            a: self.a + (other.a - self.a) * t,
        }
    }

    pub fn to_css(&self) -> String {
        format!("rgba({},{},{},{:.2})", self.r, self.g, self.b, self.a)
    }
}
