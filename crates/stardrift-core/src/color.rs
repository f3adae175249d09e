//! Plain RGB triple used across the field, renderer and config.

use std::fmt;
use std::str::FromStr;

use ratatui::style::Color;

/// An opaque 24-bit colour.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub struct Rgb(pub u8, pub u8, pub u8);

impl Rgb {
    pub const BLACK: Rgb = Rgb(0, 0, 0);
    pub const WHITE: Rgb = Rgb(255, 255, 255);

    /// Scale every channel by `factor` (0.0-1.0).
    pub fn scale(self, factor: f32) -> Self {
        let factor = factor.clamp(0.0, 1.0);
        Rgb(
            (self.0 as f32 * factor).round() as u8,
            (self.1 as f32 * factor).round() as u8,
            (self.2 as f32 * factor).round() as u8,
        )
    }

    /// Alpha-blend `over` on top of `self`, `alpha` in 0.0-1.0.
    pub fn blend(self, over: Rgb, alpha: f32) -> Self {
        let alpha = alpha.clamp(0.0, 1.0);
        let mix = |base: u8, top: u8| {
            (base as f32 + (top as f32 - base as f32) * alpha).round() as u8
        };
        Rgb(mix(self.0, over.0), mix(self.1, over.1), mix(self.2, over.2))
    }
}

impl From<Rgb> for Color {
    fn from(rgb: Rgb) -> Self {
        Color::Rgb(rgb.0, rgb.1, rgb.2)
    }
}

impl fmt::Display for Rgb {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{:02x}{:02x}{:02x}", self.0, self.1, self.2)
    }
}

impl FromStr for Rgb {
    type Err = String;

    /// Parse `#rrggbb` (the leading `#` is optional).
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let hex = s.trim().trim_start_matches('#');
        if hex.len() != 6 || !hex.is_ascii() {
            return Err(format!("expected #rrggbb, got {s:?}"));
        }
        let channel = |i: usize| {
            u8::from_str_radix(&hex[i..i + 2], 16).map_err(|e| format!("{s:?}: {e}"))
        };
        Ok(Rgb(channel(0)?, channel(2)?, channel(4)?))
    }
}
