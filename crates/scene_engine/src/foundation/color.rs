//! RGB colors for object appearance

use serde::{Deserialize, Serialize};

/// Linear RGB color with components in `[0, 1]`
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Color {
    /// Red channel
    pub r: f32,
    /// Green channel
    pub g: f32,
    /// Blue channel
    pub b: f32,
}

impl Color {
    /// Black, also the "off" value of an emissive overlay
    pub const BLACK: Self = Self::rgb(0.0, 0.0, 0.0);

    /// White
    pub const WHITE: Self = Self::rgb(1.0, 1.0, 1.0);

    /// Pure red
    pub const RED: Self = Self::rgb(1.0, 0.0, 0.0);

    /// Create a color from float components
    pub const fn rgb(r: f32, g: f32, b: f32) -> Self {
        Self { r, g, b }
    }

    /// Create a color from a packed `0xRRGGBB` value
    pub fn from_hex(hex: u32) -> Self {
        let channel = |shift: u32| ((hex >> shift) & 0xff) as f32 / 255.0;
        Self::rgb(channel(16), channel(8), channel(0))
    }

    /// Pack into `0xRRGGBB`, clamping out-of-range channels
    pub fn to_hex(self) -> u32 {
        let channel = |c: f32| (c.clamp(0.0, 1.0) * 255.0).round() as u32;
        (channel(self.r) << 16) | (channel(self.g) << 8) | channel(self.b)
    }

    /// Whether every channel is zero
    pub fn is_black(self) -> bool {
        self == Self::BLACK
    }
}

impl Default for Color {
    fn default() -> Self {
        Self::WHITE
    }
}

impl From<u32> for Color {
    fn from(hex: u32) -> Self {
        Self::from_hex(hex)
    }
}
