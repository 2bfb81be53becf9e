//! Colour types shared by terrain generation and rendering.

use bytemuck::{Pod, Zeroable};
use serde::{Deserialize, Serialize};

/// 8-bit RGB colour.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize, Pod, Zeroable)]
#[repr(C)]
pub struct Rgb {
    /// Red channel (0-255)
    pub r: u8,
    /// Green channel (0-255)
    pub g: u8,
    /// Blue channel (0-255)
    pub b: u8,
}

impl Rgb {
    /// Creates a new colour.
    #[must_use]
    pub const fn new(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b }
    }

    /// Black.
    pub const BLACK: Self = Self::new(0, 0, 0);
    /// White.
    pub const WHITE: Self = Self::new(255, 255, 255);

    /// Converts a float channel value to 8 bits.
    ///
    /// Truncates toward zero and saturates at 0 and 255. NaN maps to 0.
    #[must_use]
    pub fn channel(value: f64) -> u8 {
        value as u8
    }
}

impl From<Rgb> for [u8; 3] {
    fn from(c: Rgb) -> Self {
        [c.r, c.g, c.b]
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_channel_saturates() {
        assert_eq!(Rgb::channel(-3.0), 0);
        assert_eq!(Rgb::channel(127.9), 127);
        assert_eq!(Rgb::channel(255.0), 255);
        assert_eq!(Rgb::channel(300.0), 255);
        assert_eq!(Rgb::channel(f64::NAN), 0);
    }

    #[test]
    fn test_rgb_array() {
        let bytes: [u8; 3] = Rgb::new(1, 2, 3).into();
        assert_eq!(bytes, [1, 2, 3]);
    }
}
