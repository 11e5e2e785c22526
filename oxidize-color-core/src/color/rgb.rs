use super::{rgb_to_cmyk, rgb_to_hsl, rgb_to_hsv, Cmyk, Hsl, Hsv};
use serde::{Deserialize, Serialize};
use std::fmt;

/// An sRGB color with 8-bit integer channels.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub struct Rgb {
    pub r: u8,
    pub g: u8,
    pub b: u8,
}

impl Rgb {
    pub const fn new(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b }
    }

    /// Black (0, 0, 0).
    pub const fn black() -> Self {
        Self::new(0, 0, 0)
    }

    /// White (255, 255, 255).
    pub const fn white() -> Self {
        Self::new(255, 255, 255)
    }

    /// Channels scaled into 0.0-1.0.
    pub fn normalized(&self) -> (f64, f64, f64) {
        (
            f64::from(self.r) / 255.0,
            f64::from(self.g) / 255.0,
            f64::from(self.b) / 255.0,
        )
    }

    pub fn to_cmyk(self) -> Cmyk {
        rgb_to_cmyk(self)
    }

    pub fn to_hsv(self) -> Hsv {
        rgb_to_hsv(self)
    }

    pub fn to_hsl(self) -> Hsl {
        rgb_to_hsl(self)
    }

    /// Builds a color from a hue in degrees, a chroma and the lightness offset
    /// added to every channel, all but the hue in 0.0-1.0.
    pub(crate) fn from_hue_chroma(hue: f64, chroma: f64, offset: f64) -> Self {
        let sector = hue.rem_euclid(360.0) / 60.0;
        let x = chroma * (1.0 - (sector % 2.0 - 1.0).abs());

        let (r, g, b) = match sector as u8 {
            0 => (chroma, x, 0.0),
            1 => (x, chroma, 0.0),
            2 => (0.0, chroma, x),
            3 => (0.0, x, chroma),
            4 => (x, 0.0, chroma),
            _ => (chroma, 0.0, x),
        };

        Self::new(
            to_channel(r + offset),
            to_channel(g + offset),
            to_channel(b + offset),
        )
    }
}

impl From<(u8, u8, u8)> for Rgb {
    fn from((r, g, b): (u8, u8, u8)) -> Self {
        Self::new(r, g, b)
    }
}

impl From<[u8; 3]> for Rgb {
    fn from([r, g, b]: [u8; 3]) -> Self {
        Self::new(r, g, b)
    }
}

impl fmt::Display for Rgb {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}, {}, {}", self.r, self.g, self.b)
    }
}

/// Scales a 0.0-1.0 value back to a channel byte.
pub(crate) fn to_channel(value: f64) -> u8 {
    (value * 255.0).round().clamp(0.0, 255.0) as u8
}

/// Rounds a 0.0-1.0 fraction to a whole percentage.
pub(crate) fn to_percent(value: f64) -> u8 {
    (value * 100.0).round() as u8
}
