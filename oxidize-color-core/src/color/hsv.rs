use super::rgb::to_percent;
use super::Rgb;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Hue, saturation, value.
///
/// Unlike [`Hsl`](super::Hsl), the components are left unrounded: `h` is in
/// degrees (0.0-360.0, exclusive) while `s` and `v` are fractions in 0.0-1.0.
/// Use [`Hsv::to_percentages`] for display.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct Hsv {
    pub h: f64,
    pub s: f64,
    pub v: f64,
}

impl Hsv {
    pub const fn new(h: f64, s: f64, v: f64) -> Self {
        Self { h, s, v }
    }

    /// Rounded `(degrees, saturation %, value %)`. A hue that rounds up to 360
    /// wraps to 0.
    pub fn to_percentages(&self) -> (u16, u8, u8) {
        (round_hue(self.h), to_percent(self.s), to_percent(self.v))
    }

    pub fn to_rgb(&self) -> Rgb {
        let chroma = self.v * self.s;
        Rgb::from_hue_chroma(self.h, chroma, self.v - chroma)
    }
}

impl fmt::Display for Hsv {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let (h, s, v) = self.to_percentages();
        write!(f, "{h}°, {s}%, {v}%")
    }
}

pub(crate) fn round_hue(h: f64) -> u16 {
    (h.round() as u16) % 360
}

/// Converts RGB to HSV.
///
/// Achromatic colors have hue and saturation 0. Otherwise the hue sector is
/// picked by comparing the normalized maximum against red, then green, then
/// blue, so a tie between two maximal channels resolves to the first.
pub fn rgb_to_hsv(rgb: Rgb) -> Hsv {
    let (r, g, b) = rgb.normalized();

    let max = r.max(g).max(b);
    let min = r.min(g).min(b);
    let delta = max - min;

    if delta == 0.0 {
        return Hsv::new(0.0, 0.0, max);
    }

    let sector = if max == r {
        (g - b) / delta
    } else if max == g {
        2.0 + (b - r) / delta
    } else {
        4.0 + (r - g) / delta
    };

    let mut h = sector * 60.0;
    if h < 0.0 {
        h += 360.0;
    }

    Hsv::new(h, delta / max, max)
}
