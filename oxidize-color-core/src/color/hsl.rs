use super::hsv::round_hue;
use super::rgb::to_percent;
use super::Rgb;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Hue, saturation, lightness, rounded for display: `h` in whole degrees
/// (0-359), `s` and `l` in whole percentages (0-100).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub struct Hsl {
    pub h: u16,
    pub s: u8,
    pub l: u8,
}

impl Hsl {
    pub const fn new(h: u16, s: u8, l: u8) -> Self {
        Self { h, s, l }
    }

    pub fn to_rgb(&self) -> Rgb {
        let s = f64::from(self.s) / 100.0;
        let l = f64::from(self.l) / 100.0;
        let chroma = (1.0 - (2.0 * l - 1.0).abs()) * s;
        Rgb::from_hue_chroma(f64::from(self.h), chroma, l - chroma / 2.0)
    }
}

impl fmt::Display for Hsl {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}°, {}%, {}%", self.h, self.s, self.l)
    }
}

/// Converts RGB to HSL.
///
/// Saturation takes the two-sided form, `delta / (2 - max - min)` above half
/// lightness and `delta / (max + min)` otherwise. Hue sectors are chosen in
/// the same red, green, blue order as [`rgb_to_hsv`](super::rgb_to_hsv).
pub fn rgb_to_hsl(rgb: Rgb) -> Hsl {
    let (r, g, b) = rgb.normalized();

    let max = r.max(g).max(b);
    let min = r.min(g).min(b);
    let delta = max - min;
    let l = (max + min) / 2.0;

    if delta == 0.0 {
        return Hsl::new(0, 0, to_percent(l));
    }

    let s = if l > 0.5 {
        delta / (2.0 - max - min)
    } else {
        delta / (max + min)
    };

    let sector = if max == r {
        (g - b) / delta + if b > g { 6.0 } else { 0.0 }
    } else if max == g {
        (b - r) / delta + 2.0
    } else {
        (r - g) / delta + 4.0
    };

    Hsl::new(round_hue(sector * 60.0), to_percent(s), to_percent(l))
}
