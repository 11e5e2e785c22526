use super::rgb::{to_channel, to_percent};
use super::Rgb;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Process ink coverage (cyan, magenta, yellow, key/black) in whole
/// percentages from 0 to 100.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub struct Cmyk {
    pub c: u8,
    pub m: u8,
    pub y: u8,
    pub k: u8,
}

impl Cmyk {
    pub const fn new(c: u8, m: u8, y: u8, k: u8) -> Self {
        Self { c, m, y, k }
    }

    /// Naive inverse of [`rgb_to_cmyk`]: `channel = 255 * (1 - ink) * (1 - k)`.
    pub fn to_rgb(&self) -> Rgb {
        let key = 1.0 - f64::from(self.k) / 100.0;
        let channel = |ink: u8| to_channel((1.0 - f64::from(ink) / 100.0) * key);
        Rgb::new(channel(self.c), channel(self.m), channel(self.y))
    }
}

impl fmt::Display for Cmyk {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}%, {}%, {}%, {}%", self.c, self.m, self.y, self.k)
    }
}

/// Converts RGB to CMYK ink percentages.
///
/// Uses the uncalibrated device formula `k = 1 - max(r, g, b)` and
/// `ink = (1 - channel - k) / (1 - k)`. For pure black `1 - k` is zero; the
/// resulting NaN inks are reported as 0.
pub fn rgb_to_cmyk(rgb: Rgb) -> Cmyk {
    let (r, g, b) = rgb.normalized();

    let k = 1.0 - r.max(g).max(b);
    let ink = |channel: f64| {
        let value = (1.0 - channel - k) / (1.0 - k);
        if value.is_nan() {
            0.0
        } else {
            value
        }
    };

    Cmyk::new(
        to_percent(ink(r)),
        to_percent(ink(g)),
        to_percent(ink(b)),
        to_percent(k),
    )
}
