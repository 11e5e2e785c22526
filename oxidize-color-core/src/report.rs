//! All representations of a single color, ready for display.

use crate::color::{hex_to_rgb, Cmyk, HexColor, Hsl, Hsv, Rgb};
use crate::error::{ColorError, Result};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// One of the textual representations in a [`ColorReport`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ColorFormat {
    Hex,
    Rgb,
    Cmyk,
    Hsv,
    Hsl,
}

impl ColorFormat {
    /// Display order.
    pub const ALL: [ColorFormat; 5] = [
        ColorFormat::Hex,
        ColorFormat::Rgb,
        ColorFormat::Cmyk,
        ColorFormat::Hsv,
        ColorFormat::Hsl,
    ];

    pub fn name(&self) -> &'static str {
        match self {
            ColorFormat::Hex => "hex",
            ColorFormat::Rgb => "rgb",
            ColorFormat::Cmyk => "cmyk",
            ColorFormat::Hsv => "hsv",
            ColorFormat::Hsl => "hsl",
        }
    }

    /// Upper-case label used in tabular output.
    pub fn label(&self) -> &'static str {
        match self {
            ColorFormat::Hex => "HEX",
            ColorFormat::Rgb => "RGB",
            ColorFormat::Cmyk => "CMYK",
            ColorFormat::Hsv => "HSV",
            ColorFormat::Hsl => "HSL",
        }
    }
}

impl fmt::Display for ColorFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for ColorFormat {
    type Err = ColorError;

    fn from_str(s: &str) -> Result<Self> {
        ColorFormat::ALL
            .into_iter()
            .find(|format| format.name().eq_ignore_ascii_case(s.trim()))
            .ok_or_else(|| ColorError::UnknownFormat(s.to_string()))
    }
}

/// A color in every supported model.
///
/// # Example
///
/// ```rust
/// use oxidize_color::{ColorFormat, ColorReport};
///
/// let report = ColorReport::from_hex("#3498db")?;
/// assert_eq!(report.get(ColorFormat::Hex), "#3498DB");
/// assert_eq!(report.get(ColorFormat::Rgb), "52, 152, 219");
/// assert_eq!(report.get(ColorFormat::Cmyk), "76%, 31%, 0%, 14%");
/// assert_eq!(report.get(ColorFormat::Hsv), "204°, 76%, 86%");
/// assert_eq!(report.get(ColorFormat::Hsl), "204°, 70%, 53%");
/// # Ok::<(), oxidize_color::ColorError>(())
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ColorReport {
    pub hex: HexColor,
    pub rgb: Rgb,
    pub cmyk: Cmyk,
    pub hsv: Hsv,
    pub hsl: Hsl,
}

impl ColorReport {
    /// Parses `hex` once and derives the other models from the resulting RGB.
    pub fn from_hex(hex: &str) -> Result<Self> {
        let rgb = hex_to_rgb(hex)?;
        Ok(Self::from_rgb(rgb))
    }

    pub fn from_rgb(rgb: Rgb) -> Self {
        let report = Self {
            hex: HexColor::from(rgb),
            rgb,
            cmyk: rgb.to_cmyk(),
            hsv: rgb.to_hsv(),
            hsl: rgb.to_hsl(),
        };
        tracing::debug!(hex = %report.hex, cmyk = %report.cmyk, hsv = %report.hsv, hsl = %report.hsl, "converted color");
        report
    }

    /// Display text for one representation.
    pub fn get(&self, format: ColorFormat) -> String {
        match format {
            ColorFormat::Hex => self.hex.to_string(),
            ColorFormat::Rgb => self.rgb.to_string(),
            ColorFormat::Cmyk => self.cmyk.to_string(),
            ColorFormat::Hsv => self.hsv.to_string(),
            ColorFormat::Hsl => self.hsl.to_string(),
        }
    }

    /// `(format, text)` pairs in display order.
    pub fn entries(&self) -> impl Iterator<Item = (ColorFormat, String)> + '_ {
        ColorFormat::ALL
            .into_iter()
            .map(move |format| (format, self.get(format)))
    }
}

impl fmt::Display for ColorReport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (format, text) in self.entries() {
            writeln!(f, "{:<5}{}", format.label(), text)?;
        }
        Ok(())
    }
}
