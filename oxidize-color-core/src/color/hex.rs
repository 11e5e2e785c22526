use super::Rgb;
use crate::error::{ColorError, Result};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

const HEX_COLOR_LEN: usize = 7;

/// A validated `#RRGGBB` color.
///
/// Parsing is case-insensitive; the canonical text form uses uppercase digits.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(into = "String", try_from = "String")]
pub struct HexColor(Rgb);

impl HexColor {
    /// Parses `#RRGGBB`. See [`hex_to_rgb`] for the accepted syntax.
    pub fn parse(s: &str) -> Result<Self> {
        hex_to_rgb(s).map(Self)
    }

    pub fn rgb(&self) -> Rgb {
        self.0
    }
}

impl From<Rgb> for HexColor {
    fn from(rgb: Rgb) -> Self {
        Self(rgb)
    }
}

impl From<HexColor> for Rgb {
    fn from(hex: HexColor) -> Self {
        hex.0
    }
}

impl FromStr for HexColor {
    type Err = ColorError;

    fn from_str(s: &str) -> Result<Self> {
        Self::parse(s)
    }
}

impl TryFrom<String> for HexColor {
    type Error = ColorError;

    fn try_from(s: String) -> Result<Self> {
        Self::parse(&s)
    }
}

impl From<HexColor> for String {
    fn from(hex: HexColor) -> Self {
        hex.to_string()
    }
}

impl fmt::Display for HexColor {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let Rgb { r, g, b } = self.0;
        write!(f, "#{r:02X}{g:02X}{b:02X}")
    }
}

/// Parses a `#RRGGBB` string into its three channels.
///
/// The input must be a `#` followed by exactly six hexadecimal digits in
/// either case. The first offending character is reported before the length,
/// so `"#12G"` fails on the `G`, not on being too short.
///
/// # Errors
///
/// - [`ColorError::MissingHash`] if the string does not start with `#`
/// - [`ColorError::InvalidHexDigit`] for any character that is not `0-9a-fA-F`
/// - [`ColorError::InvalidLength`] if there are not exactly six digits
///
/// # Example
///
/// ```rust
/// use oxidize_color::{hex_to_rgb, Rgb};
///
/// assert_eq!(hex_to_rgb("#3498db")?, Rgb::new(52, 152, 219));
/// assert!(hex_to_rgb("3498db").is_err());
/// # Ok::<(), oxidize_color::ColorError>(())
/// ```
pub fn hex_to_rgb(s: &str) -> Result<Rgb> {
    let digits = s.strip_prefix('#').ok_or(ColorError::MissingHash)?;

    if let Some((index, found)) = digits.char_indices().find(|(_, c)| !c.is_ascii_hexdigit()) {
        tracing::debug!(input = s, index, "rejected hex color");
        return Err(ColorError::InvalidHexDigit {
            position: index + 1,
            found,
        });
    }

    // Only ASCII remains, so byte length equals character count.
    if s.len() != HEX_COLOR_LEN {
        tracing::debug!(input = s, len = s.len(), "rejected hex color");
        return Err(ColorError::InvalidLength(s.len()));
    }

    let channel = |offset: usize| {
        u8::from_str_radix(&s[offset..offset + 2], 16).map_err(|_| ColorError::InvalidHexDigit {
            position: offset,
            found: s[offset..].chars().next().unwrap_or('#'),
        })
    };

    let rgb = Rgb::new(channel(1)?, channel(3)?, channel(5)?);
    tracing::trace!(input = s, %rgb, "parsed hex color");
    Ok(rgb)
}
