//! Color value types and the conversions between them.
//!
//! Every conversion is a pure function of its input: no shared state, no I/O,
//! no allocation. [`hex_to_rgb`] is the only fallible step; once a color is an
//! [`Rgb`] value it converts to every other model infallibly.

mod cmyk;
mod hex;
mod hsl;
mod hsv;
mod rgb;

pub use cmyk::{rgb_to_cmyk, Cmyk};
pub use hex::{hex_to_rgb, HexColor};
pub use hsl::{rgb_to_hsl, Hsl};
pub use hsv::{rgb_to_hsv, Hsv};
pub use rgb::Rgb;
