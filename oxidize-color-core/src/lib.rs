//! # oxidize-color
//!
//! A small, pure Rust library for turning a `#RRGGBB` hex color into its RGB,
//! CMYK, HSV and HSL equivalents.
//!
//! ## Features
//!
//! - **Validated parsing**: malformed hex input is a typed [`ColorError`], never a silent NaN
//! - **Pure conversions**: stateless, allocation-free and safe to call from any thread
//! - **Inverse conversions**: CMYK, HSV and HSL convert back to RGB
//! - **Display formatting**: the conventional `r, g, b` / `c%, m%, y%, k%` / `h°, s%, l%` text forms
//! - **Serde support**: every value type serializes, hex colors as `"#RRGGBB"` strings
//!
//! ## Quick Start
//!
//! ```rust
//! use oxidize_color::{hex_to_rgb, rgb_to_cmyk, rgb_to_hsl, rgb_to_hsv, Cmyk, Hsl, Result};
//!
//! # fn main() -> Result<()> {
//! let rgb = hex_to_rgb("#FF0000")?;
//!
//! assert_eq!(rgb_to_cmyk(rgb), Cmyk::new(0, 100, 100, 0));
//! assert_eq!(rgb_to_hsl(rgb), Hsl::new(0, 100, 50));
//!
//! // HSV keeps saturation and value as fractions
//! let hsv = rgb_to_hsv(rgb);
//! assert_eq!((hsv.h, hsv.s, hsv.v), (0.0, 1.0, 1.0));
//! assert_eq!(hsv.to_percentages(), (0, 100, 100));
//! # Ok(())
//! # }
//! ```
//!
//! ## Modules
//!
//! - [`color`] - Value types and conversion functions
//! - [`report`] - All representations of one color, formatted for display
//! - [`error`] - Parse errors

pub mod color;
pub mod error;
pub mod report;

pub use color::{
    hex_to_rgb, rgb_to_cmyk, rgb_to_hsl, rgb_to_hsv, Cmyk, HexColor, Hsl, Hsv, Rgb,
};
pub use error::{ColorError, Result};
pub use report::{ColorFormat, ColorReport};
