//! # Colors
//!
//! This crate computes the perceptual properties of sRGB colors that matter
//! when picking text and background colors: the [relative
//! luminance](https://www.w3.org/TR/WCAG20/#relativeluminancedef), the WCAG
//! [contrast ratio](https://www.w3.org/TR/WCAG20/#contrast-ratiodef) with its
//! conformance tiers, and a deliberately naive Euclidean distance between two
//! colors.
//!
//! The main abstractions are:
//!
//!   * [`Color`] is an immutable, named sRGB color with three [`Float`]
//!     channels in unit range. It is created from 24-bit integer channels with
//!     [`Color::from_rgb`] or from six hexadecimal digits with
//!     [`Color::from_hex`], and it exposes [`Color::hex`],
//!     [`Color::luminance`], [`Color::contrast_ratio`], and
//!     [`Color::distance_to`].
//!   * [`ContrastLevel`] classifies a contrast ratio as `AA+`, `AA`, or `AAA`.
//!     Ratios below 3 are not reported at all.
//!   * [`palette::parse`] reads a line-oriented list of named colors and
//!     [`ContrastMatrix`] turns such a list into a table of pairwise contrast
//!     labels, ready for rendering as CSV or aligned text.
//!
//! ```
//! # use colors::{Color, ContrastLevel};
//! # use colors::error::ColorFormatError;
//! let paper = Color::from_hex("paper", "fff6dd")?;
//! let ink = Color::from_hex("ink", "a95f09")?;
//!
//! let ratio = paper.contrast_ratio(&ink);
//! assert_eq!(ContrastLevel::classify(ratio), Some(ContrastLevel::Aa));
//! assert_eq!(ink.hex(), "#a95f09");
//! # Ok::<(), ColorFormatError>(())
//! ```
//!
//!
//! ## Optional Features
//!
//!   - **`f64`** selects the eponymous type as floating point type [`Float`]
//!     and `u64` as [`Bits`] instead of `f32` as [`Float`] and `u32` as
//!     [`Bits`]. This feature is enabled by default.

/// The floating point type in use.
#[cfg(feature = "f64")]
pub type Float = f64;
/// The floating point type in use.
#[cfg(not(feature = "f64"))]
pub type Float = f32;

/// [`Float`]'s bits.
#[cfg(feature = "f64")]
pub type Bits = u64;
/// [`Float`]'s bits.
#[cfg(not(feature = "f64"))]
pub type Bits = u32;

mod core;
pub mod error;
mod matrix;
mod object;
pub mod palette;

#[doc(hidden)]
pub use crate::core::to_eq_bits;

pub use crate::core::{ContrastLevel, UNREPORTED};
pub use matrix::ContrastMatrix;
pub use object::Color;
