//! # tinct-color — perceptual color model for theme derivation
//!
//! Parses whatever a user types into a color field, normalizes it to an
//! opaque `#rrggbb`, and moves colors between 8-bit sRGB and OKLCH so the
//! theme engine can shift lightness without distorting hue.
//!
//! ```text
//! "rgb(37 99 235)" ──parse──▶ Rgb ──to_color──▶ Color (OKLCH)
//!                                 ◀──to_rgb────
//! ```
//!
//! Parsing never has to fail for callers that do not care why:
//! [`normalize`] substitutes black for anything unparseable.

// Mathematical code uses small float casts (channel quantization).
#![allow(clippy::cast_precision_loss)]
// Hue/lightness/chroma variable names are inherently similar.
#![allow(clippy::similar_names)]

pub mod color;
pub mod named;
pub mod parse;

pub use color::{Color, Rgb, hue_diff, normalize_hue};
pub use parse::{ParseColorError, blend, from_perceptual, normalize, parse, to_perceptual};
