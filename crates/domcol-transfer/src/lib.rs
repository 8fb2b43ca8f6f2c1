//! # domcol-transfer
//!
//! Transfer functions between linear light and encoded display values.
//!
//! - **OETF** (Opto-Electronic Transfer Function): Linear -> Encoded
//! - **EOTF** (Electro-Optical Transfer Function): Encoded -> Linear
//!
//! Only sRGB is needed: every colorspace is converted to linear sRGB first,
//! checked against the `[0, 1]` gamut, and encoded last.
//!
//! # Usage
//!
//! ```rust
//! use domcol_transfer::srgb;
//!
//! let linear = srgb::eotf(0.5);
//! let encoded = srgb::oetf(linear);
//! assert!((encoded - 0.5).abs() < 1e-12);
//! ```

#![warn(missing_docs)]
#![warn(rustdoc::missing_crate_level_docs)]

pub mod srgb;

pub use srgb::{eotf as srgb_eotf, oetf as srgb_oetf};
