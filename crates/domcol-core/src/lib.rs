//! # domcol-core
//!
//! Core types shared by every domcol crate.
//!
//! - [`Colorspace`] - Closed set of perceptual colorspaces the engine encodes into
//! - [`Error`], [`Result`] - Unified error handling
//! - [`Field`] - Flat buffer with an n-dimensional shape
//!
//! ## Crate Structure
//!
//! This crate has no internal dependencies. The numeric leaf crates do not
//! use it either; it is shared by the crates that expose fallible APIs:
//!
//! ```text
//! domcol-core        (no internal deps)
//! domcol-math        (no internal deps)
//! domcol-transfer    (no internal deps)
//! domcol-primaries   -> domcol-math
//! domcol-color       -> domcol-core, domcol-math, domcol-transfer, domcol-primaries
//! domcol-map         -> domcol-core, domcol-math, domcol-color
//! ```

#![warn(missing_docs)]
#![warn(rustdoc::missing_crate_level_docs)]

pub mod colorspace;
pub mod error;
pub mod field;

pub use colorspace::Colorspace;
pub use error::{Error, Result};
pub use field::Field;

/// Prelude module for convenient imports.
pub mod prelude {
    pub use crate::colorspace::Colorspace;
    pub use crate::error::{Error, Result};
    pub use crate::field::Field;
}
