//! # domcol-math
//!
//! Math primitives for the color-encoding engine:
//!
//! - [`Mat3`] - 3x3 `f64` matrices for RGB/XYZ/LMS transforms
//! - Interpolation and clamping ([`lerp`], [`inverse_lerp`], [`saturate`])
//! - Angle helpers ([`wrap_turn`], [`hue_position`])
//!
//! # Design
//!
//! Everything is `f64`: colorspace round-trips must hold to 1e-6 and the
//! CAM16 nonlinearity amplifies `f32` rounding well past that.
//! Matrices are **row-major** and act on **column vectors**:
//!
//! ```text
//! result = matrix * vector
//! ```
//!
//! # Usage
//!
//! ```rust
//! use domcol_math::Mat3;
//!
//! let m = Mat3::from_rows([
//!     [0.4124, 0.3576, 0.1805],
//!     [0.2126, 0.7152, 0.0722],
//!     [0.0193, 0.1192, 0.9505],
//! ]);
//! let xyz = m * [1.0, 1.0, 1.0];
//! assert!((xyz[1] - 1.0).abs() < 1e-3);
//! ```

#![warn(missing_docs)]
#![warn(rustdoc::missing_crate_level_docs)]

mod interp;
mod mat3;

pub use interp::*;
pub use mat3::*;

/// Three-component `f64` vector (RGB, XYZ, LMS or a colorspace point).
pub type F3 = [f64; 3];
