//! # domcol-map
//!
//! Domain coloring: maps complex samples to sRGB so that phase is shown as
//! hue and magnitude as lightness, with chroma pushed to the edge of the
//! sRGB gamut of a perceptual colorspace.
//!
//! # Pipeline
//!
//! ```text
//! z -> (arg z, |z|^alpha)
//!        |        |
//!        |   AbsScaling::contour      standard | h-N | m-N | 0
//!        |        |
//!        |   LightnessCurve::apply    min + (max - min) * c^gamma
//!        |        |
//!        +--> GamutStack::radius      per-hue table or in-gamut circle
//!                 |
//!            Converter::from_polar -> to_rgb1 -> clip
//! ```
//!
//! # Quick Start
//!
//! ```rust
//! use domcol_map::complex_to_rgb;
//! use num_complex::Complex64;
//!
//! let z = [Complex64::new(1.0, 0.0), Complex64::new(0.0, 0.0)];
//! let rgb = complex_to_rgb(&z, "hsl", "standard").unwrap();
//!
//! // 1 + 0i: phase 0 is red, |z| = 1 is mid lightness
//! assert!((rgb[0][0] - 1.0).abs() < 1e-9);
//! assert!(rgb[0][1].abs() < 1e-9);
//!
//! // zeros are black
//! assert!(rgb[1].iter().all(|v| v.abs() < 1e-9));
//! ```
//!
//! # Configuration
//!
//! [`MapConfig`] carries every option and loads from YAML:
//!
//! ```rust
//! use domcol_map::{MapConfig, Mapper};
//!
//! let config = MapConfig::from_yaml("colorspace: cielab\nabs_scaling: h-1\n").unwrap();
//! let mapper = Mapper::new(config).unwrap();
//! # let _ = mapper;
//! ```
//!
//! # Dependencies
//!
//! - [`domcol-core`] - `Colorspace`, `Error`, `Field`
//! - [`domcol-color`] - conversion and gamut tables
//! - [`num-complex`] - complex sample type

#![warn(missing_docs)]
#![warn(rustdoc::missing_crate_level_docs)]

pub mod config;
pub mod lightness;
pub mod mapper;
pub mod scaling;

pub use config::MapConfig;
pub use lightness::LightnessCurve;
pub use mapper::{Mapper, complex_to_rgb};
pub use scaling::{AbsScaling, MAX_BANDS, contour};

pub use num_complex::Complex64;

/// Prelude with commonly used types
pub mod prelude {
    pub use crate::{AbsScaling, LightnessCurve, MapConfig, Mapper, complex_to_rgb, contour};
    pub use domcol_color::{ChromaMode, HueInterpolation};
    pub use domcol_core::{Colorspace, Error, Field, Result};
    pub use num_complex::Complex64;
}
