//! # domcol-color
//!
//! Colorspace conversion and sRGB gamut solving for domain coloring.
//!
//! - **Colorspaces** - CAM16-UCS, CIELAB, Oklab and HSL, each with an exact
//!   forward/inverse pair to linear sRGB
//! - **Converter** - enum-selected dispatch table, gamut flag, polar helpers
//! - **Gamut solver** - largest in-gamut radius per (lightness, hue)
//! - **Gamut cache** - hue tables per quantized lightness, shared via `Arc`
//! - **Colormaps** - constant-lightness hue rings for legends
//!
//! # Architecture
//!
//! ```text
//!                   domcol-color
//!                        |
//!     +---------------+--+------------+-------------+
//!     |               |               |             |
//! domcol-transfer  domcol-primaries  domcol-math  domcol-core
//!                     |               ^
//!                     +---------------+
//! ```
//!
//! # Quick Start
//!
//! ```rust
//! use domcol_color::{Converter, max_radius};
//! use domcol_core::Colorspace;
//!
//! let cam = Converter::new(Colorspace::Cam16Ucs);
//!
//! // Most saturated in-gamut color at J' = 60, hue 1 rad
//! let r = max_radius("cam16", 60.0, 1.0).unwrap();
//! let (rgb, valid) = cam.to_rgb1(&cam.from_polar(60.0, r, 1.0));
//! assert!(valid);
//! assert!(rgb.iter().all(|v| (0.0..=1.0).contains(v)));
//! ```
//!
//! # Point Layouts
//!
//! | Space | Layout | Lightness range | Search radius |
//! |-------|--------|-----------------|---------------|
//! | CAM16-UCS | `[J', a', b']` | 0..100 | 100 |
//! | CIELAB | `[L*, a*, b*]` | 0..100 | 200 |
//! | Oklab | `[L, a, b]` | 0..1 | 1 |
//! | HSL | `[H deg, S, L]` | 0..1 | 1 |
//!
//! # Dependencies
//!
//! - [`domcol-core`] - `Colorspace`, `Error`
//! - [`domcol-math`] - `Mat3`, interpolation and angle helpers
//! - [`domcol-transfer`] - sRGB transfer function
//! - [`domcol-primaries`] - sRGB primaries and RGB/XYZ matrices
//!
//! # Used By
//!
//! - `domcol-map` - complex to RGB mapping
//! - `domcol-bench` - benchmarks

#![warn(missing_docs)]
#![warn(rustdoc::missing_crate_level_docs)]

pub mod cache;
pub mod colormap;
pub mod convert;
pub mod gamut;
pub mod spaces;

pub use cache::{GamutCache, GamutStack, LIGHTNESS_STEPS};
pub use colormap::circular_colormap;
pub use convert::{Converter, from_rgb1, in_gamut, to_rgb1};
pub use gamut::{
    ChromaMode, GamutTable, HUE_SAMPLES, HueInterpolation, max_circle_radius, max_radius,
};

// Re-export sub-crates for convenience
pub use domcol_math as math;
pub use domcol_primaries as primaries;
pub use domcol_transfer as transfer;

/// Prelude with commonly used types
pub mod prelude {
    pub use crate::{
        ChromaMode, Converter, GamutCache, GamutTable, HueInterpolation, circular_colormap,
        from_rgb1, max_radius, to_rgb1,
    };
    pub use domcol_core::{Colorspace, Error, Result};
}
