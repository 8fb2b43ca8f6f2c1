//! # domcol-primaries
//!
//! Color primaries, white points, and RGB-XYZ matrix generation.
//!
//! The output gamut of the engine is sRGB, so sRGB (Rec.709 primaries, D65
//! white) is the only RGB space defined here. The matrices are derived from
//! chromaticities instead of hard-coded so that RGB white lands exactly on
//! [`Primaries::white_xyz`], which keeps the neutral axis of every derived
//! colorspace exactly achromatic.
//!
//! # Usage
//!
//! ```rust
//! use domcol_primaries::{SRGB, rgb_to_xyz_matrix};
//!
//! let m = rgb_to_xyz_matrix(&SRGB);
//! let white = m * [1.0, 1.0, 1.0];
//! assert!((white[1] - 1.0).abs() < 1e-12);
//! ```

#![warn(missing_docs)]
#![warn(rustdoc::missing_crate_level_docs)]

use domcol_math::{F3, Mat3};

/// RGB color space primaries definition.
///
/// Primaries and white point are CIE xy chromaticity coordinates.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Primaries {
    /// Red primary (x, y) chromaticity
    pub r: (f64, f64),
    /// Green primary (x, y) chromaticity
    pub g: (f64, f64),
    /// Blue primary (x, y) chromaticity
    pub b: (f64, f64),
    /// White point (x, y) chromaticity
    pub w: (f64, f64),
    /// Color space name
    pub name: &'static str,
}

impl Primaries {
    /// White point as XYZ (Y=1).
    #[inline]
    pub fn white_xyz(&self) -> F3 {
        xy_to_xyz(self.w.0, self.w.1)
    }
}

/// D65 white point chromaticity (daylight, ~6500K).
pub const D65_XY: (f64, f64) = (0.3127, 0.3290);

/// sRGB / Rec.709 primaries (D65 white point).
pub const SRGB: Primaries = Primaries {
    r: (0.6400, 0.3300),
    g: (0.3000, 0.6000),
    b: (0.1500, 0.0600),
    w: D65_XY,
    name: "sRGB",
};

/// Converts xy chromaticity to XYZ (with Y=1).
pub fn xy_to_xyz(x: f64, y: f64) -> F3 {
    if y.abs() < 1e-12 {
        [0.0, 0.0, 0.0]
    } else {
        [x / y, 1.0, (1.0 - x - y) / y]
    }
}

/// Computes the RGB to XYZ matrix for a set of primaries.
///
/// # Algorithm
///
/// 1. Convert xy chromaticities to XYZ (with Y=1)
/// 2. Compute scaling factors so white point maps correctly
/// 3. Multiply primaries by scaling factors
pub fn rgb_to_xyz_matrix(primaries: &Primaries) -> Mat3 {
    let r = xy_to_xyz(primaries.r.0, primaries.r.1);
    let g = xy_to_xyz(primaries.g.0, primaries.g.1);
    let b = xy_to_xyz(primaries.b.0, primaries.b.1);
    let w = primaries.white_xyz();

    // Solve M * S = W for the per-primary scale S
    let m = Mat3::from_cols([r, g, b]);
    let s = m.inverse().unwrap_or(Mat3::IDENTITY) * w;

    Mat3::from_cols([
        [r[0] * s[0], r[1] * s[0], r[2] * s[0]],
        [g[0] * s[1], g[1] * s[1], g[2] * s[1]],
        [b[0] * s[2], b[1] * s[2], b[2] * s[2]],
    ])
}

/// Computes the XYZ to RGB matrix for a set of primaries.
///
/// This is the inverse of [`rgb_to_xyz_matrix`].
pub fn xyz_to_rgb_matrix(primaries: &Primaries) -> Mat3 {
    rgb_to_xyz_matrix(primaries)
        .inverse()
        .unwrap_or(Mat3::IDENTITY)
}
