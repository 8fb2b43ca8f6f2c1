//! Perceptual colorspace models.
//!
//! Each model converts between its native point layout and **linear** sRGB.
//! Gamma encoding and the gamut test are applied once, in
//! [`Converter`](crate::Converter), so all four models share the same
//! validity semantics.

pub mod cam16;
pub mod cielab;
pub mod hsl;
pub mod oklab;

use std::sync::LazyLock;

use domcol_math::Mat3;
use domcol_primaries::{SRGB, rgb_to_xyz_matrix, xyz_to_rgb_matrix};

/// Linear sRGB <-> XYZ (Y = 1) matrices.
pub(crate) struct SrgbXyz {
    pub to_xyz: Mat3,
    pub from_xyz: Mat3,
}

pub(crate) static SRGB_XYZ: LazyLock<SrgbXyz> = LazyLock::new(|| SrgbXyz {
    to_xyz: rgb_to_xyz_matrix(&SRGB),
    from_xyz: xyz_to_rgb_matrix(&SRGB),
});
