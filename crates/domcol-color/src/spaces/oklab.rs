//! Oklab (Ottosson 2020).
//!
//! Defined directly on linear sRGB. Points are `[L, a, b]` with `L` in
//! `0..1`. The inverse matrices are computed from the published forward
//! ones so that round-trips are exact to `f64` precision.
//!
//! # Reference
//!
//! <https://bottosson.github.io/posts/oklab/>

use std::sync::LazyLock;

use domcol_math::{F3, Mat3};

/// Linear sRGB to LMS cone response.
pub const SRGB_TO_LMS: Mat3 = Mat3::from_rows([
    [0.4122214708, 0.5363325363, 0.0514459929],
    [0.2119034982, 0.6806995451, 0.1073969566],
    [0.0883024619, 0.2817188376, 0.6299787005],
]);

/// Nonlinear LMS to Lab.
pub const LMS_TO_LAB: Mat3 = Mat3::from_rows([
    [0.2104542553, 0.7936177850, -0.0040720468],
    [1.9779984951, -2.4285922050, 0.4505937099],
    [0.0259040371, 0.7827717662, -0.8086757660],
]);

struct Inverse {
    lms_to_srgb: Mat3,
    lab_to_lms: Mat3,
}

static INVERSE: LazyLock<Inverse> = LazyLock::new(|| Inverse {
    lms_to_srgb: SRGB_TO_LMS.inverse().unwrap_or(Mat3::IDENTITY),
    lab_to_lms: LMS_TO_LAB.inverse().unwrap_or(Mat3::IDENTITY),
});

/// Linear sRGB to Oklab.
pub fn from_linear_srgb(rgb: &F3) -> F3 {
    let lms = SRGB_TO_LMS * *rgb;
    LMS_TO_LAB * [lms[0].cbrt(), lms[1].cbrt(), lms[2].cbrt()]
}

/// Oklab to linear sRGB.
pub fn to_linear_srgb(lab: &F3) -> F3 {
    let inv = &*INVERSE;
    let lms = inv.lab_to_lms * *lab;
    inv.lms_to_srgb * [lms[0].powi(3), lms[1].powi(3), lms[2].powi(3)]
}
