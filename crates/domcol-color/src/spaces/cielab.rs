//! CIE 1976 L*a*b*.
//!
//! Reference white is the sRGB white point (D65), so sRGB grays map to
//! `a* = b* = 0` exactly. Points are `[L*, a*, b*]` with `L*` in `0..100`.

use std::sync::LazyLock;

use domcol_math::F3;
use domcol_primaries::SRGB;

use super::SRGB_XYZ;

const DELTA: f64 = 6.0 / 29.0;

static WHITE: LazyLock<F3> = LazyLock::new(|| SRGB.white_xyz());

#[inline]
fn f(t: f64) -> f64 {
    if t > DELTA * DELTA * DELTA {
        t.cbrt()
    } else {
        t / (3.0 * DELTA * DELTA) + 4.0 / 29.0
    }
}

#[inline]
fn f_inv(t: f64) -> f64 {
    if t > DELTA {
        t * t * t
    } else {
        3.0 * DELTA * DELTA * (t - 4.0 / 29.0)
    }
}

/// XYZ (Y = 1 white) to L*a*b*.
pub fn from_xyz(xyz: &F3) -> F3 {
    let w = &*WHITE;
    let fx = f(xyz[0] / w[0]);
    let fy = f(xyz[1] / w[1]);
    let fz = f(xyz[2] / w[2]);
    [116.0 * fy - 16.0, 500.0 * (fx - fy), 200.0 * (fy - fz)]
}

/// L*a*b* to XYZ (Y = 1 white).
pub fn to_xyz(lab: &F3) -> F3 {
    let w = &*WHITE;
    let fy = (lab[0] + 16.0) / 116.0;
    let fx = fy + lab[1] / 500.0;
    let fz = fy - lab[2] / 200.0;
    [w[0] * f_inv(fx), w[1] * f_inv(fy), w[2] * f_inv(fz)]
}

/// L*a*b* to linear sRGB.
pub fn to_linear_srgb(lab: &F3) -> F3 {
    SRGB_XYZ.from_xyz * to_xyz(lab)
}

/// Linear sRGB to L*a*b*.
pub fn from_linear_srgb(rgb: &F3) -> F3 {
    from_xyz(&(SRGB_XYZ.to_xyz * *rgb))
}
