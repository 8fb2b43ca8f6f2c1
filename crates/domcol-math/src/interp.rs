//! Interpolation, clamping and angle utilities.
//!
//! # Usage
//!
//! ```rust
//! use domcol_math::{lerp, wrap_turn};
//! use std::f64::consts::PI;
//!
//! assert_eq!(lerp(0.0, 10.0, 0.5), 5.0);
//! assert!((wrap_turn(-PI / 2.0) - 1.5 * PI).abs() < 1e-12);
//! ```

use std::f64::consts::TAU;

/// Linear interpolation between two values.
///
/// Returns `a` when `t = 0.0`, and `b` when `t = 1.0`.
/// For values outside [0, 1], the result is extrapolated.
///
/// # Example
///
/// ```rust
/// use domcol_math::lerp;
///
/// assert_eq!(lerp(0.0, 10.0, 0.0), 0.0);
/// assert_eq!(lerp(0.0, 10.0, 1.0), 10.0);
/// ```
#[inline]
pub fn lerp(a: f64, b: f64, t: f64) -> f64 {
    a + (b - a) * t
}

/// Inverse linear interpolation.
///
/// Returns `0.0` for a degenerate range.
#[inline]
pub fn inverse_lerp(a: f64, b: f64, value: f64) -> f64 {
    if (b - a).abs() < 1e-300 {
        0.0
    } else {
        (value - a) / (b - a)
    }
}

/// Clamps a value to [0, 1], mapping NaN to 0.
///
/// # Example
///
/// ```rust
/// use domcol_math::saturate;
///
/// assert_eq!(saturate(1.5), 1.0);
/// assert_eq!(saturate(-0.5), 0.0);
/// assert_eq!(saturate(f64::NAN), 0.0);
/// ```
#[inline]
pub fn saturate(value: f64) -> f64 {
    if value.is_nan() {
        0.0
    } else {
        value.clamp(0.0, 1.0)
    }
}

/// Clamps each component of a triple with [`saturate`].
#[inline]
pub fn saturate3(v: [f64; 3]) -> [f64; 3] {
    [saturate(v[0]), saturate(v[1]), saturate(v[2])]
}

/// Wraps an angle in radians into `[0, 2*pi)`.
#[inline]
pub fn wrap_turn(angle: f64) -> f64 {
    let w = angle.rem_euclid(TAU);
    // rem_euclid can round up to exactly TAU for tiny negative inputs
    if w >= TAU { 0.0 } else { w }
}

/// Fractional table position of an angle on a table of `n` entries per turn.
///
/// Returns `(index, t)` with `index < n` and `t` in `[0, 1)`; the value at
/// the angle sits between entries `index` and `(index + 1) % n`.
#[inline]
pub fn hue_position(angle: f64, n: usize) -> (usize, f64) {
    let pos = wrap_turn(angle) / TAU * n as f64;
    let base = pos.floor();
    let index = (base as usize).min(n - 1);
    (index, pos - base)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::f64::consts::PI;

    #[test]
    fn test_inverse_lerp() {
        assert_eq!(inverse_lerp(0.0, 10.0, 5.0), 0.5);
        assert_eq!(inverse_lerp(3.0, 3.0, 5.0), 0.0);
    }

    #[test]
    fn test_wrap_turn() {
        assert_eq!(wrap_turn(0.0), 0.0);
        assert!((wrap_turn(3.0 * PI) - PI).abs() < 1e-12);
        assert!((wrap_turn(-PI) - PI).abs() < 1e-12);
        assert!(wrap_turn(-1e-300) < TAU);
    }

    #[test]
    fn test_hue_position() {
        assert_eq!(hue_position(0.0, 256), (0, 0.0));
        let (i, t) = hue_position(PI, 256);
        assert_eq!(i, 128);
        assert!(t.abs() < 1e-9);
        let (i, t) = hue_position(-TAU / 512.0, 256);
        assert_eq!(i, 255);
        assert!((t - 0.5).abs() < 1e-9);
    }
}
