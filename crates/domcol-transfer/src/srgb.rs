//! sRGB transfer function.
//!
//! The sRGB standard uses a piecewise function combining a linear segment
//! near black with a 2.4 power curve for the rest. Constants are the exact
//! IEC values; figure fidelity depends on them.
//!
//! # Range
//!
//! - Input/Output: [0, 1]. Values outside are passed through the same
//!   formulas (odd extension below zero) so out-of-gamut colors stay
//!   distinguishable until the final clip.
//!
//! # Reference
//!
//! IEC 61966-2-1:1999

/// Encoded value at the segment break.
pub const ENCODED_BREAK: f64 = 0.04045;

/// Linear value at the segment break.
pub const LINEAR_BREAK: f64 = 0.0031308;

/// Slope of the linear segment.
pub const LINEAR_SLOPE: f64 = 12.92;

/// Exponent of the power segment.
pub const GAMMA: f64 = 2.4;

/// Offset of the power segment.
pub const OFFSET: f64 = 0.055;

/// sRGB EOTF: Decodes sRGB encoded values to linear light.
///
/// # Formula
///
/// ```text
/// if V <= 0.04045:
///     L = V / 12.92
/// else:
///     L = ((V + 0.055) / 1.055)^2.4
/// ```
///
/// # Example
///
/// ```rust
/// use domcol_transfer::srgb::eotf;
///
/// let linear = eotf(0.5);
/// assert!((linear - 0.214).abs() < 0.001);
/// ```
#[inline]
pub fn eotf(v: f64) -> f64 {
    let a = v.abs();
    let l = if a <= ENCODED_BREAK {
        a / LINEAR_SLOPE
    } else {
        ((a + OFFSET) / (1.0 + OFFSET)).powf(GAMMA)
    };
    l.copysign(v)
}

/// sRGB OETF: Encodes linear light to sRGB.
///
/// # Formula
///
/// ```text
/// if L <= 0.0031308:
///     V = L * 12.92
/// else:
///     V = 1.055 * L^(1/2.4) - 0.055
/// ```
#[inline]
pub fn oetf(l: f64) -> f64 {
    let a = l.abs();
    let v = if a <= LINEAR_BREAK {
        a * LINEAR_SLOPE
    } else {
        (1.0 + OFFSET) * a.powf(1.0 / GAMMA) - OFFSET
    };
    v.copysign(l)
}

/// Applies sRGB EOTF to an RGB triplet.
#[inline]
pub fn eotf_rgb(rgb: [f64; 3]) -> [f64; 3] {
    [eotf(rgb[0]), eotf(rgb[1]), eotf(rgb[2])]
}

/// Applies sRGB OETF to an RGB triplet.
#[inline]
pub fn oetf_rgb(rgb: [f64; 3]) -> [f64; 3] {
    [oetf(rgb[0]), oetf(rgb[1]), oetf(rgb[2])]
}
