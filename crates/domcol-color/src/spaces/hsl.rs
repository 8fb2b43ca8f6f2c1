//! HSL over gamma-encoded sRGB.
//!
//! Points are `[H, S, L]` with `H` in degrees `[0, 360)`, `S` and `L` in
//! `[0, 1]`. Unlike the other models HSL is defined on the *encoded*
//! signal, so the linear conversions wrap the sRGB transfer function.

use domcol_math::F3;
use domcol_transfer::srgb;

/// HSL to encoded sRGB.
pub fn to_srgb(hsl: &F3) -> F3 {
    let h = hsl[0].rem_euclid(360.0) / 60.0;
    let s = hsl[1];
    let l = hsl[2];

    let c = (1.0 - (2.0 * l - 1.0).abs()) * s;
    let x = c * (1.0 - (h.rem_euclid(2.0) - 1.0).abs());
    let (r, g, b) = match h as u32 {
        0 => (c, x, 0.0),
        1 => (x, c, 0.0),
        2 => (0.0, c, x),
        3 => (0.0, x, c),
        4 => (x, 0.0, c),
        _ => (c, 0.0, x),
    };
    let m = l - 0.5 * c;
    [r + m, g + m, b + m]
}

/// Encoded sRGB to HSL.
pub fn from_srgb(rgb: &F3) -> F3 {
    let [r, g, b] = *rgb;
    let max = r.max(g).max(b);
    let min = r.min(g).min(b);
    let c = max - min;
    let l = 0.5 * (max + min);

    if c <= 0.0 {
        return [0.0, 0.0, l];
    }

    let h = if max == r {
        60.0 * ((g - b) / c).rem_euclid(6.0)
    } else if max == g {
        60.0 * ((b - r) / c + 2.0)
    } else {
        60.0 * ((r - g) / c + 4.0)
    };
    let denom = 1.0 - (2.0 * l - 1.0).abs();
    let s = if denom > 0.0 { c / denom } else { 0.0 };
    [h.rem_euclid(360.0), s, l]
}

/// HSL to linear sRGB.
pub fn to_linear_srgb(hsl: &F3) -> F3 {
    srgb::eotf_rgb(to_srgb(hsl))
}

/// Linear sRGB to HSL.
pub fn from_linear_srgb(rgb: &F3) -> F3 {
    from_srgb(&srgb::oetf_rgb(*rgb))
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_abs_diff_eq;

    #[test]
    fn test_primaries() {
        assert_eq!(to_srgb(&[0.0, 1.0, 0.5]), [1.0, 0.0, 0.0]);
        assert_eq!(to_srgb(&[120.0, 1.0, 0.5]), [0.0, 1.0, 0.0]);
        assert_eq!(to_srgb(&[240.0, 1.0, 0.5]), [0.0, 0.0, 1.0]);
        assert_eq!(to_srgb(&[360.0, 1.0, 0.5]), [1.0, 0.0, 0.0]);
    }

    #[test]
    fn test_gray_has_no_saturation() {
        assert_eq!(from_srgb(&[0.3, 0.3, 0.3]), [0.0, 0.0, 0.3]);
        assert_eq!(to_srgb(&[200.0, 0.0, 0.3]), [0.3, 0.3, 0.3]);
    }

    #[test]
    fn test_roundtrip() {
        for hsl in [[10.0, 0.8, 0.4], [200.0, 0.3, 0.7], [330.0, 1.0, 0.5]] {
            let back = from_srgb(&to_srgb(&hsl));
            for i in 0..3 {
                assert_abs_diff_eq!(back[i], hsl[i], epsilon = 1e-12);
            }
        }
    }
}
