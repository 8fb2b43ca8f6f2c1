//! Circular colormaps for legends.
//!
//! A colormap is a ring of `n` colors at one lightness, all on the largest
//! hue-independent circle inside the sRGB gamut. Ring colors therefore
//! differ only in hue, which makes them suitable as a phase legend next
//! to a domain-colored plot.

use std::f64::consts::TAU;

use domcol_core::{Colorspace, Error, Result};
use domcol_math::{F3, saturate3};

use crate::convert::Converter;
use crate::gamut::max_circle_radius;

/// Samples `n` evenly spaced hues on the in-gamut circle.
///
/// `lightness` is normalized to `[0, 1]` and scaled by the colorspace's
/// lightness range. Entry `i` has hue `i / n` turns. Output is encoded
/// sRGB clipped to `[0, 1]`.
///
/// # Errors
///
/// [`Error::InvalidParameter`] if `lightness` is outside `[0, 1]`.
///
/// # Example
///
/// ```rust
/// use domcol_color::circular_colormap;
/// use domcol_core::Colorspace;
///
/// let ring = circular_colormap(Colorspace::Oklab, 0.6, 8).unwrap();
/// assert_eq!(ring.len(), 8);
/// ```
pub fn circular_colormap(colorspace: Colorspace, lightness: f64, n: usize) -> Result<Vec<F3>> {
    if !(0.0..=1.0).contains(&lightness) {
        return Err(Error::invalid_parameter(
            "lightness",
            format!("{lightness} is outside [0, 1]"),
        ));
    }

    let conv = Converter::new(colorspace);
    let l = lightness * colorspace.lightness_range();
    let radius = max_circle_radius(colorspace, l);

    Ok((0..n)
        .map(|i| {
            let hue = i as f64 / n as f64 * TAU;
            let (rgb, _) = conv.to_rgb1(&conv.from_polar(l, radius, hue));
            saturate3(rgb)
        })
        .collect())
}
