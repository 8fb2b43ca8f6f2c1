//! Colorspace conversion to and from sRGB.
//!
//! [`Converter`] is the dispatch table behind every conversion: one
//! forward/inverse function pair per [`Colorspace`] variant, selected by a
//! `match` when the converter is built. All models go through **linear**
//! sRGB, where the gamut test happens, before the sRGB OETF is applied.
//!
//! # Example
//!
//! ```rust
//! use domcol_color::Converter;
//! use domcol_core::Colorspace;
//!
//! let lab = Converter::new(Colorspace::Cielab);
//! let (rgb, valid) = lab.to_rgb1(&[50.0, 10.0, -10.0]);
//! assert!(valid);
//!
//! let back = lab.from_rgb1(&rgb);
//! assert!((back[0] - 50.0).abs() < 1e-9);
//! ```

use domcol_core::{Colorspace, Result};
use domcol_math::{F3, wrap_turn};
use domcol_transfer::srgb;

use crate::spaces::{cam16, cielab, hsl, oklab};

/// Conversion between a native colorspace point and linear sRGB.
pub type ConvertFn = fn(&F3) -> F3;

/// Forward/inverse conversion pair for one colorspace.
#[derive(Clone, Copy)]
pub struct Converter {
    id: Colorspace,
    to_linear: ConvertFn,
    from_linear: ConvertFn,
}

impl std::fmt::Debug for Converter {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Converter").field("id", &self.id).finish()
    }
}

impl Converter {
    /// Builds the converter for a colorspace.
    pub fn new(id: Colorspace) -> Self {
        let (to_linear, from_linear): (ConvertFn, ConvertFn) = match id {
            Colorspace::Cam16Ucs => (cam16::to_linear_srgb, cam16::from_linear_srgb),
            Colorspace::Cielab => (cielab::to_linear_srgb, cielab::from_linear_srgb),
            Colorspace::Oklab => (oklab::to_linear_srgb, oklab::from_linear_srgb),
            Colorspace::Hsl => (hsl::to_linear_srgb, hsl::from_linear_srgb),
        };
        Self {
            id,
            to_linear,
            from_linear,
        }
    }

    /// Builds the converter for a colorspace name.
    ///
    /// # Errors
    ///
    /// [`Error::UnknownColorspace`](domcol_core::Error::UnknownColorspace)
    /// if the name is not recognized.
    pub fn from_name(name: &str) -> Result<Self> {
        Ok(Self::new(name.parse()?))
    }

    /// Colorspace of this converter.
    #[inline]
    pub fn id(&self) -> Colorspace {
        self.id
    }

    /// Native point to linear sRGB (unclipped).
    #[inline]
    pub fn to_linear_srgb(&self, p: &F3) -> F3 {
        (self.to_linear)(p)
    }

    /// Linear sRGB to native point.
    #[inline]
    pub fn from_linear_srgb(&self, rgb: &F3) -> F3 {
        (self.from_linear)(rgb)
    }

    /// Native point to encoded sRGB plus gamut validity.
    ///
    /// The flag is `true` iff every linear channel lies in `[0, 1]` before
    /// encoding. The returned values are **not** clipped.
    #[inline]
    pub fn to_rgb1(&self, p: &F3) -> (F3, bool) {
        let linear = self.to_linear_srgb(p);
        (srgb::oetf_rgb(linear), in_gamut(&linear))
    }

    /// Encoded sRGB to native point.
    #[inline]
    pub fn from_rgb1(&self, rgb: &F3) -> F3 {
        self.from_linear_srgb(&srgb::eotf_rgb(*rgb))
    }

    /// Whether a native point converts to an in-gamut sRGB color.
    #[inline]
    pub fn is_in_gamut(&self, p: &F3) -> bool {
        in_gamut(&self.to_linear_srgb(p))
    }

    /// Builds a native point from lightness, radius and hue (radians).
    ///
    /// Lightness is in native units (see [`Colorspace::lightness_range`]).
    /// For the Lab-like spaces this is `[L, r cos h, r sin h]`; for HSL the
    /// radius is the saturation and the hue is stored in degrees.
    #[inline]
    pub fn from_polar(&self, lightness: f64, radius: f64, hue: f64) -> F3 {
        if self.id.is_cylindrical() {
            [wrap_turn(hue).to_degrees(), radius, lightness]
        } else {
            let (sin_h, cos_h) = hue.sin_cos();
            [lightness, radius * cos_h, radius * sin_h]
        }
    }

    /// Splits a native point into `(lightness, radius, hue)`, hue in radians.
    #[inline]
    pub fn to_polar(&self, p: &F3) -> (f64, f64, f64) {
        if self.id.is_cylindrical() {
            (p[2], p[1], p[0].to_radians())
        } else {
            (p[0], p[1].hypot(p[2]), p[2].atan2(p[1]))
        }
    }
}

/// Whether every linear-sRGB channel lies in `[0, 1]`. NaN is out of gamut.
#[inline]
pub fn in_gamut(linear: &F3) -> bool {
    linear.iter().all(|v| (0.0..=1.0).contains(v))
}

/// Converts a colorspace point to encoded sRGB by colorspace name.
///
/// Returns the unclipped sRGB triple and whether the color is in gamut.
///
/// # Errors
///
/// [`Error::UnknownColorspace`](domcol_core::Error::UnknownColorspace)
/// for unrecognized names.
pub fn to_rgb1(point: &F3, colorspace: &str) -> Result<(F3, bool)> {
    Ok(Converter::from_name(colorspace)?.to_rgb1(point))
}

/// Converts encoded sRGB to a colorspace point by colorspace name.
///
/// # Errors
///
/// [`Error::UnknownColorspace`](domcol_core::Error::UnknownColorspace)
/// for unrecognized names.
pub fn from_rgb1(rgb: &F3, colorspace: &str) -> Result<F3> {
    Ok(Converter::from_name(colorspace)?.from_rgb1(rgb))
}
