//! Complex to sRGB mapping.
//!
//! Each sample `z` becomes a color in four steps:
//!
//! 1. `arg(z) + hue_offset` is the hue and `|z|^alpha` goes through the
//!    [`AbsScaling`](crate::AbsScaling) transfer function to a contour value.
//! 2. The [`LightnessCurve`](crate::LightnessCurve) turns the contour into
//!    normalized lightness.
//! 3. The gamut stack gives the largest in-gamut radius at that lightness
//!    and hue; `saturation` scales it to the final chroma.
//! 4. The polar point is converted to sRGB and clipped to `[0, 1]`.
//!
//! NaN samples render as the gray at contour 0.5.

use std::sync::Arc;

use domcol_color::{Converter, GamutCache, GamutStack};
use domcol_core::{Field, Result};
use domcol_math::{F3, saturate3};
use num_complex::Complex64;
use rayon::prelude::*;
use tracing::trace;

use crate::config::MapConfig;

/// Polar target of one sample before gamut lookup.
#[derive(Debug, Clone, Copy)]
struct Target {
    /// Normalized lightness in `[0, 1]`
    lightness: f64,
    /// Hue in radians
    hue: f64,
    /// Zero for NaN samples, which stay on the gray axis
    chroma: f64,
}

/// Configured complex-to-sRGB mapper.
///
/// The mapper owns a handle to a [`GamutCache`]; tables solved for one call
/// are reused by later calls and by any mapper sharing the same cache.
///
/// # Example
///
/// ```rust
/// use domcol_map::{MapConfig, Mapper};
/// use num_complex::Complex64;
///
/// let mapper = Mapper::new(MapConfig::from_names("oklab", "standard").unwrap()).unwrap();
/// let rgb = mapper.complex_to_rgb(&[Complex64::new(1.0, 0.0), Complex64::new(0.0, 2.0)]);
/// assert_eq!(rgb.len(), 2);
/// ```
#[derive(Debug, Clone)]
pub struct Mapper {
    config: MapConfig,
    converter: Converter,
    cache: Arc<GamutCache>,
}

impl Mapper {
    /// Validates `config` and creates a mapper with a fresh cache.
    ///
    /// # Errors
    ///
    /// The errors of [`MapConfig::validate`].
    pub fn new(config: MapConfig) -> Result<Self> {
        Self::with_cache(config, Arc::new(GamutCache::new()))
    }

    /// Like [`new`](Self::new) but reuses an existing cache.
    ///
    /// # Errors
    ///
    /// The errors of [`MapConfig::validate`].
    pub fn with_cache(config: MapConfig, cache: Arc<GamutCache>) -> Result<Self> {
        config.validate()?;
        Ok(Self {
            converter: Converter::new(config.colorspace),
            config,
            cache,
        })
    }

    /// Mapper configuration.
    pub fn config(&self) -> &MapConfig {
        &self.config
    }

    /// Shared gamut table cache.
    pub fn cache(&self) -> &Arc<GamutCache> {
        &self.cache
    }

    /// Contour value of one sample (0.5 for NaN).
    #[inline]
    pub fn contour(&self, z: Complex64) -> f64 {
        if z.re.is_nan() || z.im.is_nan() {
            return 0.5;
        }
        let m = z.norm();
        let m = if self.config.alpha == 1.0 {
            m
        } else {
            m.powf(self.config.alpha)
        };
        self.config.abs_scaling.contour(m)
    }

    fn target(&self, z: Complex64) -> Target {
        let chroma = if z.re.is_nan() || z.im.is_nan() { 0.0 } else { 1.0 };
        let hue = if chroma > 0.0 {
            z.arg() + self.config.hue_offset
        } else {
            0.0
        };
        Target {
            lightness: self.config.lightness.apply(self.contour(z)),
            hue,
            chroma,
        }
    }

    fn color(&self, stack: &GamutStack, t: &Target) -> F3 {
        let radius = stack.radius(
            t.lightness,
            t.hue,
            self.config.interpolation,
            self.config.chroma,
        ) * self.config.saturation
            * t.chroma;
        let l = t.lightness * self.config.colorspace.lightness_range();
        let (rgb, _) = self
            .converter
            .to_rgb1(&self.converter.from_polar(l, radius, t.hue));
        saturate3(rgb)
    }

    /// Maps samples to encoded sRGB in `[0, 1]`.
    ///
    /// Output order matches input order.
    pub fn complex_to_rgb(&self, z: &[Complex64]) -> Vec<F3> {
        trace!(
            samples = z.len(),
            colorspace = %self.config.colorspace,
            abs_scaling = %self.config.abs_scaling,
            "complex_to_rgb"
        );

        let targets: Vec<Target> = z.par_iter().map(|&z| self.target(z)).collect();
        let lightness: Vec<f64> = targets.iter().map(|t| t.lightness).collect();
        let stack = self.cache.stack(self.config.colorspace, &lightness);

        targets.par_iter().map(|t| self.color(&stack, t)).collect()
    }

    /// Maps a shaped field. The result has the same shape with RGB elements.
    ///
    /// # Errors
    ///
    /// [`Error::ShapeMismatch`](domcol_core::Error::ShapeMismatch) cannot
    /// occur for a well-formed field; it is propagated from the rebuild.
    pub fn map_field(&self, field: &Field<Complex64>) -> Result<Field<F3>> {
        field.with_data(self.complex_to_rgb(field.as_slice()))
    }
}

/// Maps samples with default settings for a colorspace and scaling name.
///
/// Builds a fresh [`Mapper`]; hold on to a mapper instead when mapping
/// repeatedly so gamut tables are reused.
///
/// # Errors
///
/// [`Error::UnknownColorspace`](domcol_core::Error::UnknownColorspace) or
/// [`Error::InvalidScalingSpec`](domcol_core::Error::InvalidScalingSpec)
/// for unrecognized names.
pub fn complex_to_rgb(z: &[Complex64], colorspace: &str, abs_scaling: &str) -> Result<Vec<F3>> {
    let mapper = Mapper::new(MapConfig::from_names(colorspace, abs_scaling)?)?;
    Ok(mapper.complex_to_rgb(z))
}
