//! Mapper configuration.
//!
//! [`MapConfig`] holds every knob of the complex-to-color pipeline. It is
//! plain data: serde-serializable, with defaults for every field, so a
//! YAML document only needs the keys it changes:
//!
//! ```yaml
//! colorspace: oklab
//! abs_scaling: h-2
//! lightness:
//!   min: 0.1
//!   max: 0.9
//! chroma: circle
//! ```

use domcol_color::{ChromaMode, HueInterpolation};
use domcol_core::{Colorspace, Error, Result};
use serde::{Deserialize, Serialize};

use crate::lightness::LightnessCurve;
use crate::scaling::AbsScaling;

/// Configuration of a [`Mapper`](crate::Mapper).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct MapConfig {
    /// Perceptual space the colors are constructed in
    pub colorspace: Colorspace,
    /// Magnitude transfer function
    pub abs_scaling: AbsScaling,
    /// Exponent applied to the magnitude before the transfer function
    pub alpha: f64,
    /// Contour to lightness curve
    pub lightness: LightnessCurve,
    /// Fraction of the available gamut radius used as chroma
    pub saturation: f64,
    /// Rotation added to the phase before hue lookup, in radians
    pub hue_offset: f64,
    /// Per-hue gamut boundary or hue-independent circle
    pub chroma: ChromaMode,
    /// Gamut table sampling between stored hues
    pub interpolation: HueInterpolation,
}

impl Default for MapConfig {
    fn default() -> Self {
        Self {
            colorspace: Colorspace::Cam16Ucs,
            abs_scaling: AbsScaling::Standard,
            alpha: 1.0,
            lightness: LightnessCurve::default(),
            saturation: 1.0,
            hue_offset: 0.0,
            chroma: ChromaMode::PerHue,
            interpolation: HueInterpolation::Linear,
        }
    }
}

impl MapConfig {
    /// Config for a colorspace and scaling name, other fields default.
    ///
    /// # Errors
    ///
    /// [`Error::UnknownColorspace`] or [`Error::InvalidScalingSpec`] for
    /// unrecognized names.
    pub fn from_names(colorspace: &str, abs_scaling: &str) -> Result<Self> {
        Ok(Self {
            colorspace: colorspace.parse()?,
            abs_scaling: abs_scaling.parse()?,
            ..Self::default()
        })
    }

    /// Parses and validates a YAML document.
    ///
    /// # Errors
    ///
    /// [`Error::Config`] for malformed YAML, unknown keys or unknown enum
    /// names, and the errors of [`validate`](Self::validate).
    pub fn from_yaml(yaml: &str) -> Result<Self> {
        let config: Self = serde_yaml::from_str(yaml).map_err(|e| Error::Config(e.to_string()))?;
        config.validate()?;
        Ok(config)
    }

    /// Serializes to YAML.
    ///
    /// # Errors
    ///
    /// [`Error::Config`] if serialization fails.
    pub fn to_yaml(&self) -> Result<String> {
        serde_yaml::to_string(self).map_err(|e| Error::Config(e.to_string()))
    }

    /// Checks numeric ranges.
    ///
    /// # Errors
    ///
    /// [`Error::InvalidParameter`] naming the first offending field.
    pub fn validate(&self) -> Result<()> {
        if !(self.alpha.is_finite() && self.alpha >= 0.0) {
            return Err(Error::invalid_parameter(
                "alpha",
                format!("{} must be finite and >= 0", self.alpha),
            ));
        }
        if !(0.0..=1.0).contains(&self.saturation) {
            return Err(Error::invalid_parameter(
                "saturation",
                format!("{} is outside [0, 1]", self.saturation),
            ));
        }
        if !self.hue_offset.is_finite() {
            return Err(Error::invalid_parameter("hue_offset", "must be finite"));
        }
        self.lightness.validate()
    }
}
