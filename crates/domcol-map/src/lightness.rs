//! Contour value to lightness.

use domcol_core::{Error, Result};
use serde::{Deserialize, Serialize};

/// Maps a contour value `c` in `[0, 1]` to normalized lightness
/// `min + (max - min) * c^gamma`.
///
/// The default is the identity. `max < min` is allowed and inverts the
/// curve so large magnitudes render dark.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct LightnessCurve {
    /// Lightness at contour 0 (zeros)
    pub min: f64,
    /// Lightness at contour 1 (poles)
    pub max: f64,
    /// Exponent applied to the contour value
    pub gamma: f64,
}

impl Default for LightnessCurve {
    fn default() -> Self {
        Self {
            min: 0.0,
            max: 1.0,
            gamma: 1.0,
        }
    }
}

impl LightnessCurve {
    /// Normalized lightness for a contour value.
    #[inline]
    pub fn apply(&self, contour: f64) -> f64 {
        let c = contour.clamp(0.0, 1.0);
        let c = if self.gamma == 1.0 { c } else { c.powf(self.gamma) };
        self.min + (self.max - self.min) * c
    }

    /// Checks that both ends lie in `[0, 1]` and `gamma` is positive.
    pub fn validate(&self) -> Result<()> {
        for (name, v) in [("lightness.min", self.min), ("lightness.max", self.max)] {
            if !(0.0..=1.0).contains(&v) {
                return Err(Error::invalid_parameter(name, format!("{v} is outside [0, 1]")));
            }
        }
        if !(self.gamma.is_finite() && self.gamma > 0.0) {
            return Err(Error::invalid_parameter(
                "lightness.gamma",
                format!("{} must be finite and > 0", self.gamma),
            ));
        }
        Ok(())
    }
}
