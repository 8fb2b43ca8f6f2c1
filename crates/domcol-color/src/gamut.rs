//! sRGB gamut boundary in polar colorspace coordinates.
//!
//! For a fixed lightness and hue, the set of in-gamut radii is an interval
//! `[0, r_max]`. The solver finds `r_max` by bisection over
//! `[0, Colorspace::search_radius()]` and [`GamutTable`] samples it over a
//! full turn of hue so the mapper can look radii up instead of solving per
//! pixel.
//!
//! ```rust
//! use domcol_color::gamut::max_radius;
//!
//! // HSL saturation is always bounded by 1
//! let r = max_radius("hsl", 0.5, 1.0).unwrap();
//! assert_eq!(r, 1.0);
//! ```

use std::f64::consts::TAU;
use std::fmt;
use std::str::FromStr;

use domcol_core::{Colorspace, Error, Result};
use domcol_math::{hue_position, lerp};
use serde::{Deserialize, Serialize};

use crate::convert::Converter;

// ============================================================================
// Constants
// ============================================================================

/// Hue samples per turn in a [`GamutTable`].
pub const HUE_SAMPLES: usize = 256;

/// Bisection stops once the bracket is this fraction of the search radius.
pub const RADIUS_TOLERANCE: f64 = 1e-6;

// ============================================================================
// Lookup modes
// ============================================================================

/// How a [`GamutTable`] is sampled between stored hues.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum HueInterpolation {
    /// Radius of the closest stored hue.
    Nearest,
    /// Linear blend of the two neighbouring hues.
    #[default]
    Linear,
}

impl fmt::Display for HueInterpolation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Self::Nearest => "nearest",
            Self::Linear => "linear",
        })
    }
}

impl FromStr for HueInterpolation {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        match s.trim().to_ascii_lowercase().as_str() {
            "nearest" => Ok(Self::Nearest),
            "linear" => Ok(Self::Linear),
            _ => Err(Error::invalid_parameter(
                "interpolation",
                format!("'{s}' is not 'nearest' or 'linear'"),
            )),
        }
    }
}

/// Which boundary bounds the chroma of a mapped sample.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ChromaMode {
    /// The gamut boundary at the sample's own hue. Maximizes saturation.
    #[default]
    PerHue,
    /// The largest circle inside the gamut at that lightness, so every hue
    /// of the same lightness gets the same chroma.
    Circle,
}

impl fmt::Display for ChromaMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Self::PerHue => "per_hue",
            Self::Circle => "circle",
        })
    }
}

impl FromStr for ChromaMode {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        match s.trim().to_ascii_lowercase().replace('-', "_").as_str() {
            "per_hue" => Ok(Self::PerHue),
            "circle" => Ok(Self::Circle),
            _ => Err(Error::invalid_parameter(
                "chroma",
                format!("'{s}' is not 'per_hue' or 'circle'"),
            )),
        }
    }
}

// ============================================================================
// Solver
// ============================================================================

/// Bisection for the boundary of a radius predicate on `[0, upper]`.
///
/// `valid` must hold on an interval starting at 0.
fn bisect(upper: f64, valid: impl Fn(f64) -> bool) -> f64 {
    if !valid(0.0) {
        return 0.0;
    }
    if valid(upper) {
        return upper;
    }

    let tolerance = RADIUS_TOLERANCE * upper;
    let mut lower = 0.0;
    let mut upper = upper;
    while upper - lower > tolerance {
        let mid = 0.5 * (lower + upper);
        if valid(mid) {
            lower = mid;
        } else {
            upper = mid;
        }
    }
    lower
}

/// Largest in-gamut radius for a converter at `lightness` and `hue`.
///
/// Lightness is in native units. Returns 0 if even the gray point is out of
/// gamut, and the search radius if that is still in gamut.
pub fn solve_radius(conv: &Converter, lightness: f64, hue: f64) -> f64 {
    bisect(conv.id().search_radius(), |r| {
        conv.is_in_gamut(&conv.from_polar(lightness, r, hue))
    })
}

/// Largest in-gamut radius by colorspace name.
///
/// # Errors
///
/// [`Error::UnknownColorspace`] for unrecognized names.
pub fn max_radius(colorspace: &str, lightness: f64, hue: f64) -> Result<f64> {
    let conv = Converter::from_name(colorspace)?;
    Ok(solve_radius(&conv, lightness, hue))
}

/// Radius of the largest hue-independent circle inside the gamut.
///
/// Bisects once with all [`HUE_SAMPLES`] hues tested per step, so it agrees
/// with [`GamutTable::min_radius`] up to the solver tolerance.
pub fn max_circle_radius(colorspace: Colorspace, lightness: f64) -> f64 {
    let conv = Converter::new(colorspace);
    bisect(colorspace.search_radius(), |r| {
        (0..HUE_SAMPLES).all(|i| {
            conv.is_in_gamut(&conv.from_polar(lightness, r, GamutTable::sample_hue(i)))
        })
    })
}

// ============================================================================
// Table
// ============================================================================

/// Gamut boundary radii over a full turn of hue at one lightness.
#[derive(Debug, Clone, PartialEq)]
pub struct GamutTable {
    colorspace: Colorspace,
    lightness: f64,
    radii: Vec<f64>,
}

impl GamutTable {
    /// Solves the boundary at [`HUE_SAMPLES`] evenly spaced hues.
    pub fn build(colorspace: Colorspace, lightness: f64) -> Self {
        let conv = Converter::new(colorspace);
        let radii = (0..HUE_SAMPLES)
            .map(|i| solve_radius(&conv, lightness, Self::sample_hue(i)))
            .collect();
        Self {
            colorspace,
            lightness,
            radii,
        }
    }

    /// Hue in radians of table entry `i`.
    #[inline]
    pub fn sample_hue(i: usize) -> f64 {
        i as f64 * TAU / HUE_SAMPLES as f64
    }

    /// Colorspace the table was solved in.
    pub fn colorspace(&self) -> Colorspace {
        self.colorspace
    }

    /// Native lightness the table was solved at.
    pub fn lightness(&self) -> f64 {
        self.lightness
    }

    /// Stored radii, entry `i` at [`sample_hue(i)`](Self::sample_hue).
    pub fn radii(&self) -> &[f64] {
        &self.radii
    }

    /// Boundary radius at an arbitrary hue in radians.
    #[inline]
    pub fn lookup(&self, hue: f64, interp: HueInterpolation) -> f64 {
        let n = self.radii.len();
        let (i, t) = hue_position(hue, n);
        let j = (i + 1) % n;
        match interp {
            HueInterpolation::Nearest => {
                if t < 0.5 {
                    self.radii[i]
                } else {
                    self.radii[j]
                }
            }
            HueInterpolation::Linear => lerp(self.radii[i], self.radii[j], t),
        }
    }

    /// Smallest boundary radius over all hues.
    pub fn min_radius(&self) -> f64 {
        self.radii.iter().copied().fold(f64::INFINITY, f64::min)
    }

    /// Largest boundary radius over all hues.
    pub fn max_radius(&self) -> f64 {
        self.radii.iter().copied().fold(0.0, f64::max)
    }
}
