//! Magnitude transfer functions.
//!
//! A transfer function compresses a magnitude in `[0, inf]` into a contour
//! value in `[0, 1]`, which the mapper turns into lightness. The modes are
//! selected by the `abs_scaling` string:
//!
//! | String | Mode | Contour |
//! |--------|------|---------|
//! | `standard` | smooth | `m / (m + 1)` |
//! | `h-<N>` | base-2 bands | `q / (q + 1)`, `q = 2^(floor(N log2 m) / N)` |
//! | `m-<N>` | base-10 bands | `q / (q + 1)`, `q = 10^(floor(N log10 m) / N)` |
//! | `0` | disabled | `0.5` |
//!
//! `m = 0` gives 0, `m = inf` gives 1 and NaN gives 0.5 in every mode except
//! `0`, which is constant. `N` must lie in `(0, MAX_BANDS]`.
//!
//! ```rust
//! use domcol_map::AbsScaling;
//!
//! let s: AbsScaling = "h-1".parse().unwrap();
//! assert_eq!(s.contour(3.0), s.contour(2.0)); // same octave
//! assert!(s.contour(4.0) > s.contour(3.9));   // next band
//! ```

use std::fmt;
use std::str::FromStr;

use domcol_core::{Error, Result};
use serde::{Deserialize, Serialize};

/// Largest band count accepted by the `h-<N>`/`m-<N>` grammar.
pub const MAX_BANDS: f64 = 1e6;

/// Magnitude transfer function.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub enum AbsScaling {
    /// Smooth `m / (m + 1)`.
    #[default]
    Standard,
    /// `N` bands per factor of two (`h-<N>`).
    Binary(f64),
    /// `N` bands per factor of ten (`m-<N>`).
    Decimal(f64),
    /// Constant 0.5; phase-only coloring (`0`).
    Disabled,
}

impl AbsScaling {
    /// Contour value of one magnitude.
    #[inline]
    pub fn contour(&self, magnitude: f64) -> f64 {
        if let Self::Disabled = self {
            return 0.5;
        }
        if magnitude.is_nan() {
            return 0.5;
        }
        let m = match *self {
            Self::Binary(n) => quantize(magnitude, n, f64::log2, 2.0),
            Self::Decimal(n) => quantize(magnitude, n, f64::log10, 10.0),
            _ => magnitude,
        };
        saturating(m)
    }

    /// Contour values of a slice of magnitudes.
    pub fn contour_all(&self, magnitudes: &[f64]) -> Vec<f64> {
        magnitudes.iter().map(|&m| self.contour(m)).collect()
    }

    /// Whether contour values depend on the magnitude at all.
    pub fn is_disabled(&self) -> bool {
        matches!(self, Self::Disabled)
    }
}

/// `m / (m + 1)` with the limits pinned.
#[inline]
fn saturating(m: f64) -> f64 {
    if m <= 0.0 {
        0.0
    } else if m.is_infinite() {
        1.0
    } else {
        m / (m + 1.0)
    }
}

/// Snaps a magnitude down to the nearest `base^(k / n)`.
#[inline]
fn quantize(m: f64, n: f64, log: fn(f64) -> f64, base: f64) -> f64 {
    if m <= 0.0 || m.is_infinite() {
        return m;
    }
    let steps = (n * log(m)).floor();
    // Past f64 range the bands are finer than the magnitude itself
    if !steps.is_finite() {
        return m;
    }
    base.powf(steps / n)
}

fn parse_bands(s: &str, count: &str) -> Result<f64> {
    match count.parse::<f64>() {
        Ok(n) if n > 0.0 && n <= MAX_BANDS => Ok(n),
        _ => Err(Error::InvalidScalingSpec(s.to_string())),
    }
}

impl fmt::Display for AbsScaling {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Standard => f.write_str("standard"),
            Self::Binary(n) => write!(f, "h-{n}"),
            Self::Decimal(n) => write!(f, "m-{n}"),
            Self::Disabled => f.write_str("0"),
        }
    }
}

impl FromStr for AbsScaling {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        let spec = s.trim();
        if spec == "standard" {
            Ok(Self::Standard)
        } else if spec == "0" {
            Ok(Self::Disabled)
        } else if let Some(count) = spec.strip_prefix("h-") {
            parse_bands(s, count).map(Self::Binary)
        } else if let Some(count) = spec.strip_prefix("m-") {
            parse_bands(s, count).map(Self::Decimal)
        } else {
            Err(Error::InvalidScalingSpec(s.to_string()))
        }
    }
}

impl TryFrom<String> for AbsScaling {
    type Error = Error;

    fn try_from(s: String) -> Result<Self> {
        s.parse()
    }
}

impl From<AbsScaling> for String {
    fn from(s: AbsScaling) -> Self {
        s.to_string()
    }
}

/// Contour values for magnitudes under a scaling string.
///
/// # Errors
///
/// [`Error::InvalidScalingSpec`] if `scaling` does not parse.
pub fn contour(magnitudes: &[f64], scaling: &str) -> Result<Vec<f64>> {
    Ok(scaling.parse::<AbsScaling>()?.contour_all(magnitudes))
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn test_standard() {
        let s = AbsScaling::Standard;
        assert_eq!(s.contour(0.0), 0.0);
        assert_eq!(s.contour(1.0), 0.5);
        assert_relative_eq!(s.contour(3.0), 0.75);
        assert_eq!(s.contour(f64::INFINITY), 1.0);
        assert_eq!(s.contour(f64::NAN), 0.5);
        assert!(s.contour(1e300) <= 1.0);
    }

    #[test]
    fn test_binary_bands() {
        let s = AbsScaling::Binary(1.0);
        assert_eq!(s.contour(1.0), 0.5);
        assert_eq!(s.contour(1.999), 0.5);
        assert_relative_eq!(s.contour(2.0), 2.0 / 3.0);
        assert_relative_eq!(s.contour(0.75), 1.0 / 3.0);
        assert_eq!(s.contour(0.0), 0.0);
        assert_eq!(s.contour(f64::INFINITY), 1.0);

        // two bands per octave
        let s = AbsScaling::Binary(2.0);
        assert_relative_eq!(s.contour(1.5), saturating(2f64.sqrt()), epsilon = 1e-12);
    }

    #[test]
    fn test_decimal_bands() {
        let s = AbsScaling::Decimal(1.0);
        assert_eq!(s.contour(1.0), s.contour(9.0));
        assert_relative_eq!(s.contour(10.0), 10.0 / 11.0, epsilon = 1e-12);
        assert_relative_eq!(s.contour(0.5), 0.1 / 1.1, epsilon = 1e-12);
    }

    #[test]
    fn test_huge_band_count_stays_finite() {
        // n * log(m) overflows here; the contour must not jump to a limit
        assert_relative_eq!(AbsScaling::Binary(1e308).contour(10.0), 10.0 / 11.0, epsilon = 1e-9);
        assert_relative_eq!(AbsScaling::Decimal(1e308).contour(0.01), 0.01 / 1.01, epsilon = 1e-9);

        let fine = AbsScaling::Binary(MAX_BANDS);
        assert_relative_eq!(fine.contour(1e300), 1.0, epsilon = 1e-9);
        assert_relative_eq!(fine.contour(3.0), 0.75, epsilon = 1e-5);
    }

    #[test]
    fn test_disabled() {
        let s = AbsScaling::Disabled;
        for m in [0.0, 1.0, 1e9, f64::INFINITY, f64::NAN] {
            assert_eq!(s.contour(m), 0.5);
        }
    }

    #[test]
    fn test_parse() {
        assert_eq!("standard".parse::<AbsScaling>().unwrap(), AbsScaling::Standard);
        assert_eq!("h-3".parse::<AbsScaling>().unwrap(), AbsScaling::Binary(3.0));
        assert_eq!("m-0.5".parse::<AbsScaling>().unwrap(), AbsScaling::Decimal(0.5));
        assert_eq!("0".parse::<AbsScaling>().unwrap(), AbsScaling::Disabled);

        assert_eq!("h-1000000".parse::<AbsScaling>().unwrap(), AbsScaling::Binary(MAX_BANDS));

        for bad in [
            "", "h-", "h-0", "h--1", "m-inf", "m-nan", "x-2", "Standard", "h-two", "h-1e300",
            "m-1000001",
        ] {
            assert_eq!(
                bad.parse::<AbsScaling>().unwrap_err(),
                Error::InvalidScalingSpec(bad.to_string()),
                "{bad}"
            );
        }
    }

    #[test]
    fn test_display_roundtrip() {
        for s in ["standard", "h-1", "m-2.5", "0"] {
            assert_eq!(s.parse::<AbsScaling>().unwrap().to_string(), s);
        }
    }
}
