//! Colorspace identifiers.
//!
//! [`Colorspace`] is the closed set of perceptual spaces a complex value can
//! be encoded into. It only carries metadata (names, coordinate ranges);
//! the conversion routines live in `domcol-color`, which dispatches on this
//! enum.
//!
//! # Supported Colorspaces
//!
//! | Id | Kind | Lightness range | Point layout |
//! |----|------|-----------------|--------------|
//! | [`Cam16Ucs`](Colorspace::Cam16Ucs) | appearance model (uniform) | 0..100 | `[J', a', b']` |
//! | [`Cielab`](Colorspace::Cielab) | CIE-derived, perceptually uniform | 0..100 | `[L*, a*, b*]` |
//! | [`Oklab`](Colorspace::Oklab) | perceptually uniform | 0..1 | `[L, a, b]` |
//! | [`Hsl`](Colorspace::Hsl) | cylindrical sRGB model | 0..1 | `[H (deg), S, L]` |
//!
//! # Usage
//!
//! ```
//! use domcol_core::Colorspace;
//!
//! let cs: Colorspace = "CAM16".parse().unwrap();
//! assert_eq!(cs, Colorspace::Cam16Ucs);
//! assert_eq!(cs.lightness_range(), 100.0);
//! ```

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::Error;

/// Perceptual colorspace selector.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Default, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub enum Colorspace {
    /// CAM16-UCS (Li et al. 2017), average surround, D65.
    #[default]
    Cam16Ucs,
    /// CIE 1976 L*a*b*, D65 reference white.
    Cielab,
    /// Oklab (Ottosson 2020).
    Oklab,
    /// HSL over gamma-encoded sRGB.
    Hsl,
}

impl Colorspace {
    /// All supported colorspaces.
    pub const ALL: [Colorspace; 4] = [
        Colorspace::Cam16Ucs,
        Colorspace::Cielab,
        Colorspace::Oklab,
        Colorspace::Hsl,
    ];

    /// Canonical lowercase name, as accepted by [`FromStr`].
    pub const fn name(self) -> &'static str {
        match self {
            Colorspace::Cam16Ucs => "cam16",
            Colorspace::Cielab => "cielab",
            Colorspace::Oklab => "oklab",
            Colorspace::Hsl => "hsl",
        }
    }

    /// Upper end of the lightness coordinate (black is always 0).
    pub const fn lightness_range(self) -> f64 {
        match self {
            Colorspace::Cam16Ucs | Colorspace::Cielab => 100.0,
            Colorspace::Oklab | Colorspace::Hsl => 1.0,
        }
    }

    /// Radius bound for the gamut search.
    ///
    /// Every in-gamut sRGB color lies strictly inside this radius around the
    /// neutral axis. For HSL the radius is the saturation, which is defined
    /// on `[0, 1]` only.
    pub const fn search_radius(self) -> f64 {
        match self {
            Colorspace::Cam16Ucs => 100.0,
            Colorspace::Cielab => 200.0,
            Colorspace::Oklab => 1.0,
            Colorspace::Hsl => 1.0,
        }
    }

    /// Whether points are stored as `[hue, radius, lightness]` instead of
    /// `[lightness, a, b]`.
    pub const fn is_cylindrical(self) -> bool {
        matches!(self, Colorspace::Hsl)
    }
}

impl fmt::Display for Colorspace {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for Colorspace {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "cam16" | "cam16ucs" | "cam16-ucs" => Ok(Colorspace::Cam16Ucs),
            "cielab" | "lab" => Ok(Colorspace::Cielab),
            "oklab" => Ok(Colorspace::Oklab),
            "hsl" => Ok(Colorspace::Hsl),
            _ => Err(Error::UnknownColorspace(s.to_string())),
        }
    }
}

impl TryFrom<String> for Colorspace {
    type Error = Error;

    fn try_from(s: String) -> Result<Self, Self::Error> {
        s.parse()
    }
}

impl From<Colorspace> for String {
    fn from(cs: Colorspace) -> Self {
        cs.name().to_string()
    }
}
