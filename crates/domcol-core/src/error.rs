//! Error types for domcol operations.
//!
//! Every fallible entry point in the workspace returns [`Result`]. Numeric
//! edge cases (zero, infinite or NaN samples, slight gamut overshoot) are
//! never errors; they are clamped where they occur. Only malformed
//! configuration fails, and it fails at call time.
//!
//! # Usage
//!
//! ```rust
//! use domcol_core::{Colorspace, Error};
//!
//! let err = "cmyk".parse::<Colorspace>().unwrap_err();
//! assert!(matches!(err, Error::UnknownColorspace(_)));
//! ```

use thiserror::Error;

/// Result type alias using [`Error`] as the error type.
pub type Result<T> = std::result::Result<T, Error>;

/// Errors raised by the color-encoding engine.
#[derive(Debug, Error, Clone, PartialEq)]
pub enum Error {
    /// A colorspace name is not one of `cam16`, `cielab`, `oklab`, `hsl`.
    #[error("unknown colorspace '{0}' (expected one of: cam16, cielab, oklab, hsl)")]
    UnknownColorspace(String),

    /// An `abs_scaling` string does not match `standard`, `h-<N>`, `m-<N>` or `0`.
    #[error("invalid abs_scaling '{0}' (expected 'standard', 'h-<N>', 'm-<N>' or '0')")]
    InvalidScalingSpec(String),

    /// A numeric configuration parameter is out of its valid range.
    #[error("invalid parameter {name}: {reason}")]
    InvalidParameter {
        /// Parameter name
        name: &'static str,
        /// Why the value was rejected
        reason: String,
    },

    /// Data length does not match the product of the declared shape.
    #[error("shape mismatch: shape holds {expected} elements, got {actual}")]
    ShapeMismatch {
        /// Element count implied by the shape
        expected: usize,
        /// Actual buffer length
        actual: usize,
    },

    /// Configuration text could not be parsed.
    #[error("config error: {0}")]
    Config(String),
}

impl Error {
    /// Creates an [`Error::InvalidParameter`].
    pub fn invalid_parameter(name: &'static str, reason: impl Into<String>) -> Self {
        Self::InvalidParameter {
            name,
            reason: reason.into(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_messages_name_the_input() {
        let err = Error::UnknownColorspace("xyz".into());
        assert!(err.to_string().contains("'xyz'"));

        let err = Error::InvalidScalingSpec("h-".into());
        assert!(err.to_string().contains("'h-'"));

        let err = Error::invalid_parameter("saturation", "must be finite");
        assert_eq!(err.to_string(), "invalid parameter saturation: must be finite");
    }
}
