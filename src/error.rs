//! Error types for the solar approximation library.

use crate::math::PI;
use core::fmt;

/// Result type alias for operations in this crate.
pub type Result<T> = core::result::Result<T, Error>;

/// Errors that can occur while building inputs or outputs of the approximation.
///
/// The formula itself is total; only constructors that accept caller-provided
/// values can fail.
#[derive(Debug, Clone, PartialEq)]
pub enum Error {
    /// A Julian date or day offset that is NaN or infinite.
    NonFiniteInput {
        /// The rejected value.
        value: f64,
    },
    /// Invalid calendar date/time components.
    InvalidDateTime {
        /// Description of the date/time constraint violation.
        message: &'static str,
    },
    /// Right ascension outside (-π, π] radians.
    InvalidRightAscension {
        /// The invalid right ascension in radians.
        value: f64,
    },
    /// Declination outside [-π/2, π/2] radians.
    InvalidDeclination {
        /// The invalid declination in radians.
        value: f64,
    },
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::NonFiniteInput { value } => {
                write!(f, "non-finite time input {value}")
            }
            Self::InvalidDateTime { message } => {
                write!(f, "invalid date/time: {message}")
            }
            Self::InvalidRightAscension { value } => {
                write!(
                    f,
                    "invalid right ascension {value} rad (must be within (-π, π])"
                )
            }
            Self::InvalidDeclination { value } => {
                write!(
                    f,
                    "invalid declination {value} rad (must be within [-π/2, π/2])"
                )
            }
        }
    }
}

#[cfg(feature = "std")]
impl std::error::Error for Error {}

impl Error {
    /// Creates a non-finite input error.
    #[must_use]
    pub const fn non_finite_input(value: f64) -> Self {
        Self::NonFiniteInput { value }
    }

    /// Creates an invalid date/time error.
    #[must_use]
    pub const fn invalid_datetime(message: &'static str) -> Self {
        Self::InvalidDateTime { message }
    }

    /// Creates an invalid right ascension error.
    #[must_use]
    pub const fn invalid_right_ascension(value: f64) -> Self {
        Self::InvalidRightAscension { value }
    }

    /// Creates an invalid declination error.
    #[must_use]
    pub const fn invalid_declination(value: f64) -> Self {
        Self::InvalidDeclination { value }
    }
}

/// Validates that a time value is finite.
///
/// # Errors
/// Returns `NonFiniteInput` for NaN or infinite values.
pub fn check_finite(value: f64) -> Result<f64> {
    if !value.is_finite() {
        return Err(Error::non_finite_input(value));
    }
    Ok(value)
}

/// Validates a right ascension in radians, mapping -π onto π.
///
/// # Errors
/// Returns `InvalidRightAscension` if the value is not finite or lies outside [-π, π].
pub fn check_right_ascension(right_ascension: f64) -> Result<f64> {
    if !(-PI..=PI).contains(&right_ascension) {
        return Err(Error::invalid_right_ascension(right_ascension));
    }
    if right_ascension == -PI {
        return Ok(PI);
    }
    Ok(right_ascension)
}

/// Validates a declination in radians.
///
/// # Errors
/// Returns `InvalidDeclination` if the value is not finite or lies outside [-π/2, π/2].
pub fn check_declination(declination: f64) -> Result<f64> {
    if !(-PI / 2.0..=PI / 2.0).contains(&declination) {
        return Err(Error::invalid_declination(declination));
    }
    Ok(declination)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_check_finite() {
        assert_eq!(check_finite(8978.0), Ok(8978.0));
        assert_eq!(check_finite(-1.5), Ok(-1.5));

        assert!(check_finite(f64::NAN).is_err());
        assert!(check_finite(f64::INFINITY).is_err());
        assert!(check_finite(f64::NEG_INFINITY).is_err());
    }

    #[test]
    fn test_right_ascension_validation() {
        assert!(check_right_ascension(0.0).is_ok());
        assert!(check_right_ascension(PI).is_ok());
        assert!(check_right_ascension(-3.0).is_ok());

        assert_eq!(check_right_ascension(-PI).unwrap(), PI);

        assert!(check_right_ascension(3.2).is_err());
        assert!(check_right_ascension(-3.2).is_err());
        assert!(check_right_ascension(f64::NAN).is_err());
        assert!(check_right_ascension(f64::INFINITY).is_err());
    }

    #[test]
    fn test_declination_validation() {
        assert!(check_declination(0.0).is_ok());
        assert!(check_declination(PI / 2.0).is_ok());
        assert!(check_declination(-PI / 2.0).is_ok());

        assert!(check_declination(1.6).is_err());
        assert!(check_declination(-1.6).is_err());
        assert!(check_declination(f64::NAN).is_err());
    }

    #[test]
    #[cfg(feature = "std")]
    fn test_error_display() {
        let err = Error::invalid_datetime("month must be between 1 and 12");
        assert_eq!(
            err.to_string(),
            "invalid date/time: month must be between 1 and 12"
        );

        let err = Error::non_finite_input(f64::INFINITY);
        assert_eq!(err.to_string(), "non-finite time input inf");

        let err = Error::invalid_declination(2.0);
        assert_eq!(
            err.to_string(),
            "invalid declination 2 rad (must be within [-π/2, π/2])"
        );
    }
}
