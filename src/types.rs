//! Core data types for the solar approximation.

use crate::Result;
use crate::error::{check_declination, check_right_ascension};
use crate::math::{PI, radians_to_degrees};

/// Floating-point precision class used to evaluate the approximation.
///
/// `Double` is the natural choice in Rust. `Single` stores every intermediate
/// angle as `f32`, which reproduces the output of the widely circulated
/// single-precision rendition of the formula to the last bit.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub enum Precision {
    /// 32-bit storage of all intermediate angles
    Single,
    /// 64-bit evaluation throughout
    #[default]
    Double,
}

/// Apparent geocentric equatorial coordinates of the Sun.
///
/// Both angles are stored in radians:
/// - Right ascension: (-π, π], measured eastward from the vernal equinox
/// - Declination: [-π/2, π/2], positive north of the celestial equator
///
/// # Example
/// ```
/// # use sun_approx::CelestialCoords;
/// let coords = CelestialCoords::new(0.5, -0.25).unwrap();
/// assert_eq!(coords.right_ascension(), 0.5);
/// assert_eq!(coords.declination(), -0.25);
/// assert!(CelestialCoords::new(0.0, 2.0).is_err());
/// ```
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CelestialCoords {
    /// Right ascension in radians
    right_ascension: f64,
    /// Declination in radians
    declination: f64,
}

impl CelestialCoords {
    /// Creates coordinates from right ascension and declination in radians.
    ///
    /// A right ascension of exactly -π is stored as π.
    ///
    /// # Errors
    /// Returns `InvalidRightAscension` or `InvalidDeclination` for non-finite or out-of-range angles.
    pub fn new(right_ascension: f64, declination: f64) -> Result<Self> {
        Ok(Self {
            right_ascension: check_right_ascension(right_ascension)?,
            declination: check_declination(declination)?,
        })
    }

    /// Builds coordinates from `atan2`/`asin` output, folding the single-precision
    /// overshoot of ±π back onto π.
    pub(crate) fn from_formula(right_ascension: f64, declination: f64) -> Self {
        let right_ascension = if right_ascension > PI || right_ascension <= -PI {
            log::debug!("folding right ascension {right_ascension} rad onto π");
            PI
        } else {
            right_ascension
        };
        Self {
            right_ascension,
            declination,
        }
    }

    /// Gets the right ascension in radians, within (-π, π].
    #[must_use]
    pub const fn right_ascension(&self) -> f64 {
        self.right_ascension
    }

    /// Gets the declination in radians, within [-π/2, π/2].
    #[must_use]
    pub const fn declination(&self) -> f64 {
        self.declination
    }

    /// Gets the right ascension in degrees, within (-180°, 180°].
    #[must_use]
    pub const fn right_ascension_degrees(&self) -> f64 {
        radians_to_degrees(self.right_ascension)
    }

    /// Gets the declination in degrees, within [-90°, 90°].
    #[must_use]
    pub const fn declination_degrees(&self) -> f64 {
        radians_to_degrees(self.declination)
    }

    /// Gets the right ascension in hours, within (-12 h, 12 h].
    #[must_use]
    pub const fn right_ascension_hours(&self) -> f64 {
        self.right_ascension_degrees() / 15.0
    }
}
