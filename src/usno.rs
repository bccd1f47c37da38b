//! Low-precision solar coordinates after the U.S. Naval Observatory approximation.
//!
//! This follows the "Approximate Solar Coordinates" formula published by the USNO
//! Astronomical Applications Department. Given the number of days `t` since J2000.0,
//! the mean anomaly and mean longitude of the Sun are reduced modulo 360°, a two-term
//! equation of centre yields the ecliptic longitude, and the obliquity of the ecliptic
//! rotates that longitude into right ascension and declination.
//!
//! The USNO quotes an accuracy of about 1 arcminute within two centuries of 2000.
//! Further out the result stays well defined and within range, only less accurate.

#![allow(clippy::unreadable_literal)]
#![allow(clippy::many_single_char_names)]
#![allow(clippy::suboptimal_flops)]

use crate::math::{
    D2R, asin, atan2, cos, degrees_to_radians, normalize_degrees_pm180, radians_to_degrees,
    reduce_degrees, sin,
};
use crate::time::JulianDate;
use crate::types::{CelestialCoords, Precision};

/// Mean anomaly at J2000.0 (degrees)
const MEAN_ANOMALY_EPOCH: f64 = 357.529;
/// Daily motion of the mean anomaly (degrees/day)
const MEAN_ANOMALY_RATE: f64 = 0.98560028;
/// Mean longitude at J2000.0 (degrees)
const MEAN_LONGITUDE_EPOCH: f64 = 280.459;
/// Daily motion of the mean longitude (degrees/day)
const MEAN_LONGITUDE_RATE: f64 = 0.98564736;
/// Obliquity of the ecliptic at J2000.0 (degrees)
const OBLIQUITY_EPOCH: f64 = 23.439;
/// Daily change of the obliquity (degrees/day)
const OBLIQUITY_RATE: f64 = 0.00000036;

/// Intermediate quantities of one evaluation of the approximation.
///
/// All angles are in radians. The split mirrors the formula: the parts depend on
/// time only, and [`SunApproxParts::coords`] finishes the equatorial conversion.
///
/// # Example
/// ```
/// use sun_approx::usno;
///
/// let parts = usno::sun_position_parts(8978.0);
/// let coords = parts.coords();
/// assert!((coords.declination_degrees() - 18.0646).abs() < 1e-3);
/// assert!(parts.distance_au() > 1.01);
/// ```
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SunApproxParts {
    /// Mean anomaly g (radians, sign follows `t`)
    mean_anomaly: f64,
    /// Mean longitude q (radians, sign follows `t`)
    mean_longitude: f64,
    /// Ecliptic longitude l (radians)
    ecliptic_longitude: f64,
    /// Obliquity of the ecliptic e (radians)
    obliquity: f64,
}

impl SunApproxParts {
    /// Mean anomaly g in radians, reduced with `fmod` so it lies in (-2π, 2π).
    #[must_use]
    pub const fn mean_anomaly(&self) -> f64 {
        self.mean_anomaly
    }

    /// Mean longitude q in radians, reduced with `fmod` so it lies in (-2π, 2π).
    #[must_use]
    pub const fn mean_longitude(&self) -> f64 {
        self.mean_longitude
    }

    /// Apparent ecliptic longitude l in radians.
    #[must_use]
    pub const fn ecliptic_longitude(&self) -> f64 {
        self.ecliptic_longitude
    }

    /// Obliquity of the ecliptic e in radians.
    #[must_use]
    pub const fn obliquity(&self) -> f64 {
        self.obliquity
    }

    /// Right ascension and declination for these parts.
    #[must_use]
    pub fn coords(&self) -> CelestialCoords {
        let (s_l, c_l) = (sin(self.ecliptic_longitude), cos(self.ecliptic_longitude));
        let ra = atan2(cos(self.obliquity) * s_l, c_l);
        let d = asin(sin(self.obliquity) * s_l);
        CelestialCoords::from_formula(ra, d)
    }

    /// Sun-Earth distance in astronomical units.
    #[must_use]
    pub fn distance_au(&self) -> f64 {
        let g = self.mean_anomaly;
        1.00014 - 0.01671 * cos(g) - 0.00014 * cos(2.0 * g)
    }

    /// Apparent angular semidiameter of the Sun in degrees.
    #[must_use]
    pub fn semidiameter_degrees(&self) -> f64 {
        0.2666 / self.distance_au()
    }

    /// Equation of time (apparent minus mean solar time) in minutes.
    ///
    /// Positive when the sundial runs ahead of the clock.
    #[must_use]
    pub fn equation_of_time_minutes(&self) -> f64 {
        let ra_degrees = self.coords().right_ascension_degrees();
        let q_degrees = radians_to_degrees(self.mean_longitude);
        // 4 minutes of time per degree of hour angle
        normalize_degrees_pm180(q_degrees - ra_degrees) * 4.0
    }
}

/// Calculates the intermediate quantities of the approximation in double precision.
///
/// # Arguments
/// * `days_since_j2000` - Days (with fraction) since 2000-01-01 12:00 UTC
#[must_use]
pub fn sun_position_parts(days_since_j2000: f64) -> SunApproxParts {
    let t = days_since_j2000;

    let g = degrees_to_radians(reduce_degrees(MEAN_ANOMALY_EPOCH + MEAN_ANOMALY_RATE * t));
    let q = degrees_to_radians(reduce_degrees(MEAN_LONGITUDE_EPOCH + MEAN_LONGITUDE_RATE * t));

    // Equation of centre, evaluated in degrees, added to the radian mean longitude
    let l = q + degrees_to_radians(1.915 * sin(g) + 0.020 * sin(2.0 * g));

    let e = degrees_to_radians(OBLIQUITY_EPOCH - OBLIQUITY_RATE * t);

    log::trace!("t={t} g={g} q={q} l={l} e={e}");

    SunApproxParts {
        mean_anomaly: g,
        mean_longitude: q,
        ecliptic_longitude: l,
        obliquity: e,
    }
}

/// Calculates the apparent right ascension and declination of the Sun.
///
/// Pure and total: every finite or infinite input yields a value, and finite inputs
/// yield angles within range.
///
/// # Arguments
/// * `days_since_j2000` - Days (with fraction) since 2000-01-01 12:00 UTC
///
/// # Example
/// ```
/// use sun_approx::usno;
///
/// // 2024-07-31 12:00 UTC
/// let coords = usno::sun_position(2_460_523.0 - 2_451_545.0);
/// assert!((coords.right_ascension_degrees() - 131.198).abs() < 1e-3);
/// assert!((coords.declination_degrees() - 18.0646).abs() < 1e-3);
/// ```
#[must_use]
pub fn sun_position(days_since_j2000: f64) -> CelestialCoords {
    sun_position_parts(days_since_j2000).coords()
}

/// Calculates the apparent right ascension and declination with single-precision storage.
///
/// Each named intermediate (g, q, l, e, and the two results) is evaluated in `f64`
/// and rounded to `f32`, which matches the single-precision form of the formula
/// bit for bit. The results differ from [`sun_position`] by roughly 1e-6 relative.
///
/// # Example
/// ```
/// use sun_approx::usno;
///
/// let single = usno::sun_position_single(8978.0);
/// let double = usno::sun_position(8978.0);
/// assert!((single.right_ascension_degrees() - double.right_ascension_degrees()).abs() < 1e-3);
/// ```
#[must_use]
pub fn sun_position_single(days_since_j2000: f32) -> CelestialCoords {
    let t = f64::from(days_since_j2000);

    let g = (reduce_degrees(MEAN_ANOMALY_EPOCH + MEAN_ANOMALY_RATE * t) * D2R) as f32;
    let q = (reduce_degrees(MEAN_LONGITUDE_EPOCH + MEAN_LONGITUDE_RATE * t) * D2R) as f32;

    // 2g is doubled in f32 before widening
    let correction = 1.915 * sin(f64::from(g)) + 0.020 * sin(f64::from(2.0 * g));
    let l = f64::from((f64::from(q) + correction * D2R) as f32);
    let e = f64::from(((OBLIQUITY_EPOCH - OBLIQUITY_RATE * t) * D2R) as f32);

    let ra = atan2(cos(e) * sin(l), cos(l)) as f32;
    let d = asin(sin(e) * sin(l)) as f32;

    CelestialCoords::from_formula(f64::from(ra), f64::from(d))
}

/// Calculates the apparent right ascension and declination at the requested precision.
///
/// For [`Precision::Single`] the time argument is first rounded to `f32`.
#[must_use]
pub fn sun_position_with_precision(days_since_j2000: f64, precision: Precision) -> CelestialCoords {
    match precision {
        Precision::Single => sun_position_single(days_since_j2000 as f32),
        Precision::Double => sun_position(days_since_j2000),
    }
}

/// Calculates the apparent right ascension and declination for a Julian date.
#[must_use]
pub fn sun_position_from_julian(jd: JulianDate) -> CelestialCoords {
    sun_position(jd.days_since_j2000())
}

/// Calculates the apparent right ascension and declination for a UTC instant.
///
/// # Errors
/// Returns error if the date lies outside the supported calendar range.
///
/// # Example
/// ```rust
/// # #[cfg(feature = "chrono")] {
/// use chrono::{TimeZone, Utc};
/// use sun_approx::usno;
///
/// let datetime = Utc.with_ymd_and_hms(2024, 7, 31, 12, 0, 0).unwrap();
/// let coords = usno::sun_position_at(&datetime).unwrap();
/// assert!((coords.declination_degrees() - 18.0646).abs() < 1e-3);
/// # }
/// ```
#[cfg(feature = "chrono")]
pub fn sun_position_at(datetime: &chrono::DateTime<chrono::Utc>) -> crate::Result<CelestialCoords> {
    let jd = JulianDate::from_datetime(datetime)?;
    Ok(sun_position_from_julian(jd))
}
