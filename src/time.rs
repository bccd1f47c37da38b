//! Time arguments for the solar approximation.
//!
//! The approximation is driven by the number of days elapsed since the J2000.0
//! epoch (2000-01-01 12:00 UTC). [`JulianDate`] produces that offset from a
//! Julian date or from UTC calendar components.

#![allow(clippy::unreadable_literal)]
#![allow(clippy::many_single_char_names)]

use crate::error::check_finite;
use crate::math::floor;
use crate::{Error, Result};
#[cfg(feature = "chrono")]
use chrono::{Datelike, Timelike};

/// Julian Date of the J2000.0 epoch (2000-01-01 12:00:00 UTC)
pub const J2000_JD: f64 = 2_451_545.0;

/// Days per Julian century
const DAYS_PER_CENTURY: f64 = 36_525.0;

/// Julian date of an instant, as consumed by the approximation.
///
/// The approximation makes no distinction between UT and TT, so no ΔT is carried.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct JulianDate {
    /// Julian Date (JD)
    jd: f64,
}

impl JulianDate {
    /// Creates a Julian date from its numeric value.
    ///
    /// # Errors
    /// Returns `NonFiniteInput` for NaN or infinite values.
    ///
    /// # Example
    /// ```
    /// # use sun_approx::time::JulianDate;
    /// let jd = JulianDate::new(2_460_523.0).unwrap();
    /// assert_eq!(jd.days_since_j2000(), 8978.0);
    /// ```
    pub fn new(jd: f64) -> Result<Self> {
        Ok(Self {
            jd: check_finite(jd)?,
        })
    }

    /// Creates a Julian date from days elapsed since J2000.0.
    ///
    /// # Errors
    /// Returns `NonFiniteInput` for NaN or infinite values.
    pub fn from_days_since_j2000(days: f64) -> Result<Self> {
        Ok(Self {
            jd: check_finite(days)? + J2000_JD,
        })
    }

    /// Creates a Julian date from a chrono UTC `DateTime`.
    ///
    /// Only UTC instants are accepted; converting civil time zones is left to the caller.
    ///
    /// # Errors
    /// Returns error if the date/time components are outside the supported calendar range.
    #[cfg(feature = "chrono")]
    pub fn from_datetime(datetime: &chrono::DateTime<chrono::Utc>) -> Result<Self> {
        Self::from_utc(
            datetime.year(),
            datetime.month(),
            datetime.day(),
            datetime.hour(),
            datetime.minute(),
            f64::from(datetime.second()) + f64::from(datetime.nanosecond()) / 1e9,
        )
    }

    /// Creates a Julian date from year, month, day, hour, minute, and second in UTC.
    ///
    /// # Arguments
    /// * `year` - Year (can be negative for BCE years)
    /// * `month` - Month (1-12)
    /// * `day` - Day of month (1-31)
    /// * `hour` - Hour (0-23)
    /// * `minute` - Minute (0-59)
    /// * `second` - Second (0-59, can include fractional seconds)
    ///
    /// # Errors
    /// Returns error if any date/time component is outside valid ranges, the day does not
    /// exist in the month, or the date falls in the 1582 Gregorian reform gap.
    ///
    /// # Example
    /// ```
    /// # use sun_approx::time::JulianDate;
    /// let jd = JulianDate::from_utc(2024, 7, 31, 12, 0, 0.0).unwrap();
    /// assert_eq!(jd.julian_date(), 2_460_523.0);
    /// ```
    pub fn from_utc(
        year: i32,
        month: u32,
        day: u32,
        hour: u32,
        minute: u32,
        second: f64,
    ) -> Result<Self> {
        if !(1..=12).contains(&month) {
            return Err(Error::invalid_datetime("month must be between 1 and 12"));
        }
        if !(1..=31).contains(&day) {
            return Err(Error::invalid_datetime("day must be between 1 and 31"));
        }
        if hour > 23 {
            return Err(Error::invalid_datetime("hour must be between 0 and 23"));
        }
        if minute > 59 {
            return Err(Error::invalid_datetime("minute must be between 0 and 59"));
        }
        if !(0.0..60.0).contains(&second) {
            return Err(Error::invalid_datetime(
                "second must be between 0 and 59.999...",
            ));
        }

        if day > days_in_month(year, month, day)? {
            return Err(Error::invalid_datetime("day is out of range for month"));
        }

        let jd = calculate_julian_date(year, month, day, hour, minute, second);
        log::trace!("{year:04}-{month:02}-{day:02}T{hour:02}:{minute:02}:{second} UTC -> JD {jd}");
        Ok(Self { jd })
    }

    /// Gets the Julian Date value.
    #[must_use]
    pub const fn julian_date(&self) -> f64 {
        self.jd
    }

    /// Days elapsed since J2000.0, the time argument of the approximation.
    #[must_use]
    pub fn days_since_j2000(&self) -> f64 {
        self.jd - J2000_JD
    }

    /// Julian centuries elapsed since J2000.0.
    #[must_use]
    pub fn julian_century(&self) -> f64 {
        self.days_since_j2000() / DAYS_PER_CENTURY
    }
}

/// Calculates Julian Date from UTC date/time components.
///
/// Meeus, "Astronomical Algorithms", 2nd edition, chapter 7.
fn calculate_julian_date(
    year: i32,
    month: u32,
    day: u32,
    hour: u32,
    minute: u32,
    second: f64,
) -> f64 {
    let mut y = f64::from(year);
    let mut m = f64::from(month);

    // January and February count as months 13 and 14 of the previous year
    if month < 3 {
        y -= 1.0;
        m += 12.0;
    }

    let d = f64::from(day) + (f64::from(hour) + (f64::from(minute) + second / 60.0) / 60.0) / 24.0;

    let mut jd = floor(365.25 * (y + 4716.0)) + floor(30.6001 * (m + 1.0)) + d - 1524.5;

    // Gregorian correction from JDN 2299161 (1582-10-15) onwards
    if jd >= 2_299_161.0 {
        let a = floor(y / 100.0);
        jd += 2.0 - a + floor(a / 4.0);
    }

    jd
}

const fn is_gregorian_date(year: i32, month: u32, day: u32) -> bool {
    year > 1582 || (year == 1582 && (month > 10 || (month == 10 && day >= 15)))
}

const fn is_leap_year(year: i32, is_gregorian: bool) -> bool {
    if is_gregorian {
        (year % 4 == 0 && year % 100 != 0) || year % 400 == 0
    } else {
        year % 4 == 0
    }
}

fn days_in_month(year: i32, month: u32, day: u32) -> Result<u32> {
    if year == 1582 && month == 10 && (5..=14).contains(&day) {
        return Err(Error::invalid_datetime(
            "dates 1582-10-05 through 1582-10-14 do not exist in Gregorian calendar",
        ));
    }

    let days = match month {
        4 | 6 | 9 | 11 => 30,
        2 if is_leap_year(year, is_gregorian_date(year, month, day)) => 29,
        2 => 28,
        _ => 31,
    };
    Ok(days)
}
