//! Mathematical utilities for the solar approximation.

#[cfg(not(feature = "std"))]
use libm;

/// Mathematical constants
pub const PI: f64 = core::f64::consts::PI;

/// Degrees-to-radians factor, written out to the precision the USNO formula is usually quoted with.
#[allow(clippy::excessive_precision)]
pub const D2R: f64 = 0.017453292519943295769236907684886;

/// Converts degrees to radians.
#[inline]
pub const fn degrees_to_radians(degrees: f64) -> f64 {
    degrees * D2R
}

/// Converts radians to degrees.
#[inline]
pub const fn radians_to_degrees(radians: f64) -> f64 {
    radians / D2R
}

/// Reduces an angle in degrees modulo 360 with `fmod` semantics.
///
/// The result carries the sign of the input, so `-30.0` stays `-30.0` and
/// `-390.0` becomes `-30.0`. This is not a floor-modulo into [0, 360).
#[inline]
pub fn reduce_degrees(degrees: f64) -> f64 {
    degrees % 360.0
}

/// Normalizes an angle in degrees to the range (-180, 180].
pub fn normalize_degrees_pm180(degrees: f64) -> f64 {
    let mut normalized = degrees % 360.0;
    if normalized <= -180.0 {
        normalized += 360.0;
    } else if normalized > 180.0 {
        normalized -= 360.0;
    }
    normalized
}

/// Computes sin(x) using the appropriate function for the compilation target.
#[inline]
pub fn sin(x: f64) -> f64 {
    #[cfg(feature = "std")]
    return x.sin();

    #[cfg(not(feature = "std"))]
    return libm::sin(x);
}

/// Computes cos(x) using the appropriate function for the compilation target.
#[inline]
pub fn cos(x: f64) -> f64 {
    #[cfg(feature = "std")]
    return x.cos();

    #[cfg(not(feature = "std"))]
    return libm::cos(x);
}

/// Computes asin(x) using the appropriate function for the compilation target.
#[inline]
pub fn asin(x: f64) -> f64 {
    #[cfg(feature = "std")]
    return x.asin();

    #[cfg(not(feature = "std"))]
    return libm::asin(x);
}

/// Computes atan2(y, x) using the appropriate function for the compilation target.
#[inline]
pub fn atan2(y: f64, x: f64) -> f64 {
    #[cfg(feature = "std")]
    return y.atan2(x);

    #[cfg(not(feature = "std"))]
    return libm::atan2(y, x);
}

/// Computes floor(x) using the appropriate function for the compilation target.
#[inline]
pub fn floor(x: f64) -> f64 {
    #[cfg(feature = "std")]
    return x.floor();

    #[cfg(not(feature = "std"))]
    return libm::floor(x);
}
