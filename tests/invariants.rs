//! Range, symmetry and long-term behaviour of the approximation.

use approx::assert_abs_diff_eq;
use proptest::prelude::*;
use sun_approx::{Precision, sun_position, sun_position_single, usno};

/// Mean longitude rate in degrees per day.
const MEAN_LONGITUDE_RATE: f64 = 0.98564736;

/// First `t` after `after` at which the mean longitude equals `target` degrees.
fn t_for_mean_longitude(target: f64, after: f64) -> f64 {
    let period = 360.0 / MEAN_LONGITUDE_RATE;
    let mut t = (target - 280.459) / MEAN_LONGITUDE_RATE;
    while t < after {
        t += period;
    }
    t
}

proptest! {
    #[test]
    fn prop_double_precision_ranges(t in -1e6..1e6f64) {
        let coords = sun_position(t);
        prop_assert!(coords.right_ascension_degrees() > -180.0);
        prop_assert!(coords.right_ascension_degrees() <= 180.0);
        prop_assert!(coords.declination_degrees() >= -90.0);
        prop_assert!(coords.declination_degrees() <= 90.0);
    }

    #[test]
    fn prop_single_precision_ranges(t in -1e6..1e6f32) {
        let coords = sun_position_single(t);
        prop_assert!(coords.right_ascension_degrees() > -180.0);
        prop_assert!(coords.right_ascension_degrees() <= 180.0);
        prop_assert!(coords.declination_degrees() >= -90.0);
        prop_assert!(coords.declination_degrees() <= 90.0);
    }

    #[test]
    fn prop_declination_bounded_by_obliquity(t in -73_050.0..73_050.0f64) {
        let parts = usno::sun_position_parts(t);
        let coords = parts.coords();
        prop_assert!(coords.declination().abs() <= parts.obliquity() + 1e-12);
    }

    #[test]
    fn prop_full_centuries_stay_finite(t in -10_000.0..10_000.0f64, k in -3i32..=3) {
        let shifted = t + 36_525.0 * f64::from(k);
        for precision in [Precision::Single, Precision::Double] {
            let coords = usno::sun_position_with_precision(shifted, precision);
            prop_assert!(coords.right_ascension().is_finite());
            prop_assert!(coords.declination().is_finite());
        }
    }

    #[test]
    fn prop_distance_within_orbit(t in -73_050.0..73_050.0f64) {
        let distance = usno::sun_position_parts(t).distance_au();
        prop_assert!((0.983..=1.017).contains(&distance));
    }
}

#[test]
fn declination_near_zero_at_zero_mean_longitude() {
    for after in [0.0, 8766.0, 18_000.0] {
        let coords = sun_position(t_for_mean_longitude(0.0, after));
        // the equation of centre shifts the true longitude by up to ~2°
        assert_abs_diff_eq!(coords.declination_degrees(), 0.0, epsilon = 1.0);
    }
}

#[test]
fn declination_near_obliquity_at_june_solstice() {
    let coords = sun_position(t_for_mean_longitude(90.0, 8766.0));
    assert_abs_diff_eq!(coords.declination_degrees(), 23.4, epsilon = 0.1);

    let coords = sun_position(t_for_mean_longitude(270.0, 8766.0));
    assert_abs_diff_eq!(coords.declination_degrees(), -23.4, epsilon = 0.1);
}

#[test]
fn declination_crosses_zero_at_september_equinox() {
    let coords = sun_position(t_for_mean_longitude(180.0, 8766.0));
    assert_abs_diff_eq!(coords.declination_degrees(), 0.0, epsilon = 1.0);
    assert!(coords.right_ascension_degrees().abs() > 170.0);
}

#[test]
fn reference_date_matches_single_precision_output() {
    let coords = sun_position_single(8978.0);
    assert_abs_diff_eq!(coords.right_ascension_degrees(), 131.198, epsilon = 1e-3);
    assert_abs_diff_eq!(coords.declination_degrees(), 18.0646, epsilon = 1e-3);
}

#[test]
fn centuries_do_not_realign_exactly() {
    let now = sun_position(8978.0);
    let later = sun_position(8978.0 + 36_525.0);
    assert!(now != later);
    assert_abs_diff_eq!(now.declination_degrees(), later.declination_degrees(), epsilon = 1.0);
}
