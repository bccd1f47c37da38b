//! # Approximate Solar Coordinates
//!
//! Apparent right ascension and declination of the Sun from the low-precision
//! closed-form approximation published by the U.S. Naval Observatory.

#![cfg_attr(not(feature = "std"), no_std)]
//!
//! The approximation needs nothing but the number of days since J2000.0
//! (2000-01-01 12:00 UTC). It is accurate to roughly one arcminute within two
//! centuries of 2000 and stays finite and in range for any finite input.
//!
//! ## Features
//!
//! - Pure, stateless functions; every type is `Copy + Send + Sync`
//! - Double-precision evaluation, or single-precision storage matching the
//!   common `float` rendition of the formula bit for bit
//! - Auxiliary quantities: Sun-Earth distance, semidiameter, equation of time
//! - `std` or `no_std`, with or without `chrono`
//!
//! ## Feature Flags
//!
//! - `std` (default): Use standard library for native math functions
//! - `chrono` (default): Enable the `DateTime<Utc>` convenience API
//! - `libm`: Use pure Rust math for `no_std` environments
//! - `cli` (default): Dependencies of the `sun-approx` binary
//!
//! **Configuration examples:**
//! ```toml
//! # Library only, no chrono
//! sun-approx = { version = "0.1", default-features = false, features = ["std"] }
//!
//! # Minimal no_std (pure numeric API)
//! sun-approx = { version = "0.1", default-features = false, features = ["libm"] }
//! ```
//!
//! ## Reference
//!
//! - U.S. Naval Observatory, Astronomical Applications Department,
//!   "Approximate Solar Coordinates", <https://aa.usno.navy.mil/faq/sun_approx>
//!
//! ## Quick Start
//!
//! ```rust
//! use sun_approx::{time::JulianDate, usno};
//!
//! let jd = JulianDate::from_utc(2024, 7, 31, 12, 0, 0.0).unwrap();
//! let coords = usno::sun_position_from_julian(jd);
//!
//! println!("RA:  {:.4}°", coords.right_ascension_degrees());
//! println!("Dec: {:.4}°", coords.declination_degrees());
//! ```
//!
//! ## Coordinate System
//!
//! - **Right ascension**: radians in (-π, π], degrees in (-180°, 180°]
//! - **Declination**: radians in [-π/2, π/2], positive north

#![deny(missing_docs)]
#![deny(unsafe_code)]
#![warn(clippy::pedantic, clippy::nursery, clippy::cargo, clippy::all)]
#![allow(
    clippy::module_name_repetitions,
    clippy::cast_possible_truncation,
    clippy::cast_precision_loss,
    clippy::cargo_common_metadata,
    clippy::multiple_crate_versions, // Acceptable for dev-dependencies
    clippy::float_cmp, // Exact comparisons of reproducible float results in tests
)]

// Public API exports
pub use crate::error::{Error, Result};
pub use crate::math::D2R;
pub use crate::types::{CelestialCoords, Precision};
pub use crate::usno::{SunApproxParts, sun_position, sun_position_single};

// Algorithm modules
pub mod usno;

// Core modules
pub mod error;
pub mod types;

// Internal modules
mod math;

// Public modules
pub mod time;
