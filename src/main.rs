//! `sun-approx` command-line tool.
//!
//! Prints the apparent right ascension and then the declination of the Sun, one per
//! line. Without arguments it evaluates JD 2460523.0 (2024-07-31 12:00 UTC) in
//! single precision.
//!
//! # Usage
//!
//! ```bash
//! sun-approx
//! sun-approx --jd 2451545.0 --double
//! sun-approx --days -1000.5 --radians
//! ```
//!
//! # Environment Variables
//!
//! - `RUST_LOG`: Log filter for diagnostics on stderr (default: warn)

use clap::Parser;
use tracing::{debug, info};
use tracing_subscriber::EnvFilter;

use sun_approx::time::JulianDate;
use sun_approx::{Precision, usno};

/// Julian date evaluated when no time argument is given.
const DEFAULT_JD: f64 = 2_460_523.0;

#[derive(Parser, Debug)]
#[command(
    name = "sun-approx",
    version,
    about = "Approximate apparent right ascension and declination of the Sun"
)]
struct Cli {
    /// Julian date to evaluate
    #[arg(long, conflicts_with = "days", allow_hyphen_values = true)]
    jd: Option<f64>,
    /// Days since J2000.0 (2000-01-01 12:00 UTC)
    #[arg(long, allow_hyphen_values = true)]
    days: Option<f64>,
    /// Evaluate in double precision instead of single precision
    #[arg(long)]
    double: bool,
    /// Print radians instead of degrees
    #[arg(long)]
    radians: bool,
}

fn init_logging() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(true)
        .init();
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    init_logging();
    let cli = Cli::parse();

    let jd = match (cli.jd, cli.days) {
        (Some(jd), _) => JulianDate::new(jd)?,
        (None, Some(days)) => JulianDate::from_days_since_j2000(days)?,
        (None, None) => JulianDate::new(DEFAULT_JD)?,
    };
    let precision = if cli.double {
        Precision::Double
    } else {
        Precision::Single
    };

    let t = jd.days_since_j2000();
    debug!(jd = jd.julian_date(), t, ?precision, "evaluating sun position");
    let coords = usno::sun_position_with_precision(t, precision);
    info!(
        ra_hours = coords.right_ascension_hours(),
        dec_deg = coords.declination_degrees(),
        "sun position"
    );

    if cli.radians {
        println!("{}", coords.right_ascension());
        println!("{}", coords.declination());
    } else {
        println!("{}", coords.right_ascension_degrees());
        println!("{}", coords.declination_degrees());
    }

    Ok(())
}
