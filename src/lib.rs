//! # Solar Twilight Library
//!
//! Solar geometry and twilight-band classification from closed-form almanac formulas.

#![cfg_attr(not(feature = "std"), no_std)]
//!
//! This library provides two complementary solar computation pipelines:
//! - **Almanac**: the Astronomical Almanac low-precision mean-element formulas
//!   (right ascension, declination, Earth–Sun distance, equation of time; ~0.01° class)
//! - **Simplified**: declination-only seasonal models in two selectable variants,
//!   for when the seasonal shape is all that matters
//!
//! On top of the position pipelines it classifies zenith angles into a twelve-band
//! daylight/twilight/night ladder, and (behind feature flags) renders PNG charts
//! and computes latitude-by-latitude daylight reports from it.
//!
//! ## Features
//!
//! - Multiple configurations: `std` or `no_std`, with or without `chrono`, math via native or `libm`
//! - Deterministic: identical inputs give bit-identical outputs, no I/O in the core
//! - Thread-safe: stateless functions over immutable data structures
//! - Batchable: the numeric API takes plain Julian dates for tight loops
//!
//! ## Feature Flags
//!
//! - `std` (default): Use standard library for native math functions (usually faster than `libm`)
//! - `chrono` (default): Enable `DateTime<Tz>` based convenience API
//! - `libm`: Use pure Rust math for `no_std` environments
//! - `charts`: PNG chart rendering of the twilight bands (implies `std`)
//! - `report`: parallel latitude daylight reports (implies `std`)
//! - `cli` (default): command-line binaries (implies `charts`, `report` and `chrono`)
//!
//! **Configuration examples:**
//! ```toml
//! # Default: full library plus CLI binaries
//! solar-twilight = "0.2"
//!
//! # Library only (no rendering, no binaries)
//! solar-twilight = { version = "0.2", default-features = false, features = ["std", "chrono"] }
//!
//! # no_std + chrono (embedded with DateTime support)
//! solar-twilight = { version = "0.2", default-features = false, features = ["libm", "chrono"] }
//!
//! # Minimal no_std (pure numeric API)
//! solar-twilight = { version = "0.2", default-features = false, features = ["libm"] }
//! ```
//!
//! ## References
//!
//! - The Astronomical Almanac (U.S. Naval Observatory and HM Nautical Almanac
//!   Office), section C: low-precision formulas for the Sun's position.
//!
//! ## Quick Start
//!
//! ### Solar Geometry (with chrono)
//! ```rust
//! # #[cfg(feature = "chrono")] {
//! use solar_twilight::{solar_geometry, TwilightBand};
//! use chrono::{DateTime, FixedOffset};
//!
//! // Calculate the full solar geometry for Vienna at noon
//! let datetime = "2023-06-21T12:00:00+02:00".parse::<DateTime<FixedOffset>>().unwrap();
//! let geometry = solar_geometry(
//!     &datetime,
//!     48.21,   // Vienna latitude
//!     16.37,   // Vienna longitude
//! ).unwrap();
//!
//! println!("Azimuth: {:.3}°", geometry.azimuth());
//! println!("Zenith: {:.3}°", geometry.zenith_angle());
//! println!("Band: {}", TwilightBand::classify(geometry.zenith_angle()));
//! # }
//! ```
//!
//! ### Solar Geometry (numeric API, no chrono)
//! ```rust
//! use solar_twilight::{solar_geometry_from_julian, time::JulianDate};
//!
//! // Create Julian date from UTC components (2023-06-21 10:00:00 UTC)
//! let jd = JulianDate::from_utc(2023, 6, 21, 10, 0, 0.0).unwrap();
//!
//! // Calculate the full solar geometry (works in both std and no_std)
//! let geometry = solar_geometry_from_julian(
//!     jd,
//!     48.21,   // Vienna latitude
//!     16.37,   // Vienna longitude
//! ).unwrap();
//!
//! println!("Azimuth: {:.3}°", geometry.azimuth());
//! println!("Equation of time: {:.1} min", geometry.almanac().equation_of_time_minutes());
//! ```
//!
//! ### Twilight Bands
//! ```rust
//! use solar_twilight::{BandCategory, TwilightBand};
//!
//! let band = TwilightBand::classify(97.5);
//! assert_eq!(band, TwilightBand::Nautical);
//! assert_eq!(band.category(), BandCategory::Nautical);
//! assert_eq!(band.label(), "N");
//! ```
//!
//! ## Pipelines
//!
//! ### Almanac
//!
//! The low-precision formulas of the Astronomical Almanac, evaluated from the
//! day count since J2000. Yields the full set of facts (right ascension,
//! declination, Earth–Sun distance, equation of time) that the facade combines
//! with the horizon projection into an observer-relative position.
//!
//! ### Simplified
//!
//! Seasonal declination models driven only by the day of year: a coarse cosine
//! (variant 1) and an eccentricity-corrected refinement (variant 2, the
//! default). Useful where sub-degree accuracy is not needed and no almanac
//! evaluation is wanted.
//!
//! ## Coordinate System
//!
//! - **Azimuth**: 0° = North, measured clockwise (0° to 360°); a south-clockwise
//!   convention is available via [`AzimuthConvention`]
//! - **Zenith angle**: 0° = directly overhead (zenith), 90° = horizon (0° to 180°)
//! - **Latitude**: positive north, -90° to +90°
//! - **Longitude**: positive east, any finite value (angles are wrapped internally)

#![deny(missing_docs)]
#![deny(unsafe_code)]
#![warn(clippy::pedantic, clippy::nursery, clippy::cargo, clippy::all)]
#![allow(
    clippy::module_name_repetitions,
    clippy::cast_possible_truncation,
    clippy::cast_precision_loss,
    clippy::cargo_common_metadata,
    clippy::multiple_crate_versions, // Acceptable for dev-dependencies
    clippy::float_cmp, // Exact comparisons of mathematical constants in tests
)]

// Public API exports
pub use crate::error::{Error, Result};
#[cfg(feature = "chrono")]
pub use crate::geometry::solar_geometry;
pub use crate::geometry::{SolarEngine, solar_geometry_from_julian};
pub use crate::horizon::AzimuthConvention;
pub use crate::simplified::DeclinationModel;
pub use crate::twilight::{BandCategory, BandCounts, TwilightBand};
pub use crate::types::{SolarAlmanac, SolarGeometry, SolarPosition, SubsolarPoint};

// Computation modules
pub mod almanac;
pub mod geometry;
pub mod horizon;
pub mod simplified;
pub mod twilight;

// Core modules
pub mod error;
pub mod types;

// Internal modules
mod math;

// Public modules
pub mod time;

// Presentation modules
#[cfg(feature = "charts")]
pub mod chart;
#[cfg(feature = "cli")]
pub mod cli;
#[cfg(feature = "report")]
pub mod report;

#[cfg(all(test, feature = "chrono"))]
mod tests {
    use super::*;
    use chrono::{DateTime, FixedOffset, TimeZone, Utc};

    #[test]
    fn test_basic_almanac_calculation() {
        // Test with different timezone types
        let datetime_fixed = "2023-06-21T12:00:00-07:00"
            .parse::<DateTime<FixedOffset>>()
            .unwrap();
        let datetime_utc = Utc.with_ymd_and_hms(2023, 6, 21, 19, 0, 0).unwrap();

        let geometry1 = solar_geometry(&datetime_fixed, 37.7749, -122.4194).unwrap();
        let geometry2 = solar_geometry(&datetime_utc, 37.7749, -122.4194).unwrap();

        // Both should produce identical results
        assert!((geometry1.azimuth() - geometry2.azimuth()).abs() < 1e-10);
        assert!((geometry1.zenith_angle() - geometry2.zenith_angle()).abs() < 1e-10);

        assert!(geometry1.azimuth() >= 0.0);
        assert!(geometry1.azimuth() <= 360.0);
        assert!(geometry1.zenith_angle() >= 0.0);
        assert!(geometry1.zenith_angle() <= 180.0);
    }

    #[test]
    fn test_basic_simplified_calculation() {
        let datetime_fixed = "2023-06-21T12:00:00-07:00"
            .parse::<DateTime<FixedOffset>>()
            .unwrap();
        let datetime_utc = Utc.with_ymd_and_hms(2023, 6, 21, 19, 0, 0).unwrap();

        let engine = SolarEngine::Simplified(DeclinationModel::default());
        let position1 = engine
            .solar_position(&datetime_fixed, 37.7749, -122.4194)
            .unwrap();
        let position2 = engine
            .solar_position(&datetime_utc, 37.7749, -122.4194)
            .unwrap();

        // Both should produce identical results
        assert!((position1.azimuth() - position2.azimuth()).abs() < 1e-10);
        assert!((position1.zenith_angle() - position2.zenith_angle()).abs() < 1e-10);

        assert!(position1.azimuth() >= 0.0);
        assert!(position1.azimuth() <= 360.0);
        assert!(position1.zenith_angle() >= 0.0);
        assert!(position1.zenith_angle() <= 180.0);
    }

    #[test]
    fn test_midsummer_noon_is_daylight() {
        let datetime = "2023-06-21T12:00:00Z".parse::<DateTime<Utc>>().unwrap();
        let geometry = solar_geometry(&datetime, 48.21, 16.37).unwrap();
        let band = TwilightBand::classify(geometry.zenith_angle());
        assert_eq!(band.category(), BandCategory::Daylight);
    }
}
