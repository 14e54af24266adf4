//! Solar geometry facade.
//!
//! Composes the almanac model, the subsolar longitude, and the horizon
//! projection into one call, and exposes the two computation pipelines
//! behind a common [`SolarEngine`] so downstream code (charts, reports)
//! is written once against either.

use crate::error::check_coordinates;
use crate::horizon;
use crate::simplified::{self, DeclinationModel};
use crate::time::JulianDate;
use crate::types::SolarGeometry;
use crate::{almanac, math, Result, SolarPosition};
#[cfg(feature = "chrono")]
use chrono::{DateTime, Datelike, TimeZone, Timelike};

/// Calculate the complete solar geometry for a UT timestamp and observer.
///
/// Deterministic and free of I/O: identical inputs give bit-identical
/// outputs. Uses the almanac pipeline (declination, Earth–Sun distance, and
/// equation of time from the mean elements; zenith and azimuth from the
/// horizon projection).
///
/// # Arguments
/// * `datetime` - Timezone-aware date and time (converted to UTC internally)
/// * `latitude` - Observer latitude in degrees (-90 to +90)
/// * `longitude` - Observer longitude in degrees (any finite value)
///
/// # Errors
/// Returns error for invalid date/time components or unusable coordinates.
///
/// # Example
/// ```rust
/// use solar_twilight::solar_geometry;
/// use chrono::{DateTime, Utc};
///
/// let datetime = "2023-01-01T00:00:00Z".parse::<DateTime<Utc>>().unwrap();
/// let geometry = solar_geometry(&datetime, 42.6, 0.0).unwrap();
///
/// // New-year midnight at a mid-northern latitude: deep night, near perihelion.
/// assert!(geometry.zenith_angle() > 150.0);
/// assert!((geometry.earth_sun_distance() - 0.9833).abs() < 0.001);
/// ```
#[cfg(feature = "chrono")]
pub fn solar_geometry<Tz: TimeZone>(
    datetime: &DateTime<Tz>,
    latitude: f64,
    longitude: f64,
) -> Result<SolarGeometry> {
    let jd = JulianDate::from_datetime(datetime)?;
    solar_geometry_from_julian(jd, latitude, longitude)
}

/// Calculate the complete solar geometry from a Julian date and observer.
///
/// The chrono-free entry point; see [`solar_geometry`] for the contract.
///
/// # Errors
/// Returns error for unusable coordinates.
pub fn solar_geometry_from_julian(
    jd: JulianDate,
    latitude: f64,
    longitude: f64,
) -> Result<SolarGeometry> {
    check_coordinates(latitude, longitude)?;

    let almanac = almanac::solar_almanac_from_julian(jd);
    let subsolar_longitude =
        horizon::subsolar_longitude(jd.hour_of_day(), almanac.equation_of_time());
    let position = horizon::project(
        almanac.declination(),
        subsolar_longitude,
        latitude,
        longitude,
    )?;

    Ok(SolarGeometry::new(position, almanac, subsolar_longitude))
}

/// Selectable computation pipeline.
///
/// Both engines produce an observer-relative [`SolarPosition`]; pick the
/// almanac for accuracy or a simplified declination variant where the
/// seasonal shape is all that matters. Construct the simplified variants
/// through [`DeclinationModel::from_variant`] when the choice comes from
/// configuration.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SolarEngine {
    /// Mean-element almanac pipeline (the default).
    Almanac,
    /// Declination-only pipeline with the given variant.
    Simplified(DeclinationModel),
}

impl Default for SolarEngine {
    fn default() -> Self {
        Self::Almanac
    }
}

impl SolarEngine {
    /// Calculate the solar position for a UT timestamp and observer with
    /// this engine.
    ///
    /// # Errors
    /// Returns error for invalid date/time components or unusable
    /// coordinates.
    #[cfg(feature = "chrono")]
    pub fn solar_position<Tz: TimeZone>(
        &self,
        datetime: &DateTime<Tz>,
        latitude: f64,
        longitude: f64,
    ) -> Result<SolarPosition> {
        match self {
            Self::Almanac => {
                solar_geometry(datetime, latitude, longitude).map(|geometry| geometry.position())
            }
            Self::Simplified(model) => {
                let (day_of_year, time_of_day) = day_and_fraction(datetime);
                simplified::solar_position(day_of_year, time_of_day, latitude, longitude, *model)
            }
        }
    }

    /// Calculate the solar position for a fractional day of `year` with this
    /// engine.
    ///
    /// `day_of_year` counts from 0 (January 1); its fractional part is the UT
    /// time of day. The chrono-free entry point the minute-stepping chart and
    /// report loops run on.
    ///
    /// # Errors
    /// Returns error for unusable coordinates or a time-of-day fraction that
    /// the simplified pipeline rejects.
    pub fn solar_position_for_day(
        &self,
        year: i32,
        day_of_year: f64,
        latitude: f64,
        longitude: f64,
    ) -> Result<SolarPosition> {
        match self {
            Self::Almanac => {
                let jd = JulianDate::from_utc(year, 1, 1, 0, 0, 0.0)?.add_days(day_of_year);
                solar_geometry_from_julian(jd, latitude, longitude)
                    .map(|geometry| geometry.position())
            }
            Self::Simplified(model) => {
                let time_of_day = day_of_year - math::floor(day_of_year);
                simplified::solar_position(day_of_year, time_of_day, latitude, longitude, *model)
            }
        }
    }
}

/// Splits a timestamp into the fractional day of year (0 = January 1) and
/// the time-of-day fraction the simplified pipeline runs on.
#[cfg(feature = "chrono")]
fn day_and_fraction<Tz: TimeZone>(datetime: &DateTime<Tz>) -> (f64, f64) {
    let utc = datetime.with_timezone(&chrono::Utc);
    let time_of_day = f64::from(utc.num_seconds_from_midnight()) / 86_400.0;
    let day_of_year = f64::from(utc.ordinal0()) + time_of_day;
    (day_of_year, time_of_day)
}
