//! Horizon-frame projection of the subsolar point.
//!
//! Rotates the unit vector toward the sun, given by declination and subsolar
//! longitude, into the observer's local east/north/up frame and reads the
//! zenith angle and azimuth off the direction cosines. This is the projection
//! the almanac pipeline uses; the simplified pipeline borrows its azimuth.

#![allow(clippy::many_single_char_names)]

use crate::error::check_coordinates;
use crate::math::{acos, atan2, cos, degrees_to_radians, radians_to_degrees, sin};
use crate::{Result, SolarPosition};

/// Azimuth measurement convention for the horizon frame.
///
/// The crate-wide canonical convention is north-clockwise (0° = North,
/// 90° = East). The south-clockwise variant found in older surveying
/// texts is available, but only by explicitly passing it to
/// [`project_with_convention`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AzimuthConvention {
    /// 0° = North, increasing clockwise through East.
    NorthClockwise,
    /// 0° = South, increasing clockwise through West.
    SouthClockwise,
}

impl Default for AzimuthConvention {
    fn default() -> Self {
        Self::NorthClockwise
    }
}

/// Calculates the subsolar longitude in degrees from the UT hour of day and
/// the equation of time.
///
/// East-positive. At 12:00 UT with a zero equation of time the sun stands
/// over the prime meridian; each hour moves it 15° west. The equation of
/// time is given in degrees (1° = 4 minutes of time).
#[must_use]
pub fn subsolar_longitude(hour_of_day: f64, equation_of_time: f64) -> f64 {
    -15.0 * (hour_of_day - 12.0 + equation_of_time * 4.0 / 60.0)
}

/// Projects declination and subsolar longitude into the observer's horizon
/// frame, using the north-clockwise azimuth convention.
///
/// # Arguments
/// * `declination` - Sun's declination in degrees
/// * `subsolar_longitude` - Subsolar longitude in degrees, east-positive
/// * `latitude` - Observer latitude in degrees (-90 to +90)
/// * `longitude` - Observer longitude in degrees (any finite value)
///
/// # Errors
/// Returns error for unusable coordinates.
///
/// # Example
/// ```
/// # use solar_twilight::horizon;
/// // Equinox sun on the observer's meridian, seen from 45°N
/// let position = horizon::project(0.0, 0.0, 45.0, 0.0).unwrap();
/// assert!((position.zenith_angle() - 45.0).abs() < 1e-9);
/// assert!((position.azimuth() - 180.0).abs() < 1e-9);
/// ```
pub fn project(
    declination: f64,
    subsolar_longitude: f64,
    latitude: f64,
    longitude: f64,
) -> Result<SolarPosition> {
    project_with_convention(
        declination,
        subsolar_longitude,
        latitude,
        longitude,
        AzimuthConvention::NorthClockwise,
    )
}

/// Projects declination and subsolar longitude into the observer's horizon
/// frame with an explicit azimuth convention.
///
/// # Errors
/// Returns error for unusable coordinates.
pub fn project_with_convention(
    declination: f64,
    subsolar_longitude: f64,
    latitude: f64,
    longitude: f64,
    convention: AzimuthConvention,
) -> Result<SolarPosition> {
    check_coordinates(latitude, longitude)?;

    let decl = degrees_to_radians(declination);
    let phi = degrees_to_radians(latitude);
    let delta_lon = degrees_to_radians(subsolar_longitude - longitude);

    let sin_decl = sin(decl);
    let cos_decl = cos(decl);
    let sin_phi = sin(phi);
    let cos_phi = cos(phi);
    let cos_dlon = cos(delta_lon);

    // East, north, and up components of the unit vector toward the sun
    let sx = cos_decl * sin(delta_lon);
    let sy = cos_phi * sin_decl - sin_phi * cos_decl * cos_dlon;
    let sz = sin_phi * sin_decl + cos_phi * cos_decl * cos_dlon;

    // Clamped so rounding at |sz| = 1 cannot produce NaN
    let zenith = radians_to_degrees(acos(sz.clamp(-1.0, 1.0)));

    let azimuth = match convention {
        AzimuthConvention::NorthClockwise => atan2(sx, sy),
        AzimuthConvention::SouthClockwise => atan2(-sx, -sy),
    };

    SolarPosition::new(radians_to_degrees(azimuth), zenith)
}
