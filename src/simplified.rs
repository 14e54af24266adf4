//! Simplified declination-based solar model.
//!
//! Two closed-form declination approximations driven only by the day of year,
//! in the style of the usual "position of the Sun" formulas: a plain cosine
//! (variant 1) and an eccentricity-corrected cosine (variant 2, about 0.2°
//! worst-case against the almanac model). Zenith angles come from the
//! spherical law of cosines on the pole–sun–observer triangle. Useful where
//! the absolute time of day matters less than the seasonal shape, and as an
//! independent check on the almanac pipeline.

#![allow(clippy::unreadable_literal)]
#![allow(clippy::many_single_char_names)]
#![allow(clippy::suboptimal_flops)]

use crate::error::{check_coordinates, check_time_of_day};
use crate::horizon;
use crate::math::{acos, asin, cos, degrees_to_radians, radians_to_degrees, sin, PI};
use crate::{Error, Result, SolarPosition};

/// Earth's axial tilt in degrees, as used by both declination variants.
const OBLIQUITY_DEG: f64 = 23.44;

/// Orbital eccentricity of Earth's orbit.
const ECCENTRICITY: f64 = 0.0167;

/// Mean length of the year in days.
const DAYS_PER_YEAR: f64 = 365.24;

/// Declination approximation variant.
///
/// Only variants 1 and 2 exist; constructing a model from any other tag is a
/// configuration error.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DeclinationModel {
    /// Variant 1: declination as a plain cosine of the orbital angle.
    Cosine,
    /// Variant 2: cosine argument corrected for the orbit's eccentricity.
    EccentricityCorrected,
}

impl Default for DeclinationModel {
    fn default() -> Self {
        Self::EccentricityCorrected
    }
}

impl DeclinationModel {
    /// Selects a declination model from its numeric variant tag.
    ///
    /// # Errors
    /// Returns `UnknownModelVariant` for any tag other than 1 or 2.
    ///
    /// # Example
    /// ```
    /// # use solar_twilight::simplified::DeclinationModel;
    /// assert_eq!(
    ///     DeclinationModel::from_variant(2).unwrap(),
    ///     DeclinationModel::EccentricityCorrected
    /// );
    /// assert!(DeclinationModel::from_variant(3).is_err());
    /// ```
    pub fn from_variant(variant: u8) -> Result<Self> {
        match variant {
            1 => Ok(Self::Cosine),
            2 => Ok(Self::EccentricityCorrected),
            other => Err(Error::unknown_model_variant(other)),
        }
    }

    /// Gets the numeric variant tag (1 or 2).
    #[must_use]
    pub const fn variant(&self) -> u8 {
        match self {
            Self::Cosine => 1,
            Self::EccentricityCorrected => 2,
        }
    }

    /// Calculates the sun's declination in degrees for a fractional day of year.
    ///
    /// Day 0 is January 1; fractional days select the time of day. The result
    /// stays within ±23.44° for either variant.
    #[must_use]
    pub fn declination_for_day(&self, day_of_year: f64) -> f64 {
        let omega = 2.0 * PI / DAYS_PER_YEAR;
        match self {
            Self::Cosine => -OBLIQUITY_DEG * cos(omega * (day_of_year + 10.0)),
            Self::EccentricityCorrected => {
                // The sin term advances the orbital angle by up to ±1.9°,
                // accounting for faster motion near perihelion.
                let correction = degrees_to_radians(360.0 / PI * ECCENTRICITY);
                let orbital_angle =
                    omega * (day_of_year + 10.0) + correction * sin(omega * (day_of_year - 2.0));
                -radians_to_degrees(asin(sin(degrees_to_radians(OBLIQUITY_DEG)) * cos(orbital_angle)))
            }
        }
    }
}

/// Converts a time-of-day fraction to the sun's hour angle from the prime
/// meridian, in radians, west-positive.
///
/// Noon (0.5) maps to 0 (sun crossing the meridian, ignoring the equation of
/// time); midnight maps to ±π. Negating the result gives the east-positive
/// subsolar longitude.
///
/// # Errors
/// Returns `InvalidTimeOfDay` if the fraction is outside [0, 1].
pub fn solar_longitude_radians(time_of_day: f64) -> Result<f64> {
    check_time_of_day(time_of_day)?;
    Ok(time_of_day * 2.0 * PI - PI)
}

/// Solves a spherical triangle for side `a`, given the opposite angle `A`
/// and the adjacent sides `b` and `c`, all in radians.
///
/// Spherical law of cosines: `cos a = cos b · cos c + sin b · sin c · cos A`.
/// The cosine is clamped before `acos` so rounding at degenerate triangles
/// cannot produce NaN.
#[must_use]
pub fn solve_for_a(angle_a: f64, side_b: f64, side_c: f64) -> f64 {
    let cos_a = cos(side_b) * cos(side_c) + sin(side_b) * sin(side_c) * cos(angle_a);
    acos(cos_a.clamp(-1.0, 1.0))
}

/// Calculates the zenith angle in degrees from declination and subsolar
/// longitude via the pole–sun–observer spherical triangle.
///
/// The triangle's polar angle is the longitude difference between the
/// subsolar point and the observer; its sides are the two colatitudes.
#[must_use]
pub fn zenith_angle(
    declination: f64,
    subsolar_longitude: f64,
    latitude: f64,
    longitude: f64,
) -> f64 {
    let polar_angle = degrees_to_radians(subsolar_longitude - longitude);
    let sun_colatitude = PI / 2.0 - degrees_to_radians(declination);
    let observer_colatitude = PI / 2.0 - degrees_to_radians(latitude);
    radians_to_degrees(solve_for_a(polar_angle, sun_colatitude, observer_colatitude))
}

/// Calculates the solar position from a fractional day of year and time of day.
///
/// The zenith angle comes from the spherical triangle, the azimuth from the
/// horizon-frame projection of the same declination and subsolar longitude.
///
/// # Arguments
/// * `day_of_year` - Fractional day of year, 0 = January 1
/// * `time_of_day` - Fraction of the UT day in [0, 1]
/// * `latitude` - Observer latitude in degrees (-90 to +90)
/// * `longitude` - Observer longitude in degrees (any finite value)
/// * `model` - Declination variant to use
///
/// # Errors
/// Returns error for an out-of-range time-of-day fraction or unusable
/// coordinates.
///
/// # Example
/// ```
/// # use solar_twilight::simplified::{self, DeclinationModel};
/// // June solstice, noon, on the prime meridian at 42.6°N
/// let position = simplified::solar_position(
///     171.0,
///     0.5,
///     42.6,
///     0.0,
///     DeclinationModel::default(),
/// )
/// .unwrap();
/// // Noon zenith is latitude minus declination, about 19.2°
/// assert!((position.zenith_angle() - 19.2).abs() < 0.5);
/// ```
pub fn solar_position(
    day_of_year: f64,
    time_of_day: f64,
    latitude: f64,
    longitude: f64,
    model: DeclinationModel,
) -> Result<SolarPosition> {
    check_coordinates(latitude, longitude)?;

    let declination = model.declination_for_day(day_of_year);
    // The hour angle is west-positive; the subsolar longitude is its mirror.
    let subsolar_longitude = -radians_to_degrees(solar_longitude_radians(time_of_day)?);

    let zenith = zenith_angle(declination, subsolar_longitude, latitude, longitude);
    let projected = horizon::project(declination, subsolar_longitude, latitude, longitude)?;

    SolarPosition::new(projected.azimuth(), zenith)
}
