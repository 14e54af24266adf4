//! Error types for the solar geometry library.

use crate::math::normalize_degrees_0_to_360;
use core::fmt;

/// Result type alias for operations in this crate.
pub type Result<T> = core::result::Result<T, Error>;

/// Errors that can occur during solar geometry calculations.
#[derive(Debug, Clone, PartialEq)]
pub enum Error {
    /// Invalid latitude value (must be between -90 and +90 degrees).
    InvalidLatitude {
        /// The invalid latitude value provided.
        value: f64,
    },
    /// Invalid longitude value (must be finite; any range is accepted).
    InvalidLongitude {
        /// The invalid longitude value provided.
        value: f64,
    },
    /// Invalid time-of-day fraction (must be between 0 and 1 inclusive).
    InvalidTimeOfDay {
        /// The invalid time-of-day fraction provided.
        value: f64,
    },
    /// Unknown declination model variant (only variants 1 and 2 are defined).
    UnknownModelVariant {
        /// The unrecognized variant tag provided.
        value: u8,
    },
    /// Invalid date/time for the algorithm's valid range.
    InvalidDateTime {
        /// Description of the date/time constraint violation.
        message: &'static str,
    },
    /// Numerical computation error (e.g., a non-finite intermediate).
    ComputationError {
        /// Description of the computation error.
        message: &'static str,
    },
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::InvalidLatitude { value } => {
                write!(
                    f,
                    "invalid latitude {value}° (must be between -90° and +90°)"
                )
            }
            Self::InvalidLongitude { value } => {
                write!(f, "invalid longitude {value}° (must be finite)")
            }
            Self::InvalidTimeOfDay { value } => {
                write!(
                    f,
                    "invalid time-of-day fraction {value} (must be between 0 and 1)"
                )
            }
            Self::UnknownModelVariant { value } => {
                write!(
                    f,
                    "unknown declination model variant {value} (defined variants: 1, 2)"
                )
            }
            Self::InvalidDateTime { message } => {
                write!(f, "invalid date/time: {message}")
            }
            Self::ComputationError { message } => {
                write!(f, "computation error: {message}")
            }
        }
    }
}

#[cfg(feature = "std")]
impl std::error::Error for Error {}

impl Error {
    /// Creates an invalid latitude error.
    #[must_use]
    pub const fn invalid_latitude(value: f64) -> Self {
        Self::InvalidLatitude { value }
    }

    /// Creates an invalid longitude error.
    #[must_use]
    pub const fn invalid_longitude(value: f64) -> Self {
        Self::InvalidLongitude { value }
    }

    /// Creates an invalid time-of-day error.
    #[must_use]
    pub const fn invalid_time_of_day(value: f64) -> Self {
        Self::InvalidTimeOfDay { value }
    }

    /// Creates an unknown model variant error.
    #[must_use]
    pub const fn unknown_model_variant(value: u8) -> Self {
        Self::UnknownModelVariant { value }
    }

    /// Creates an invalid date/time error.
    #[must_use]
    pub const fn invalid_datetime(message: &'static str) -> Self {
        Self::InvalidDateTime { message }
    }

    /// Creates a computation error.
    #[must_use]
    pub const fn computation_error(message: &'static str) -> Self {
        Self::ComputationError { message }
    }
}

/// Validates latitude is within the valid range (-90 to +90 degrees).
///
/// # Errors
/// Returns `InvalidLatitude` if latitude is outside -90 to +90 degrees.
pub fn check_latitude(latitude: f64) -> Result<()> {
    if !(-90.0..=90.0).contains(&latitude) {
        return Err(Error::invalid_latitude(latitude));
    }
    Ok(())
}

/// Validates longitude is finite.
///
/// Longitude is not range-restricted: values outside [-180, +180] wrap
/// naturally through the trigonometry. Callers that want a canonical
/// representation should normalize before display, not before computing.
///
/// # Errors
/// Returns `InvalidLongitude` if longitude is NaN or infinite.
pub fn check_longitude(longitude: f64) -> Result<()> {
    if !longitude.is_finite() {
        return Err(Error::invalid_longitude(longitude));
    }
    Ok(())
}

/// Validates both latitude and longitude.
///
/// # Errors
/// Returns `InvalidLatitude` or `InvalidLongitude` for unusable coordinates.
pub fn check_coordinates(latitude: f64, longitude: f64) -> Result<()> {
    check_latitude(latitude)?;
    check_longitude(longitude)?;
    Ok(())
}

/// Validates a time-of-day fraction is within [0, 1] inclusive.
///
/// # Errors
/// Returns `InvalidTimeOfDay` if the fraction is outside 0.0 to 1.0.
pub fn check_time_of_day(fraction: f64) -> Result<()> {
    if !(0.0..=1.0).contains(&fraction) {
        return Err(Error::invalid_time_of_day(fraction));
    }
    Ok(())
}

/// Validates and normalizes an azimuth angle to the range [0, 360) degrees.
///
/// # Errors
/// Returns `ComputationError` if azimuth is not finite.
pub fn check_azimuth(azimuth: f64) -> Result<f64> {
    if !azimuth.is_finite() {
        return Err(Error::computation_error("azimuth is not finite"));
    }
    Ok(normalize_degrees_0_to_360(azimuth))
}

/// Validates a zenith angle to be within the range [0, 180] degrees.
///
/// # Errors
/// Returns `ComputationError` if zenith angle is not finite or outside valid range.
pub fn check_zenith_angle(zenith: f64) -> Result<f64> {
    if !zenith.is_finite() {
        return Err(Error::computation_error("zenith angle is not finite"));
    }
    if !(0.0..=180.0).contains(&zenith) {
        return Err(Error::computation_error(
            "zenith angle must be between 0° and 180°",
        ));
    }
    Ok(zenith)
}
