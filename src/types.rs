//! Core data types for solar geometry calculations.

use crate::error::{check_azimuth, check_zenith_angle};
use crate::Result;

/// Solar position in topocentric coordinates.
///
/// Represents the sun's position as seen from a specific point on Earth's surface.
/// Uses the standard astronomical coordinate system where:
/// - Azimuth: 0° = North, measured clockwise to 360°
/// - Zenith angle: 0° = directly overhead (zenith), 90° = horizon, 180° = nadir
/// - Elevation angle: 90° = directly overhead, 0° = horizon, -90° = nadir
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SolarPosition {
    /// Azimuth angle in degrees (0° to 360°, 0° = North, increasing clockwise)
    azimuth: f64,
    /// Zenith angle in degrees (0° to 180°, 0° = zenith, 90° = horizon)
    zenith_angle: f64,
}

impl SolarPosition {
    /// Creates a new solar position from azimuth and zenith angle.
    ///
    /// # Errors
    /// Returns error if azimuth or zenith angles are outside valid ranges.
    ///
    /// # Example
    /// ```
    /// # use solar_twilight::types::SolarPosition;
    /// let position = SolarPosition::new(180.0, 30.0).unwrap();
    /// assert_eq!(position.azimuth(), 180.0);
    /// assert_eq!(position.zenith_angle(), 30.0);
    /// assert_eq!(position.elevation_angle(), 60.0);
    /// ```
    pub fn new(azimuth: f64, zenith_angle: f64) -> Result<Self> {
        let normalized_azimuth = check_azimuth(azimuth)?;
        let validated_zenith = check_zenith_angle(zenith_angle)?;

        Ok(Self {
            azimuth: normalized_azimuth,
            zenith_angle: validated_zenith,
        })
    }

    /// Gets the azimuth angle in degrees (0° to 360°, 0° = North, increasing clockwise).
    #[must_use]
    pub const fn azimuth(&self) -> f64 {
        self.azimuth
    }

    /// Gets the zenith angle in degrees (0° to 180°, 0° = zenith, 90° = horizon).
    #[must_use]
    pub const fn zenith_angle(&self) -> f64 {
        self.zenith_angle
    }

    /// Gets the elevation angle in degrees.
    ///
    /// This is the complement of the zenith angle: elevation = 90° - zenith.
    #[must_use]
    pub fn elevation_angle(&self) -> f64 {
        90.0 - self.zenith_angle
    }

    /// Checks if the sun is above the horizon (elevation angle > 0°).
    #[must_use]
    pub fn is_sun_up(&self) -> bool {
        self.elevation_angle() > 0.0
    }

    /// Checks if the sun is at or below the horizon (elevation angle ≤ 0°).
    #[must_use]
    pub fn is_sun_down(&self) -> bool {
        self.elevation_angle() <= 0.0
    }
}

/// Per-instant solar facts from the mean-element almanac model.
///
/// Holds the quantities that depend on time alone, before any observer
/// geometry is applied: apparent declination, Earth–Sun distance, and the
/// equation of time.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SolarAlmanac {
    /// Apparent right ascension of the sun in degrees, [0, 360)
    right_ascension: f64,
    /// Apparent declination of the sun in degrees
    declination: f64,
    /// Earth–Sun distance in astronomical units
    earth_sun_distance: f64,
    /// Equation of time in degrees (1° = 4 minutes of time)
    equation_of_time: f64,
}

impl SolarAlmanac {
    pub(crate) const fn new(
        right_ascension: f64,
        declination: f64,
        earth_sun_distance: f64,
        equation_of_time: f64,
    ) -> Self {
        Self {
            right_ascension,
            declination,
            earth_sun_distance,
            equation_of_time,
        }
    }

    /// Gets the sun's right ascension in degrees, [0, 360).
    #[must_use]
    pub const fn right_ascension(&self) -> f64 {
        self.right_ascension
    }

    /// Gets the sun's declination in degrees (within ±23.45°).
    #[must_use]
    pub const fn declination(&self) -> f64 {
        self.declination
    }

    /// Gets the Earth–Sun distance in astronomical units (about 0.983 to 1.017).
    #[must_use]
    pub const fn earth_sun_distance(&self) -> f64 {
        self.earth_sun_distance
    }

    /// Gets the equation of time in degrees of hour angle.
    ///
    /// Positive when the true sun crosses the meridian ahead of the mean sun.
    /// One degree corresponds to four minutes of time.
    #[must_use]
    pub const fn equation_of_time(&self) -> f64 {
        self.equation_of_time
    }

    /// Gets the equation of time in minutes of time.
    #[must_use]
    pub fn equation_of_time_minutes(&self) -> f64 {
        self.equation_of_time * 4.0
    }

    /// Gets the inverse-square irradiance scale relative to one astronomical unit.
    ///
    /// Multiply a nominal top-of-atmosphere irradiance (for example 1361 W/m²)
    /// by this factor to account for the orbit's eccentricity. Greater than 1
    /// near perihelion in early January, less than 1 near aphelion in July.
    #[must_use]
    pub fn irradiance_scale(&self) -> f64 {
        1.0 / (self.earth_sun_distance * self.earth_sun_distance)
    }
}

/// The point on Earth's surface where the sun is directly overhead.
///
/// Its latitude equals the solar declination; its longitude follows the UT
/// hour of day corrected by the equation of time.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SubsolarPoint {
    /// Latitude in degrees (equal to the solar declination)
    latitude: f64,
    /// Longitude in degrees, east-positive
    longitude: f64,
}

impl SubsolarPoint {
    pub(crate) const fn new(latitude: f64, longitude: f64) -> Self {
        Self {
            latitude,
            longitude,
        }
    }

    /// Gets the subsolar latitude in degrees.
    #[must_use]
    pub const fn latitude(&self) -> f64 {
        self.latitude
    }

    /// Gets the subsolar longitude in degrees, east-positive.
    #[must_use]
    pub const fn longitude(&self) -> f64 {
        self.longitude
    }
}

/// Complete solar geometry for one instant and observer.
///
/// Combines the observer-relative [`SolarPosition`] with the per-instant
/// almanac facts and the subsolar longitude. Produced by
/// [`solar_geometry`](crate::geometry::solar_geometry).
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SolarGeometry {
    position: SolarPosition,
    almanac: SolarAlmanac,
    subsolar_longitude: f64,
}

impl SolarGeometry {
    pub(crate) const fn new(
        position: SolarPosition,
        almanac: SolarAlmanac,
        subsolar_longitude: f64,
    ) -> Self {
        Self {
            position,
            almanac,
            subsolar_longitude,
        }
    }

    /// Gets the observer-relative solar position.
    #[must_use]
    pub const fn position(&self) -> SolarPosition {
        self.position
    }

    /// Gets the zenith angle in degrees (shorthand for `position().zenith_angle()`).
    #[must_use]
    pub const fn zenith_angle(&self) -> f64 {
        self.position.zenith_angle()
    }

    /// Gets the azimuth in degrees (shorthand for `position().azimuth()`).
    #[must_use]
    pub const fn azimuth(&self) -> f64 {
        self.position.azimuth()
    }

    /// Gets the per-instant almanac facts.
    #[must_use]
    pub const fn almanac(&self) -> SolarAlmanac {
        self.almanac
    }

    /// Gets the sun's declination in degrees.
    #[must_use]
    pub const fn declination(&self) -> f64 {
        self.almanac.declination()
    }

    /// Gets the subsolar longitude in degrees, east-positive.
    #[must_use]
    pub const fn subsolar_longitude(&self) -> f64 {
        self.subsolar_longitude
    }

    /// Gets the subsolar point (declination latitude, subsolar longitude).
    #[must_use]
    pub const fn subsolar_point(&self) -> SubsolarPoint {
        SubsolarPoint::new(self.almanac.declination(), self.subsolar_longitude)
    }

    /// Gets the Earth–Sun distance in astronomical units.
    #[must_use]
    pub const fn earth_sun_distance(&self) -> f64 {
        self.almanac.earth_sun_distance()
    }

    /// Gets the equation of time in degrees.
    #[must_use]
    pub const fn equation_of_time(&self) -> f64 {
        self.almanac.equation_of_time()
    }
}
