//! Mean-element solar almanac model.
//!
//! This follows the low-precision formulas for the Sun from the Astronomical
//! Almanac (section C): mean longitude and mean anomaly as linear functions of
//! the day count from the 2000-01-01 12:00 UT epoch, ecliptic longitude with
//! the two largest anomaly terms, and the equation of time from the
//! right-ascension difference. Stated precision is about 0.01° between 1950
//! and 2050; no perturbation terms beyond the mean elements are applied.

#![allow(clippy::unreadable_literal)]
#![allow(clippy::many_single_char_names)]
#![allow(clippy::suboptimal_flops)]

use crate::math::{asin, atan2, cos, degrees_to_radians, radians_to_degrees, sin, wrap};
use crate::time::JulianDate;
use crate::types::SolarAlmanac;
#[cfg(feature = "chrono")]
use crate::Result;
#[cfg(feature = "chrono")]
use chrono::{DateTime, TimeZone};

/// Calculate the per-instant solar almanac facts for a UT timestamp.
///
/// # Arguments
/// * `datetime` - Timezone-aware date and time (converted to UTC internally)
///
/// # Returns
/// Right ascension, declination, Earth–Sun distance, and equation of time.
///
/// # Errors
/// Returns error if the date/time components are invalid.
///
/// # Example
/// ```rust
/// use solar_twilight::almanac;
/// use chrono::{DateTime, Utc};
///
/// let datetime = "2023-06-21T12:00:00Z".parse::<DateTime<Utc>>().unwrap();
/// let almanac = almanac::solar_almanac(&datetime).unwrap();
///
/// // Near the June solstice the sun stands close to its northernmost declination.
/// assert!((almanac.declination() - 23.44).abs() < 0.05);
/// ```
#[cfg(feature = "chrono")]
pub fn solar_almanac<Tz: TimeZone>(datetime: &DateTime<Tz>) -> Result<SolarAlmanac> {
    let jd = JulianDate::from_datetime(datetime)?;
    Ok(solar_almanac_from_julian(jd))
}

/// Calculate the per-instant solar almanac facts from a Julian date.
///
/// Pure function of the day count; no observer geometry is involved.
#[must_use]
pub fn solar_almanac_from_julian(jd: JulianDate) -> SolarAlmanac {
    let n = jd.days_since_j2000();

    // Mean longitude and mean anomaly of the sun, degrees.
    // wrap() keeps both correct for dates before the epoch (negative n).
    let mean_longitude = wrap(280.460 + 0.9856474 * n, 360.0);
    let mean_anomaly = wrap(357.528 + 0.9856003 * n, 360.0);
    let g = degrees_to_radians(mean_anomaly);

    // Ecliptic longitude with the two largest equation-of-center terms
    let ecliptic_longitude = wrap(
        mean_longitude + 1.915 * sin(g) + 0.020 * sin(2.0 * g),
        360.0,
    );
    let lambda = degrees_to_radians(ecliptic_longitude);

    // Obliquity of the ecliptic, slowly decreasing
    let epsilon = degrees_to_radians(23.439 - 0.0000004 * n);

    // Right ascension must come from the two-argument arctangent so the
    // quadrant follows the ecliptic longitude
    let right_ascension = wrap(
        radians_to_degrees(atan2(cos(epsilon) * sin(lambda), cos(lambda))),
        360.0,
    );

    let declination = radians_to_degrees(asin(sin(epsilon) * sin(lambda)));

    let earth_sun_distance = 1.00014 - 0.01671 * cos(g) - 0.00014 * cos(2.0 * g);

    // Shift-wrap-shift so the L - alpha difference cannot jump by 360°
    // when the two angles straddle the wrap point
    let equation_of_time = wrap(mean_longitude - right_ascension + 180.0, 360.0) - 180.0;

    SolarAlmanac::new(
        right_ascension,
        declination,
        earth_sun_distance,
        equation_of_time,
    )
}
