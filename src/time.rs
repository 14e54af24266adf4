//! Time handling for solar geometry calculations.
//!
//! This module provides a UT Julian date type. All calculations in this crate
//! run on Universal Time; there is no ΔT, leap second, or timezone handling
//! (convert wall-clock times to UT before calling in).

#![allow(clippy::unreadable_literal)]
#![allow(clippy::many_single_char_names)]

use crate::math::floor;
use crate::{Error, Result};
#[cfg(feature = "chrono")]
use chrono::{Datelike, TimeZone, Timelike};

/// Seconds per day (86,400)
pub(crate) const SECONDS_PER_DAY: f64 = 86_400.0;

/// Julian Day Number for the 2000-01-01 12:00:00 UT epoch
const J2000_JDN: f64 = 2_451_545.0;

/// Julian date representation for astronomical calculations.
///
/// Referenced to UT. The mean-element almanac formulas take their day count
/// `n` from [`days_since_j2000`](Self::days_since_j2000); the subsolar
/// longitude takes the fractional UT hour from [`hour_of_day`](Self::hour_of_day).
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct JulianDate {
    /// Julian Date (JD) - referenced to UT
    jd: f64,
}

impl JulianDate {
    /// Creates a new Julian date from a timezone-aware chrono `DateTime`.
    ///
    /// Converts datetime to UTC for proper Julian Date calculation.
    ///
    /// # Arguments
    /// * `datetime` - Timezone-aware date and time
    ///
    /// # Returns
    /// Returns `Ok(JulianDate)` on success.
    ///
    /// # Errors
    /// Returns error if the date/time components are invalid (e.g., invalid month, day, hour).
    #[cfg(feature = "chrono")]
    pub fn from_datetime<Tz: TimeZone>(datetime: &chrono::DateTime<Tz>) -> Result<Self> {
        // Convert the entire datetime to UTC for proper Julian Date calculation
        let utc_datetime = datetime.with_timezone(&chrono::Utc);
        Self::from_utc(
            utc_datetime.year(),
            utc_datetime.month(),
            utc_datetime.day(),
            utc_datetime.hour(),
            utc_datetime.minute(),
            f64::from(utc_datetime.second()) + f64::from(utc_datetime.nanosecond()) / 1e9,
        )
    }

    /// Creates a new Julian date from year, month, day, hour, minute, and second in UT.
    ///
    /// # Arguments
    /// * `year` - Year (can be negative for BCE years)
    /// * `month` - Month (1-12)
    /// * `day` - Day of month (1-31)
    /// * `hour` - Hour (0-23)
    /// * `minute` - Minute (0-59)
    /// * `second` - Second (0-59, can include fractional seconds)
    ///
    /// # Returns
    /// Julian date or error if the date is invalid
    ///
    /// # Errors
    /// Returns error if any date/time component is outside valid ranges (month 1-12, day 1-31, hour 0-23, minute 0-59, second 0-59.999).
    ///
    /// # Example
    /// ```
    /// # use solar_twilight::time::JulianDate;
    /// let jd = JulianDate::from_utc(2023, 6, 21, 12, 0, 0.0).unwrap();
    /// assert!(jd.julian_date() > 2_460_000.0);
    /// ```
    pub fn from_utc(
        year: i32,
        month: u32,
        day: u32,
        hour: u32,
        minute: u32,
        second: f64,
    ) -> Result<Self> {
        // Validate input ranges
        if !(1..=12).contains(&month) {
            return Err(Error::invalid_datetime("month must be between 1 and 12"));
        }
        if !(1..=31).contains(&day) {
            return Err(Error::invalid_datetime("day must be between 1 and 31"));
        }
        if hour > 23 {
            return Err(Error::invalid_datetime("hour must be between 0 and 23"));
        }
        if minute > 59 {
            return Err(Error::invalid_datetime("minute must be between 0 and 59"));
        }
        if !(0.0..60.0).contains(&second) {
            return Err(Error::invalid_datetime(
                "second must be between 0 and 59.999...",
            ));
        }

        if day > days_in_month(year, month, day)? {
            return Err(Error::invalid_datetime("day is out of range for month"));
        }

        let jd = calculate_julian_date(year, month, day, hour, minute, second);
        Ok(Self { jd })
    }

    /// Gets the Julian Date (JD) value.
    ///
    /// # Returns
    /// Julian Date referenced to UT
    #[must_use]
    pub const fn julian_date(&self) -> f64 {
        self.jd
    }

    /// Fractional days since the 2000-01-01 12:00:00 UT epoch.
    ///
    /// Negative before the epoch. This is the `n` of the mean-element
    /// almanac formulas.
    ///
    /// # Example
    /// ```
    /// # use solar_twilight::time::JulianDate;
    /// let epoch = JulianDate::from_utc(2000, 1, 1, 12, 0, 0.0).unwrap();
    /// assert!(epoch.days_since_j2000().abs() < 1e-9);
    /// ```
    #[must_use]
    pub fn days_since_j2000(&self) -> f64 {
        self.jd - J2000_JDN
    }

    /// Fraction of the UT day elapsed, in [0, 1).
    ///
    /// 0.0 is midnight, 0.5 is noon.
    #[must_use]
    pub fn fraction_of_day(&self) -> f64 {
        // JD rolls over at noon; shift half a day so the fraction is civil.
        let shifted = self.jd + 0.5;
        shifted - floor(shifted)
    }

    /// Fractional UT hour of day, in [0, 24).
    #[must_use]
    pub fn hour_of_day(&self) -> f64 {
        self.fraction_of_day() * 24.0
    }

    /// Returns a Julian date offset by the given (possibly fractional) number of days.
    #[must_use]
    pub fn add_days(self, days: f64) -> Self {
        Self {
            jd: self.jd + days,
        }
    }
}

/// Calculates Julian Date from UT date/time components.
///
/// This follows Meeus, "Astronomical Algorithms", 2nd edition.
fn calculate_julian_date(
    year: i32,
    month: u32,
    day: u32,
    hour: u32,
    minute: u32,
    second: f64,
) -> f64 {
    let mut y = year;
    let mut m = i32::try_from(month).expect("month should be valid i32");

    // Adjust for January and February being treated as months 13 and 14 of previous year
    if m < 3 {
        y -= 1;
        m += 12;
    }

    // Calculate fractional day
    let d = f64::from(day) + (f64::from(hour) + (f64::from(minute) + second / 60.0) / 60.0) / 24.0;

    // Basic Julian Date calculation
    let mut jd =
        floor(365.25 * (f64::from(y) + 4716.0)) + floor(30.6001 * f64::from(m + 1)) + d - 1524.5;

    // Gregorian calendar correction (after October 15, 1582)
    // JDN 2299161 corresponds to October 15, 1582
    if jd >= 2_299_161.0 {
        let a = floor(f64::from(y) / 100.0);
        let b = 2.0 - a + floor(a / 4.0);
        jd += b;
    }

    jd
}

const fn is_gregorian_date(year: i32, month: u32, day: u32) -> bool {
    year > 1582 || (year == 1582 && (month > 10 || (month == 10 && day >= 15)))
}

const fn is_leap_year(year: i32, is_gregorian: bool) -> bool {
    if is_gregorian {
        (year % 4 == 0 && year % 100 != 0) || year % 400 == 0
    } else {
        year % 4 == 0
    }
}

fn days_in_month(year: i32, month: u32, day: u32) -> Result<u32> {
    if year == 1582 && month == 10 && (5..=14).contains(&day) {
        return Err(Error::invalid_datetime(
            "dates 1582-10-05 through 1582-10-14 do not exist in Gregorian calendar",
        ));
    }

    let is_gregorian = is_gregorian_date(year, month, day);
    let days = match month {
        1 | 3 | 5 | 7 | 8 | 10 | 12 => 31,
        4 | 6 | 9 | 11 => 30,
        2 => {
            if is_leap_year(year, is_gregorian) {
                29
            } else {
                28
            }
        }
        _ => unreachable!("month already validated"),
    };
    Ok(days)
}

#[cfg(test)]
mod tests {
    use super::*;

    const EPSILON: f64 = 1e-10;

    #[test]
    fn test_julian_date_creation() {
        let jd = JulianDate::from_utc(2000, 1, 1, 12, 0, 0.0).unwrap();

        // J2000.0 epoch should be exactly 2451545.0
        assert!((jd.julian_date() - J2000_JDN).abs() < EPSILON);
        assert!(jd.days_since_j2000().abs() < EPSILON);
    }

    #[test]
    fn test_julian_date_invalid_day_validation() {
        assert!(JulianDate::from_utc(2024, 2, 30, 0, 0, 0.0).is_err());
        assert!(JulianDate::from_utc(2024, 2, 29, 0, 0, 0.0).is_ok());
        assert!(JulianDate::from_utc(1900, 2, 29, 0, 0, 0.0).is_err());
        assert!(JulianDate::from_utc(1500, 2, 29, 0, 0, 0.0).is_ok());
        assert!(JulianDate::from_utc(1582, 10, 10, 0, 0, 0.0).is_err());
        assert!(JulianDate::from_utc(1582, 10, 4, 0, 0, 0.0).is_ok());
        assert!(JulianDate::from_utc(1582, 10, 15, 0, 0, 0.0).is_ok());
    }

    #[test]
    fn test_julian_date_validation() {
        assert!(JulianDate::from_utc(2024, 13, 1, 0, 0, 0.0).is_err()); // Invalid month
        assert!(JulianDate::from_utc(2024, 1, 32, 0, 0, 0.0).is_err()); // Invalid day
        assert!(JulianDate::from_utc(2024, 1, 1, 24, 0, 0.0).is_err()); // Invalid hour
        assert!(JulianDate::from_utc(2024, 1, 1, 0, 60, 0.0).is_err()); // Invalid minute
        assert!(JulianDate::from_utc(2024, 1, 1, 0, 0, 60.0).is_err()); // Invalid second
    }

    #[test]
    fn test_days_since_j2000() {
        // Half a day before the epoch
        let midnight = JulianDate::from_utc(2000, 1, 1, 0, 0, 0.0).unwrap();
        assert!((midnight.days_since_j2000() + 0.5).abs() < EPSILON);

        // 2023-01-01 00:00 UT is 8400.5 days after the epoch
        // (23 years = 8401 days including 6 leap days, minus half a day)
        let jd = JulianDate::from_utc(2023, 1, 1, 0, 0, 0.0).unwrap();
        assert!((jd.days_since_j2000() - 8400.5).abs() < EPSILON);

        // Dates before 2000 give negative day counts
        let jd = JulianDate::from_utc(1999, 12, 31, 12, 0, 0.0).unwrap();
        assert!((jd.days_since_j2000() + 1.0).abs() < EPSILON);
    }

    #[test]
    fn test_fraction_of_day() {
        let midnight = JulianDate::from_utc(2023, 6, 21, 0, 0, 0.0).unwrap();
        assert!(midnight.fraction_of_day().abs() < EPSILON);
        assert!(midnight.hour_of_day().abs() < EPSILON);

        let noon = JulianDate::from_utc(2023, 6, 21, 12, 0, 0.0).unwrap();
        assert!((noon.fraction_of_day() - 0.5).abs() < EPSILON);
        assert!((noon.hour_of_day() - 12.0).abs() < EPSILON);

        let evening = JulianDate::from_utc(2023, 6, 21, 18, 0, 0.0).unwrap();
        assert!((evening.fraction_of_day() - 0.75).abs() < EPSILON);
        assert!((evening.hour_of_day() - 18.0).abs() < EPSILON);

        let quarter_past = JulianDate::from_utc(2023, 6, 21, 6, 15, 0.0).unwrap();
        assert!((quarter_past.hour_of_day() - 6.25).abs() < 1e-8);
    }

    #[test]
    fn test_add_days() {
        let jd = JulianDate::from_utc(2019, 1, 1, 0, 0, 0.0).unwrap();
        let next_noon = jd.add_days(1.5);
        assert!((next_noon.julian_date() - jd.julian_date() - 1.5).abs() < EPSILON);
        assert!((next_noon.hour_of_day() - 12.0).abs() < 1e-8);
    }

    #[test]
    fn test_gregorian_calendar_correction() {
        // Test dates before and after Gregorian calendar adoption
        // October 4, 1582 was followed by October 15, 1582
        let julian_date = JulianDate::from_utc(1582, 10, 4, 12, 0, 0.0).unwrap();
        let gregorian_date = JulianDate::from_utc(1582, 10, 15, 12, 0, 0.0).unwrap();

        // The calendar dates are 11 days apart, but in Julian Day Numbers they should be 1 day apart
        // because the 10-day gap was artificial
        let diff = gregorian_date.julian_date() - julian_date.julian_date();
        assert!(
            (diff - 1.0).abs() < 1e-6,
            "Expected 1 day difference in JD, got {diff}"
        );
    }

    #[test]
    fn test_specific_julian_dates() {
        // Test some well-known dates

        // Unix epoch: 1970-01-01 00:00:00 UTC
        let unix_epoch = JulianDate::from_utc(1970, 1, 1, 0, 0, 0.0).unwrap();
        assert!((unix_epoch.julian_date() - 2_440_587.5).abs() < 1e-6);

        // Y2K: 2000-01-01 00:00:00 UTC
        let y2k = JulianDate::from_utc(2000, 1, 1, 0, 0, 0.0).unwrap();
        assert!((y2k.julian_date() - 2_451_544.5).abs() < 1e-6);
    }

    #[test]
    #[cfg(feature = "chrono")]
    fn test_from_datetime_matches_from_utc() {
        use chrono::{DateTime, Utc};

        let datetime = "2023-01-01T00:00:00Z".parse::<DateTime<Utc>>().unwrap();
        let from_datetime = JulianDate::from_datetime(&datetime).unwrap();
        let from_utc = JulianDate::from_utc(2023, 1, 1, 0, 0, 0.0).unwrap();

        assert!((from_datetime.julian_date() - from_utc.julian_date()).abs() < EPSILON);
    }
}
