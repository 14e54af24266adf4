//! Latitude daylight report.
//!
//! Sweeps every integer latitude from the south pole to the north pole,
//! tallies a full year of minutes into the coarse light categories
//! (daylight, the three twilights, night), and reports the totals per
//! latitude plus the latitude holding the maximum of each category. The
//! sweep answers questions like "who gets the most civil twilight?" - the
//! high-sixties latitudes, as it turns out, not the poles.
//!
//! Latitudes are independent, so the sweep fans out across a rayon thread
//! pool; rows come back in south-to-north order regardless of scheduling.

use crate::error::Error;
use crate::geometry::SolarEngine;
use crate::twilight::{BandCategory, BandCounts, TwilightBand};
use crate::Result;
use rayon::prelude::*;
use std::io::Write;

const MINUTES_PER_DAY: u32 = 24 * 60;
const DAYS_PER_REPORT_YEAR: u32 = 365;

/// Minutes of each light category over one year at one latitude.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LatitudeMinutes {
    latitude: i32,
    interval_minutes: u32,
    counts: BandCounts,
}

impl LatitudeMinutes {
    /// Gets the observer latitude in degrees.
    #[must_use]
    pub const fn latitude(&self) -> i32 {
        self.latitude
    }

    /// Gets the per-band sample tallies behind the category totals.
    #[must_use]
    pub const fn counts(&self) -> BandCounts {
        self.counts
    }

    /// Minutes of daylight (sun at or above the horizon).
    #[must_use]
    pub fn daylight(&self) -> u64 {
        self.category_minutes(BandCategory::Daylight)
    }

    /// Minutes of twilight of any kind.
    #[must_use]
    pub fn twilight(&self) -> u64 {
        self.civil() + self.nautical() + self.astronomical()
    }

    /// Minutes of night (sun more than 18° below the horizon).
    #[must_use]
    pub fn night(&self) -> u64 {
        self.category_minutes(BandCategory::Night)
    }

    /// Minutes of civil twilight.
    #[must_use]
    pub fn civil(&self) -> u64 {
        self.category_minutes(BandCategory::Civil)
    }

    /// Minutes of nautical twilight.
    #[must_use]
    pub fn nautical(&self) -> u64 {
        self.category_minutes(BandCategory::Nautical)
    }

    /// Minutes of astronomical twilight.
    #[must_use]
    pub fn astronomical(&self) -> u64 {
        self.category_minutes(BandCategory::Astronomical)
    }

    fn category_minutes(&self, category: BandCategory) -> u64 {
        self.counts.category_count(category) * u64::from(self.interval_minutes)
    }
}

/// The latitude and minute count holding one category's maximum.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CategoryMaximum {
    category: &'static str,
    latitude: i32,
    minutes: u64,
}

impl CategoryMaximum {
    /// Gets the category name.
    #[must_use]
    pub const fn category(&self) -> &'static str {
        self.category
    }

    /// Gets the latitude holding the maximum. Ties go to the southernmost
    /// latitude.
    #[must_use]
    pub const fn latitude(&self) -> i32 {
        self.latitude
    }

    /// Gets the maximum minute count.
    #[must_use]
    pub const fn minutes(&self) -> u64 {
        self.minutes
    }
}

/// A completed latitude sweep.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LatitudeReport {
    rows: Vec<LatitudeMinutes>,
}

impl LatitudeReport {
    /// Gets the per-latitude rows in south-to-north order.
    #[must_use]
    pub fn rows(&self) -> &[LatitudeMinutes] {
        &self.rows
    }

    /// Finds the latitude with the most minutes of each category.
    #[must_use]
    pub fn maxima(&self) -> Vec<CategoryMaximum> {
        let categories: [(&'static str, fn(&LatitudeMinutes) -> u64); 6] = [
            ("Daylight", LatitudeMinutes::daylight),
            ("Twilight", LatitudeMinutes::twilight),
            ("Night", LatitudeMinutes::night),
            ("Twilight-civil", LatitudeMinutes::civil),
            ("Twilight-nautical", LatitudeMinutes::nautical),
            ("Twilight-astronomical", LatitudeMinutes::astronomical),
        ];

        let mut maxima = Vec::with_capacity(categories.len());
        for (category, minutes_of) in categories {
            let mut best: Option<CategoryMaximum> = None;
            for row in &self.rows {
                let minutes = minutes_of(row);
                if best.map_or(true, |current| minutes > current.minutes) {
                    best = Some(CategoryMaximum {
                        category,
                        latitude: row.latitude,
                        minutes,
                    });
                }
            }
            if let Some(found) = best {
                maxima.push(found);
            }
        }
        maxima
    }

    /// Writes the report as CSV: one row per latitude, then the observed
    /// maximums.
    ///
    /// # Errors
    /// Returns any error the writer reports.
    pub fn write_csv<W: Write>(&self, mut writer: W) -> std::io::Result<()> {
        writeln!(
            writer,
            "Latitude, Day, Twilight, Night, T-Civil, T-Nautical, T-Astronomical"
        )?;
        for row in &self.rows {
            writeln!(
                writer,
                "{}, {}, {}, {}, {}, {}, {}",
                row.latitude(),
                row.daylight(),
                row.twilight(),
                row.night(),
                row.civil(),
                row.nautical(),
                row.astronomical()
            )?;
        }

        writeln!(writer, "Observed maximums")?;
        writeln!(writer, "Category, Latitude, Minutes")?;
        for maximum in self.maxima() {
            writeln!(
                writer,
                "{}, {}, {}",
                maximum.category(),
                maximum.latitude(),
                maximum.minutes()
            )?;
        }
        Ok(())
    }
}

/// Runs the latitude sweep for `year`, sampling every `interval_minutes`.
///
/// Covers integer latitudes -90..=90 over 365 days. An interval of 1
/// reproduces the exact per-minute tally; coarser divisors of 1440 trade
/// resolution for speed, with each sample standing for `interval_minutes`
/// minutes.
///
/// # Errors
/// Returns error if the interval is zero or does not divide the day, if
/// `year` has no valid January 1, or if a position calculation fails.
pub fn latitude_report(
    year: i32,
    interval_minutes: u32,
    engine: SolarEngine,
) -> Result<LatitudeReport> {
    if interval_minutes == 0 || MINUTES_PER_DAY % interval_minutes != 0 {
        return Err(Error::computation_error(
            "sampling interval must be a divisor of 1440 minutes",
        ));
    }

    let rows = (-90..=90_i32)
        .into_par_iter()
        .map(|latitude| tally_latitude(year, latitude, interval_minutes, engine))
        .collect::<Result<Vec<_>>>()?;

    Ok(LatitudeReport { rows })
}

/// Tallies one latitude's year of samples.
fn tally_latitude(
    year: i32,
    latitude: i32,
    interval_minutes: u32,
    engine: SolarEngine,
) -> Result<LatitudeMinutes> {
    let mut counts = BandCounts::new();
    for day in 0..DAYS_PER_REPORT_YEAR {
        for minute in (0..MINUTES_PER_DAY).step_by(interval_minutes as usize) {
            let time_of_day = f64::from(minute) / f64::from(MINUTES_PER_DAY);
            let position = engine.solar_position_for_day(
                year,
                f64::from(day) + time_of_day,
                f64::from(latitude),
                0.0,
            )?;
            counts.record(TwilightBand::classify(position.zenith_angle()));
        }
    }
    Ok(LatitudeMinutes {
        latitude,
        interval_minutes,
        counts,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::simplified::DeclinationModel;

    fn quick_engine() -> SolarEngine {
        SolarEngine::Simplified(DeclinationModel::default())
    }

    #[test]
    fn test_interval_must_divide_the_day() {
        assert!(latitude_report(2024, 0, quick_engine()).is_err());
        assert!(latitude_report(2024, 7, quick_engine()).is_err());
        assert!(latitude_report(2024, 1441, quick_engine()).is_err());
    }

    #[test]
    fn test_single_latitude_minutes_conserved() {
        let row = tally_latitude(2024, 42, 60, quick_engine()).unwrap();
        let total = row.daylight() + row.twilight() + row.night();
        assert_eq!(total, u64::from(DAYS_PER_REPORT_YEAR) * u64::from(MINUTES_PER_DAY));
        assert_eq!(row.twilight(), row.civil() + row.nautical() + row.astronomical());
    }

    #[test]
    fn test_equator_daylight_near_half_the_year() {
        let row = tally_latitude(2024, 0, 60, quick_engine()).unwrap();
        // Roughly twelve hours of daylight per day, all year.
        let minutes = row.daylight();
        assert!(
            minutes > 230_000 && minutes < 295_000,
            "equator daylight: {minutes}"
        );
        // The tropics see hardly any twilight.
        assert!(row.twilight() < row.daylight() / 3);
    }

    #[test]
    fn test_report_rows_ordered_and_complete() {
        let report = latitude_report(2024, 480, quick_engine()).unwrap();
        assert_eq!(report.rows().len(), 181);
        assert_eq!(report.rows()[0].latitude(), -90);
        assert_eq!(report.rows()[180].latitude(), 90);
        for pair in report.rows().windows(2) {
            assert_eq!(pair[1].latitude(), pair[0].latitude() + 1);
        }
    }

    #[test]
    fn test_report_is_deterministic() {
        let first = latitude_report(2024, 480, quick_engine()).unwrap();
        let second = latitude_report(2024, 480, quick_engine()).unwrap();
        assert_eq!(first, second);
    }

    #[test]
    fn test_civil_twilight_peaks_near_the_polar_circles() {
        let report = latitude_report(2024, 60, quick_engine()).unwrap();
        let maxima = report.maxima();
        let civil = maxima
            .iter()
            .find(|m| m.category() == "Twilight-civil")
            .unwrap();
        assert!(
            civil.latitude().abs() >= 58 && civil.latitude().abs() <= 74,
            "civil twilight maximum at {}",
            civil.latitude()
        );
    }

    #[test]
    fn test_csv_layout() {
        let report = latitude_report(2024, 480, quick_engine()).unwrap();
        let mut out = Vec::new();
        report.write_csv(&mut out).unwrap();
        let text = String::from_utf8(out).unwrap();
        let mut lines = text.lines();
        assert_eq!(
            lines.next().unwrap(),
            "Latitude, Day, Twilight, Night, T-Civil, T-Nautical, T-Astronomical"
        );
        assert!(text.lines().any(|line| line == "Observed maximums"));
        assert!(text.lines().any(|line| line.starts_with("Twilight-astronomical, ")));
    }
}
