//! Shared pieces of the command-line binaries: engine selection, output
//! filename vetting, and `YYYY.MM.DD` date handling.

use crate::error::Error;
use crate::geometry::SolarEngine;
use crate::simplified::DeclinationModel;
use crate::Result;
use chrono::{Datelike, NaiveDate};

/// Computation pipeline choices offered on the command line.
#[derive(Debug, Clone, Copy, PartialEq, Eq, clap::ValueEnum)]
pub enum EngineChoice {
    /// Mean-element almanac pipeline.
    Almanac,
    /// Simplified declination-only pipeline.
    Simplified,
}

impl EngineChoice {
    /// Resolves the choice into an engine. `model_variant` selects the
    /// declination model for the simplified pipeline and is ignored by the
    /// almanac.
    ///
    /// # Errors
    /// Returns error for an undefined model variant.
    pub fn to_engine(self, model_variant: u8) -> Result<SolarEngine> {
        match self {
            Self::Almanac => Ok(SolarEngine::Almanac),
            Self::Simplified => Ok(SolarEngine::Simplified(DeclinationModel::from_variant(
                model_variant,
            )?)),
        }
    }
}

/// Characters rejected in output filenames: path separators, shell
/// metacharacters, and quoting trouble.
const PROBLEM_CHARS: &str = "/\\?%*:|<>'`\"";

/// Vets an output filename: non-empty, ASCII printable, no whitespace, and
/// none of the characters that misbehave in shells or cross-platform paths.
/// Keeps `-f` values confined to plain names in the working directory.
///
/// # Errors
/// Returns error describing the first objection.
pub fn check_output_filename(filename: &str) -> Result<()> {
    if filename.is_empty() {
        return Err(Error::computation_error("output filename may not be empty"));
    }
    for c in filename.chars() {
        if !c.is_ascii_graphic() {
            return Err(Error::computation_error(
                "output filename is limited to printable ASCII with no whitespace",
            ));
        }
        if PROBLEM_CHARS.contains(c) {
            return Err(Error::computation_error(
                "output filename may not contain path or shell metacharacters",
            ));
        }
    }
    Ok(())
}

/// Parses a `YYYY.MM.DD` date into its year and day of year in `0..=364`.
///
/// December 31 of a leap year folds onto day 364, matching the 365-day
/// charts.
///
/// # Errors
/// Returns error if the text is not a valid `YYYY.MM.DD` date.
pub fn parse_chart_date(date: &str) -> Result<(i32, u16)> {
    let parsed = NaiveDate::parse_from_str(date, "%Y.%m.%d")
        .map_err(|_| Error::invalid_datetime("date must use the YYYY.MM.DD format"))?;
    let day_of_year = parsed.ordinal0().min(364) as u16;
    Ok((parsed.year(), day_of_year))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_engine_choice_resolution() {
        assert_eq!(
            EngineChoice::Almanac.to_engine(1).unwrap(),
            SolarEngine::Almanac
        );
        assert_eq!(
            EngineChoice::Simplified.to_engine(1).unwrap(),
            SolarEngine::Simplified(DeclinationModel::Cosine)
        );
        assert_eq!(
            EngineChoice::Simplified.to_engine(2).unwrap(),
            SolarEngine::Simplified(DeclinationModel::EccentricityCorrected)
        );
        assert!(EngineChoice::Simplified.to_engine(3).is_err());
    }

    #[test]
    fn test_filename_vetting() {
        assert!(check_output_filename("twilight_year_200.png").is_ok());
        assert!(check_output_filename("a-b.c_d").is_ok());

        assert!(check_output_filename("").is_err());
        assert!(check_output_filename("has space.png").is_err());
        assert!(check_output_filename("tab\there").is_err());
        assert!(check_output_filename("dir/file.png").is_err());
        assert!(check_output_filename("back\\slash").is_err());
        assert!(check_output_filename("wild*card").is_err());
        assert!(check_output_filename("quo\"te").is_err());
        assert!(check_output_filename("tick'mark").is_err());
        assert!(check_output_filename("percent%20").is_err());
        assert!(check_output_filename("dégrée.png").is_err());
    }

    #[test]
    fn test_chart_date_parsing() {
        assert_eq!(parse_chart_date("2019.01.01").unwrap(), (2019, 0));
        assert_eq!(parse_chart_date("2019.06.21").unwrap(), (2019, 171));
        assert_eq!(parse_chart_date("2019.12.31").unwrap(), (2019, 364));
        // Leap-year December 31 folds onto the last chart row.
        assert_eq!(parse_chart_date("2020.12.31").unwrap(), (2020, 364));

        assert!(parse_chart_date("2019-06-21").is_err());
        assert!(parse_chart_date("not a date").is_err());
        assert!(parse_chart_date("2019.13.01").is_err());
    }
}
