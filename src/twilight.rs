//! Twilight band classification.
//!
//! Maps a zenith angle to one of twelve bands: six daylight bands of 15°
//! each (L6 overhead down to L1 just above the horizon), the three
//! twilight bands at their conventional 6° depression steps (civil,
//! nautical, astronomical), and three night bands (D1 through D3) splitting
//! the rest of the sphere. The upper edge of every band is inclusive, so a
//! zenith of exactly 90° still counts as daylight and 96° as civil twilight.

use core::fmt;

/// One of the twelve daylight/twilight/night bands.
///
/// Ordered by ascending zenith angle: `L6 < L5 < … < L1 < Civil < Nautical
/// < Astronomical < D1 < D2 < D3`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum TwilightBand {
    /// Sun 75° to 90° above the horizon (zenith at most 15°).
    L6,
    /// Sun 60° to 75° up.
    L5,
    /// Sun 45° to 60° up.
    L4,
    /// Sun 30° to 45° up.
    L3,
    /// Sun 15° to 30° up.
    L2,
    /// Sun on the horizon to 15° up.
    L1,
    /// Civil twilight: sun as much as 6° below the horizon.
    Civil,
    /// Nautical twilight: sun 6° to 12° below the horizon.
    Nautical,
    /// Astronomical twilight: sun 12° to 18° below the horizon.
    Astronomical,
    /// Night, sun 18° to 42° below the horizon.
    D1,
    /// Night, sun 42° to 66° below the horizon.
    D2,
    /// Night, sun 66° to 90° below the horizon.
    D3,
}

/// Coarse grouping of the twelve bands, as used by the latitude report.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum BandCategory {
    /// Sun above the horizon (bands L6 through L1).
    Daylight,
    /// Civil twilight.
    Civil,
    /// Nautical twilight.
    Nautical,
    /// Astronomical twilight.
    Astronomical,
    /// Sun more than 18° below the horizon (bands D1 through D3).
    Night,
}

impl TwilightBand {
    /// All bands in ascending zenith order.
    pub const ALL: [Self; 12] = [
        Self::L6,
        Self::L5,
        Self::L4,
        Self::L3,
        Self::L2,
        Self::L1,
        Self::Civil,
        Self::Nautical,
        Self::Astronomical,
        Self::D1,
        Self::D2,
        Self::D3,
    ];

    /// Classifies a zenith angle into its band.
    ///
    /// Total over all inputs: values below 0° saturate to [`L6`](Self::L6),
    /// values above 180° (or NaN) to [`D3`](Self::D3).
    ///
    /// # Example
    /// ```
    /// # use solar_twilight::twilight::TwilightBand;
    /// assert_eq!(TwilightBand::classify(90.0), TwilightBand::L1);
    /// assert_eq!(TwilightBand::classify(90.1), TwilightBand::Civil);
    /// ```
    #[must_use]
    pub fn classify(zenith_angle: f64) -> Self {
        for band in Self::ALL {
            if zenith_angle <= band.max_zenith() {
                return band;
            }
        }
        Self::D3
    }

    /// Gets the band's inclusive upper zenith bound in degrees.
    #[must_use]
    pub const fn max_zenith(&self) -> f64 {
        match self {
            Self::L6 => 15.0,
            Self::L5 => 30.0,
            Self::L4 => 45.0,
            Self::L3 => 60.0,
            Self::L2 => 75.0,
            Self::L1 => 90.0,
            Self::Civil => 96.0,
            Self::Nautical => 102.0,
            Self::Astronomical => 108.0,
            Self::D1 => 132.0,
            Self::D2 => 156.0,
            Self::D3 => 180.0,
        }
    }

    /// Gets the band's short label.
    #[must_use]
    pub const fn label(&self) -> &'static str {
        match self {
            Self::L6 => "L6",
            Self::L5 => "L5",
            Self::L4 => "L4",
            Self::L3 => "L3",
            Self::L2 => "L2",
            Self::L1 => "L1",
            Self::Civil => "C",
            Self::Nautical => "N",
            Self::Astronomical => "A",
            Self::D1 => "D1",
            Self::D2 => "D2",
            Self::D3 => "D3",
        }
    }

    /// Gets the coarse category this band belongs to.
    #[must_use]
    pub const fn category(&self) -> BandCategory {
        match self {
            Self::L6 | Self::L5 | Self::L4 | Self::L3 | Self::L2 | Self::L1 => {
                BandCategory::Daylight
            }
            Self::Civil => BandCategory::Civil,
            Self::Nautical => BandCategory::Nautical,
            Self::Astronomical => BandCategory::Astronomical,
            Self::D1 | Self::D2 | Self::D3 => BandCategory::Night,
        }
    }
}

impl fmt::Display for TwilightBand {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

impl BandCategory {
    /// All categories in ascending zenith order.
    pub const ALL: [Self; 5] = [
        Self::Daylight,
        Self::Civil,
        Self::Nautical,
        Self::Astronomical,
        Self::Night,
    ];

    /// Gets the category's display name.
    #[must_use]
    pub const fn label(&self) -> &'static str {
        match self {
            Self::Daylight => "Daylight",
            Self::Civil => "Civil",
            Self::Nautical => "Nautical",
            Self::Astronomical => "Astronomical",
            Self::Night => "Night",
        }
    }
}

impl fmt::Display for BandCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// Per-band tally of observations.
///
/// The merge of two counts is independent of accumulation and merge order,
/// so tallies can be built in parallel and combined.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct BandCounts {
    counts: [u64; 12],
}

impl BandCounts {
    /// Creates an empty tally.
    #[must_use]
    pub const fn new() -> Self {
        Self { counts: [0; 12] }
    }

    /// Records one observation of a band.
    pub fn record(&mut self, band: TwilightBand) {
        self.counts[band as usize] += 1;
    }

    /// Records `count` observations of a band at once.
    pub fn add(&mut self, band: TwilightBand, count: u64) {
        self.counts[band as usize] += count;
    }

    /// Gets the tally for one band.
    #[must_use]
    pub const fn count(&self, band: TwilightBand) -> u64 {
        self.counts[band as usize]
    }

    /// Sums the tallies of all bands in a category.
    #[must_use]
    pub fn category_count(&self, category: BandCategory) -> u64 {
        TwilightBand::ALL
            .iter()
            .filter(|band| band.category() == category)
            .map(|band| self.count(*band))
            .sum()
    }

    /// Sums all tallies.
    #[must_use]
    pub fn total(&self) -> u64 {
        self.counts.iter().sum()
    }

    /// Adds another tally into this one.
    pub fn merge(&mut self, other: &Self) {
        for (mine, theirs) in self.counts.iter_mut().zip(other.counts.iter()) {
            *mine += theirs;
        }
    }
}
