//! Validation of the simplified declination variants across the year.

use solar_twilight::simplified::{self, DeclinationModel};

const EPSILON: f64 = 1e-6;

#[test]
fn test_cosine_variant_reference_days() {
    let cases = [
        (0.0, -23.094013324),
        (31.0, -17.847333024),
        (59.5, -8.589684053),
        (81.0, -0.125002522),
        (100.0, 7.407298567),
        (171.5, 23.435649359),
        (172.0, 23.438666755),
        (200.0, 20.887572253),
        (265.0, -0.431438000),
        (300.0, -13.629161621),
        (354.0, -23.434667172),
        (364.0, -23.174345703),
    ];
    for (day, expected) in cases {
        let declination = DeclinationModel::Cosine.declination_for_day(day);
        assert!(
            (declination - expected).abs() < EPSILON,
            "day {day}: expected {expected}, got {declination}"
        );
    }
}

#[test]
fn test_eccentricity_corrected_variant_reference_days() {
    let cases = [
        (0.0, -23.078686050),
        (31.0, -17.380665300),
        (59.5, -7.780975255),
        (81.0, 0.622623638),
        (100.0, 7.941154882),
        (171.5, 23.438272717),
        (172.0, 23.439850316),
        (200.0, 20.856929561),
        (265.0, 0.328285738),
        (300.0, -12.784884836),
        (354.0, -23.429646250),
        (364.0, -23.165641231),
    ];
    for (day, expected) in cases {
        let declination = DeclinationModel::EccentricityCorrected.declination_for_day(day);
        assert!(
            (declination - expected).abs() < EPSILON,
            "day {day}: expected {expected}, got {declination}"
        );
    }
}

#[test]
fn test_variants_agree_at_solstices_diverge_at_equinoxes() {
    // The eccentricity term vanishes where its sine argument crosses zero,
    // which happens near the solstices; it peaks near the equinoxes.
    for day in [171.5, 354.0] {
        let coarse = DeclinationModel::Cosine.declination_for_day(day);
        let corrected = DeclinationModel::EccentricityCorrected.declination_for_day(day);
        assert!(
            (coarse - corrected).abs() < 0.01,
            "day {day}: solstice difference {:.4}",
            (coarse - corrected).abs()
        );
    }
    for day in [81.0, 265.0] {
        let coarse = DeclinationModel::Cosine.declination_for_day(day);
        let corrected = DeclinationModel::EccentricityCorrected.declination_for_day(day);
        assert!(
            (coarse - corrected).abs() > 0.5,
            "day {day}: equinox difference {:.4}",
            (coarse - corrected).abs()
        );
    }
}

#[test]
fn test_seasonal_shape() {
    let model = DeclinationModel::default();

    // Northern summer peak sits within a few days of the June solstice.
    let mut max_day = 0;
    let mut max_declination = f64::MIN;
    for day in 0..365 {
        let declination = model.declination_for_day(f64::from(day));
        if declination > max_declination {
            max_declination = declination;
            max_day = day;
        }
    }
    assert!(
        (168..=176).contains(&max_day),
        "peak declination on day {max_day}"
    );
    assert!((max_declination - 23.44).abs() < 0.01);

    // Rising through the first half of the year up to the peak.
    for day in 0..max_day {
        let today = model.declination_for_day(f64::from(day));
        let tomorrow = model.declination_for_day(f64::from(day) + 1.0);
        assert!(
            tomorrow > today,
            "declination must rise on day {day}: {today} -> {tomorrow}"
        );
    }
}

#[test]
fn test_solar_position_reference_cases() {
    // (day, time of day, latitude, longitude, variant, zenith, azimuth)
    let cases = [
        (0.0, 0.5, 42.6, 0.0, 2, 65.678686050, 180.0),
        (171.5, 0.5, 42.6, 0.0, 2, 19.161727283, 180.0),
        (171.5, 0.5, 42.6, 0.0, 1, 19.164350641, 180.0),
        // 06:00 UT puts the sun over 90°E; an observer there sees it overhead
        (81.0, 0.25, 0.0, 90.0, 2, 0.622623638, 0.0),
        (265.5, 0.75, -33.9, 151.2, 2, 113.650681376, 106.931133384),
        (354.0, 0.0, 68.9, 33.1, 2, 130.366484810, 41.120934051),
    ];
    for (day, time_of_day, latitude, longitude, variant, expected_zenith, expected_azimuth) in cases
    {
        let model = DeclinationModel::from_variant(variant).unwrap();
        let position =
            simplified::solar_position(day, time_of_day, latitude, longitude, model).unwrap();
        assert!(
            (position.zenith_angle() - expected_zenith).abs() < EPSILON,
            "day {day} at ({latitude}, {longitude}): zenith {} != {expected_zenith}",
            position.zenith_angle()
        );
        assert!(
            (position.azimuth() - expected_azimuth).abs() < EPSILON,
            "day {day} at ({latitude}, {longitude}): azimuth {} != {expected_azimuth}",
            position.azimuth()
        );
    }
}

#[test]
fn test_noon_zenith_is_latitude_minus_declination() {
    // On the observer's meridian the spherical triangle degenerates to a
    // great-circle arc along the meridian.
    let model = DeclinationModel::default();
    for (day, latitude) in [(0.0, 42.6), (100.0, -15.0), (171.5, 66.5), (265.0, 0.0)] {
        let declination = model.declination_for_day(day);
        let position = simplified::solar_position(day, 0.5, latitude, 0.0, model).unwrap();
        assert!(
            (position.zenith_angle() - (latitude - declination).abs()).abs() < 1e-9,
            "day {day}, latitude {latitude}"
        );
    }
}
