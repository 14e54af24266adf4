//! Pixel-level checks of the chart renderers.
//!
//! Band-field pixels are verified against independently computed zenith
//! angles, overlay pixels (legend boxes, gridlines, markers) against the
//! fixed layout.

#![cfg(feature = "charts")]

use image::Rgb;
use solar_twilight::chart::{band_color, day_cartesian_chart, day_polar_chart, year_chart};
use solar_twilight::twilight::TwilightBand;
use solar_twilight::{DeclinationModel, SolarEngine};

const WHITE: Rgb<u8> = Rgb([0xFF, 0xFF, 0xFF]);
const BLACK: Rgb<u8> = Rgb([0x00, 0x00, 0x00]);
const GRID_GREEN: Rgb<u8> = Rgb([0x00, 0x80, 0x00]);

const LATITUDE: f64 = 42.6;

fn both_engines() -> [SolarEngine; 2] {
    [
        SolarEngine::Almanac,
        SolarEngine::Simplified(DeclinationModel::default()),
    ]
}

#[test]
fn test_chart_dimensions() {
    let engine = SolarEngine::Simplified(DeclinationModel::default());

    let year = year_chart(2019, LATITUDE, engine).unwrap();
    assert_eq!((year.width(), year.height()), (1480, 1180));

    let cartesian = day_cartesian_chart(2019, 0, LATITUDE, engine).unwrap();
    assert_eq!((cartesian.width(), cartesian.height()), (1590, 870));

    let polar = day_polar_chart(2019, 0, LATITUDE, engine).unwrap();
    assert_eq!((polar.width(), polar.height()), (1000, 996));
}

#[test]
fn test_year_chart_pixels() {
    for engine in both_engines() {
        let img = year_chart(2019, LATITUDE, engine).unwrap();

        // Day 100 at 12:10 UT: the sun stands about 34.5° from the zenith
        // with either engine, so the row for that minute is L4 gray.
        assert_eq!(
            *img.get_pixel(760, 376),
            band_color(TwilightBand::L4),
            "{engine:?}: day 100 noon column"
        );
        // Day 0 at 00:30 UT: deep night, about 159.6° zenith.
        assert_eq!(
            *img.get_pixel(60, 76),
            band_color(TwilightBand::D3),
            "{engine:?}: day 0 midnight column"
        );

        // Legend boxes run night to daylight left to right from x = 450,
        // 50 pixels per box: D3 first, nautical fifth, civil sixth.
        assert_eq!(*img.get_pixel(460, 20), band_color(TwilightBand::D3));
        assert_eq!(*img.get_pixel(660, 20), band_color(TwilightBand::Nautical));
        assert_eq!(*img.get_pixel(710, 20), band_color(TwilightBand::Civil));

        // Long hour tick above the plot at 12:00.
        assert_eq!(*img.get_pixel(750, 70), BLACK);

        // Plus mark at noon on the June solstice row (day 171), with its
        // white anti-halo corner over the L5 band field.
        assert_eq!(*img.get_pixel(750, 588), BLACK);
        assert_eq!(*img.get_pixel(749, 587), WHITE);
    }
}

#[test]
fn test_day_cartesian_chart_pixels() {
    let engine = SolarEngine::Simplified(DeclinationModel::default());
    let img = day_cartesian_chart(2019, 0, LATITUDE, engine).unwrap();

    // 12:05 UT on January 1: zenith about 65.7°, an L2 column with the
    // altitude blip at row 351.
    assert_eq!(*img.get_pixel(775, 100), band_color(TwilightBand::L2));
    assert_eq!(*img.get_pixel(775, 351), BLACK);

    // Midnight-side column is D3 with a white blip below the horizon.
    assert_eq!(*img.get_pixel(52, 310), band_color(TwilightBand::D3));
    assert_eq!(*img.get_pixel(50, 773), WHITE);

    // Green horizon line across the middle of the plot.
    assert_eq!(*img.get_pixel(775, 460), GRID_GREEN);

    // D1 box of the altitude-aligned legend in the right margin.
    assert_eq!(*img.get_pixel(1520, 600), band_color(TwilightBand::D1));
}

#[test]
fn test_day_polar_chart_pixels() {
    let engine = SolarEngine::Simplified(DeclinationModel::default());
    let img = day_polar_chart(2019, 0, LATITUDE, engine).unwrap();

    let (xc, yc) = (500_i64, 526_i64);

    // Nadir-centered bullseye: D3 black at the center, the L5 ring 394
    // pixels to the right (between the L4 disc at 375 and the L5 disc at 412).
    assert_eq!(*img.get_pixel(500, 526), band_color(TwilightBand::D3));
    assert_eq!(*img.get_pixel(894, 526), band_color(TwilightBand::L5));

    // The night half of the sun track is drawn white over the dark inner
    // rings; at 42.6°N on January 1 it bottoms out about 49 pixels from
    // the center. The daylight half is black over the L1/L2 rings.
    let mut white_on_night_track = false;
    let mut black_on_day_track = false;
    for (x, y, pixel) in img.enumerate_pixels() {
        let dx = i64::from(x) - xc;
        let dy = i64::from(y) - yc;
        let dist_squared = dx * dx + dy * dy;
        if dist_squared <= 180 * 180 && *pixel == WHITE {
            white_on_night_track = true;
        }
        if (227 * 227..=284 * 284).contains(&dist_squared) && *pixel == BLACK {
            black_on_day_track = true;
        }
    }
    assert!(white_on_night_track, "night track must cross the inner rings");
    assert!(black_on_day_track, "day track must cross the daylight rings");
}

#[test]
fn test_day_of_year_validation() {
    for engine in both_engines() {
        assert!(day_cartesian_chart(2019, 365, LATITUDE, engine).is_err());
        assert!(day_polar_chart(2019, 365, LATITUDE, engine).is_err());
        assert!(day_cartesian_chart(2019, 364, LATITUDE, engine).is_ok());
    }
}

#[test]
fn test_latitude_validation() {
    let engine = SolarEngine::Almanac;
    assert!(year_chart(2019, 95.0, engine).is_err());
    assert!(day_cartesian_chart(2019, 0, -95.0, engine).is_err());
    assert!(day_polar_chart(2019, 0, f64::NAN, engine).is_err());
}
