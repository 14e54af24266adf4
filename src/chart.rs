//! PNG rendering of the twilight bands.
//!
//! Three views over one observer sitting on the prime meridian: a year view
//! (one stripe of minute columns per day, 365 days top to bottom), a
//! cartesian day view (minute columns against solar altitude), and a polar
//! day view (the sun's altitude/azimuth track on a nadir-centered disc).
//! Every pixel field is colored by [`TwilightBand`]; the solar positions run
//! through the caller's [`SolarEngine`].
//!
//! The renderings are plain pixel work on an [`RgbImage`], no text. Axis
//! ticks, gridlines, and the legend color boxes carry the annotation load.

use crate::error::Error;
use crate::geometry::SolarEngine;
use crate::math::{cos, degrees_to_radians, sin};
use crate::twilight::TwilightBand;
use crate::{Result, SolarPosition};
use image::{Rgb, RgbImage};

const MINUTES_PER_DAY: u32 = 24 * 60;
/// Charts always draw 365 rows; in a leap year the view simply ends at
/// December 30.
const DAYS_PER_CHART_YEAR: u32 = 365;

const WHITE: Rgb<u8> = Rgb([0xFF, 0xFF, 0xFF]);
const BLACK: Rgb<u8> = Rgb([0x00, 0x00, 0x00]);
const GRID_GREEN: Rgb<u8> = Rgb([0x00, 0x80, 0x00]);

// Year view layout.
const YEAR_LEFT_MARGIN: u32 = 30;
const YEAR_RIGHT_MARGIN: u32 = 10;
const YEAR_TOP_MARGIN: u32 = 75;
const YEAR_BOTTOM_MARGIN: u32 = 10;
const YEAR_ROW_HEIGHT: u32 = 3;
const LEGEND_LEFT: u32 = 450;
const LEGEND_BOX_WIDTH: u32 = 50;
const LEGEND_ROW_HEIGHT: u32 = 15;

// Cartesian day view layout.
const DAY_LEFT_MARGIN: u32 = 50;
const DAY_RIGHT_MARGIN: u32 = 100;
const DAY_TOP_MARGIN: u32 = 60;
const DAY_BOTTOM_MARGIN: u32 = 10;
const DAY_PLOT_HEIGHT: u32 = 800;
const DAY_LEGEND_BOX_WIDTH: u32 = 60;

// Polar day view layout.
const POLAR_LEFT_MARGIN: u32 = 50;
const POLAR_RIGHT_MARGIN: u32 = 50;
const POLAR_TOP_MARGIN: u32 = 76;
const POLAR_BOTTOM_MARGIN: u32 = 20;
const POLAR_RADIUS: u32 = 450;

/// First day (0 = January 1) of each month in a non-leap year.
const MONTH_START_DAYS: [u32; 12] = [0, 31, 59, 90, 120, 151, 181, 212, 243, 273, 304, 334];
/// Days close to the equinoxes and solstices, marked in the year view.
const QUARTER_DAY_MARKS: [u32; 4] = [79, 171, 263, 354];

/// Display colors of the twelve bands, index-aligned with
/// [`TwilightBand::ALL`]: near-white grays through daylight, distinct hues
/// for the three twilights, deepening grays to black through the night.
const BAND_COLORS: [Rgb<u8>; 12] = [
    Rgb([0xFF, 0xFF, 0xFF]), // L6
    Rgb([0xF8, 0xF8, 0xF8]), // L5
    Rgb([0xF0, 0xF0, 0xF0]), // L4
    Rgb([0xE8, 0xE8, 0xE8]), // L3
    Rgb([0xE0, 0xE0, 0xE0]), // L2
    Rgb([0xD0, 0xD0, 0xD0]), // L1
    Rgb([0xEA, 0x5D, 0x0D]), // civil
    Rgb([0x0D, 0x3C, 0x89]), // nautical
    Rgb([0x60, 0x70, 0x60]), // astronomical
    Rgb([0x30, 0x30, 0x30]), // D1
    Rgb([0x18, 0x18, 0x18]), // D2
    Rgb([0x00, 0x00, 0x00]), // D3
];

/// Gets the plot color of a band.
#[must_use]
pub const fn band_color(band: TwilightBand) -> Rgb<u8> {
    BAND_COLORS[band as usize]
}

/// Renders the year view.
///
/// One stripe of [`YEAR_ROW_HEIGHT`]-pixel rows per day, one column per
/// minute of UT, colored by the twilight band at that minute. Hour and
/// month-start gridlines, equinox/solstice markers, and the twelve-box
/// legend are drawn over the band field. The image is 1480x1180 pixels.
///
/// # Errors
/// Returns error if `year` has no valid January 1 or the latitude is out of
/// range.
pub fn year_chart(year: i32, observer_latitude: f64, engine: SolarEngine) -> Result<RgbImage> {
    let width = YEAR_LEFT_MARGIN + MINUTES_PER_DAY + YEAR_RIGHT_MARGIN;
    let height = YEAR_TOP_MARGIN + DAYS_PER_CHART_YEAR * YEAR_ROW_HEIGHT + YEAR_BOTTOM_MARGIN;
    let mut img = RgbImage::from_pixel(width, height, WHITE);

    for day in 0..DAYS_PER_CHART_YEAR {
        let y = YEAR_TOP_MARGIN + day * YEAR_ROW_HEIGHT;
        for minute in 0..MINUTES_PER_DAY {
            let band = band_at_minute(engine, year, day, minute, observer_latitude)?;
            let x = YEAR_LEFT_MARGIN + minute;
            fill_rect(&mut img, x, y, x, y + YEAR_ROW_HEIGHT - 1, band_color(band));
        }
    }

    draw_year_legend(&mut img);
    draw_year_time_axis(&mut img);
    draw_year_month_lines(&mut img);
    draw_year_quarter_marks(&mut img);
    Ok(img)
}

/// Renders the cartesian day view.
///
/// One column per minute of UT, filled with the band color top to bottom,
/// with a contrasting blip at the sun's altitude and a green horizon line
/// across the middle. A band legend fills the right margin and altitude
/// ticks the left. The image is 1590x870 pixels.
///
/// # Errors
/// Returns error for a day of year outside `0..=364`, a year with no valid
/// January 1, or a latitude out of range.
pub fn day_cartesian_chart(
    year: i32,
    day_of_year: u16,
    observer_latitude: f64,
    engine: SolarEngine,
) -> Result<RgbImage> {
    check_day_of_year(day_of_year)?;
    let width = DAY_LEFT_MARGIN + MINUTES_PER_DAY + DAY_RIGHT_MARGIN;
    let height = DAY_TOP_MARGIN + DAY_PLOT_HEIGHT + DAY_BOTTOM_MARGIN;
    let mut img = RgbImage::from_pixel(width, height, WHITE);

    let pixels_per_degree = f64::from(DAY_PLOT_HEIGHT) / 180.0;
    for minute in 0..MINUTES_PER_DAY {
        let zenith = zenith_at_minute(engine, year, day_of_year, minute, observer_latitude)?;
        let x = DAY_LEFT_MARGIN + minute;
        let band = TwilightBand::classify(zenith);
        fill_rect(
            &mut img,
            x,
            DAY_TOP_MARGIN,
            x,
            DAY_TOP_MARGIN + DAY_PLOT_HEIGHT,
            band_color(band),
        );

        // Altitude blip, black above the horizon and white below.
        let blip = if zenith <= 90.0 { BLACK } else { WHITE };
        let y = DAY_TOP_MARGIN + (pixels_per_degree * zenith) as u32;
        fill_rect(&mut img, x, y, x, y, blip);
    }

    let horizon_y = DAY_TOP_MARGIN + DAY_PLOT_HEIGHT / 2;
    fill_rect(
        &mut img,
        DAY_LEFT_MARGIN,
        horizon_y,
        DAY_LEFT_MARGIN + MINUTES_PER_DAY,
        horizon_y,
        GRID_GREEN,
    );

    draw_day_band_legend(&mut img);
    draw_day_time_axis(&mut img);
    draw_day_altitude_scale(&mut img);
    draw_day_grid_dots(&mut img);
    Ok(img)
}

/// Renders the polar day view.
///
/// The observer faces south from the center of a disc: nadir at the center,
/// zenith at the rim, north at six o'clock, azimuth increasing clockwise.
/// The background is a bullseye of band-colored rings from D3 black in the
/// middle to L6 white at the rim; the sun's minute-by-minute track is drawn
/// over it with hourly tick spokes. The image is 1000x996 pixels.
///
/// # Errors
/// Returns error for a day of year outside `0..=364`, a year with no valid
/// January 1, or a latitude out of range.
pub fn day_polar_chart(
    year: i32,
    day_of_year: u16,
    observer_latitude: f64,
    engine: SolarEngine,
) -> Result<RgbImage> {
    check_day_of_year(day_of_year)?;
    let width = POLAR_LEFT_MARGIN + 2 * POLAR_RADIUS + POLAR_RIGHT_MARGIN;
    let height = POLAR_TOP_MARGIN + 2 * POLAR_RADIUS + POLAR_BOTTOM_MARGIN;
    let mut img = RgbImage::from_pixel(width, height, WHITE);

    let xc = i64::from(POLAR_LEFT_MARGIN + POLAR_RADIUS);
    let yc = i64::from(POLAR_TOP_MARGIN + POLAR_RADIUS);
    let radius = f64::from(POLAR_RADIUS);

    // Band bullseye, drawn largest disc first so every band keeps an
    // annulus between its own edge and the next band's disc.
    let mut lower_bound = 0.0;
    for band in TwilightBand::ALL {
        let degrees_from_nadir = 180.0 - lower_bound;
        let disc_radius = (degrees_from_nadir / 180.0 * radius) as i64;
        draw_disc(&mut img, xc, yc, disc_radius, band_color(band));
        lower_bound = band.max_zenith();
    }
    draw_circle_outline(&mut img, xc, yc, radius, BLACK);

    // Sun track with hourly tick spokes.
    for minute in 0..MINUTES_PER_DAY {
        let position = position_at_minute(engine, year, day_of_year, minute, observer_latitude)?;
        let zenith = position.zenith_angle();
        let azimuth_rad = degrees_to_radians(position.azimuth());
        let factor = 1.0 - zenith / 180.0;

        let x = xc - (sin(azimuth_rad) * factor * radius) as i64;
        let y = yc + (cos(azimuth_rad) * factor * radius) as i64;
        let color = if zenith > 90.0 { WHITE } else { BLACK };
        fill_square2(&mut img, x, y, color);

        if minute % 60 == 0 {
            let x2 = xc - (sin(azimuth_rad) * factor * (radius + 10.0)) as i64;
            let y2 = yc + (cos(azimuth_rad) * factor * (radius + 10.0)) as i64;
            draw_segment(&mut img, x, y, x2, y2, GRID_GREEN);
        }
    }

    // Azimuth ticks every 10° crossing the rim.
    for azimuth_deg in (0..360).step_by(10) {
        let azimuth_rad = degrees_to_radians(f64::from(azimuth_deg));
        let x1 = xc - (sin(azimuth_rad) * (radius - 2.0)) as i64;
        let y1 = yc + (cos(azimuth_rad) * (radius - 2.0)) as i64;
        let x2 = xc - (sin(azimuth_rad) * (radius + 2.0)) as i64;
        let y2 = yc + (cos(azimuth_rad) * (radius + 2.0)) as i64;
        draw_segment(&mut img, x1, y1, x2, y2, BLACK);
    }

    Ok(img)
}

fn check_day_of_year(day_of_year: u16) -> Result<()> {
    if day_of_year > 364 {
        return Err(Error::invalid_datetime("day of year must be in range 0..=364"));
    }
    Ok(())
}

fn band_at_minute(
    engine: SolarEngine,
    year: i32,
    day: u32,
    minute: u32,
    latitude: f64,
) -> Result<TwilightBand> {
    let time_of_day = f64::from(minute) / f64::from(MINUTES_PER_DAY);
    let position =
        engine.solar_position_for_day(year, f64::from(day) + time_of_day, latitude, 0.0)?;
    Ok(TwilightBand::classify(position.zenith_angle()))
}

fn zenith_at_minute(
    engine: SolarEngine,
    year: i32,
    day_of_year: u16,
    minute: u32,
    latitude: f64,
) -> Result<f64> {
    position_at_minute(engine, year, day_of_year, minute, latitude)
        .map(|position| position.zenith_angle())
}

fn position_at_minute(
    engine: SolarEngine,
    year: i32,
    day_of_year: u16,
    minute: u32,
    latitude: f64,
) -> Result<SolarPosition> {
    let time_of_day = f64::from(minute) / f64::from(MINUTES_PER_DAY);
    engine.solar_position_for_day(year, f64::from(day_of_year) + time_of_day, latitude, 0.0)
}

// Pixel helpers. Rectangles take inclusive corners and clip to the image.

fn fill_rect(img: &mut RgbImage, x0: u32, y0: u32, x1: u32, y1: u32, color: Rgb<u8>) {
    let x_end = x1.min(img.width().saturating_sub(1));
    let y_end = y1.min(img.height().saturating_sub(1));
    for y in y0..=y_end {
        for x in x0..=x_end {
            img.put_pixel(x, y, color);
        }
    }
}

fn rect_outline(img: &mut RgbImage, x0: u32, y0: u32, x1: u32, y1: u32, color: Rgb<u8>) {
    fill_rect(img, x0, y0, x1, y0, color);
    fill_rect(img, x0, y1, x1, y1, color);
    fill_rect(img, x0, y0, x0, y1, color);
    fill_rect(img, x1, y0, x1, y1, color);
}

fn put_pixel_signed(img: &mut RgbImage, x: i64, y: i64, color: Rgb<u8>) {
    if x >= 0 && y >= 0 {
        let (x, y) = (x.unsigned_abs() as u32, y.unsigned_abs() as u32);
        if x < img.width() && y < img.height() {
            img.put_pixel(x, y, color);
        }
    }
}

/// 2x2 block standing in for a width-2 point on the sun track.
fn fill_square2(img: &mut RgbImage, x: i64, y: i64, color: Rgb<u8>) {
    for dy in 0..2 {
        for dx in 0..2 {
            put_pixel_signed(img, x + dx, y + dy, color);
        }
    }
}

fn draw_disc(img: &mut RgbImage, xc: i64, yc: i64, radius: i64, color: Rgb<u8>) {
    let r_squared = radius * radius;
    for dy in -radius..=radius {
        for dx in -radius..=radius {
            if dx * dx + dy * dy <= r_squared {
                put_pixel_signed(img, xc + dx, yc + dy, color);
            }
        }
    }
}

fn draw_circle_outline(img: &mut RgbImage, xc: i64, yc: i64, radius: f64, color: Rgb<u8>) {
    // Step fine enough that adjacent plotted pixels touch.
    let steps = (radius * 8.0) as u32;
    for step in 0..steps {
        let angle = f64::from(step) / f64::from(steps) * 2.0 * crate::math::PI;
        let x = xc + (cos(angle) * radius) as i64;
        let y = yc + (sin(angle) * radius) as i64;
        put_pixel_signed(img, x, y, color);
    }
}

fn draw_segment(img: &mut RgbImage, x0: i64, y0: i64, x1: i64, y1: i64, color: Rgb<u8>) {
    let steps = (x1 - x0).abs().max((y1 - y0).abs());
    if steps == 0 {
        put_pixel_signed(img, x0, y0, color);
        return;
    }
    for step in 0..=steps {
        let t = step as f64 / steps as f64;
        let x = x0 + ((x1 - x0) as f64 * t) as i64;
        let y = y0 + ((y1 - y0) as f64 * t) as i64;
        put_pixel_signed(img, x, y, color);
    }
}

/// Twelve legend boxes across the top of the year view, night on the left
/// through daylight on the right, with boundary ticks and category dividers.
fn draw_year_legend(img: &mut RgbImage) {
    let order = [
        TwilightBand::D3,
        TwilightBand::D2,
        TwilightBand::D1,
        TwilightBand::Astronomical,
        TwilightBand::Nautical,
        TwilightBand::Civil,
        TwilightBand::L1,
        TwilightBand::L2,
        TwilightBand::L3,
        TwilightBand::L4,
        TwilightBand::L5,
        TwilightBand::L6,
    ];
    let top = LEGEND_ROW_HEIGHT;
    let bottom = 2 * LEGEND_ROW_HEIGHT;
    for (i, band) in order.iter().enumerate() {
        let x0 = LEGEND_LEFT + i as u32 * LEGEND_BOX_WIDTH;
        fill_rect(img, x0, top, x0 + LEGEND_BOX_WIDTH, bottom, band_color(*band));
    }

    let right = LEGEND_LEFT + 12 * LEGEND_BOX_WIDTH;
    for i in 0..=12 {
        let x = LEGEND_LEFT + i * LEGEND_BOX_WIDTH;
        fill_rect(img, x, bottom, x, bottom + 3, BLACK);
    }
    rect_outline(img, LEGEND_LEFT, 0, right, bottom, BLACK);
    fill_rect(img, LEGEND_LEFT, top, right, top, BLACK);
    // Night/twilight and twilight/daylight dividers.
    fill_rect(img, LEGEND_LEFT + 3 * LEGEND_BOX_WIDTH, 0, LEGEND_LEFT + 3 * LEGEND_BOX_WIDTH, bottom, BLACK);
    fill_rect(img, LEGEND_LEFT + 6 * LEGEND_BOX_WIDTH, 0, LEGEND_LEFT + 6 * LEGEND_BOX_WIDTH, bottom, BLACK);
}

/// Hour ticks above the year plot, alternating long and short, with dotted
/// green hour columns down the band field.
fn draw_year_time_axis(img: &mut RgbImage) {
    let plot_bottom = YEAR_TOP_MARGIN + DAYS_PER_CHART_YEAR * YEAR_ROW_HEIGHT;
    let mut tick_len = 12;
    for hour in 0..24 {
        let x = YEAR_LEFT_MARGIN + hour * 60;
        fill_rect(img, x, YEAR_TOP_MARGIN - tick_len, x, YEAR_TOP_MARGIN, BLACK);
        tick_len ^= 8;
        let mut y = YEAR_TOP_MARGIN;
        while y < plot_bottom {
            fill_rect(img, x, y, x, y + 1, GRID_GREEN);
            y += 8;
        }
    }
}

/// Month-start rows: a solid tick in the left margin and a dotted green
/// line across the band field.
fn draw_year_month_lines(img: &mut RgbImage) {
    for day in MONTH_START_DAYS {
        let y = YEAR_TOP_MARGIN + day * YEAR_ROW_HEIGHT;
        fill_rect(img, 0, y, YEAR_LEFT_MARGIN, y, BLACK);
        let mut x = YEAR_LEFT_MARGIN;
        while x < YEAR_LEFT_MARGIN + MINUTES_PER_DAY {
            fill_rect(img, x, y, x + 1, y, GRID_GREEN);
            x += 8;
        }
    }
}

/// Black-on-white plus marks at 6:00, 12:00, and 18:00 on the days nearest
/// the equinoxes and solstices.
fn draw_year_quarter_marks(img: &mut RgbImage) {
    for day in QUARTER_DAY_MARKS {
        let y = YEAR_TOP_MARGIN + day * YEAR_ROW_HEIGHT;
        for quarter in 1..4 {
            let x = YEAR_LEFT_MARGIN + MINUTES_PER_DAY * quarter / 4;
            fill_rect(img, x, y - 1, x, y + 1, BLACK);
            fill_rect(img, x - 1, y, x + 1, y, BLACK);
            for (dx, dy) in [(-1_i64, -1_i64), (-1, 1), (1, -1), (1, 1)] {
                put_pixel_signed(img, i64::from(x) + dx, i64::from(y) + dy, WHITE);
            }
        }
    }
}

/// Band legend boxes stacked down the right margin of the cartesian day
/// view, aligned with the altitude scale.
fn draw_day_band_legend(img: &mut RgbImage) {
    // (upper altitude, lower altitude, band) per box.
    let rows: [(f64, f64, TwilightBand); 12] = [
        (90.0, 75.0, TwilightBand::L6),
        (75.0, 60.0, TwilightBand::L5),
        (60.0, 45.0, TwilightBand::L4),
        (45.0, 30.0, TwilightBand::L3),
        (30.0, 15.0, TwilightBand::L2),
        (15.0, 0.0, TwilightBand::L1),
        (0.0, -6.0, TwilightBand::Civil),
        (-6.0, -12.0, TwilightBand::Nautical),
        (-12.0, -18.0, TwilightBand::Astronomical),
        (-18.0, -42.0, TwilightBand::D1),
        (-42.0, -66.0, TwilightBand::D2),
        (-66.0, -90.0, TwilightBand::D3),
    ];

    let x0 = DAY_LEFT_MARGIN + MINUTES_PER_DAY + 3;
    let scale = f64::from(DAY_PLOT_HEIGHT) / 180.0;
    for (upper, lower, band) in rows {
        let y_top = DAY_TOP_MARGIN + ((90.0 - upper) * scale) as u32;
        let y_bottom = DAY_TOP_MARGIN + ((90.0 - lower) * scale) as u32;
        fill_rect(img, x0, y_top, x0 + DAY_LEGEND_BOX_WIDTH, y_bottom, band_color(band));
        fill_rect(img, x0 + DAY_LEGEND_BOX_WIDTH, y_top, x0 + DAY_LEGEND_BOX_WIDTH + 2, y_top, BLACK);
    }
    // Closing tick at the nadir edge.
    let y_nadir = DAY_TOP_MARGIN + DAY_PLOT_HEIGHT;
    fill_rect(img, x0 + DAY_LEGEND_BOX_WIDTH, y_nadir, x0 + DAY_LEGEND_BOX_WIDTH + 2, y_nadir, BLACK);

    // Frame down to the horizon row.
    fill_rect(img, x0, DAY_TOP_MARGIN, x0 + DAY_LEGEND_BOX_WIDTH, DAY_TOP_MARGIN, BLACK);
    let frame_bottom = DAY_TOP_MARGIN + DAY_PLOT_HEIGHT / 2;
    fill_rect(img, x0, DAY_TOP_MARGIN, x0, frame_bottom, BLACK);
    fill_rect(img, x0 + DAY_LEGEND_BOX_WIDTH, DAY_TOP_MARGIN, x0 + DAY_LEGEND_BOX_WIDTH, frame_bottom, BLACK);
}

fn draw_day_time_axis(img: &mut RgbImage) {
    let mut tick_len = 12;
    for hour in 0..24 {
        let x = DAY_LEFT_MARGIN + hour * 60;
        fill_rect(img, x, DAY_TOP_MARGIN - tick_len, x, DAY_TOP_MARGIN, BLACK);
        tick_len ^= 8;
    }
}

/// Altitude ticks down the left margin every 10° from zenith to nadir.
fn draw_day_altitude_scale(img: &mut RgbImage) {
    let scale = f64::from(DAY_PLOT_HEIGHT) / 180.0;
    for altitude in (-90..=90).step_by(10) {
        let y = DAY_TOP_MARGIN + ((90 - altitude) as f64 * scale) as u32;
        fill_rect(img, DAY_LEFT_MARGIN - 4, y, DAY_LEFT_MARGIN, y, BLACK);
    }
}

/// Dotted green gridlines over the day plot: hour columns and 10°-altitude
/// rows mirrored around the horizon.
fn draw_day_grid_dots(img: &mut RgbImage) {
    for hour in 0..24 {
        let x = DAY_LEFT_MARGIN + hour * 60;
        let mut y = DAY_TOP_MARGIN;
        while y < DAY_TOP_MARGIN + DAY_PLOT_HEIGHT {
            fill_rect(img, x, y, x, y + 1, GRID_GREEN);
            y += 20;
        }
    }

    let horizon_y = DAY_TOP_MARGIN + DAY_PLOT_HEIGHT / 2;
    let pixels_per_degree = f64::from(DAY_PLOT_HEIGHT) / 180.0;
    for elevation in (10..90).step_by(10) {
        let offset = (f64::from(elevation) * pixels_per_degree) as u32;
        let mut x = DAY_LEFT_MARGIN;
        while x < DAY_LEFT_MARGIN + MINUTES_PER_DAY {
            fill_rect(img, x, horizon_y - offset, x, horizon_y - offset, GRID_GREEN);
            fill_rect(img, x, horizon_y + offset, x, horizon_y + offset, GRID_GREEN);
            x += 20;
        }
    }
}
