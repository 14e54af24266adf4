//! Renders chart frame sequences and assembles them into movies with ffmpeg.

use std::path::{Path, PathBuf};
use std::process::Command;

use clap::{Parser, ValueEnum};
use solar_twilight::chart;
use solar_twilight::cli::EngineChoice;
use solar_twilight::SolarEngine;

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
enum View {
    /// Year chart swept across latitudes -90 to 90
    Year,
    /// Cartesian day chart swept across the days of the year
    Day,
    /// Polar day chart swept across the days of the year
    PolarDay,
}

#[derive(Parser)]
#[command(
    name = "twilight-movie",
    version,
    about = "Render twilight chart frames and assemble them into a movie"
)]
struct Cli {
    /// Which frame sequence to render
    #[arg(long, value_enum, default_value_t = View::Year)]
    view: View,

    /// Chart year
    #[arg(long, default_value_t = 2019)]
    year: i32,

    /// Observer latitude for the day views
    #[arg(short = 'o', long = "o-lat", default_value_t = 42.5)]
    observer_latitude: f64,

    /// Directory that receives the frames and the finished movie
    #[arg(long, default_value = ".")]
    outdir: PathBuf,

    /// Render the frames but skip the ffmpeg assembly step
    #[arg(long)]
    frames_only: bool,

    /// Computation pipeline
    #[arg(long, value_enum, default_value_t = EngineChoice::Almanac)]
    engine: EngineChoice,

    /// Declination model variant for the simplified pipeline (1 or 2)
    #[arg(long, default_value_t = 2)]
    model: u8,
}

fn main() {
    let cli = Cli::parse();
    if let Err(err) = run(&cli) {
        eprintln!("twilight-movie: {err}");
        std::process::exit(1);
    }
}

fn run(cli: &Cli) -> Result<(), Box<dyn std::error::Error>> {
    let engine = cli.engine.to_engine(cli.model)?;
    std::fs::create_dir_all(&cli.outdir)?;

    let (pattern, framerate, movie) = match cli.view {
        View::Year => {
            render_year_frames(cli, engine)?;
            (
                "./twilight_year_*.png".to_string(),
                "2",
                "twilight-year.mp4".to_string(),
            )
        }
        View::Day => {
            render_day_frames(cli, engine, false)?;
            (
                format!(
                    "./twilight_day_[0-9]*_lat_{:04.1}.png",
                    cli.observer_latitude
                ),
                "4",
                format!("twilight-day-cartesian-lat-{:04.1}.mp4", cli.observer_latitude),
            )
        }
        View::PolarDay => {
            render_day_frames(cli, engine, true)?;
            (
                format!(
                    "./twilight_day_polar_*_lat_{:04.1}.png",
                    cli.observer_latitude
                ),
                "4",
                format!("twilight-day-polar-lat-{:04.1}.mp4", cli.observer_latitude),
            )
        }
    };

    if cli.frames_only {
        return Ok(());
    }
    assemble(&cli.outdir, &pattern, framerate, &movie)
}

/// One year chart per degree of latitude, numbered so the filenames sort in
/// sweep order (latitude -90 becomes frame 110).
fn render_year_frames(cli: &Cli, engine: SolarEngine) -> Result<(), Box<dyn std::error::Error>> {
    for latitude in -90..=90_i32 {
        let image = chart::year_chart(cli.year, f64::from(latitude), engine)?;
        let name = format!("twilight_year_{:03}.png", 200 + latitude);
        image.save(cli.outdir.join(&name))?;
        println!("wrote {name}");
    }
    Ok(())
}

fn render_day_frames(
    cli: &Cli,
    engine: SolarEngine,
    polar: bool,
) -> Result<(), Box<dyn std::error::Error>> {
    for day in 0..365_u16 {
        let (image, name) = if polar {
            (
                chart::day_polar_chart(cli.year, day, cli.observer_latitude, engine)?,
                format!(
                    "twilight_day_polar_{:03}_lat_{:04.1}.png",
                    day, cli.observer_latitude
                ),
            )
        } else {
            (
                chart::day_cartesian_chart(cli.year, day, cli.observer_latitude, engine)?,
                format!(
                    "twilight_day_{:03}_lat_{:04.1}.png",
                    day, cli.observer_latitude
                ),
            )
        };
        image.save(cli.outdir.join(&name))?;
        println!("wrote {name}");
    }
    Ok(())
}

/// Runs ffmpeg over the rendered frames. The glob pattern is expanded by
/// ffmpeg itself, relative to the output directory.
fn assemble(
    outdir: &Path,
    pattern: &str,
    framerate: &str,
    movie: &str,
) -> Result<(), Box<dyn std::error::Error>> {
    let status = Command::new("ffmpeg")
        .current_dir(outdir)
        .args(["-framerate", framerate, "-pattern_type", "glob", "-i", pattern])
        .args(["-profile:v", "main", "-pix_fmt", "yuv420p", "-y", movie])
        .status()?;
    if !status.success() {
        return Err(format!("ffmpeg exited with {status}").into());
    }
    println!("wrote {movie}");
    Ok(())
}
