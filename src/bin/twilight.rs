//! Renders twilight band charts as PNG files.

use clap::Parser;
use solar_twilight::chart;
use solar_twilight::cli::{check_output_filename, parse_chart_date, EngineChoice};

#[derive(Parser)]
#[command(name = "twilight", version, about = "Render solar twilight band charts")]
struct Cli {
    /// Observer latitude in degrees, north positive
    #[arg(short = 'o', long = "o-lat", default_value_t = 42.6)]
    observer_latitude: f64,

    /// Render a single-day view instead of the full-year chart
    #[arg(long)]
    show_day: bool,

    /// Use the polar projection for the day view (requires --show-day)
    #[arg(long)]
    polar: bool,

    /// Day of year to render, 0 through 364
    #[arg(short, long, default_value_t = 0)]
    day: u16,

    /// Date to render as YYYY.MM.DD, overrides --day and --year
    #[arg(long, conflicts_with = "day")]
    date: Option<String>,

    /// Chart year
    #[arg(long, default_value_t = 2019)]
    year: i32,

    /// Output filename; derived from the selected view when omitted
    #[arg(short, long)]
    filename: Option<String>,

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
        eprintln!("twilight: {err}");
        std::process::exit(1);
    }
}

fn run(cli: &Cli) -> Result<(), Box<dyn std::error::Error>> {
    if cli.polar && !cli.show_day {
        return Err("the polar view requires --show-day".into());
    }

    let (year, day) = match &cli.date {
        Some(date) => parse_chart_date(date)?,
        None => (cli.year, cli.day),
    };
    let engine = cli.engine.to_engine(cli.model)?;

    let (image, default_name) = if cli.polar {
        (
            chart::day_polar_chart(year, day, cli.observer_latitude, engine)?,
            format!("twilight_day_polar_{day:03}.png"),
        )
    } else if cli.show_day {
        (
            chart::day_cartesian_chart(year, day, cli.observer_latitude, engine)?,
            format!("twilight_day_{day:03}.png"),
        )
    } else {
        (
            chart::year_chart(year, cli.observer_latitude, engine)?,
            "twilight_year.png".to_string(),
        )
    };

    let filename = match &cli.filename {
        Some(name) => {
            check_output_filename(name)?;
            name.clone()
        }
        None => default_name,
    };
    image.save(&filename)?;
    println!("wrote {filename}");
    Ok(())
}
