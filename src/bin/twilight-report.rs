//! Tallies twilight band minutes per latitude over a year and writes the
//! result as CSV.

use std::fs::File;
use std::io::{self, BufWriter};

use clap::Parser;
use solar_twilight::cli::{check_output_filename, EngineChoice};
use solar_twilight::report::latitude_report;

#[derive(Parser)]
#[command(
    name = "twilight-report",
    version,
    about = "Tally twilight band minutes per degree of latitude over a year"
)]
struct Cli {
    /// Report year
    #[arg(long, default_value_t = 2024)]
    year: i32,

    /// Sampling interval in minutes, must divide 1440
    #[arg(long, default_value_t = 1)]
    interval: u32,

    /// Output CSV filename; written to stdout when omitted
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
        eprintln!("twilight-report: {err}");
        std::process::exit(1);
    }
}

fn run(cli: &Cli) -> Result<(), Box<dyn std::error::Error>> {
    let engine = cli.engine.to_engine(cli.model)?;
    let report = latitude_report(cli.year, cli.interval, engine)?;

    match &cli.filename {
        Some(name) => {
            check_output_filename(name)?;
            let file = File::create(name)?;
            report.write_csv(BufWriter::new(file))?;
            println!("wrote {name}");
        }
        None => {
            let stdout = io::stdout();
            report.write_csv(stdout.lock())?;
        }
    }
    Ok(())
}
