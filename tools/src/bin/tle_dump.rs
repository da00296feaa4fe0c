use clap::Parser;
use std::fs::File;
use std::io::{self, BufReader, Write};
use std::path::PathBuf;
use tleparse::read_tles;
use tools::config::{Config, OutputFormat};
use tools::report::{write_report, write_summary};
use tracing::info;

/// Read a TLE catalog and print its records
#[derive(Parser, Debug)]
#[command(version)]
struct Opts {
    /// Configuration file
    #[arg(short = 'c', long)]
    config: Option<PathBuf>,

    /// Validate checksums, line numbers and satellite IDs of each record
    #[arg(long)]
    validate: bool,

    /// Print records as JSON
    #[arg(long)]
    json: bool,

    /// Print the resolved epoch of each record
    #[arg(short = 'e', long)]
    epoch: bool,

    /// TLE file to read
    input: PathBuf,
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    tracing_subscriber::fmt::init();
    let opts = Opts::parse();

    let mut cfg = match &opts.config {
        Some(path) => Config::load(path)?,
        None => Config::default(),
    };
    if opts.validate {
        cfg.reader.validate = true;
    }
    if opts.json {
        cfg.output.format = OutputFormat::Json;
    }
    if opts.epoch {
        cfg.output.show_epoch = true;
    }

    let input = File::open(&opts.input)?;
    let tles = read_tles(BufReader::new(input), cfg.assembler_config())?;
    info!(
        input = %opts.input.display(),
        records = tles.len(),
        validate = cfg.reader.validate,
        "Read TLE catalog"
    );

    let stdout = io::stdout();
    let mut out = stdout.lock();
    write_report(&mut out, &tles, &cfg.output)?;
    if cfg.output.format == OutputFormat::Text {
        write_summary(&mut out, &tles)?;
    }
    out.flush()?;

    Ok(())
}
