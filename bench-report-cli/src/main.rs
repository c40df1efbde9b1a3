//! Benchmark Report CLI Application
//!
//! Command-line front end for the bench-report-decoder library. Reads the
//! grid of report files a proving-benchmark run left behind and renders the
//! markdown results table (or a JSON dump) on stdout.
//!
//! Missing or malformed reports never fail the run; their rows render as
//! placeholder dashes.

use anyhow::{Context, Result};
use clap::Parser;
use std::io::Write;
use std::path::PathBuf;

mod config;
mod render;

use bench_report_decoder::ReportDecoder;
use config::OutputFormat;

/// Render benchmark report files as a markdown table
#[derive(Parser, Debug)]
#[command(name = "bench-report-cli")]
#[command(about = "Render benchmark report files as a markdown table", long_about = None)]
#[command(version)]
struct Args {
    /// Directory containing the report files
    #[arg(long, value_name = "DIR")]
    report_dir: Option<PathBuf>,

    /// Output file for the rendered table (default: stdout)
    #[arg(short, long, value_name = "FILE")]
    output: Option<PathBuf>,

    /// Emit the grid as pretty-printed JSON instead of markdown
    #[arg(long)]
    json: bool,

    /// Path to configuration file (config.toml)
    #[arg(short, long, value_name = "FILE")]
    config: Option<PathBuf>,

    /// Verbosity level (can be repeated: -v, -vv, -vvv)
    #[arg(short, long, action = clap::ArgAction::Count)]
    verbose: u8,

    /// Suppress all output except errors
    #[arg(short, long)]
    quiet: bool,
}

fn main() -> Result<()> {
    // Parse command line arguments
    let args = Args::parse();

    // Initialize logging
    init_logging(args.verbose, args.quiet);

    log::info!("Bench Report CLI v{}", env!("CARGO_PKG_VERSION"));
    log::info!("Using decoder library v{}", bench_report_decoder::VERSION);

    // Configuration file first, explicit flags win
    let app_config = match &args.config {
        Some(path) => config::load_config(path)?,
        None => config::AppConfig::default(),
    };

    let mut grid = app_config.grid_config();
    if let Some(dir) = &args.report_dir {
        grid = grid.with_report_dir(dir.clone());
    }

    let format = if args.json {
        OutputFormat::Json
    } else {
        app_config.output.format
    };

    let decoder = ReportDecoder::new(grid);
    let entries = decoder.load_grid();

    let rendered = match format {
        OutputFormat::Markdown => render::markdown_table(&entries),
        OutputFormat::Json => render::json_report(&entries)?,
    };

    match &args.output {
        Some(path) => {
            std::fs::write(path, &rendered)
                .with_context(|| format!("Failed to write output file: {:?}", path))?;
            log::info!("Table written to {:?}", path);
        }
        None => {
            let mut stdout = std::io::stdout();
            stdout.write_all(rendered.as_bytes())?;
            stdout.flush()?;
        }
    }

    Ok(())
}

/// Initialize logging based on verbosity level
fn init_logging(verbose: u8, quiet: bool) {
    use env_logger::Builder;
    use log::LevelFilter;

    let level = if quiet {
        LevelFilter::Error
    } else {
        match verbose {
            0 => LevelFilter::Info,
            1 => LevelFilter::Debug,
            _ => LevelFilter::Trace,
        }
    };

    Builder::new()
        .filter_level(level)
        .format(|buf, record| {
            writeln!(
                buf,
                "[{} {}] {}",
                record.level(),
                record.target(),
                record.args()
            )
        })
        .init();
}
