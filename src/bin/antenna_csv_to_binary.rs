//! Convert a two-column CSV antenna pattern into a pattern binary

// standard library
use std::path::PathBuf;

// echotools modules
use echotools::cli::init_logging;
use echotools::pattern::csv_to_binary;

// external crates
use anyhow::{Context, Result};
use clap::Parser;
use clap_verbosity_flag::{Verbosity, WarnLevel};
use log::info;

/// Convert `angle, gain` CSV rows into an antenna pattern binary
#[derive(Parser, Debug)]
#[command(version, about, long_about = None)]
struct Cli {
    /// CSV file with one `angle, gain` sample per row, no header
    input: PathBuf,

    /// Pattern binary to create (truncated if it exists)
    output: PathBuf,

    #[command(flatten)]
    verbosity: Verbosity<WarnLevel>,
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    init_logging(module_path!(), &cli.verbosity)?;

    let count = csv_to_binary(&cli.input, &cli.output)
        .with_context(|| format!("failed to convert {}", cli.input.display()))?;

    info!("Converted {count} samples");
    Ok(())
}
