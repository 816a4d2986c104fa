//! Print a binary grid file as comma separated text

// standard library
use std::io::{BufWriter, Write};
use std::path::PathBuf;

// echotools modules
use echotools::cli::{init_logging, resolve_input, DEFAULT_BASE_DIR};
use echotools::grid::{read_grid_file, write_csv};

// external crates
use anyhow::{Context, Result};
use clap::Parser;
use clap_verbosity_flag::{Verbosity, WarnLevel};
use log::debug;

/// Print every row of a binary grid as comma separated values
#[derive(Parser, Debug)]
#[command(version, about, long_about = None)]
struct Cli {
    /// Grid file, relative to the base directory
    path: PathBuf,

    /// Directory the grid path is resolved against
    #[arg(long, default_value = DEFAULT_BASE_DIR)]
    base_dir: PathBuf,

    #[command(flatten)]
    verbosity: Verbosity<WarnLevel>,
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    init_logging(module_path!(), &cli.verbosity)?;

    let path = resolve_input(&cli.base_dir, &cli.path);
    let grid =
        read_grid_file(&path).with_context(|| format!("failed to read {}", path.display()))?;
    debug!("{grid}");

    let mut stdout = BufWriter::new(std::io::stdout().lock());
    write_csv(&grid, &mut stdout)?;
    stdout.flush()?;
    Ok(())
}
