//! Render a binary grid file as a filled contour plot

// standard library
use std::path::{Path, PathBuf};

// echotools modules
use echotools::cli::{init_logging, parse_size, resolve_input, DEFAULT_BASE_DIR};
use echotools::grid::read_grid_file;
use echotools::plot::{render_contour, ContourStyle};

// external crates
use anyhow::{Context, Result};
use clap::Parser;
use clap_verbosity_flag::{Verbosity, WarnLevel};
use log::{debug, info};

/// Render a binary grid as a filled contour image
#[derive(Parser, Debug)]
#[command(version, about, long_about = None)]
struct Cli {
    /// Grid file, relative to the base directory
    path: PathBuf,

    /// Directory the grid path is resolved against
    #[arg(long, default_value = DEFAULT_BASE_DIR)]
    base_dir: PathBuf,

    /// Image to write, `.svg` for vector output [default: <grid name>.png]
    #[arg(short, long)]
    output: Option<PathBuf>,

    /// Image size in pixels
    #[arg(long, value_name = "WIDTHxHEIGHT", value_parser = parse_size, default_value = "800x600")]
    size: (u32, u32),

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

    let output = cli.output.unwrap_or_else(|| default_output(&path));
    let style = ContourStyle::for_grid(&grid)?.with_size(cli.size.0, cli.size.1);
    render_contour(&grid, &output, &style)
        .with_context(|| format!("failed to render {}", output.display()))?;

    info!("Contour plot written to {}", output.display());
    Ok(())
}

/// Image named after the grid file, in the working directory
fn default_output(grid_path: &Path) -> PathBuf {
    let stem = grid_path
        .file_stem()
        .map(|s| s.to_os_string())
        .unwrap_or_else(|| "contour".into());
    PathBuf::from(stem).with_extension("png")
}
