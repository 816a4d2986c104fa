//! Shared pieces of the command line tools

// standard library
use std::path::{Path, PathBuf};

// external crates
use clap_verbosity_flag::{Verbosity, WarnLevel};

/// Parent directory convention used by the grid consumers
pub const DEFAULT_BASE_DIR: &str = "..";

/// Initialise `stderrlog` for the calling binary and the toolkit crates
///
/// Warnings are shown by default, `-v` raises and `-q` lowers the level.
pub fn init_logging(binary: &str, verbosity: &Verbosity<WarnLevel>) -> anyhow::Result<()> {
    stderrlog::new()
        .modules([
            binary,
            "echotools",
            "echotools_grid",
            "echotools_pattern",
            "echotools_plot",
        ])
        .quiet(verbosity.is_silent())
        .verbosity(verbosity.log_level_filter())
        .show_level(true)
        .init()?;
    Ok(())
}

/// Path of an input file given relative to `base_dir`
pub fn resolve_input<P: AsRef<Path>, Q: AsRef<Path>>(base_dir: P, relative: Q) -> PathBuf {
    base_dir.as_ref().join(relative)
}

/// Parse an image size given as `WIDTHxHEIGHT`
///
/// ```rust
/// # use echotools::cli::parse_size;
/// assert_eq!(parse_size("800x600"), Ok((800, 600)));
/// assert!(parse_size("800").is_err());
/// ```
pub fn parse_size(s: &str) -> Result<(u32, u32), String> {
    let (width, height) = s
        .split_once(|c: char| c == 'x' || c == 'X')
        .ok_or_else(|| format!("expected WIDTHxHEIGHT, found \"{s}\""))?;

    let parse = |v: &str| {
        v.trim()
            .parse::<u32>()
            .ok()
            .filter(|v| *v > 0)
            .ok_or_else(|| format!("invalid image dimension \"{v}\""))
    };

    Ok((parse(width)?, parse(height)?))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn size_strings() {
        assert_eq!(parse_size("120X90"), Ok((120, 90)));
        assert_eq!(parse_size(" 64 x 32 "), Ok((64, 32)));
        assert!(parse_size("0x10").is_err());
        assert!(parse_size("axb").is_err());
    }

    #[test]
    fn inputs_resolve_under_base() {
        assert_eq!(
            resolve_input(DEFAULT_BASE_DIR, "maps/grazing_angle.bin"),
            PathBuf::from("../maps/grazing_angle.bin")
        );
    }

    #[derive(clap::Parser)]
    struct Flags {
        #[command(flatten)]
        verbosity: Verbosity<WarnLevel>,
    }

    #[test]
    fn default_level_is_warn() {
        use clap::Parser;
        use log::LevelFilter;

        let level = |args: &[&str]| Flags::parse_from(args.iter().copied()).verbosity.log_level_filter();
        assert_eq!(level(&["tool"]), LevelFilter::Warn);
        assert_eq!(level(&["tool", "-vv"]), LevelFilter::Debug);
        assert_eq!(level(&["tool", "-q"]), LevelFilter::Error);
        assert!(Flags::parse_from(["tool", "-qq"]).verbosity.is_silent());
    }
}
