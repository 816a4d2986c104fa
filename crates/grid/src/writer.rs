//! Write operations for [Grid] data

// standard library
use std::fmt::Display;
use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::Path;

// crate modules
use crate::error::Result;
use crate::grid::{Elements, Grid};
use crate::header::{Header, LEGACY_VERSION};

// external crates
use log::debug;

/// Line terminator for text exports
pub const CSV_LINE_ENDING: &str = "\r\n";

/// Header layout used when writing a grid
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Layout {
    /// Version byte 0, element width left to size inference
    Legacy,
    /// Version byte carries the element width explicitly
    #[default]
    Tagged,
}

/// Write a [Grid] to a binary grid file
///
/// ```rust, no_run
/// # use echotools_grid::{Elements, Grid, Layout, write_grid_file};
/// let grid = Grid::new(2, 2, Elements::I8(vec![0, 1, 1, 2])).unwrap();
/// write_grid_file(&grid, "./classified.bin", Layout::Legacy).unwrap();
/// ```
pub fn write_grid_file<P: AsRef<Path>>(grid: &Grid, path: P, layout: Layout) -> Result<()> {
    let path = path.as_ref();
    debug!("Writing {}x{} grid to {}", grid.width(), grid.height(), path.display());
    let mut writer = BufWriter::new(File::create(path)?);
    write_grid(grid, &mut writer, layout)?;
    writer.flush()?;
    Ok(())
}

/// Encode a [Grid] into any writer
///
/// Elements follow the header in row-major order as little endian values.
pub fn write_grid<W: Write>(grid: &Grid, mut writer: W, layout: Layout) -> Result<()> {
    let version = match layout {
        Layout::Legacy => LEGACY_VERSION,
        Layout::Tagged => Header::tag_for(grid.element_kind()),
    };

    let header = Header::for_dimensions(version, grid.width(), grid.height())?;
    writer.write_all(&header.to_bytes()?)?;

    match grid.elements() {
        Elements::I8(values) => {
            let bytes = values.iter().map(|v| *v as u8).collect::<Vec<u8>>();
            writer.write_all(&bytes)?;
        }
        Elements::F32(values) => {
            for value in values {
                writer.write_all(&value.to_le_bytes())?;
            }
        }
    }

    Ok(())
}

/// Write a [Grid] as comma separated text
///
/// One line per grid row, values separated by commas with no trailing comma,
/// and every line terminated by [CSV_LINE_ENDING].
///
/// ```rust
/// # use echotools_grid::{Elements, Grid, write_csv};
/// let grid = Grid::new(2, 3, Elements::I8(vec![0, 1, 2, 2, 1, 0])).unwrap();
///
/// let mut text = Vec::new();
/// write_csv(&grid, &mut text).unwrap();
/// assert_eq!(text, b"0,1,2\r\n2,1,0\r\n");
/// ```
pub fn write_csv<W: Write>(grid: &Grid, mut writer: W) -> Result<()> {
    match grid.elements() {
        Elements::I8(values) => write_rows(values, grid.height(), &mut writer),
        Elements::F32(values) => write_rows(values, grid.height(), &mut writer),
    }
}

fn write_rows<T: Display, W: Write>(values: &[T], height: usize, writer: &mut W) -> Result<()> {
    for row in values.chunks_exact(height) {
        let line = row
            .iter()
            .map(|value| value.to_string())
            .collect::<Vec<String>>()
            .join(",");
        write!(writer, "{line}{CSV_LINE_ENDING}")?;
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn legacy_layout_bytes() {
        let grid = Grid::new(1, 2, Elements::I8(vec![-1, 2])).unwrap();
        let mut bytes = Vec::new();
        write_grid(&grid, &mut bytes, Layout::Legacy).unwrap();
        assert_eq!(bytes, vec![0, 1, 0, 0, 0, 2, 0, 0, 0, 0xFF, 2]);
    }

    #[test]
    fn tagged_layout_version() {
        let grid = Grid::new(1, 1, Elements::F32(vec![0.5])).unwrap();
        let mut bytes = Vec::new();
        write_grid(&grid, &mut bytes, Layout::Tagged).unwrap();
        assert_eq!(bytes[0], 0x24);
        assert_eq!(bytes.len(), Header::SIZE + 4);
        assert_eq!(bytes[9..], 0.5f32.to_le_bytes());
    }

    #[test]
    fn csv_float_formatting() {
        let grid = Grid::new(1, 3, Elements::F32(vec![0.5, -1.0, 1e-3])).unwrap();
        let mut text = Vec::new();
        write_csv(&grid, &mut text).unwrap();
        assert_eq!(String::from_utf8(text).unwrap(), "0.5,-1,0.001\r\n");
    }
}
