//! Module for reading and writing echo simulator binary grid files
//!
#![doc = include_str!("../readme.md")]

// Split into subfiles for development, but anything important is re-exported
mod error;
mod grid;
mod header;
mod reader;
mod writer;

// Inline anything important for a nice public API
#[doc(inline)]
pub use grid::{ElementKind, Elements, Grid};

#[doc(inline)]
pub use header::{Header, LEGACY_VERSION};

#[doc(inline)]
pub use reader::{decode, read_grid, read_grid_file};

#[doc(inline)]
pub use writer::{write_csv, write_grid, write_grid_file, Layout, CSV_LINE_ENDING};

#[doc(inline)]
pub use error::{Error, Result};
