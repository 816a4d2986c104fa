//! Module for working with echo simulator antenna patterns
//!
#![doc = include_str!("../readme.md")]

mod convert;
mod error;
mod header;
mod pattern;
mod reader;
mod writer;

#[doc(inline)]
pub use convert::{csv_to_binary, encode_csv};

#[doc(inline)]
pub use pattern::{AnalyticalPattern, AntennaPattern, SampledPattern};

#[doc(inline)]
pub use reader::{read_pattern, read_pattern_file};

#[doc(inline)]
pub use writer::PatternWriter;

#[doc(inline)]
pub use error::{Error, Result};
