//! Read operations for antenna pattern binaries

// standard library
use std::fs::File;
use std::io::{BufReader, Read};
use std::path::Path;

// crate modules
use crate::error::{Error, Result};
use crate::header::PatternHeader;
use crate::pattern::SampledPattern;

// external crates
use log::debug;

/// Read an antenna pattern binary
///
/// ```rust
/// # use echotools_pattern::{read_pattern_file, AntennaPattern};
/// let pattern = read_pattern_file("./data/pattern.bin").unwrap();
/// println!("gain at boresight: {}", pattern.gain(0.0, 0.0));
/// ```
pub fn read_pattern_file<P: AsRef<Path>>(path: P) -> Result<SampledPattern> {
    let path = path.as_ref();
    debug!("Reading antenna pattern {}", path.display());
    read_pattern(BufReader::new(File::open(path)?))
}

/// Read an antenna pattern from any reader
///
/// Fails on a negative sample count, a pattern with no usable samples, or a
/// stream shorter than the count declares.
pub fn read_pattern<R: Read>(mut reader: R) -> Result<SampledPattern> {
    let mut buffer = [0u8; PatternHeader::SIZE];
    reader.read_exact(&mut buffer)?;
    let header = PatternHeader::from_bytes(&buffer)?;

    if header.count < 0 {
        return Err(Error::InvalidSampleCount(header.count));
    }

    // grown as read, a bogus count fails on EOF rather than allocating
    let mut samples = Vec::new();
    let mut pair = [0u8; 8];
    for _ in 0..header.count {
        reader.read_exact(&mut pair)?;
        let angle = f32::from_le_bytes([pair[0], pair[1], pair[2], pair[3]]);
        let gain = f32::from_le_bytes([pair[4], pair[5], pair[6], pair[7]]);
        samples.push((angle, gain));
    }

    SampledPattern::new(samples)
}
