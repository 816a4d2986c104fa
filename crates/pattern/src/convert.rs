//! Conversion of two-column CSV files into antenna pattern binaries

// standard library
use std::fs::File;
use std::io::{BufWriter, Read, Seek, Write};
use std::path::Path;

// crate modules
use crate::error::{Error, Result};
use crate::writer::PatternWriter;

// external crates
use csv::{ReaderBuilder, StringRecord, Trim};
use log::{debug, info};

/// Convert a CSV file of `angle, gain` rows into an antenna pattern binary
///
/// Returns the number of samples written. The destination is created or
/// truncated.
///
/// ```rust, no_run
/// # use echotools_pattern::csv_to_binary;
/// let count = csv_to_binary("./pattern.csv", "./pattern.bin").unwrap();
/// println!("converted {count} samples");
/// ```
pub fn csv_to_binary<P: AsRef<Path>, Q: AsRef<Path>>(input: P, output: Q) -> Result<usize> {
    let (input, output) = (input.as_ref(), output.as_ref());
    debug!("Converting {} -> {}", input.display(), output.display());

    let reader = File::open(input)?;
    let mut writer = BufWriter::new(File::create(output)?);
    let count = encode_csv(reader, &mut writer)?;
    writer.flush()?;

    info!("Wrote {count} samples to {}", output.display());
    Ok(count)
}

/// Stream CSV records from `reader` into a pattern binary on `writer`
///
/// Every record must have at least two fields, the first two of which are
/// parsed as `f32` (surrounding whitespace is ignored). Finite values outside
/// the `f32` range are rejected, while `inf` and `nan` are kept as written. Any further fields
/// are ignored. There is no header row.
pub fn encode_csv<R: Read, W: Write + Seek>(reader: R, writer: W) -> Result<usize> {
    let mut csv_reader = ReaderBuilder::new()
        .has_headers(false)
        .flexible(true)
        .trim(Trim::All)
        .from_reader(reader);

    let mut pattern = PatternWriter::new(writer)?;
    for record in csv_reader.records() {
        let record = record?;
        let line = record.position().map(|p| p.line()).unwrap_or_default();
        let (angle, gain) = parse_record(&record, line)?;
        pattern.push(angle, gain)?;
    }

    pattern.finish()
}

/// Parse the first two fields of a record
fn parse_record(record: &StringRecord, line: u64) -> Result<(f32, f32)> {
    let field = |column: usize| -> Result<f32> {
        let value = record
            .get(column)
            .ok_or(Error::MissingField { line, column })?;
        let invalid = || Error::InputParse {
            line,
            column,
            value: value.to_string(),
        };

        // finite values beyond f32 range would silently become infinite
        let parsed = value.parse::<f64>().map_err(|_| invalid())?;
        if parsed.is_finite() && parsed.abs() > f32::MAX as f64 {
            return Err(invalid());
        }
        Ok(parsed as f32)
    };

    Ok((field(0)?, field(1)?))
}
