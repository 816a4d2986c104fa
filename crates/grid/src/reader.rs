//! Read operations for binary grid files
//!
//! Decoding is a pure function of the file bytes and the total file length.
//! The header is read first, then the element width is taken from the version
//! tag or inferred from the remaining payload size.

// standard library
use std::fs::File;
use std::io::{BufReader, ErrorKind, Read, Seek, SeekFrom};
use std::path::Path;

// crate modules
use crate::error::{Error, Result};
use crate::grid::{ElementKind, Elements, Grid};
use crate::header::{infer_element_kind, Header};

// external crates
use log::{debug, trace};

/// Read a binary grid file
///
/// The total length used for width inference comes from the file metadata.
///
/// ```rust
/// # use echotools_grid::read_grid_file;
/// let grid = read_grid_file("./data/legacy_i8.bin").unwrap();
/// println!("{grid}");
/// ```
pub fn read_grid_file<P: AsRef<Path>>(path: P) -> Result<Grid> {
    let path = path.as_ref();
    let file = File::open(path)?;
    let total_len = file.metadata()?.len();
    debug!("Reading {} ({total_len} bytes)", path.display());
    decode(BufReader::new(file), total_len)
}

/// Read a grid from a seekable stream
///
/// The full stream is measured and decoded from the start, regardless of the
/// current position.
pub fn read_grid<R: Read + Seek>(mut reader: R) -> Result<Grid> {
    let total_len = reader.seek(SeekFrom::End(0))?;
    reader.seek(SeekFrom::Start(0))?;
    decode(reader, total_len)
}

/// Decode a grid from `reader`, where `total_len` is the full stream length
///
/// Fails with an I/O error if the stream is shorter than the header or the
/// payload it declares, and with a format error if the dimensions are not
/// positive or the payload does not map onto 1 or 4 bytes per element.
pub fn decode<R: Read>(mut reader: R, total_len: u64) -> Result<Grid> {
    let header = read_header(&mut reader)?;
    let (width, height) = header.dimensions()?;
    let cells = width
        .checked_mul(height)
        .ok_or(Error::InvalidDimensions {
            width: header.width as i64,
            height: header.height as i64,
        })?;

    let payload = total_len.saturating_sub(Header::SIZE as u64);
    let kind = match header.element_tag() {
        Some(kind) => tagged_element_kind(kind, payload, cells as u64)?,
        None => infer_element_kind(payload, cells as u64)?,
    };
    trace!("Header {header:?} -> {width}x{height} {kind} elements");

    let elements = read_elements(&mut reader, kind, cells, payload)?;
    Grid::with_version(header.version, width, height, elements)
}

/// Element kind of a tagged header
///
/// A payload that does not match the tag but infers cleanly to the other
/// width is a legacy file whose version byte happens to equal a tag.
fn tagged_element_kind(kind: ElementKind, payload: u64, cells: u64) -> Result<ElementKind> {
    let expected = (kind.width() as u64).saturating_mul(cells);
    if payload == expected {
        return Ok(kind);
    }

    match infer_element_kind(payload, cells) {
        Ok(inferred) if inferred != kind => {
            debug!("Payload does not match tag {kind}, read as legacy {inferred}");
            Ok(inferred)
        }
        _ if payload > expected => Err(Error::TrailingBytes {
            expected,
            found: payload,
        }),
        // short payloads fail on read
        _ => Ok(kind),
    }
}

/// Deserialise the fixed 9-byte header block
fn read_header<R: Read>(reader: &mut R) -> Result<Header> {
    let mut buffer = [0u8; Header::SIZE];
    reader.read_exact(&mut buffer)?;
    Header::from_bytes(&buffer)
}

/// Read `cells` elements of the given kind
fn read_elements<R: Read>(
    reader: &mut R,
    kind: ElementKind,
    cells: usize,
    payload: u64,
) -> Result<Elements> {
    let byte_length = (kind.width() as u64).saturating_mul(cells as u64);

    // avoid allocating for a payload that is not there
    if byte_length > payload {
        return Err(Error::IOError(std::io::Error::new(
            ErrorKind::UnexpectedEof,
            format!("expected {byte_length} payload bytes, found {payload}"),
        )));
    }

    let mut buffer = vec![0u8; byte_length as usize];
    reader.read_exact(&mut buffer)?;

    let elements = match kind {
        ElementKind::I8 => Elements::I8(buffer.into_iter().map(|b| b as i8).collect()),
        ElementKind::F32 => Elements::F32(
            buffer
                .chunks_exact(4)
                .map(|b| f32::from_le_bytes([b[0], b[1], b[2], b[3]]))
                .collect(),
        ),
    };

    Ok(elements)
}
