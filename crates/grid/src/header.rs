// crate modules
use crate::error::{Error, Result};
use crate::grid::ElementKind;

// external crates
use serde::{Deserialize, Serialize};

/// High nibble of the version byte marking an explicit element tag
const TAG_PREFIX: u8 = 0x20;

/// Version byte written for untagged files
pub const LEGACY_VERSION: i8 = 0;

/// Fixed block at the start of every grid file
///
/// ```text
/// <version: i8> <width: i32> <height: i32>
/// ```
///
/// The block is always 9 bytes, little endian, with no padding. Legacy files
/// carry an arbitrary version byte (0 from the CSV tools, 0x10 from the
/// terrain exporter) and leave the element width to be inferred from the file
/// size. The two version bytes `0x21` (`i8`) and `0x24` (`f32`) tag the
/// element width in their low nibble. Every other byte is left unvalidated.
#[derive(Deserialize, Serialize, Debug, Clone, Copy, PartialEq, Eq)]
pub struct Header {
    /// Version byte, unvalidated for legacy files
    pub version: i8,
    /// Number of rows (sizeX)
    pub width: i32,
    /// Number of columns (sizeY)
    pub height: i32,
}

impl Header {
    /// Size of the header block in bytes
    pub const SIZE: usize = 9;

    /// Deserialise the header from its raw bytes
    pub fn from_bytes(bytes: &[u8; Self::SIZE]) -> Result<Self> {
        Ok(bincode::deserialize(bytes)?)
    }

    /// Serialise the header to its raw bytes
    pub fn to_bytes(&self) -> Result<Vec<u8>> {
        Ok(bincode::serialize(self)?)
    }

    /// Version byte that tags `kind` explicitly
    ///
    /// ```rust
    /// # use echotools_grid::{ElementKind, Header};
    /// assert_eq!(Header::tag_for(ElementKind::I8), 0x21);
    /// assert_eq!(Header::tag_for(ElementKind::F32), 0x24);
    /// ```
    pub fn tag_for(kind: ElementKind) -> i8 {
        (TAG_PREFIX | kind.width() as u8) as i8
    }

    /// Element kind stated by the version byte, `None` for legacy headers
    pub fn element_tag(&self) -> Option<ElementKind> {
        [ElementKind::I8, ElementKind::F32]
            .into_iter()
            .find(|kind| Self::tag_for(*kind) == self.version)
    }

    /// Validated `(width, height)`, both strictly positive
    pub fn dimensions(&self) -> Result<(usize, usize)> {
        if self.width <= 0 || self.height <= 0 {
            return Err(Error::InvalidDimensions {
                width: self.width as i64,
                height: self.height as i64,
            });
        }
        Ok((self.width as usize, self.height as usize))
    }

    /// Header for known dimensions, failing if they overflow an `i32`
    pub(crate) fn for_dimensions(version: i8, width: usize, height: usize) -> Result<Self> {
        let invalid = || Error::InvalidDimensions {
            width: width as i64,
            height: height as i64,
        };

        Ok(Self {
            version,
            width: i32::try_from(width).map_err(|_| invalid())?,
            height: i32::try_from(height).map_err(|_| invalid())?,
        })
    }
}

/// Infer the element kind from the payload size of a legacy file
///
/// The width is `payload / cells` rounded half to even, and must land on one
/// of the supported widths. Anything else means the header does not match
/// the data and is rejected rather than decoded as garbage.
pub(crate) fn infer_element_kind(payload: u64, cells: u64) -> Result<ElementKind> {
    let width = (payload as f64 / cells as f64).round_ties_even() as u64;

    ElementKind::from_width(width as usize).ok_or(Error::UnsupportedElementWidth {
        width,
        payload,
        cells,
    })
}
