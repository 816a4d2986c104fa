// crate modules
use crate::error::Result;

// external crates
use serde::{Deserialize, Serialize};

/// Leading block of an antenna pattern file
///
/// ```text
/// <version: i8> <count: i32>
/// ```
///
/// The count is followed by `count` pairs of `(angle, gain)` as little endian
/// `f32` values.
#[derive(Deserialize, Serialize, Debug, Clone, Copy, PartialEq, Eq, Default)]
pub(crate) struct PatternHeader {
    pub version: i8,
    pub count: i32,
}

impl PatternHeader {
    /// Size of the header block in bytes
    pub const SIZE: usize = 5;

    /// Byte offset of the sample count
    pub const COUNT_OFFSET: u64 = 1;

    pub fn from_bytes(bytes: &[u8; Self::SIZE]) -> Result<Self> {
        Ok(bincode::deserialize(bytes)?)
    }

    pub fn to_bytes(self) -> Result<Vec<u8>> {
        Ok(bincode::serialize(&self)?)
    }
}
