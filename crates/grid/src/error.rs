//! Result and Error types for the grid module

/// Type alias for `Result<T, grid::Error>`
pub type Result<T> = core::result::Result<T, Error>;

#[derive(thiserror::Error, Debug)]
/// The error type for `echotools-grid`
pub enum Error {
    /// Underlying file I/O error, including files shorter than the header
    /// or payload declares
    #[error("failure in file I/O")]
    IOError(#[from] std::io::Error),

    /// Failure to (de)serialise the fixed header block
    #[error("failed to (de)serialise grid header")]
    HeaderError(#[from] Box<bincode::ErrorKind>),

    /// Width or height is zero, negative, or too large for the format
    #[error("invalid grid dimensions {width}x{height}")]
    InvalidDimensions { width: i64, height: i64 },

    /// The payload does not map onto 1 or 4 bytes per element
    #[error(
        "unsupported element width {width} ({payload} payload bytes for {cells} elements)"
    )]
    UnsupportedElementWidth { width: u64, payload: u64, cells: u64 },

    /// Tagged files must end exactly after the payload
    #[error("unexpected trailing bytes (expected {expected} payload bytes, found {found})")]
    TrailingBytes { expected: u64, found: u64 },

    /// Number of elements does not match the grid dimensions
    #[error("inconsistent number of elements (expected {expected}, found {found})")]
    InconsistentLength { expected: usize, found: usize },
}

impl Error {
    /// True for errors caused by a malformed or mismatched header/payload
    ///
    /// I/O failures (including truncated files) are not format errors.
    pub fn is_format_error(&self) -> bool {
        matches!(
            self,
            Error::InvalidDimensions { .. }
                | Error::UnsupportedElementWidth { .. }
                | Error::TrailingBytes { .. }
                | Error::InconsistentLength { .. }
        )
    }
}
