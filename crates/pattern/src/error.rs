//! Result and Error types for the antenna pattern module

/// Type alias for `Result<T, pattern::Error>`
pub type Result<T> = core::result::Result<T, Error>;

#[derive(thiserror::Error, Debug)]
/// The error type for `echotools-pattern`
pub enum Error {
    /// Underlying file I/O error
    #[error("failure in file I/O")]
    IOError(#[from] std::io::Error),

    /// Failure to (de)serialise the header block
    #[error("failed to (de)serialise pattern header")]
    HeaderError(#[from] Box<bincode::ErrorKind>),

    /// Failure reading CSV records
    #[error("failed CSV operation")]
    CsvError(#[from] csv::Error),

    /// A CSV field could not be converted to a float
    #[error("line {line}: field {column} is not a number (\"{value}\")")]
    InputParse {
        line: u64,
        column: usize,
        value: String,
    },

    /// A CSV record has fewer than the two required fields
    #[error("line {line}: missing field {column}")]
    MissingField { line: u64, column: usize },

    /// Sample count no longer fits the i32 header field
    #[error("too many samples for the pattern header")]
    TooManySamples,

    /// Header declares a negative number of samples
    #[error("invalid sample count {0}")]
    InvalidSampleCount(i32),

    /// A pattern needs at least one sample with a finite angle
    #[error("antenna pattern contains no usable samples")]
    EmptyPattern,
}
