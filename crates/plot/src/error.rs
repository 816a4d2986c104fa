//! Result and Error types for echotools-plot

/// Type alias for Result<T, plot::Error>
pub type Result<T> = core::result::Result<T, Error>;

/// The error type for the `echotools-plot` crate
#[derive(thiserror::Error, Debug)]
pub enum Error {
    /// Failure reported by the plotters drawing backend
    #[error("plotting backend failed: {0}")]
    Plot(String),

    /// Float grid without a single finite value to scale against
    #[error("grid has no finite values to scale contour levels")]
    EmptyGrid,

    /// Image width or height of zero
    #[error("invalid image size {0}x{1}")]
    InvalidSize(u32, u32),

    /// Zero bands, or a range that is empty or not finite
    #[error("contour levels need at least one band over a non-empty range")]
    InvalidLevels,
}

/// Flatten backend errors, which are generic over the drawing backend
pub(crate) fn plot_error<E: std::fmt::Display>(e: E) -> Error {
    Error::Plot(e.to_string())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn error_messages() {
        assert_eq!(
            Error::InvalidSize(0, 10).to_string(),
            "invalid image size 0x10"
        );
        assert_eq!(
            plot_error("backend gone").to_string(),
            "plotting backend failed: backend gone"
        );
        assert!(matches!(
            crate::levels::ContourLevels::new(1.0, 1.0, 3),
            Err(Error::InvalidLevels)
        ));
    }
}
