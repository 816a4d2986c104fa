// echotools modules
use echotools_grid::{ElementKind, Grid};

// crate modules
use crate::error::{Error, Result};

/// Number of bands used for float fields
pub const CONTINUOUS_BANDS: usize = 200;

/// Number of bands used for classified (`i8`) fields
pub const CATEGORICAL_BANDS: usize = 3;

/// Equal-width contour bands over a value range
///
/// Values below or above the range fall into the first or last band.
///
/// ```rust
/// # use echotools_plot::ContourLevels;
/// let levels = ContourLevels::categorical();
/// assert_eq!(levels.band(0.0), Some(0));
/// assert_eq!(levels.band(1.0), Some(1));
/// assert_eq!(levels.band(2.0), Some(2));
/// assert_eq!(levels.band(f64::NAN), None);
/// ```
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ContourLevels {
    lower: f64,
    upper: f64,
    bands: usize,
}

impl ContourLevels {
    /// Bands over `[lower, upper]`
    pub fn new(lower: f64, upper: f64, bands: usize) -> Result<Self> {
        if bands == 0 || !lower.is_finite() || !upper.is_finite() || upper <= lower {
            return Err(Error::InvalidLevels);
        }
        Ok(Self {
            lower,
            upper,
            bands,
        })
    }

    /// Fixed 3 bands over `[0, 2]` for classified fields
    pub fn categorical() -> Self {
        Self {
            lower: 0.0,
            upper: 2.0,
            bands: CATEGORICAL_BANDS,
        }
    }

    /// 200 bands scaled to the finite range of the grid
    ///
    /// A constant grid gets a unit-wide range starting at its value.
    pub fn auto(grid: &Grid) -> Result<Self> {
        let (lower, upper) = grid.min_max().ok_or(Error::EmptyGrid)?;
        let upper = if upper > lower { upper } else { lower + 1.0 };
        Self::new(lower, upper, CONTINUOUS_BANDS)
    }

    /// Default levels for the element kind of the grid
    pub fn for_grid(grid: &Grid) -> Result<Self> {
        match grid.element_kind() {
            ElementKind::I8 => Ok(Self::categorical()),
            ElementKind::F32 => Self::auto(grid),
        }
    }

    /// Lower bound of the first band
    pub fn lower(&self) -> f64 {
        self.lower
    }

    /// Upper bound of the last band
    pub fn upper(&self) -> f64 {
        self.upper
    }

    /// Number of bands
    pub fn bands(&self) -> usize {
        self.bands
    }

    /// Band index for a value, `None` for NaN or infinite values
    pub fn band(&self, value: f64) -> Option<usize> {
        if !value.is_finite() {
            return None;
        }
        let t = (value - self.lower) / (self.upper - self.lower);
        let index = (t * self.bands as f64).floor().max(0.0) as usize;
        Some(index.min(self.bands - 1))
    }

    /// Position of a band's midpoint within the range, in `[0, 1]`
    pub fn band_fraction(&self, band: usize) -> f64 {
        (band.min(self.bands - 1) as f64 + 0.5) / self.bands as f64
    }
}
