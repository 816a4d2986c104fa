// crate modules
use crate::error::{Error, Result};

/// Supported sample encodings
///
/// The legacy file layout never stores this explicitly, so it is inferred from
/// the number of payload bytes per grid element.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ElementKind {
    /// 1-byte signed integer, typically a classified/categorical field
    I8,
    /// 4-byte IEEE-754 single precision float
    F32,
}

impl ElementKind {
    /// Number of bytes used by one element
    pub fn width(&self) -> usize {
        match self {
            ElementKind::I8 => 1,
            ElementKind::F32 => 4,
        }
    }

    /// Element kind for a byte width, if it is one of the supported widths
    ///
    /// ```rust
    /// # use echotools_grid::ElementKind;
    /// assert_eq!(ElementKind::from_width(4), Some(ElementKind::F32));
    /// assert_eq!(ElementKind::from_width(2), None);
    /// ```
    pub fn from_width(width: usize) -> Option<Self> {
        match width {
            1 => Some(ElementKind::I8),
            4 => Some(ElementKind::F32),
            _ => None,
        }
    }
}

impl std::fmt::Display for ElementKind {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        match self {
            ElementKind::I8 => write!(f, "i8"),
            ElementKind::F32 => write!(f, "f32"),
        }
    }
}

/// Flat, row-major grid samples
#[derive(Debug, Clone, PartialEq)]
pub enum Elements {
    /// Signed byte samples
    I8(Vec<i8>),
    /// Single precision float samples
    F32(Vec<f32>),
}

impl Elements {
    /// Number of samples
    pub fn len(&self) -> usize {
        match self {
            Elements::I8(values) => values.len(),
            Elements::F32(values) => values.len(),
        }
    }

    /// True if there are no samples
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// The encoding of the samples
    pub fn kind(&self) -> ElementKind {
        match self {
            Elements::I8(_) => ElementKind::I8,
            Elements::F32(_) => ElementKind::F32,
        }
    }

    /// Sample at flat index `index` widened to `f64`
    pub fn value(&self, index: usize) -> Option<f64> {
        match self {
            Elements::I8(values) => values.get(index).map(|v| f64::from(*v)),
            Elements::F32(values) => values.get(index).map(|v| f64::from(*v)),
        }
    }
}

/// A `width` x `height` matrix of samples
///
/// Storage is row-major over the file dimensions, so the outer loop runs over
/// `width` and element `[i][j]` sits at flat index `i * height + j`. The
/// number of elements always matches the dimensions.
///
/// ```rust
/// # use echotools_grid::{Grid, Elements};
/// let grid = Grid::new(2, 3, Elements::I8(vec![0, 1, 2, 2, 1, 0])).unwrap();
///
/// assert_eq!(grid.get(1, 0), Some(2.0));
/// assert_eq!(grid.get(2, 0), None);
/// ```
#[derive(Debug, Clone, PartialEq)]
pub struct Grid {
    version: i8,
    width: usize,
    height: usize,
    elements: Elements,
}

impl Grid {
    /// Create a new grid with the default version byte of 0
    ///
    /// Fails if either dimension is zero or the number of elements is not
    /// `width * height`.
    pub fn new(width: usize, height: usize, elements: Elements) -> Result<Self> {
        Self::with_version(0, width, height, elements)
    }

    /// Create a new grid keeping an explicit version byte
    pub fn with_version(
        version: i8,
        width: usize,
        height: usize,
        elements: Elements,
    ) -> Result<Self> {
        let cells = width
            .checked_mul(height)
            .filter(|cells| *cells > 0)
            .ok_or(Error::InvalidDimensions {
                width: width as i64,
                height: height as i64,
            })?;

        if elements.len() != cells {
            return Err(Error::InconsistentLength {
                expected: cells,
                found: elements.len(),
            });
        }

        Ok(Self {
            version,
            width,
            height,
            elements,
        })
    }

    /// Version byte as found in (or destined for) the header
    pub fn version(&self) -> i8 {
        self.version
    }

    /// Number of rows (sizeX in the file header)
    pub fn width(&self) -> usize {
        self.width
    }

    /// Number of columns (sizeY in the file header)
    pub fn height(&self) -> usize {
        self.height
    }

    /// Flat row-major samples
    pub fn elements(&self) -> &Elements {
        &self.elements
    }

    /// Encoding of the samples
    pub fn element_kind(&self) -> ElementKind {
        self.elements.kind()
    }

    /// Total number of samples
    pub fn number_of_elements(&self) -> usize {
        self.elements.len()
    }

    /// Sample at row `i`, column `j`, widened to `f64`
    pub fn get(&self, i: usize, j: usize) -> Option<f64> {
        if i >= self.width || j >= self.height {
            return None;
        }
        self.elements.value(i * self.height + j)
    }

    /// Iterator over rows of samples widened to `f64`
    pub fn rows(&self) -> impl Iterator<Item = Vec<f64>> + '_ {
        (0..self.width).map(move |i| {
            (0..self.height)
                .filter_map(|j| self.elements.value(i * self.height + j))
                .collect()
        })
    }

    /// Smallest and largest finite sample, if any
    ///
    /// Non-finite float values (NaN, +/-inf) are ignored.
    pub fn min_max(&self) -> Option<(f64, f64)> {
        (0..self.number_of_elements())
            .filter_map(|index| self.elements.value(index))
            .filter(|value| value.is_finite())
            .fold(None, |acc, value| match acc {
                None => Some((value, value)),
                Some((lo, hi)) => Some((lo.min(value), hi.max(value))),
            })
    }
}

impl std::fmt::Display for Grid {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        writeln!(f, "Grid {{")?;
        writeln!(f, "    version: {:#04x}", self.version as u8)?;
        writeln!(f, "    dimensions: {}x{}", self.width, self.height)?;
        writeln!(
            f,
            "    elements: {} ({})",
            self.number_of_elements(),
            self.element_kind()
        )?;
        write!(f, "}}")
    }
}
