// standard library
use std::path::Path;

// echotools modules
use echotools_grid::{ElementKind, Grid};

// crate modules
use crate::error::{plot_error, Error, Result};
use crate::levels::ContourLevels;

// external crates
use log::{debug, trace};
use plotters::coord::Shift;
use plotters::prelude::*;

/// Which end of the image holds the first grid row
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Origin {
    /// Row 0 at the top of the image
    Upper,
    /// Row 0 at the bottom of the image
    Lower,
}

/// Rendering options for a filled contour plot
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ContourStyle {
    /// Contour bands and the range they cover
    pub levels: ContourLevels,
    /// Vertical orientation of the grid rows
    pub origin: Origin,
    /// Image size in pixels
    pub size: (u32, u32),
}

impl ContourStyle {
    /// Default image size in pixels
    pub const DEFAULT_SIZE: (u32, u32) = (800, 600);

    /// Default style for the element kind of a grid
    ///
    /// Classified `i8` fields use 3 fixed bands over `[0, 2]` with row 0 at
    /// the bottom, float fields use 200 auto-scaled bands with row 0 at the
    /// top.
    pub fn for_grid(grid: &Grid) -> Result<Self> {
        let origin = match grid.element_kind() {
            ElementKind::I8 => Origin::Lower,
            ElementKind::F32 => Origin::Upper,
        };

        Ok(Self {
            levels: ContourLevels::for_grid(grid)?,
            origin,
            size: Self::DEFAULT_SIZE,
        })
    }

    /// Same style with a different image size
    pub fn with_size(mut self, width: u32, height: u32) -> Self {
        self.size = (width, height);
        self
    }
}

/// Render a filled contour plot of `grid` to an image file
///
/// Paths ending in `.svg` are written as SVG, anything else as a bitmap in
/// the format implied by the extension (e.g. PNG).
///
/// ```rust, no_run
/// # use echotools_grid::read_grid_file;
/// # use echotools_plot::{render_contour, ContourStyle};
/// let grid = read_grid_file("./grazing_angle.bin").unwrap();
/// let style = ContourStyle::for_grid(&grid).unwrap();
/// render_contour(&grid, "./grazing_angle.png", &style).unwrap();
/// ```
pub fn render_contour<P: AsRef<Path>>(grid: &Grid, path: P, style: &ContourStyle) -> Result<()> {
    let path = path.as_ref();
    let (width, height) = style.size;
    if width == 0 || height == 0 {
        return Err(Error::InvalidSize(width, height));
    }

    debug!(
        "Rendering {}x{} contour ({} bands) to {}",
        grid.width(),
        grid.height(),
        style.levels.bands(),
        path.display()
    );

    let is_svg = path
        .extension()
        .is_some_and(|ext| ext.eq_ignore_ascii_case("svg"));

    if is_svg {
        draw(SVGBackend::new(path, style.size).into_drawing_area(), grid, style)
    } else {
        draw(BitMapBackend::new(path, style.size).into_drawing_area(), grid, style)
    }
}

/// Draw every grid cell as a rectangle filled with its band colour
fn draw<DB: DrawingBackend>(
    root: DrawingArea<DB, Shift>,
    grid: &Grid,
    style: &ContourStyle,
) -> Result<()> {
    root.fill(&WHITE).map_err(plot_error)?;

    // columns run along x, rows along y
    let rows = grid.width() as f64;
    let columns = grid.height() as f64;
    let mut chart = ChartBuilder::on(&root)
        .margin(10)
        .build_cartesian_2d(0.0..columns, 0.0..rows)
        .map_err(plot_error)?;

    let levels = &style.levels;
    let cells = (0..grid.width()).flat_map(|i| (0..grid.height()).map(move |j| (i, j)));
    let rectangles = cells.filter_map(|(i, j)| {
        let band = levels.band(grid.get(i, j)?)?;
        let y = match style.origin {
            Origin::Upper => rows - 1.0 - i as f64,
            Origin::Lower => i as f64,
        };
        let x = j as f64;
        let colour = colormap(levels.band_fraction(band));
        Some(Rectangle::new([(x, y), (x + 1.0, y + 1.0)], colour.filled()))
    });

    chart.draw_series(rectangles).map_err(plot_error)?;
    root.present().map_err(plot_error)?;
    trace!("Contour plot complete");
    Ok(())
}

/// Perceptually uniform blue-green-yellow ramp, sampled from viridis
const VIRIDIS: [(u8, u8, u8); 9] = [
    (68, 1, 84),
    (71, 44, 122),
    (59, 81, 139),
    (44, 113, 142),
    (33, 144, 141),
    (39, 173, 129),
    (92, 200, 99),
    (170, 220, 50),
    (253, 231, 37),
];

/// Colour at position `t` in `[0, 1]` along the ramp
pub(crate) fn colormap(t: f64) -> RGBColor {
    let t = if t.is_finite() { t.clamp(0.0, 1.0) } else { 0.0 };
    let scaled = t * (VIRIDIS.len() - 1) as f64;
    let index = (scaled.floor() as usize).min(VIRIDIS.len() - 2);
    let frac = scaled - index as f64;

    let (r0, g0, b0) = VIRIDIS[index];
    let (r1, g1, b1) = VIRIDIS[index + 1];
    let lerp = |a: u8, b: u8| (a as f64 + (b as f64 - a as f64) * frac).round() as u8;
    RGBColor(lerp(r0, r1), lerp(g0, g1), lerp(b0, b1))
}
