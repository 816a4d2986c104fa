//! Filled contour rendering for echo simulator grids
//!
#![doc = include_str!("../readme.md")]

mod error;
mod levels;
mod render;

#[doc(inline)]
pub use crate::levels::{ContourLevels, CATEGORICAL_BANDS, CONTINUOUS_BANDS};

#[doc(inline)]
pub use crate::render::{render_contour, ContourStyle, Origin};

#[doc(inline)]
pub use crate::error::{Error, Result};
