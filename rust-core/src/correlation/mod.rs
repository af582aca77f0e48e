//! Complex 2D cross-correlation at a point of interest

pub mod xcorr;

pub use xcorr::{xcorr_2d, xcorr_2d_normalized};

use thiserror::Error;

#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum CorrelationError {
    #[error("grid shapes differ: {0:?} vs {1:?}")]
    ShapeMismatch((usize, usize), (usize, usize)),

    #[error("grids are empty")]
    Empty,

    #[error("point ({0}, {1}) lies outside a {2}x{3} grid")]
    PointOutOfBounds(usize, usize, usize, usize),

    #[error("correlation window has zero energy")]
    ZeroEnergy,
}
