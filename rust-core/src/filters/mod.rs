//! Elementwise time-domain filters
//!
//! First-order RC low/high-pass filters and a smoothed differentiator, all
//! applied in place on caller-owned buffers.

pub mod differentiator;
pub mod rc;

pub use differentiator::{smoothed_dd1, DifferentiatorCache};
pub use rc::{high_pass, low_pass, RcFilterConfig};

use thiserror::Error;

#[derive(Error, Debug, Clone, Copy, PartialEq)]
pub enum FilterError {
    #[error("cutoff frequency must be finite and positive (got {0} Hz)")]
    InvalidCutoff(f64),

    #[error("sample rate must be finite and positive (got {0} Hz)")]
    InvalidSampleRate(f64),

    #[error("smoothed differentiator needs at least 2 coefficients (got {0})")]
    TooFewCoefficients(usize),
}
