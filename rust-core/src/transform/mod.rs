//! Fourier and Hilbert transforms
//!
//! The native engine ([`FftTransformer`], [`HilbertTransformer`]) is a
//! recursive radix-2 FFT backed by a per-instance scratch [`Arena`]. The
//! [`SharedHilbertTransformer`] backend runs on rustfft/realfft instead and
//! may be shared between threads.

pub mod arena;
pub mod config;
pub mod fft;
pub mod hilbert;
pub mod shared;

pub use arena::Arena;
pub use config::{AnalyticSignal, HilbertBackend, HilbertConfig};
pub use fft::{Direction, FftTransformer};
pub use hilbert::HilbertTransformer;
pub use shared::SharedHilbertTransformer;

use rustfft::num_traits::{Float, FloatConst};
use std::fmt::Debug;
use thiserror::Error;

#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum TransformError {
    #[error("transform size must be greater than zero")]
    ZeroSize,

    #[error("transform size must be a power of two (got {0})")]
    NotPowerOfTwo(usize),
}

/// Real component type accepted by the native engine (`f32`, `f64`)
pub trait Sample: Float + FloatConst + Default + Debug + Send + Sync + 'static {}

impl<T> Sample for T where T: Float + FloatConst + Default + Debug + Send + Sync + 'static {}

/// Check that `size` is a non-zero power of two
pub fn validate_size(size: usize) -> Result<usize, TransformError> {
    if size == 0 {
        return Err(TransformError::ZeroSize);
    }
    if !size.is_power_of_two() {
        return Err(TransformError::NotPowerOfTwo(size));
    }
    Ok(size)
}

/// Bins `[1, limit1)` of an analytic-signal spectrum are doubled and bins
/// `[limit2, size)` are cleared.
pub(crate) fn mask_limits(size: usize) -> (usize, usize) {
    let limit1 = size.div_ceil(2);
    let limit2 = if size % 2 == 0 { limit1 - 1 } else { limit1 };
    (limit1, limit2)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_validate_size() {
        assert_eq!(validate_size(1), Ok(1));
        assert_eq!(validate_size(1024), Ok(1024));
        assert_eq!(validate_size(0), Err(TransformError::ZeroSize));
        assert_eq!(validate_size(6), Err(TransformError::NotPowerOfTwo(6)));
    }

    #[test]
    fn test_mask_limits() {
        assert_eq!(mask_limits(1), (1, 1));
        assert_eq!(mask_limits(2), (1, 0));
        assert_eq!(mask_limits(8), (4, 3));
        assert_eq!(mask_limits(7), (4, 4));
    }
}
