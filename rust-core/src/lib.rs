//! dsperado - FFT, Hilbert transform and elementary DSP routines
//!
//! Recursive radix-2 FFT engine with arena-backed scratch, analytic-signal
//! Hilbert transformers, RC filters, a smoothed differentiator and 2D
//! cross-correlation. Python bindings are available behind the `python`
//! feature.

// Suppress PyO3 non-local impl warnings (harmless macro-generated code)
#![cfg_attr(feature = "python", allow(non_local_definitions))]

pub mod correlation;
pub mod filters;
pub mod transform;

#[cfg(feature = "python")]
pub mod python_bindings;

pub use correlation::{xcorr_2d, xcorr_2d_normalized, CorrelationError};
pub use filters::{high_pass, low_pass, smoothed_dd1, DifferentiatorCache, FilterError, RcFilterConfig};
pub use transform::{
    AnalyticSignal, Direction, FftTransformer, HilbertBackend, HilbertConfig, HilbertTransformer,
    SharedHilbertTransformer, TransformError,
};
