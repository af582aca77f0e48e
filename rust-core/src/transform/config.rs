//! Hilbert backend selection
//!
//! Both backends implement [`AnalyticSignal`], so callers can pick one at
//! runtime from a [`HilbertConfig`].

use super::hilbert::HilbertTransformer;
use super::shared::SharedHilbertTransformer;
use super::TransformError;
use num_complex::Complex;

/// Common shape of the Hilbert backends
pub trait AnalyticSignal: Send {
    /// Transform length
    fn size(&self) -> usize;

    /// Analytic signal of a complex input
    fn analytic(&mut self, input: &[Complex<f64>], output: &mut [Complex<f64>]);

    /// Analytic signal of a real input
    fn analytic_real(&mut self, input: &[f64], output: &mut [Complex<f64>]);
}

impl AnalyticSignal for HilbertTransformer<f64> {
    fn size(&self) -> usize {
        HilbertTransformer::size(self)
    }

    fn analytic(&mut self, input: &[Complex<f64>], output: &mut [Complex<f64>]) {
        self.transform(input, output);
    }

    fn analytic_real(&mut self, input: &[f64], output: &mut [Complex<f64>]) {
        self.transform_real(input, output);
    }
}

impl AnalyticSignal for SharedHilbertTransformer {
    fn size(&self) -> usize {
        SharedHilbertTransformer::size(self)
    }

    fn analytic(&mut self, input: &[Complex<f64>], output: &mut [Complex<f64>]) {
        self.transform(input, output);
    }

    fn analytic_real(&mut self, input: &[f64], output: &mut [Complex<f64>]) {
        self.transform_real(input, output);
    }
}

/// Which engine computes the transform
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum HilbertBackend {
    /// Recursive radix-2 engine; power-of-two sizes, output scaled by 1/N
    #[default]
    Native,

    /// rustfft/realfft; any size, unit scale
    RustFft,
}

/// Hilbert transformer configuration
#[derive(Debug, Clone)]
pub struct HilbertConfig {
    /// Transform length (power of two for the native backend)
    pub size: usize,

    pub backend: HilbertBackend,
}

impl Default for HilbertConfig {
    fn default() -> Self {
        Self {
            size: 1024,
            backend: HilbertBackend::Native,
        }
    }
}

impl HilbertConfig {
    /// Build the configured backend
    pub fn build(&self) -> Result<Box<dyn AnalyticSignal>, TransformError> {
        Ok(match self.backend {
            HilbertBackend::Native => Box::new(HilbertTransformer::<f64>::try_new(self.size)?),
            HilbertBackend::RustFft => Box::new(SharedHilbertTransformer::try_new(self.size)?),
        })
    }
}
