//! Analytic signal via the native FFT engine
//!
//! forward FFT -> spectral mask -> inverse FFT -> divide by N
//!
//! The inverse transformer already divides by N through its per-level
//! halving, so the explicit division leaves the result scaled by `1/N`
//! relative to the analytic signal (`1/N²` relative to an unnormalized
//! inverse DFT of the masked spectrum). Use
//! [`SharedHilbertTransformer`](super::SharedHilbertTransformer) for
//! unit scale.

use super::fft::{Direction, FftTransformer};
use super::{mask_limits, validate_size, Sample, TransformError};
use log::debug;
use num_complex::Complex;
use rustfft::num_traits::NumCast;

/// Fixed-size Hilbert transformer
///
/// Owns one forward and one inverse [`FftTransformer`]; like them it must not
/// be used from two threads at once.
pub struct HilbertTransformer<T: Sample> {
    size: usize,
    limit1: usize,
    limit2: usize,
    forward: FftTransformer<T>,
    inverse: FftTransformer<T>,

    /// Spectrum of the current input, masked in place
    spectrum: Vec<Complex<T>>,

    /// Real-to-complex staging buffer
    staging: Vec<Complex<T>>,
}

impl<T: Sample> HilbertTransformer<T> {
    /// Create a transformer
    ///
    /// # Arguments
    /// * `size` - Transform length (power of 2)
    ///
    /// # Panics
    /// If `size` is zero or not a power of two.
    pub fn new(size: usize) -> Self {
        Self::try_new(size).unwrap_or_else(|e| panic!("{e}"))
    }

    /// Create a transformer, reporting an invalid size as an error
    ///
    /// # Arguments
    /// * `size` - Transform length (power of 2)
    pub fn try_new(size: usize) -> Result<Self, TransformError> {
        let size = validate_size(size)?;
        let (limit1, limit2) = mask_limits(size);

        debug!(
            "hilbert transformer: size={} limit1={} limit2={}",
            size, limit1, limit2
        );

        Ok(Self {
            size,
            limit1,
            limit2,
            forward: FftTransformer::try_new(size, Direction::Forward)?,
            inverse: FftTransformer::try_new(size, Direction::Inverse)?,
            spectrum: vec![Complex::default(); size],
            staging: vec![Complex::default(); size],
        })
    }

    /// Write the (1/N-scaled) analytic signal of `input` into `output`
    ///
    /// # Panics
    /// If either buffer is not exactly `size` samples long.
    pub fn transform(&mut self, input: &[Complex<T>], output: &mut [Complex<T>]) {
        self.forward.transform(input, &mut self.spectrum);
        self.apply_mask();
        self.inverse.transform(&self.spectrum, output);
        self.unscale(output);
    }

    /// Replace `buffer` with its (1/N-scaled) analytic signal
    ///
    /// # Panics
    /// If `buffer` is not exactly `size` samples long.
    pub fn transform_in_place(&mut self, buffer: &mut [Complex<T>]) {
        self.forward.transform(buffer, &mut self.spectrum);
        self.apply_mask();
        self.inverse.transform(&self.spectrum, buffer);
        self.unscale(buffer);
    }

    /// Real-input variant of [`transform`](Self::transform)
    pub fn transform_real(&mut self, input: &[T], output: &mut [Complex<T>]) {
        assert_eq!(
            input.len(),
            self.size,
            "input length {} does not match transform size {}",
            input.len(),
            self.size
        );

        let mut staging = std::mem::take(&mut self.staging);
        for (slot, &re) in staging.iter_mut().zip(input) {
            *slot = Complex::new(re, T::zero());
        }
        self.transform(&staging, output);
        self.staging = staging;
    }

    pub fn size(&self) -> usize {
        self.size
    }

    fn unscale(&self, output: &mut [Complex<T>]) {
        let scale = <T as NumCast>::from(self.size).unwrap_or_else(T::one);
        for sample in output.iter_mut() {
            *sample = sample.unscale(scale);
        }
    }

    /// Double the positive-frequency bins, clear the upper bins
    fn apply_mask(&mut self) {
        let two = T::one() + T::one();
        for bin in &mut self.spectrum[1..self.limit1] {
            *bin = bin.scale(two);
        }
        for bin in &mut self.spectrum[self.limit2..] {
            *bin = Complex::new(T::zero(), T::zero());
        }
    }
}
