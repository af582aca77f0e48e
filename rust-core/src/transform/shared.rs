//! Thread-safe Hilbert transformer on rustfft/realfft
//!
//! Plans are built once under a mutex and handed out as shared `Arc`s; the
//! transforms themselves run outside the lock on per-thread working
//! buffers. Any non-zero size is accepted.

use super::{mask_limits, TransformError};
use log::{debug, trace};
use num_complex::Complex;
use realfft::{RealFftPlanner, RealToComplex};
use rustfft::{Fft, FftPlanner};
use std::cell::RefCell;
use std::sync::{Arc, Mutex, PoisonError};

#[derive(Clone)]
struct Plans {
    forward: Arc<dyn Fft<f64>>,
    inverse: Arc<dyn Fft<f64>>,
    r2c: Arc<dyn RealToComplex<f64>>,
}

#[derive(Default)]
struct ThreadBuffers {
    real: Vec<f64>,
    half_spectrum: Vec<Complex<f64>>,
    scratch: Vec<Complex<f64>>,
}

thread_local! {
    static BUFFERS: RefCell<ThreadBuffers> = RefCell::new(ThreadBuffers::default());
}

/// Hilbert transformer that can be shared between threads
///
/// Produces the analytic signal at unit scale: the inverse transform is
/// unnormalized and the output is divided by N once.
pub struct SharedHilbertTransformer {
    size: usize,
    limit1: usize,
    limit2: usize,

    /// Built on first use; the lock is held only while planning
    plans: Mutex<Option<Plans>>,
}

impl SharedHilbertTransformer {
    /// Create a transformer; plans are built on first use
    ///
    /// # Arguments
    /// * `size` - Transform length (any non-zero size)
    ///
    /// # Panics
    /// If `size` is zero.
    pub fn new(size: usize) -> Self {
        Self::try_new(size).unwrap_or_else(|e| panic!("{e}"))
    }

    /// Create a transformer, reporting a zero size as an error
    ///
    /// # Arguments
    /// * `size` - Transform length (any non-zero size)
    pub fn try_new(size: usize) -> Result<Self, TransformError> {
        if size == 0 {
            return Err(TransformError::ZeroSize);
        }
        let (limit1, limit2) = mask_limits(size);

        Ok(Self {
            size,
            limit1,
            limit2,
            plans: Mutex::new(None),
        })
    }

    /// Write the analytic signal of `input` into `output`
    ///
    /// # Panics
    /// If either buffer is not exactly `size` samples long.
    pub fn transform(&self, input: &[Complex<f64>], output: &mut [Complex<f64>]) {
        self.check_len("input", input.len());
        self.check_len("output", output.len());

        let plans = self.plans();
        output.copy_from_slice(input);

        BUFFERS.with(|cell| {
            let mut buffers = cell.borrow_mut();
            let scratch_len = plans
                .forward
                .get_inplace_scratch_len()
                .max(plans.inverse.get_inplace_scratch_len());
            buffers.scratch.resize(scratch_len, Complex::default());

            plans.forward.process_with_scratch(output, &mut buffers.scratch);
            self.apply_mask(output);
            plans.inverse.process_with_scratch(output, &mut buffers.scratch);
        });

        self.normalize(output);
    }

    /// Real-input variant of [`transform`](Self::transform), using a
    /// real-to-complex forward transform
    pub fn transform_real(&self, input: &[f64], output: &mut [Complex<f64>]) {
        self.check_len("input", input.len());
        self.check_len("output", output.len());

        let plans = self.plans();
        let bins = self.size / 2 + 1;

        BUFFERS.with(|cell| {
            let mut guard = cell.borrow_mut();
            let buffers = &mut *guard;

            buffers.real.clear();
            buffers.real.extend_from_slice(input);
            buffers.half_spectrum.resize(bins, Complex::default());
            let scratch_len = plans
                .r2c
                .get_scratch_len()
                .max(plans.inverse.get_inplace_scratch_len());
            buffers.scratch.resize(scratch_len, Complex::default());

            plans
                .r2c
                .process_with_scratch(&mut buffers.real, &mut buffers.half_spectrum, &mut buffers.scratch)
                .expect("buffer lengths match the plan");

            // Bins above N/2 are cleared by the mask regardless
            output[..bins].copy_from_slice(&buffers.half_spectrum);
            output[bins..].fill(Complex::default());

            self.apply_mask(output);
            plans.inverse.process_with_scratch(output, &mut buffers.scratch);
        });

        self.normalize(output);
    }

    pub fn size(&self) -> usize {
        self.size
    }

    fn plans(&self) -> Plans {
        let mut slot = self.plans.lock().unwrap_or_else(PoisonError::into_inner);

        if let Some(plans) = slot.as_ref() {
            trace!("shared hilbert: reusing plans for size {}", self.size);
            return plans.clone();
        }

        debug!("shared hilbert: planning size {}", self.size);
        let mut planner = FftPlanner::<f64>::new();
        let mut real_planner = RealFftPlanner::<f64>::new();
        let plans = Plans {
            forward: planner.plan_fft_forward(self.size),
            inverse: planner.plan_fft_inverse(self.size),
            r2c: real_planner.plan_fft_forward(self.size),
        };
        *slot = Some(plans.clone());
        plans
    }

    fn check_len(&self, name: &str, len: usize) {
        assert_eq!(
            len, self.size,
            "{} length {} does not match transform size {}",
            name, len, self.size
        );
    }

    fn apply_mask(&self, spectrum: &mut [Complex<f64>]) {
        for bin in &mut spectrum[1..self.limit1] {
            *bin *= 2.0;
        }
        spectrum[self.limit2..].fill(Complex::default());
    }

    fn normalize(&self, output: &mut [Complex<f64>]) {
        let scale = 1.0 / self.size as f64;
        for sample in output.iter_mut() {
            *sample *= scale;
        }
    }
}
