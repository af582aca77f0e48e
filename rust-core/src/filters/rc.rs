//! Single-pass RC filters
//!
//! First-order recursive low-pass and high-pass filters applied in place.
//! The time constant is `RC = (2/π) / cutoff`.

use super::FilterError;
use std::f64::consts::FRAC_PI_2;

/// Cutoff and sample rate for the RC filters
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RcFilterConfig {
    /// Cutoff frequency in Hz
    pub cutoff_hz: f64,

    /// Sample rate in Hz
    pub sample_rate_hz: f64,
}

impl Default for RcFilterConfig {
    fn default() -> Self {
        Self {
            cutoff_hz: 1000.0,
            sample_rate_hz: 48000.0,
        }
    }
}

impl RcFilterConfig {
    pub fn new(cutoff_hz: f64, sample_rate_hz: f64) -> Self {
        Self {
            cutoff_hz,
            sample_rate_hz,
        }
    }

    /// Both frequencies must be finite and positive
    pub fn validate(&self) -> Result<(), FilterError> {
        if !(self.cutoff_hz.is_finite() && self.cutoff_hz > 0.0) {
            return Err(FilterError::InvalidCutoff(self.cutoff_hz));
        }
        if !(self.sample_rate_hz.is_finite() && self.sample_rate_hz > 0.0) {
            return Err(FilterError::InvalidSampleRate(self.sample_rate_hz));
        }
        Ok(())
    }

    fn time_constant(&self) -> f64 {
        (1.0 / FRAC_PI_2) / self.cutoff_hz
    }

    fn sample_period(&self) -> f64 {
        1.0 / self.sample_rate_hz
    }
}

/// Low-pass filter in place
///
/// `y[i] = y[i-1] + α·(x[i] - y[i-1])`, `α = dt / (RC + dt)`; the first
/// sample passes through unchanged.
pub fn low_pass(buffer: &mut [f64], config: &RcFilterConfig) -> Result<(), FilterError> {
    config.validate()?;

    let rc = config.time_constant();
    let dt = config.sample_period();
    let alpha = dt / (rc + dt);

    for i in 1..buffer.len() {
        buffer[i] = buffer[i - 1] + alpha * (buffer[i] - buffer[i - 1]);
    }

    Ok(())
}

/// High-pass filter in place
///
/// `y[i] = α·(y[i-1] + x[i] - x[i-1])`, `α = RC / (RC + dt)`; the first
/// sample passes through unchanged.
pub fn high_pass(buffer: &mut [f64], config: &RcFilterConfig) -> Result<(), FilterError> {
    config.validate()?;

    let rc = config.time_constant();
    let dt = config.sample_period();
    let alpha = rc / (rc + dt);

    let Some(&first) = buffer.first() else {
        return Ok(());
    };

    let mut prev_input = first;
    for i in 1..buffer.len() {
        let input = buffer[i];
        buffer[i] = alpha * (buffer[i - 1] + input - prev_input);
        prev_input = input;
    }

    Ok(())
}
