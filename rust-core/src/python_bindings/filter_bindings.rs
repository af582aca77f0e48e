//! Python bindings for the in-place filters

use pyo3::prelude::*;
use pyo3::exceptions::PyValueError;
use numpy::{PyArray1, PyReadonlyArray1};
use crate::filters::{self, DifferentiatorCache, RcFilterConfig};

/// RC low-pass filter
/// 
/// Args:
///     signal: Input samples as numpy array
///     cutoff_hz: Cutoff frequency in Hz
///     sample_rate_hz: Sample rate in Hz
/// 
/// Returns:
///     Filtered copy of the signal
#[pyfunction]
#[pyo3(signature = (signal, cutoff_hz, sample_rate_hz=48000.0))]
pub fn low_pass<'py>(
    py: Python<'py>,
    signal: PyReadonlyArray1<f64>,
    cutoff_hz: f64,
    sample_rate_hz: f64,
) -> PyResult<&'py PyArray1<f64>> {
    let mut buffer = signal.as_slice()?.to_vec();
    filters::low_pass(&mut buffer, &RcFilterConfig::new(cutoff_hz, sample_rate_hz))
        .map_err(|e| PyValueError::new_err(e.to_string()))?;
    
    Ok(PyArray1::from_vec(py, buffer))
}

/// RC high-pass filter (see `low_pass`)
#[pyfunction]
#[pyo3(signature = (signal, cutoff_hz, sample_rate_hz=48000.0))]
pub fn high_pass<'py>(
    py: Python<'py>,
    signal: PyReadonlyArray1<f64>,
    cutoff_hz: f64,
    sample_rate_hz: f64,
) -> PyResult<&'py PyArray1<f64>> {
    let mut buffer = signal.as_slice()?.to_vec();
    filters::high_pass(&mut buffer, &RcFilterConfig::new(cutoff_hz, sample_rate_hz))
        .map_err(|e| PyValueError::new_err(e.to_string()))?;
    
    Ok(PyArray1::from_vec(py, buffer))
}

/// Smoothed differentiator with its own coefficient cache
#[pyclass(name = "SmoothedDifferentiator")]
pub struct PySmoothedDifferentiator {
    cache: DifferentiatorCache,
}

#[pymethods]
impl PySmoothedDifferentiator {
    #[new]
    fn new() -> Self {
        Self {
            cache: DifferentiatorCache::new(),
        }
    }
    
    /// Apply the differentiator
    /// 
    /// Args:
    ///     signal: Input samples as numpy array
    ///     coeffs_num: Coefficients per side (>= 2)
    fn process<'py>(
        &mut self,
        py: Python<'py>,
        signal: PyReadonlyArray1<f64>,
        coeffs_num: usize,
    ) -> PyResult<&'py PyArray1<f64>> {
        let mut buffer = signal.as_slice()?.to_vec();
        filters::smoothed_dd1(&mut buffer, coeffs_num, &mut self.cache)
            .map_err(|e| PyValueError::new_err(e.to_string()))?;
        
        Ok(PyArray1::from_vec(py, buffer))
    }
}
