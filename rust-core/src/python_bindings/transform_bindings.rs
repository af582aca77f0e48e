//! Python bindings for the FFT and Hilbert transformers

use pyo3::prelude::*;
use pyo3::exceptions::PyValueError;
use numpy::{Complex64, PyArray1, PyReadonlyArray1};
use crate::transform::{Direction, FftTransformer, HilbertTransformer, SharedHilbertTransformer};

fn check_len(len: usize, size: usize) -> PyResult<()> {
    if len != size {
        return Err(PyValueError::new_err(format!(
            "expected {} samples, got {}",
            size, len
        )));
    }
    Ok(())
}

/// Fixed-size FFT exposed to Python
#[pyclass(name = "FftTransformer")]
pub struct PyFftTransformer {
    inner: FftTransformer<f64>,
}

#[pymethods]
impl PyFftTransformer {
    /// Create a new transformer
    /// 
    /// Args:
    ///     size: Transform length (power of 2)
    ///     inverse: Build an inverse (1/N normalized) transform
    #[new]
    #[pyo3(signature = (size, inverse=false))]
    fn new(size: usize, inverse: bool) -> PyResult<Self> {
        let direction = if inverse { Direction::Inverse } else { Direction::Forward };
        let inner = FftTransformer::try_new(size, direction)
            .map_err(|e| PyValueError::new_err(e.to_string()))?;
        
        Ok(Self { inner })
    }
    
    /// Transform a complex signal
    /// 
    /// Args:
    ///     signal: complex128 numpy array of length `size`
    /// 
    /// Returns:
    ///     Spectrum (or time signal for the inverse) as complex128 array
    fn transform<'py>(
        &mut self,
        py: Python<'py>,
        signal: PyReadonlyArray1<Complex64>,
    ) -> PyResult<&'py PyArray1<Complex64>> {
        let input = signal.as_slice()?;
        check_len(input.len(), self.inner.size())?;
        
        let mut output = vec![Complex64::default(); self.inner.size()];
        self.inner.transform(input, &mut output);
        
        Ok(PyArray1::from_vec(py, output))
    }
    
    /// Transform a real signal
    fn transform_real<'py>(
        &mut self,
        py: Python<'py>,
        signal: PyReadonlyArray1<f64>,
    ) -> PyResult<&'py PyArray1<Complex64>> {
        let input = signal.as_slice()?;
        check_len(input.len(), self.inner.size())?;
        
        let mut output = vec![Complex64::default(); self.inner.size()];
        self.inner.transform_real(input, &mut output);
        
        Ok(PyArray1::from_vec(py, output))
    }
    
    #[getter]
    fn size(&self) -> usize {
        self.inner.size()
    }
    
    #[getter]
    fn inverse(&self) -> bool {
        self.inner.direction() == Direction::Inverse
    }
}

/// Hilbert transformer exposed to Python
/// 
/// `shared=False` selects the native radix-2 engine (power-of-2 sizes,
/// output scaled by 1/N); `shared=True` selects the rustfft backend (any
/// size, unit scale).
#[pyclass(name = "HilbertTransformer")]
pub struct PyHilbertTransformer {
    inner: HilbertEngine,
}

enum HilbertEngine {
    Native(HilbertTransformer<f64>),
    Shared(SharedHilbertTransformer),
}

#[pymethods]
impl PyHilbertTransformer {
    #[new]
    #[pyo3(signature = (size, shared=false))]
    fn new(size: usize, shared: bool) -> PyResult<Self> {
        let inner = if shared {
            SharedHilbertTransformer::try_new(size).map(HilbertEngine::Shared)
        } else {
            HilbertTransformer::try_new(size).map(HilbertEngine::Native)
        }
        .map_err(|e| PyValueError::new_err(e.to_string()))?;
        
        Ok(Self { inner })
    }
    
    /// Analytic signal of a real input
    /// 
    /// Args:
    ///     signal: float64 numpy array of length `size`
    /// 
    /// Returns:
    ///     complex128 array; the imaginary part is the Hilbert transform
    fn transform<'py>(
        &mut self,
        py: Python<'py>,
        signal: PyReadonlyArray1<f64>,
    ) -> PyResult<&'py PyArray1<Complex64>> {
        let input = signal.as_slice()?;
        let size = self.size();
        check_len(input.len(), size)?;
        
        let mut output = vec![Complex64::default(); size];
        match &mut self.inner {
            HilbertEngine::Native(hilbert) => hilbert.transform_real(input, &mut output),
            HilbertEngine::Shared(hilbert) => hilbert.transform_real(input, &mut output),
        }
        
        Ok(PyArray1::from_vec(py, output))
    }
    
    /// Analytic signal of a complex input
    /// 
    /// Args:
    ///     signal: complex128 numpy array of length `size`
    fn transform_complex<'py>(
        &mut self,
        py: Python<'py>,
        signal: PyReadonlyArray1<Complex64>,
    ) -> PyResult<&'py PyArray1<Complex64>> {
        let input = signal.as_slice()?;
        let size = self.size();
        check_len(input.len(), size)?;
        
        let mut output = vec![Complex64::default(); size];
        match &mut self.inner {
            HilbertEngine::Native(hilbert) => hilbert.transform(input, &mut output),
            HilbertEngine::Shared(hilbert) => hilbert.transform(input, &mut output),
        }
        
        Ok(PyArray1::from_vec(py, output))
    }
    
    #[getter]
    fn size(&self) -> usize {
        match &self.inner {
            HilbertEngine::Native(hilbert) => hilbert.size(),
            HilbertEngine::Shared(hilbert) => hilbert.size(),
        }
    }
}
