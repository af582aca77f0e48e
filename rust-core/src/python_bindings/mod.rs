//! PyO3 bindings for Python integration

use pyo3::prelude::*;

mod filter_bindings;
mod transform_bindings;

/// Python module definition
#[pymodule]
fn dsperado(_py: Python, m: &PyModule) -> PyResult<()> {
    m.add_class::<transform_bindings::PyFftTransformer>()?;
    m.add_class::<transform_bindings::PyHilbertTransformer>()?;
    m.add_class::<filter_bindings::PySmoothedDifferentiator>()?;
    
    m.add_function(wrap_pyfunction!(filter_bindings::low_pass, m)?)?;
    m.add_function(wrap_pyfunction!(filter_bindings::high_pass, m)?)?;
    
    Ok(())
}
