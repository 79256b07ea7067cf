#[macro_use]
mod macros;

mod batch;
mod vector;

use pyo3::exceptions::PyValueError;
use pyo3::prelude::*;
use pyo3::types::PyModule;

use crate::error::VectorError;

impl From<VectorError> for PyErr {
    fn from(err: VectorError) -> Self {
        PyValueError::new_err(err.to_string())
    }
}

/// vector_math - vector arithmetic with an ndarray-backed batch path
#[pymodule]
pub fn vector_math(_py: Python, m: &PyModule) -> PyResult<()> {
    m.add("__version__", env!("CARGO_PKG_VERSION"))?;
    // add, dot, scalar_multiply, normalize
    vector::register(m)?;
    // batch_normalize, batch_normalize_array, backend_name
    batch::register(m)?;
    Ok(())
}
