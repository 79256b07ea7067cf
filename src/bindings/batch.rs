use numpy::{IntoPyArray, PyArray2, PyReadonlyArray2};
use pyo3::prelude::*;

use crate::backend::VectorizedBackend;
use crate::normalizer::{self, BatchNormalizer};

/// Lists in, lists out. Uses the process default backend.
#[pyfunction]
pub fn batch_normalize(vs: Vec<Vec<f64>>) -> PyResult<Vec<Vec<f64>>> {
    Ok(normalizer::batch_normalize(vs)?)
}

/// 2-D float64 array in, same-shaped array out, without the list round trip.
#[pyfunction]
pub fn batch_normalize_array<'py>(
    py: Python<'py>,
    x: PyReadonlyArray2<f64>,
) -> PyResult<&'py PyArray2<f64>> {
    let x_arr = x.as_array();
    let result = VectorizedBackend::new().normalize_array(&x_arr)?;
    Ok(result.into_pyarray(py))
}

#[pyfunction]
pub fn backend_name() -> &'static str {
    BatchNormalizer::detect().backend_name()
}

pub fn register(m: &PyModule) -> PyResult<()> {
    m.add_function(wrap_pyfunction!(batch_normalize, m)?)?;
    m.add_function(wrap_pyfunction!(batch_normalize_array, m)?)?;
    m.add_function(wrap_pyfunction!(backend_name, m)?)?;
    Ok(())
}
