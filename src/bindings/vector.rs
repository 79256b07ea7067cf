use pyo3::prelude::*;

create_binding!(add, crate::ops::add, [a, b], Vector);
create_binding!(dot, crate::ops::dot, [a, b], Scalar);
create_binding!(normalize, crate::ops::normalize, [v], Vector);

#[pyfunction]
pub fn scalar_multiply(scalar: f64, v: Vec<f64>) -> Vec<f64> {
    crate::ops::scalar_multiply(scalar, &v)
}

pub fn register(m: &PyModule) -> PyResult<()> {
    m.add_function(wrap_pyfunction!(add, m)?)?;
    m.add_function(wrap_pyfunction!(dot, m)?)?;
    m.add_function(wrap_pyfunction!(scalar_multiply, m)?)?;
    m.add_function(wrap_pyfunction!(normalize, m)?)?;
    Ok(())
}
