// src/bindings/macros.rs

/// Generates a `#[pyfunction]` wrapping a fallible vector operation.
///
/// Usage:
/// `create_binding!(python_name, rust_fn_path, [args...], ReturnKind);`
///
/// Example:
/// `create_binding!(add, crate::ops::add, [a, b], Vector);`
macro_rules! create_binding {
    // (a, b) -> list[float]
    ($py_fn_name:ident, $rust_fn:path, [a, b], Vector) => {
        #[pyo3::prelude::pyfunction]
        pub fn $py_fn_name(a: Vec<f64>, b: Vec<f64>) -> pyo3::PyResult<Vec<f64>> {
            Ok($rust_fn(&a, &b)?)
        }
    };

    // (a, b) -> float
    ($py_fn_name:ident, $rust_fn:path, [a, b], Scalar) => {
        #[pyo3::prelude::pyfunction]
        pub fn $py_fn_name(a: Vec<f64>, b: Vec<f64>) -> pyo3::PyResult<f64> {
            Ok($rust_fn(&a, &b)?)
        }
    };

    // (v) -> list[float]
    ($py_fn_name:ident, $rust_fn:path, [v], Vector) => {
        #[pyo3::prelude::pyfunction]
        pub fn $py_fn_name(v: Vec<f64>) -> pyo3::PyResult<Vec<f64>> {
            Ok($rust_fn(&v)?)
        }
    };
}
