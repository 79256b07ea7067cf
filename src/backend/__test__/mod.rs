use crate::backend::{NormalizeBackend, ScalarBackend, Strategy};
use crate::error::VectorError;
use approx::assert_relative_eq;


fn rows(data: &[Vec<f64>]) -> Vec<&[f64]> {
    data.iter().map(|r| r.as_slice()).collect()
}

#[test]
fn test_scalar_backend_identity() {
    let backend = ScalarBackend;
    assert_eq!(backend.name(), "scalar");
    assert_eq!(backend.strategy(), Strategy::Scalar);
    assert!(backend.is_available());
    assert_eq!(Strategy::Scalar.to_string(), "scalar");
    assert_eq!(Strategy::Vectorized.to_string(), "vectorized");
}

#[test]
fn test_scalar_backend_normalizes_in_order() {
    let data = vec![vec![3.0, 4.0], vec![0.0, 2.0], vec![-5.0, 0.0]];
    let out = ScalarBackend.normalize_rows(&rows(&data), 2).unwrap();
    assert_eq!(out.len(), 3);
    assert_relative_eq!(out[0][0], 0.6);
    assert_relative_eq!(out[0][1], 0.8);
    assert_eq!(out[1], vec![0.0, 1.0]);
    assert_eq!(out[2], vec![-1.0, 0.0]);
}

#[test]
fn test_scalar_backend_fails_at_first_zero_row() {
    let data = vec![vec![1.0, 0.0], vec![0.0, 0.0], vec![0.0, 0.0]];
    let err = ScalarBackend.normalize_rows(&rows(&data), 2).unwrap_err();
    assert_eq!(err, VectorError::ZeroVector { row: Some(1) });
    assert_eq!(
        err.to_string(),
        "cannot normalize zero-length vector in batch (row 1)"
    );
}
