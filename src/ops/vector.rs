use crate::error::{Result, VectorError};

pub type Vector = Vec<f64>;
/// Ordered rows of equal length.
pub type Batch = Vec<Vector>;

fn check_same_len(a: &[f64], b: &[f64]) -> Result<()> {
    if a.len() != b.len() {
        return Err(VectorError::ShapeMismatch {
            expected: a.len(),
            found: b.len(),
        });
    }
    Ok(())
}

/// Collects any sequence of numbers into an owned vector.
pub fn to_vector<I>(v: I) -> Vector
where
    I: IntoIterator<Item = f64>,
{
    v.into_iter().collect()
}

/// Element-wise sum of two vectors of the same length.
pub fn add(a: &[f64], b: &[f64]) -> Result<Vector> {
    check_same_len(a, b)?;
    Ok(a.iter().zip(b).map(|(x, y)| x + y).collect())
}

/// Dot product of two vectors of the same length.
pub fn dot(a: &[f64], b: &[f64]) -> Result<f64> {
    check_same_len(a, b)?;
    Ok(a.iter().zip(b).map(|(x, y)| x * y).sum())
}

pub fn scalar_multiply(scalar: f64, v: &[f64]) -> Vector {
    v.iter().map(|x| scalar * x).collect()
}

/// Euclidean (L2) length of `v`.
pub fn l2_norm(v: &[f64]) -> f64 {
    v.iter().map(|x| x * x).sum::<f64>().sqrt()
}

/// Unit vector pointing along `v`.
///
/// Fails with [`VectorError::ZeroVector`] when `v` has zero length, which
/// includes the empty vector.
pub fn normalize(v: &[f64]) -> Result<Vector> {
    let l2 = l2_norm(v);
    if l2 == 0.0 {
        return Err(VectorError::ZeroVector { row: None });
    }
    Ok(v.iter().map(|x| x / l2).collect())
}
