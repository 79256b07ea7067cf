use ndarray::{Array1, ArrayView2, Axis};

/// Squared L2 norm of every row of `x` (shape `(batch_size, dim)`),
/// returned as shape `(batch_size,)`.
pub fn norm_sq_batched(x: &ArrayView2<f64>) -> Array1<f64> {
    (x * x).sum_axis(Axis(1))
}

pub fn norm_batched(x: &ArrayView2<f64>) -> Array1<f64> {
    norm_sq_batched(x).mapv(f64::sqrt)
}

/// Index of the first row whose norm is exactly zero.
pub fn first_zero_row(norms: &Array1<f64>) -> Option<usize> {
    norms.iter().position(|&n| n == 0.0)
}
