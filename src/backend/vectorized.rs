use ndarray::{Array1, Array2, ArrayView2, Axis};
use rayon::prelude::*;

use super::{NormalizeBackend, Strategy};
use crate::error::{Result, VectorError};
use crate::ops::batch::{first_zero_row, norm_batched};
use crate::ops::Batch;

/// Batches with at least this many rows divide on the rayon pool.
pub const DEFAULT_PARALLEL_MIN_ROWS: usize = 1024;

/// Dense `ndarray` implementation: one pass for the row norms, one
/// broadcast division.
#[derive(Debug, Clone, Copy)]
pub struct VectorizedBackend {
    parallel_min_rows: usize,
}

impl Default for VectorizedBackend {
    fn default() -> Self {
        Self::new()
    }
}

impl VectorizedBackend {
    pub fn new() -> Self {
        Self {
            parallel_min_rows: DEFAULT_PARALLEL_MIN_ROWS,
        }
    }

    pub fn with_parallel_min_rows(mut self, rows: usize) -> Self {
        self.parallel_min_rows = rows;
        self
    }

    pub fn parallel_min_rows(&self) -> usize {
        self.parallel_min_rows
    }

    /// Divides every row of `x` by its own Euclidean norm.
    ///
    /// All norms are computed before any division, so a zero row anywhere
    /// fails the whole batch.
    pub fn normalize_array(&self, x: &ArrayView2<f64>) -> Result<Array2<f64>> {
        let norms = norm_batched(x);
        if let Some(row) = first_zero_row(&norms) {
            return Err(VectorError::ZeroVector { row: Some(row) });
        }

        if x.nrows() >= self.parallel_min_rows {
            log::debug!("dividing {} rows in parallel", x.nrows());
            return Ok(divide_rows_par(x, &norms));
        }
        let norms = norms.insert_axis(Axis(1));
        Ok(x / &norms)
    }
}

fn divide_rows_par(x: &ArrayView2<f64>, norms: &Array1<f64>) -> Array2<f64> {
    let mut result = x.to_owned();
    result
        .axis_iter_mut(Axis(0))
        .into_par_iter()
        .enumerate()
        .for_each(|(i, mut row)| {
            let norm = norms[i];
            row.mapv_inplace(|v| v / norm);
        });
    result
}

impl NormalizeBackend for VectorizedBackend {
    fn name(&self) -> &'static str {
        "ndarray"
    }

    fn strategy(&self) -> Strategy {
        Strategy::Vectorized
    }

    /// Runs a 3-4-5 triangle through the array path and checks the result.
    fn is_available(&self) -> bool {
        let probe = ndarray::arr2(&[[3.0, 4.0]]);
        match self.normalize_array(&probe.view()) {
            Ok(out) => (out[[0, 0]] - 0.6).abs() < 1e-12 && (out[[0, 1]] - 0.8).abs() < 1e-12,
            Err(_) => false,
        }
    }

    fn normalize_rows(&self, rows: &[&[f64]], n_cols: usize) -> Result<Batch> {
        let flat: Vec<f64> = rows.iter().flat_map(|row| row.iter().copied()).collect();
        let found = flat.len();
        let x = Array2::from_shape_vec((rows.len(), n_cols), flat).map_err(|_| {
            VectorError::ShapeMismatch {
                expected: rows.len() * n_cols,
                found,
            }
        })?;
        let out = self.normalize_array(&x.view())?;
        Ok(out.outer_iter().map(|row| row.to_vec()).collect())
    }
}
