//! Execution strategies for batch normalization.
//!
//! Every backend receives rows that were already validated by the
//! normalizer (non-empty batch, every row `n_cols` long), so backends only
//! differ in how they compute, never in what they accept.

pub mod probe;
pub mod scalar;
#[cfg(feature = "vectorized")]
pub mod vectorized;

#[cfg(test)]
mod __test__;

use std::fmt;

use crate::error::Result;
use crate::ops::Batch;

pub use self::probe::vectorized_backend;
pub use self::scalar::ScalarBackend;
#[cfg(feature = "vectorized")]
pub use self::vectorized::VectorizedBackend;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Strategy {
    /// One row at a time through [`crate::ops::normalize`].
    Scalar,
    /// Whole batch as a dense 2-D array.
    Vectorized,
}

impl fmt::Display for Strategy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Strategy::Scalar => write!(f, "scalar"),
            Strategy::Vectorized => write!(f, "vectorized"),
        }
    }
}

/// A way of normalizing every row of a batch.
pub trait NormalizeBackend: Send + Sync {
    fn name(&self) -> &'static str;

    fn strategy(&self) -> Strategy;

    /// Whether the backend can run in this process.
    fn is_available(&self) -> bool {
        true
    }

    /// Normalizes `rows`, each exactly `n_cols` long, preserving row order.
    ///
    /// Fails with `ZeroVector { row: Some(i) }` where `i` is the first row
    /// with zero norm; nothing is returned for the other rows.
    fn normalize_rows(&self, rows: &[&[f64]], n_cols: usize) -> Result<Batch>;
}
