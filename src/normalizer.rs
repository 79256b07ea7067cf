//! Batch normalization: validation, then dispatch to a backend.

use std::fmt;
use std::sync::{Arc, OnceLock};

use crate::backend::{vectorized_backend, NormalizeBackend, ScalarBackend, Strategy};
use crate::error::{Result, VectorError};
use crate::ops::Batch;

/// Normalizes every row of a batch through one backend.
///
/// Validation runs here, before dispatch, so the chosen backend never
/// changes which inputs are rejected.
#[derive(Clone)]
pub struct BatchNormalizer {
    backend: Arc<dyn NormalizeBackend>,
}

impl fmt::Debug for BatchNormalizer {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("BatchNormalizer")
            .field("backend", &self.backend.name())
            .field("strategy", &self.backend.strategy())
            .finish()
    }
}

impl Default for BatchNormalizer {
    fn default() -> Self {
        Self::detect()
    }
}

impl BatchNormalizer {
    /// Uses `vectorized` when given, the scalar loop otherwise.
    pub fn new(vectorized: Option<Arc<dyn NormalizeBackend>>) -> Self {
        let backend = vectorized.unwrap_or_else(|| Arc::new(ScalarBackend));
        Self { backend }
    }

    /// Picks the backend from the process-wide capability probe.
    pub fn detect() -> Self {
        Self::new(vectorized_backend())
    }

    pub fn scalar() -> Self {
        Self::new(None)
    }

    pub fn strategy(&self) -> Strategy {
        self.backend.strategy()
    }

    pub fn backend_name(&self) -> &'static str {
        self.backend.name()
    }

    /// Returns a unit vector for every row of `batch`, in input order.
    ///
    /// An empty batch yields an empty result. Rows of differing length fail
    /// with [`VectorError::ShapeMismatch`] and a zero row fails with
    /// [`VectorError::ZeroVector`]; either way no rows are returned.
    pub fn normalize<I, V>(&self, batch: I) -> Result<Batch>
    where
        I: IntoIterator<Item = V>,
        V: AsRef<[f64]>,
    {
        let owned: Vec<V> = batch.into_iter().collect();
        if owned.is_empty() {
            return Ok(Vec::new());
        }
        let rows: Vec<&[f64]> = owned.iter().map(|row| row.as_ref()).collect();
        let n_cols = validate_shape(&rows)?;

        log::debug!(
            "batch normalize {}x{} via {} ({})",
            rows.len(),
            n_cols,
            self.backend.name(),
            self.backend.strategy()
        );
        self.backend.normalize_rows(&rows, n_cols)
    }
}

/// Checks every row against the first one and returns the shared length.
fn validate_shape(rows: &[&[f64]]) -> Result<usize> {
    let n_cols = rows.first().map_or(0, |row| row.len());
    match rows.iter().find(|row| row.len() != n_cols) {
        Some(row) => Err(VectorError::ShapeMismatch {
            expected: n_cols,
            found: row.len(),
        }),
        None => Ok(n_cols),
    }
}

fn default_normalizer() -> &'static BatchNormalizer {
    static DEFAULT: OnceLock<BatchNormalizer> = OnceLock::new();
    DEFAULT.get_or_init(BatchNormalizer::detect)
}

/// Normalizes each row of `batch` with the process default backend.
///
/// Same contract as [`BatchNormalizer::normalize`].
pub fn batch_normalize<I, V>(batch: I) -> Result<Batch>
where
    I: IntoIterator<Item = V>,
    V: AsRef<[f64]>,
{
    default_normalizer().normalize(batch)
}
