use super::{NormalizeBackend, Strategy};
use crate::error::{Result, VectorError};
use crate::ops::{normalize, Batch};

/// Per-row loop. Always available; used whenever no vectorized backend is.
#[derive(Debug, Default, Clone, Copy)]
pub struct ScalarBackend;

impl NormalizeBackend for ScalarBackend {
    fn name(&self) -> &'static str {
        "scalar"
    }

    fn strategy(&self) -> Strategy {
        Strategy::Scalar
    }

    fn normalize_rows(&self, rows: &[&[f64]], _n_cols: usize) -> Result<Batch> {
        rows.iter()
            .enumerate()
            .map(|(i, row)| {
                normalize(row).map_err(|e| match e {
                    VectorError::ZeroVector { .. } => VectorError::ZeroVector { row: Some(i) },
                    other => other,
                })
            })
            .collect()
    }
}
