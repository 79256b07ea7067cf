use thiserror::Error;

/// Validation failures raised by the vector operations.
///
/// Both kinds are deterministic: retrying the same call with the same input
/// fails the same way.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum VectorError {
    /// Two vectors (or two rows of a batch) have different lengths.
    #[error("vectors must be the same length (expected {expected}, found {found})")]
    ShapeMismatch { expected: usize, found: usize },

    /// Normalization of a vector whose Euclidean norm is exactly zero.
    /// `row` is set when the vector came from a batch.
    #[error("cannot normalize zero-length vector{}", batch_row(.row))]
    ZeroVector { row: Option<usize> },
}

fn batch_row(row: &Option<usize>) -> String {
    match row {
        Some(r) => format!(" in batch (row {r})"),
        None => String::new(),
    }
}

pub type Result<T> = std::result::Result<T, VectorError>;
