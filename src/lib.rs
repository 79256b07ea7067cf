//! Vector math - small vector arithmetic with an accelerated batch path.
//!
//! The single-vector operations work on plain slices. [`batch_normalize`]
//! normalizes every row of a batch through the vectorized `ndarray` backend
//! when the process has one and through a per-row loop otherwise; both
//! paths reject the same inputs and agree to within floating-point rounding.
//!
//! ```
//! let out = vector_math::batch_normalize(vec![vec![3.0, 4.0], vec![6.0, 8.0]]).unwrap();
//! assert!((out[1][0] - 0.6).abs() < 1e-12);
//! ```

pub mod backend;
pub mod error;
pub mod normalizer;
pub mod ops;

#[cfg(feature = "python")]
mod bindings;

pub use backend::{vectorized_backend, NormalizeBackend, ScalarBackend, Strategy};
#[cfg(feature = "vectorized")]
pub use backend::VectorizedBackend;
pub use error::{Result, VectorError};
pub use normalizer::{batch_normalize, BatchNormalizer};
pub use ops::{add, dot, l2_norm, normalize, scalar_multiply, to_vector, Batch, Vector};
