pub mod vector;
#[cfg(feature = "vectorized")]
pub mod batch;


pub use self::vector::{add, dot, l2_norm, normalize, scalar_multiply, to_vector, Batch, Vector};
#[cfg(feature = "vectorized")]
pub use self::batch::{first_zero_row, norm_batched, norm_sq_batched};
