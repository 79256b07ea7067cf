use std::sync::{Arc, OnceLock};

use super::NormalizeBackend;

static VECTORIZED: OnceLock<Option<Arc<dyn NormalizeBackend>>> = OnceLock::new();

/// Returns the vectorized backend if this process has one, probing on the
/// first call and caching the answer for the life of the process.
pub fn vectorized_backend() -> Option<Arc<dyn NormalizeBackend>> {
    VECTORIZED
        .get_or_init(|| {
            let backend = probe();
            match &backend {
                Some(b) => log::info!("vectorized normalize backend available: {}", b.name()),
                None => log::info!("no vectorized normalize backend, falling back to scalar loop"),
            }
            backend
        })
        .clone()
}

#[cfg(feature = "vectorized")]
fn probe() -> Option<Arc<dyn NormalizeBackend>> {
    let backend = super::VectorizedBackend::new();
    if backend.is_available() {
        Some(Arc::new(backend))
    } else {
        log::warn!("{} backend compiled in but failed its self-check", backend.name());
        None
    }
}

#[cfg(not(feature = "vectorized"))]
fn probe() -> Option<Arc<dyn NormalizeBackend>> {
    None
}
