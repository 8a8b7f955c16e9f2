//! Shared application state for the local HTTP server.

use std::sync::Arc;

use consultants_core::storage::ConsultantRepository;

use crate::service::ConsultantService;

/// Cloned into every request handler.
#[derive(Clone)]
pub struct AppState {
    pub service: ConsultantService,
}

impl AppState {
    /// Creates state over the given storage backend.
    pub fn new(repository: Arc<dyn ConsultantRepository>) -> Self {
        Self {
            service: ConsultantService::new(repository),
        }
    }

    /// Creates state over an empty in-memory store.
    #[cfg(feature = "inmemory")]
    pub fn in_memory() -> Self {
        Self::new(Arc::new(crate::storage::InMemoryRepository::new()))
    }
}

#[cfg(feature = "inmemory")]
impl Default for AppState {
    fn default() -> Self {
        Self::in_memory()
    }
}
