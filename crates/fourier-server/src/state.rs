use std::sync::Arc;

use fourier_store::DatabaseStore;

/// Shared handler state: the storage backend behind the gateway.
///
/// The gateway itself carries no cross-request state; everything a request
/// needs is loaded from the store and saved back within that request.
#[derive(Clone)]
pub struct AppState {
    store: Arc<dyn DatabaseStore>,
}

impl AppState {
    pub fn new(store: Arc<dyn DatabaseStore>) -> Self {
        Self { store }
    }

    pub fn store(&self) -> &dyn DatabaseStore {
        self.store.as_ref()
    }
}

impl std::fmt::Debug for AppState {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("AppState").finish_non_exhaustive()
    }
}
