//! Shared application state injected into all Axum handlers.

use std::sync::Arc;

use crate::store::Store;

/// Shared application state available to all handlers via Axum's
/// `State` extractor.
///
/// The store handle is opened once at startup and passed in explicitly,
/// so tests can substitute an in-memory store.
#[derive(Debug, Clone)]
pub struct AppState {
    /// Process-wide handle to the embedded store.
    pub store: Arc<Store>,
}

impl AppState {
    /// Wraps a store handle for router construction.
    #[must_use]
    pub fn new(store: Store) -> Self {
        Self {
            store: Arc::new(store),
        }
    }
}
