use std::sync::Arc;

use courseinsight_core::catalog::Catalog;

/// Shared application state available to all Axum handlers via `State<AppState>`.
///
/// This is cheaply cloneable (the catalog is behind an `Arc`).
#[derive(Clone)]
pub struct AppState {
    /// Read-only course catalog, loaded once at startup.
    pub catalog: Arc<Catalog>,
}

impl AppState {
    pub fn new(catalog: Catalog) -> Self {
        Self {
            catalog: Arc::new(catalog),
        }
    }
}
