use std::sync::Arc;

use aria_import::ImportConfig;
use aria_instruments::catalog::Catalog;

/// Shared application state, injected into all route handlers via Axum state.
#[derive(Clone)]
pub struct AppState {
    pub catalog: Arc<Catalog>,
    pub import_config: ImportConfig,
}

impl AppState {
    pub fn new(catalog: Catalog, import_config: ImportConfig) -> Self {
        Self {
            catalog: Arc::new(catalog),
            import_config,
        }
    }
}
