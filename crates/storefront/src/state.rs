//! Application state shared across handlers.

use std::sync::Arc;

use crate::catalog::Catalog;
use crate::config::StorefrontConfig;
use crate::db::DocumentStore;

/// Application state shared across all handlers.
///
/// This struct is cheaply cloneable via `Arc` and provides access to
/// the configuration and the product catalog.
#[derive(Clone)]
pub struct AppState {
    inner: Arc<AppStateInner>,
}

struct AppStateInner {
    config: StorefrontConfig,
    catalog: Catalog,
}

impl AppState {
    /// Create a new application state.
    ///
    /// # Arguments
    ///
    /// * `config` - Storefront configuration
    /// * `store` - Document store, or `None` to serve the sample catalog only
    #[must_use]
    pub fn new(config: StorefrontConfig, store: Option<Arc<dyn DocumentStore>>) -> Self {
        Self {
            inner: Arc::new(AppStateInner {
                config,
                catalog: Catalog::new(store),
            }),
        }
    }

    /// Get a reference to the storefront configuration.
    #[must_use]
    pub fn config(&self) -> &StorefrontConfig {
        &self.inner.config
    }

    /// Get a reference to the product catalog.
    #[must_use]
    pub fn catalog(&self) -> &Catalog {
        &self.inner.catalog
    }

    /// Get the document store, if one is configured.
    #[must_use]
    pub fn store(&self) -> Option<&Arc<dyn DocumentStore>> {
        self.inner.catalog.store()
    }
}
