//! Application state shared across handlers.

use std::sync::Arc;

use tower_sessions::Session;

use crate::catalog::{CachedCatalog, CatalogProvider, MockCatalog};
use crate::config::StorefrontConfig;
use crate::services::{CartStore, FavoritesStore};
use crate::storage::SessionStorage;

/// Application state shared across all handlers.
///
/// This struct is cheaply cloneable via `Arc` and provides access to
/// configuration and the catalog. Cart and favorites stores are built per
/// request over the visitor's session.
#[derive(Clone)]
pub struct AppState {
    inner: Arc<AppStateInner>,
}

struct AppStateInner {
    config: StorefrontConfig,
    catalog: Arc<dyn CatalogProvider>,
}

impl AppState {
    /// Create application state backed by the demo catalog.
    ///
    /// The catalog uses the configured latency and, when the TTL is
    /// non-zero, a cache in front of it.
    #[must_use]
    pub fn new(config: StorefrontConfig) -> Self {
        let catalog = CachedCatalog::new(
            MockCatalog::new(config.latency.catalog),
            config.catalog_cache_ttl,
        );
        Self::with_catalog(config, Arc::new(catalog))
    }

    /// Create application state with an explicit catalog provider.
    #[must_use]
    pub fn with_catalog(config: StorefrontConfig, catalog: Arc<dyn CatalogProvider>) -> Self {
        Self {
            inner: Arc::new(AppStateInner { config, catalog }),
        }
    }

    /// Get a reference to the storefront configuration.
    #[must_use]
    pub fn config(&self) -> &StorefrontConfig {
        &self.inner.config
    }

    /// Get the catalog provider.
    #[must_use]
    pub fn catalog(&self) -> &dyn CatalogProvider {
        self.inner.catalog.as_ref()
    }

    /// Cart store for the visitor owning `session`.
    #[must_use]
    pub fn cart(&self, session: Session) -> CartStore<SessionStorage> {
        CartStore::new(SessionStorage::new(session)).with_latency(self.config().latency.cart_add)
    }

    /// Favorites store for the visitor owning `session`.
    #[must_use]
    pub fn favorites(&self, session: Session) -> FavoritesStore<SessionStorage> {
        FavoritesStore::new(SessionStorage::new(session))
    }
}
