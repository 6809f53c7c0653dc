//! TTL cache in front of a catalog provider.

use std::sync::Arc;
use std::time::Duration;

use async_trait::async_trait;
use moka::future::Cache;
use tracing::debug;

use showcase_core::{Product, ProductId};

use super::{CatalogError, CatalogProvider};

/// Cache key for catalog responses.
#[derive(Debug, Clone, Copy, Hash, PartialEq, Eq)]
enum CacheKey {
    Products,
}

/// Catalog provider that caches successful product listings.
///
/// Failed fetches are never cached. A zero TTL disables caching and every
/// call goes straight to the inner provider.
pub struct CachedCatalog<C> {
    inner: C,
    cache: Option<Cache<CacheKey, Arc<Vec<Product>>>>,
}

impl<C: CatalogProvider> CachedCatalog<C> {
    #[must_use]
    pub fn new(inner: C, ttl: Duration) -> Self {
        let cache = (!ttl.is_zero()).then(|| {
            Cache::builder()
                .max_capacity(16)
                .time_to_live(ttl)
                .build()
        });

        Self { inner, cache }
    }
}

#[async_trait]
impl<C: CatalogProvider> CatalogProvider for CachedCatalog<C> {
    async fn fetch_products(&self) -> Result<Vec<Product>, CatalogError> {
        let Some(cache) = &self.cache else {
            return self.inner.fetch_products().await;
        };

        if let Some(products) = cache.get(&CacheKey::Products).await {
            debug!("Catalog cache hit");
            return Ok(products.as_ref().clone());
        }

        let products = self.inner.fetch_products().await?;
        cache
            .insert(CacheKey::Products, Arc::new(products.clone()))
            .await;
        Ok(products)
    }

    /// Answered from a cached listing when there is one, otherwise by the
    /// inner provider's lookup. Lookups never populate the cache.
    async fn lookup_product(&self, id: ProductId) -> Result<Option<Product>, CatalogError> {
        if let Some(cache) = &self.cache
            && let Some(products) = cache.get(&CacheKey::Products).await
        {
            return Ok(products.iter().find(|product| product.id == id).cloned());
        }

        self.inner.lookup_product(id).await
    }
}
