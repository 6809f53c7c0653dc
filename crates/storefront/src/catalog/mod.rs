//! Product catalog providers.
//!
//! # Architecture
//!
//! - [`CatalogProvider`] is the read-only source of [`Product`] records
//! - [`MockCatalog`] serves a fixed five-product catalog after a simulated
//!   network delay
//! - [`CachedCatalog`] wraps any provider with a `moka` TTL cache
//!
//! Listings pay the simulated delay; [`CatalogProvider::lookup_product`] is
//! the stock check used when adding to the cart and skips it.
//!
//! Providers never mutate products. Callers must handle a failed fetch even
//! though the mock only fails when built with [`MockCatalog::failing`].

mod cache;
mod mock;

pub use cache::CachedCatalog;
pub use mock::MockCatalog;

use async_trait::async_trait;
use thiserror::Error;

use showcase_core::{Product, ProductId};

/// Errors that can occur when fetching from a catalog.
#[derive(Debug, Clone, Error)]
pub enum CatalogError {
    /// The catalog could not be reached.
    #[error("catalog unavailable: {0}")]
    Unavailable(String),
}

/// Read-only source of products.
#[async_trait]
pub trait CatalogProvider: Send + Sync {
    /// Fetch every product in catalog order.
    async fn fetch_products(&self) -> Result<Vec<Product>, CatalogError>;

    /// Fetch a single product, or `None` if no product has that id.
    async fn fetch_product_by_id(&self, id: ProductId) -> Result<Option<Product>, CatalogError> {
        Ok(self
            .fetch_products()
            .await?
            .into_iter()
            .find(|product| product.id == id))
    }

    /// Look up a single product for a stock check.
    ///
    /// Unlike [`fetch_product_by_id`](Self::fetch_product_by_id) this is
    /// meant for the add-to-cart path and should not pay a full listing
    /// round trip when the provider can avoid it.
    async fn lookup_product(&self, id: ProductId) -> Result<Option<Product>, CatalogError> {
        self.fetch_product_by_id(id).await
    }
}

#[async_trait]
impl<C: CatalogProvider + ?Sized> CatalogProvider for std::sync::Arc<C> {
    async fn fetch_products(&self) -> Result<Vec<Product>, CatalogError> {
        (**self).fetch_products().await
    }

    async fn fetch_product_by_id(&self, id: ProductId) -> Result<Option<Product>, CatalogError> {
        (**self).fetch_product_by_id(id).await
    }

    async fn lookup_product(&self, id: ProductId) -> Result<Option<Product>, CatalogError> {
        (**self).lookup_product(id).await
    }
}
