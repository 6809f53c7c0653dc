//! Cart service.
//!
//! Merges additions into the visitor's cart held under
//! [`keys::CART`](crate::storage::keys::CART).

mod error;

pub use error::CartError;

use std::time::Duration;

use tracing::instrument;

use showcase_core::{Cart, Product};

use crate::storage::{self, KeyValueStore, StorageError, keys};

/// Cart store over an injected key-value store.
///
/// `add_to_cart` is an unguarded read-modify-write: two additions that
/// interleave between the read and the write lose one of the updates. The
/// storefront assumes one visitor acting in one tab.
///
/// Over [`SessionStorage`](crate::storage::SessionStorage) the cart and
/// favorites keys share one session record, saved whole when each request
/// ends. A favorite toggle running alongside an add in the same session can
/// therefore also overwrite the other request's key.
#[derive(Debug, Clone)]
pub struct CartStore<S> {
    store: S,
    latency: Duration,
}

impl<S: KeyValueStore> CartStore<S> {
    /// Create a cart store with no simulated latency.
    #[must_use]
    pub const fn new(store: S) -> Self {
        Self {
            store,
            latency: Duration::ZERO,
        }
    }

    /// Delay every accepted addition by `latency` before touching storage.
    #[must_use]
    pub fn with_latency(mut self, latency: Duration) -> Self {
        self.latency = latency;
        self
    }

    /// Load the current cart.
    ///
    /// A missing or unparsable blob is an empty cart.
    ///
    /// # Errors
    ///
    /// Returns `StorageError` if the backend fails.
    pub async fn load(&self) -> Result<Cart, StorageError> {
        storage::load_or_default(&self.store, keys::CART).await
    }

    /// Add `quantity` of `product` to the cart and return the updated cart.
    ///
    /// Out-of-stock products are rejected before any delay or storage
    /// access. Otherwise the quantity is merged into an existing entry for
    /// the product or appended as a new entry, and the whole cart is written
    /// back. The quantity is not clamped here.
    ///
    /// # Errors
    ///
    /// Returns `CartError::Unavailable` if the product is out of stock.
    /// Returns `CartError::Storage` if the backend fails.
    #[instrument(skip(self, product), fields(product_id = %product.id))]
    pub async fn add_to_cart(&self, product: &Product, quantity: i32) -> Result<Cart, CartError> {
        if !product.is_available() {
            tracing::info!("Rejected add for unavailable product");
            return Err(CartError::Unavailable {
                product_id: product.id,
                name: product.name.clone(),
            });
        }

        if !self.latency.is_zero() {
            tokio::time::sleep(self.latency).await;
        }

        let mut cart = self.load().await?;
        cart.add(product.id, quantity);
        storage::save(&self.store, keys::CART, &cart).await?;

        tracing::debug!(lines = cart.len(), items = cart.item_count(), "Cart updated");
        Ok(cart)
    }

    /// Total number of items across all cart entries.
    ///
    /// # Errors
    ///
    /// Returns `StorageError` if the backend fails.
    pub async fn item_count(&self) -> Result<i64, StorageError> {
        Ok(self.load().await?.item_count())
    }
}
