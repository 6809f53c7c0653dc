//! Favorites service.
//!
//! Toggles product ids in the visitor's favorites held under
//! [`keys::FAVORITES`](crate::storage::keys::FAVORITES).

use thiserror::Error;
use tracing::instrument;

use showcase_core::{Favorites, ProductId};

use crate::storage::{self, KeyValueStore, StorageError, keys};

/// Errors that can occur during favorites operations.
#[derive(Debug, Error)]
pub enum FavoritesError {
    #[error("storage error: {0}")]
    Storage(#[from] StorageError),
}

/// Favorites store over an injected key-value store.
#[derive(Debug, Clone)]
pub struct FavoritesStore<S> {
    store: S,
}

impl<S: KeyValueStore> FavoritesStore<S> {
    #[must_use]
    pub const fn new(store: S) -> Self {
        Self { store }
    }

    /// Load the current favorites. Missing or unparsable data is empty.
    ///
    /// # Errors
    ///
    /// Returns `FavoritesError::Storage` if the backend fails.
    pub async fn load(&self) -> Result<Favorites, FavoritesError> {
        Ok(storage::load_or_default(&self.store, keys::FAVORITES).await?)
    }

    /// Whether `product_id` is a favorite.
    ///
    /// # Errors
    ///
    /// Returns `FavoritesError::Storage` if the backend fails.
    pub async fn is_favorite(&self, product_id: ProductId) -> Result<bool, FavoritesError> {
        Ok(self.load().await?.contains(product_id))
    }

    /// Flip the favorite state of `product_id` and return the new state.
    ///
    /// `currently_favorite` is the state the caller is displaying. When true
    /// the id is removed, otherwise it is added. Both directions are no-ops
    /// against stored data that already agrees, so a stale caller cannot
    /// introduce duplicates.
    ///
    /// # Errors
    ///
    /// Returns `FavoritesError::Storage` if the backend fails.
    #[instrument(skip(self))]
    pub async fn toggle_favorite(
        &self,
        product_id: ProductId,
        currently_favorite: bool,
    ) -> Result<bool, FavoritesError> {
        let mut favorites = self.load().await?;

        if currently_favorite {
            favorites.remove(product_id);
        } else {
            favorites.insert(product_id);
        }

        storage::save(&self.store, keys::FAVORITES, &favorites).await?;

        let now_favorite = !currently_favorite;
        tracing::debug!(now_favorite, count = favorites.len(), "Favorites updated");
        Ok(now_favorite)
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use crate::storage::MemoryStorage;

    #[tokio::test]
    async fn test_toggle_twice_restores_membership() {
        let favorites = FavoritesStore::new(MemoryStorage::new());
        let id = ProductId::new(2);

        let now = favorites.toggle_favorite(id, false).await.unwrap();
        assert!(now);
        assert!(favorites.is_favorite(id).await.unwrap());

        let now = favorites.toggle_favorite(id, now).await.unwrap();
        assert!(!now);
        assert!(!favorites.is_favorite(id).await.unwrap());
    }

    #[tokio::test]
    async fn test_stale_add_does_not_duplicate() {
        let store = MemoryStorage::new();
        let favorites = FavoritesStore::new(store.clone());
        let id = ProductId::new(5);

        favorites.toggle_favorite(id, false).await.unwrap();
        favorites.toggle_favorite(id, false).await.unwrap();

        assert_eq!(store.get(keys::FAVORITES).await.unwrap().as_deref(), Some("[5]"));
    }

    #[tokio::test]
    async fn test_remove_absent_is_noop() {
        let store = MemoryStorage::new();
        store.set(keys::FAVORITES, "[1,3]".to_string()).await.unwrap();
        let favorites = FavoritesStore::new(store.clone());

        let now = favorites.toggle_favorite(ProductId::new(2), true).await.unwrap();

        assert!(!now);
        assert_eq!(store.get(keys::FAVORITES).await.unwrap().as_deref(), Some("[1,3]"));
    }

    #[tokio::test]
    async fn test_toggle_leaves_other_ids_alone() {
        let store = MemoryStorage::new();
        store.set(keys::FAVORITES, "[1,3]".to_string()).await.unwrap();
        let favorites = FavoritesStore::new(store);

        favorites.toggle_favorite(ProductId::new(4), false).await.unwrap();
        favorites.toggle_favorite(ProductId::new(1), true).await.unwrap();

        let loaded = favorites.load().await.unwrap();
        assert_eq!(loaded.ids(), &[ProductId::new(3), ProductId::new(4)]);
    }

    #[tokio::test]
    async fn test_unparsable_favorites_read_as_empty() {
        let store = MemoryStorage::new();
        store.set(keys::FAVORITES, "not-json".to_string()).await.unwrap();
        let favorites = FavoritesStore::new(store);

        assert!(!favorites.is_favorite(ProductId::new(1)).await.unwrap());
        assert!(favorites.toggle_favorite(ProductId::new(1), false).await.unwrap());
        assert!(favorites.is_favorite(ProductId::new(1)).await.unwrap());
    }
}
