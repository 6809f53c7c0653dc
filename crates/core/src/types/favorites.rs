//! Set of favorited product ids.

use serde::{Deserialize, Serialize};

use super::ProductId;

/// Favorited products, in the order they were first added.
///
/// Serializes as a bare JSON array of ids. Inserting an id that is already
/// present is a no-op, so the set never grows duplicates even when callers
/// pass stale state.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Favorites {
    ids: Vec<ProductId>,
}

impl Favorites {
    #[must_use]
    pub const fn new() -> Self {
        Self { ids: Vec::new() }
    }

    #[must_use]
    pub fn contains(&self, product_id: ProductId) -> bool {
        self.ids.contains(&product_id)
    }

    /// Add an id. Returns `false` if it was already present.
    pub fn insert(&mut self, product_id: ProductId) -> bool {
        if self.contains(product_id) {
            return false;
        }
        self.ids.push(product_id);
        true
    }

    /// Remove an id. Returns `false` if it was absent.
    pub fn remove(&mut self, product_id: ProductId) -> bool {
        let before = self.ids.len();
        self.ids.retain(|id| *id != product_id);
        self.ids.len() != before
    }

    #[must_use]
    pub fn ids(&self) -> &[ProductId] {
        &self.ids
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.ids.is_empty()
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.ids.len()
    }
}

impl FromIterator<ProductId> for Favorites {
    fn from_iter<I: IntoIterator<Item = ProductId>>(iter: I) -> Self {
        let mut favorites = Self::new();
        for id in iter {
            favorites.insert(id);
        }
        favorites
    }
}
