//! Cart contents and the merge rule for additions.

use serde::{Deserialize, Serialize};

use super::ProductId;

/// One line of a cart.
///
/// `product_id` is not validated against the catalog. `quantity` is whatever
/// the caller asked for; clamping to the selector range is a UI concern.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CartEntry {
    pub product_id: ProductId,
    pub quantity: i32,
}

/// An insertion-ordered cart with at most one entry per product.
///
/// Serializes as a bare JSON array of [`CartEntry`].
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Cart {
    entries: Vec<CartEntry>,
}

impl Cart {
    /// Create an empty cart.
    #[must_use]
    pub const fn new() -> Self {
        Self {
            entries: Vec::new(),
        }
    }

    /// Merge an addition into the cart.
    ///
    /// If the product already has an entry its quantity grows by `quantity`
    /// (saturating at `i32::MAX`); otherwise a new entry is appended after
    /// all existing ones.
    pub fn add(&mut self, product_id: ProductId, quantity: i32) {
        match self
            .entries
            .iter_mut()
            .find(|entry| entry.product_id == product_id)
        {
            Some(entry) => entry.quantity = entry.quantity.saturating_add(quantity),
            None => self.entries.push(CartEntry {
                product_id,
                quantity,
            }),
        }
    }

    /// The entry for a product, if present.
    #[must_use]
    pub fn entry(&self, product_id: ProductId) -> Option<&CartEntry> {
        self.entries
            .iter()
            .find(|entry| entry.product_id == product_id)
    }

    /// Entries in insertion order.
    #[must_use]
    pub fn entries(&self) -> &[CartEntry] {
        &self.entries
    }

    /// Sum of all entry quantities.
    #[must_use]
    pub fn item_count(&self) -> i64 {
        self.entries
            .iter()
            .map(|entry| i64::from(entry.quantity))
            .sum()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }
}

impl From<Vec<CartEntry>> for Cart {
    fn from(entries: Vec<CartEntry>) -> Self {
        let mut cart = Self::new();
        for entry in entries {
            cart.add(entry.product_id, entry.quantity);
        }
        cart
    }
}
