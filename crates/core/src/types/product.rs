//! Catalog product record.

use serde::{Deserialize, Serialize};

use super::{Price, ProductId};

/// A catalog product.
///
/// Products are created by the catalog provider and never mutated by the
/// cart or favorites logic. The serialized form uses camelCase keys
/// (`inStock`) to match the storefront's JSON contract.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Product {
    pub id: ProductId,
    pub name: String,
    pub description: String,
    pub price: Price,
    /// Image URI.
    pub image: String,
    /// Category label.
    pub category: String,
    /// Availability flag. Out-of-stock products cannot be added to a cart.
    pub in_stock: bool,
}

impl Product {
    /// Whether the product can currently be added to a cart.
    #[must_use]
    pub const fn is_available(&self) -> bool {
        self.in_stock
    }
}
