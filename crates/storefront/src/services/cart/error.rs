//! Cart error types.

use thiserror::Error;

use showcase_core::ProductId;

use crate::storage::StorageError;

/// Errors that can occur during cart operations.
#[derive(Debug, Error)]
pub enum CartError {
    /// The product is out of stock. Nothing was read or written.
    #[error("product {product_id} ({name}) is currently unavailable")]
    Unavailable { product_id: ProductId, name: String },

    /// The backing store failed.
    #[error("storage error: {0}")]
    Storage(#[from] StorageError),
}
