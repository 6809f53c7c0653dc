//! Visitor-scoped key-value storage.
//!
//! Carts and favorites are kept as serialized blobs under fixed keys in a
//! string-keyed, string-valued store. The store is injected into the cart and
//! favorites services so tests can swap the session-backed store for an
//! in-memory one.
//!
//! Every mutation is a full read, in-memory change, and full write. Nothing
//! here makes that cycle atomic.

mod memory;
mod session;

pub use memory::MemoryStorage;
pub use session::SessionStorage;

use async_trait::async_trait;
use serde::de::DeserializeOwned;
use serde::Serialize;
use thiserror::Error;

/// Fixed storage keys.
pub mod keys {
    /// Key holding the serialized cart.
    pub const CART: &str = "cart";

    /// Key holding the serialized favorites.
    pub const FAVORITES: &str = "favorites";
}

/// Errors raised by a storage backend.
///
/// A stored blob that fails to parse is not an error at this level; see
/// [`load_or_default`].
#[derive(Debug, Error)]
pub enum StorageError {
    /// The session backing the store failed.
    #[error("session store error: {0}")]
    Session(#[from] tower_sessions::session::Error),

    /// A value could not be serialized for writing.
    #[error("failed to serialize value for key '{key}': {source}")]
    Serialize {
        key: String,
        #[source]
        source: serde_json::Error,
    },
}

/// A string-keyed, string-valued store.
#[async_trait]
pub trait KeyValueStore: Send + Sync {
    /// Read the raw value stored under `key`.
    async fn get(&self, key: &str) -> Result<Option<String>, StorageError>;

    /// Replace the value stored under `key`.
    async fn set(&self, key: &str, value: String) -> Result<(), StorageError>;
}

#[async_trait]
impl<S: KeyValueStore + ?Sized> KeyValueStore for std::sync::Arc<S> {
    async fn get(&self, key: &str) -> Result<Option<String>, StorageError> {
        (**self).get(key).await
    }

    async fn set(&self, key: &str, value: String) -> Result<(), StorageError> {
        (**self).set(key, value).await
    }
}

/// Read and parse the blob under `key`.
///
/// A missing key or a blob that does not parse as `T` yields `T::default()`.
/// Parse failures are logged and otherwise swallowed.
///
/// # Errors
///
/// Returns `StorageError` only if the backend itself fails.
pub async fn load_or_default<S, T>(store: &S, key: &str) -> Result<T, StorageError>
where
    S: KeyValueStore + ?Sized,
    T: DeserializeOwned + Default,
{
    let Some(raw) = store.get(key).await? else {
        return Ok(T::default());
    };

    match serde_json::from_str(&raw) {
        Ok(value) => Ok(value),
        Err(e) => {
            tracing::warn!(key, error = %e, "Discarding unparsable stored value");
            Ok(T::default())
        }
    }
}

/// Serialize `value` and write it under `key`, replacing any previous blob.
///
/// # Errors
///
/// Returns `StorageError` if serialization or the backend write fails.
pub async fn save<S, T>(store: &S, key: &str, value: &T) -> Result<(), StorageError>
where
    S: KeyValueStore + ?Sized,
    T: Serialize + Sync,
{
    let raw = serde_json::to_string(value).map_err(|source| StorageError::Serialize {
        key: key.to_string(),
        source,
    })?;
    store.set(key, raw).await
}
