//! Key-value store backed by the visitor's session.

use async_trait::async_trait;
use tower_sessions::Session;

use super::{KeyValueStore, StorageError};

/// A key-value store scoped to one visitor.
///
/// Values live in the `tower-sessions` session identified by the visitor's
/// cookie, so they survive page reloads but are never shared between
/// visitors.
#[derive(Debug, Clone)]
pub struct SessionStorage {
    session: Session,
}

impl SessionStorage {
    #[must_use]
    pub const fn new(session: Session) -> Self {
        Self { session }
    }
}

#[async_trait]
impl KeyValueStore for SessionStorage {
    async fn get(&self, key: &str) -> Result<Option<String>, StorageError> {
        Ok(self.session.get::<String>(key).await?)
    }

    async fn set(&self, key: &str, value: String) -> Result<(), StorageError> {
        self.session.insert(key, value).await?;
        Ok(())
    }
}
