use async_trait::async_trait;

use super::errors::StorageError;

/// A durable string key-value slot.
///
/// Implementations must make a successful `set` visible to every later
/// `get` on the same key.
#[async_trait]
pub trait KeyValueStoragePort: Send + Sync {
    /// Returns `Ok(None)` when nothing is stored under `key`.
    async fn get(&self, key: &str) -> Result<Option<String>, StorageError>;
    async fn set(&self, key: &str, value: &str) -> Result<(), StorageError>;
}
