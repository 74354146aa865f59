mod file_kv;
mod memory_kv;

pub use file_kv::FileKeyValueStore;
pub use memory_kv::InMemoryKeyValueStore;

use ls_core::ports::StorageError;

/// Keys become file names, so only a conservative character set is allowed.
pub(crate) fn validate_key(key: &str) -> Result<(), StorageError> {
    let valid = !key.is_empty()
        && key
            .chars()
            .all(|c| c.is_ascii_alphanumeric() || c == '-' || c == '_');

    if valid {
        Ok(())
    } else {
        Err(StorageError::InvalidKey(key.to_string()))
    }
}
