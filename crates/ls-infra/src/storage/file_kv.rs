use std::path::{Path, PathBuf};

use async_trait::async_trait;
use ls_core::ports::{KeyValueStoragePort, StorageError};
use tokio::fs;
use tracing::debug;

use super::validate_key;

/// Key-value slot backed by one JSON file per key under a root directory.
pub struct FileKeyValueStore {
    root: PathBuf,
}

impl FileKeyValueStore {
    /// Creates a store rooted at `root`. The directory is created on first write.
    ///
    /// # Examples
    ///
    /// ```
    /// use ls_infra::FileKeyValueStore;
    ///
    /// let store = FileKeyValueStore::new("/tmp/lifesync/storage");
    /// assert!(store.root().ends_with("storage"));
    /// ```
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self { root: root.into() }
    }

    pub fn root(&self) -> &Path {
        &self.root
    }

    fn path_for(&self, key: &str) -> PathBuf {
        self.root.join(format!("{key}.json"))
    }

    async fn ensure_root(&self, key: &str) -> Result<(), StorageError> {
        fs::create_dir_all(&self.root)
            .await
            .map_err(|source| StorageError::Io {
                key: key.to_string(),
                source,
            })
    }

    /// Writes `content` to a sibling temp file, then renames it over the
    /// target, so readers see either the old or the new value.
    async fn atomic_write(&self, key: &str, content: &str) -> Result<(), StorageError> {
        self.ensure_root(key).await?;

        let target = self.path_for(key);
        let tmp_path = target.with_extension("json.tmp");
        let io_err = |source| StorageError::Io {
            key: key.to_string(),
            source,
        };

        fs::write(&tmp_path, content).await.map_err(io_err)?;
        fs::rename(&tmp_path, &target).await.map_err(io_err)?;

        debug!(key, path = %target.display(), bytes = content.len(), "slot written");
        Ok(())
    }
}

#[async_trait]
impl KeyValueStoragePort for FileKeyValueStore {
    async fn get(&self, key: &str) -> Result<Option<String>, StorageError> {
        validate_key(key)?;

        let path = self.path_for(key);
        match fs::read_to_string(&path).await {
            Ok(content) => Ok(Some(content)),
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => {
                debug!(key, path = %path.display(), "slot empty");
                Ok(None)
            }
            Err(source) => Err(StorageError::Io {
                key: key.to_string(),
                source,
            }),
        }
    }

    async fn set(&self, key: &str, value: &str) -> Result<(), StorageError> {
        validate_key(key)?;
        self.atomic_write(key, value).await
    }
}
