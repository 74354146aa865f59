use std::sync::Arc;

use async_trait::async_trait;
use ls_core::ports::{KeyValueStoragePort, ProfileRepositoryPort};
use ls_core::profile::{ProfileError, UserProfile, PROFILE_STORAGE_KEY};
use tracing::{debug, warn};

/// Stores the profile as JSON under [`PROFILE_STORAGE_KEY`] in a key-value slot.
pub struct KeyValueProfileRepository {
    storage: Arc<dyn KeyValueStoragePort>,
}

impl KeyValueProfileRepository {
    pub fn new(storage: Arc<dyn KeyValueStoragePort>) -> Self {
        Self { storage }
    }
}

#[async_trait]
impl ProfileRepositoryPort for KeyValueProfileRepository {
    async fn read(&self) -> Result<Option<UserProfile>, ProfileError> {
        // An empty value counts as never written.
        let stored = self.storage.get(PROFILE_STORAGE_KEY).await?;
        let Some(content) = stored.filter(|c| !c.is_empty()) else {
            debug!(key = PROFILE_STORAGE_KEY, "no stored profile");
            return Ok(None);
        };

        match serde_json::from_str::<UserProfile>(&content) {
            Ok(profile) => Ok(Some(profile)),
            Err(e) => {
                warn!(key = PROFILE_STORAGE_KEY, error = %e, "stored profile does not parse");
                Err(ProfileError::MalformedRecord(e.to_string()))
            }
        }
    }

    async fn write(&self, profile: &UserProfile) -> Result<(), ProfileError> {
        // Infallible for this type.
        let content = serde_json::to_string(profile)
            .map_err(|e| ProfileError::MalformedRecord(e.to_string()))?;

        self.storage.set(PROFILE_STORAGE_KEY, &content).await?;
        Ok(())
    }
}
