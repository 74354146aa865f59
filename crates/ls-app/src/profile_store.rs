//! Session-scoped owner of the user profile.
//!
//! The store holds the in-memory copy of the singleton [`UserProfile`] and is
//! the only path through which it changes. Every operation takes the same
//! async mutex, so updates apply in call order and each merge sees the result
//! of the previous one.

use std::sync::Arc;

use ls_core::ports::ProfileRepositoryPort;
use ls_core::profile::{ProfileError, ProfilePatch, UserProfile, PLACEHOLDER_NAME};
use tokio::sync::Mutex;
use tracing::{debug, error, info, warn};

/// Result of a successful update: the value before and after the merge.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ProfileChange {
    pub previous: UserProfile,
    pub current: UserProfile,
}

pub struct ProfileStore {
    repository: Arc<dyn ProfileRepositoryPort>,
    current: Mutex<Option<UserProfile>>,
}

impl ProfileStore {
    pub fn new(repository: Arc<dyn ProfileRepositoryPort>) -> Self {
        Self {
            repository,
            current: Mutex::new(None),
        }
    }

    /// Reads the stored profile, writing the default record on first run.
    ///
    /// A read or parse failure is returned as-is: the in-memory value is left
    /// untouched and no default is written, so a corrupt record is never
    /// masked. If persisting the first-run default fails, the error is
    /// returned and the store stays unloaded.
    pub async fn load(&self) -> Result<UserProfile, ProfileError> {
        let mut current = self.current.lock().await;

        let profile = match self.repository.read().await {
            Ok(Some(profile)) => {
                debug!("loaded stored user profile");
                profile
            }
            Ok(None) => {
                let profile = UserProfile::default();
                if let Err(e) = self.repository.write(&profile).await {
                    error!(error = %e, "failed to persist default user profile");
                    return Err(e);
                }
                info!("no stored user profile, initialized defaults");
                profile
            }
            Err(e) => {
                error!(error = %e, "error loading user profile");
                return Err(e);
            }
        };

        *current = Some(profile.clone());
        Ok(profile)
    }

    /// Merges `patch` into the loaded profile and persists the result.
    pub async fn update(&self, patch: ProfilePatch) -> Result<UserProfile, ProfileError> {
        self.apply(patch).await.map(|change| change.current)
    }

    /// Like [`update`](Self::update), also returning the value it replaced.
    ///
    /// Fails with [`ProfileError::Uninitialized`] before a successful load.
    /// If the write fails the in-memory value stays as it was.
    pub async fn apply(&self, patch: ProfilePatch) -> Result<ProfileChange, ProfileError> {
        let mut current = self.current.lock().await;

        let Some(previous) = current.as_ref() else {
            warn!("profile update rejected: profile not loaded");
            return Err(ProfileError::Uninitialized);
        };

        let previous = previous.clone();
        let merged = previous.merged(patch);
        if let Err(e) = self.repository.write(&merged).await {
            error!(error = %e, "error updating user profile");
            return Err(e);
        }

        *current = Some(merged.clone());
        Ok(ProfileChange {
            previous,
            current: merged,
        })
    }

    /// Snapshot of the in-memory profile, `None` until a load succeeds.
    pub async fn current(&self) -> Option<UserProfile> {
        self.current.lock().await.clone()
    }

    pub async fn is_loaded(&self) -> bool {
        self.current.lock().await.is_some()
    }

    /// Name to greet the user with; falls back to a placeholder when nothing
    /// is loaded or the stored name is empty.
    pub async fn greeting_name(&self) -> String {
        match self.current.lock().await.as_ref() {
            Some(profile) if !profile.name.is_empty() => profile.name.clone(),
            _ => PLACEHOLDER_NAME.to_string(),
        }
    }
}
