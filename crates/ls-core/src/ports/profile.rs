use async_trait::async_trait;

use crate::profile::{ProfileError, UserProfile};

/// Persistence of the singleton [`UserProfile`] record.
#[async_trait]
pub trait ProfileRepositoryPort: Send + Sync {
    /// Reads the stored record.
    ///
    /// `Ok(None)` when no record has been written yet;
    /// [`ProfileError::MalformedRecord`] when one exists but does not parse.
    async fn read(&self) -> Result<Option<UserProfile>, ProfileError>;

    async fn write(&self, profile: &UserProfile) -> Result<(), ProfileError>;
}
