use thiserror::Error;

use crate::ports::StorageError;

/// Failures surfaced by profile loading and updating.
#[derive(Debug, Error)]
pub enum ProfileError {
    /// The durable slot could not be read or written.
    #[error("profile storage unavailable: {0}")]
    StorageUnavailable(#[from] StorageError),

    /// `update` was called before any successful `load`.
    #[error("user profile not initialized")]
    Uninitialized,

    /// A stored record exists but is not a valid profile.
    ///
    /// Never recovered by substituting defaults.
    #[error("stored profile is malformed: {0}")]
    MalformedRecord(String),
}

impl ProfileError {
    pub fn is_uninitialized(&self) -> bool {
        matches!(self, ProfileError::Uninitialized)
    }

    pub fn is_malformed(&self) -> bool {
        matches!(self, ProfileError::MalformedRecord(_))
    }
}
