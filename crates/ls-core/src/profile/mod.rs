//! User profile domain: the single persisted identity/preference record.

mod defaults;
mod error;
pub mod model;

pub use defaults::{DEFAULT_EMAIL, DEFAULT_LANGUAGE, DEFAULT_NAME, PLACEHOLDER_NAME};
pub use error::ProfileError;
pub use model::{
    ProfilePatch, UserProfile, PROFILE_STORAGE_KEY, SUPPORTED_LANGUAGES, SUPPORTED_THEMES,
};
