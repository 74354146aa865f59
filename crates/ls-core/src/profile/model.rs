use serde::{Deserialize, Serialize};

/// Storage key of the profile record.
///
/// **Never change this value**: records written by earlier versions are
/// looked up under it.
pub const PROFILE_STORAGE_KEY: &str = "userProfile";

/// Language tags offered by the settings views.
pub const SUPPORTED_LANGUAGES: &[&str] = &["english", "spanish", "french", "german", "japanese"];

/// Theme values offered by the settings views.
pub const SUPPORTED_THEMES: &[&str] = &["light", "dark", "system"];

/// The persisted user profile.
///
/// Serialized as a flat JSON object. `theme` is omitted while unset, and a
/// stored `null` reads back as unset.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct UserProfile {
    pub name: String,
    pub email: String,
    pub language: String,
    pub notifications: bool,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub theme: Option<String>,
}

/// Partial update of a [`UserProfile`].
///
/// `None` means "not supplied". `Some(false)` for `notifications` is a
/// supplied value and is applied like any other.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProfilePatch {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub email: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub language: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub notifications: Option<bool>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub theme: Option<String>,
}

impl ProfilePatch {
    pub fn is_empty(&self) -> bool {
        self.name.is_none()
            && self.email.is_none()
            && self.language.is_none()
            && self.notifications.is_none()
            && self.theme.is_none()
    }
}

impl UserProfile {
    /// Returns a new profile with every supplied field of `patch` applied.
    ///
    /// Fields absent from the patch keep their current value. A patch cannot
    /// clear `theme`; it only replaces it.
    pub fn merged(&self, patch: ProfilePatch) -> UserProfile {
        UserProfile {
            name: patch.name.unwrap_or_else(|| self.name.clone()),
            email: patch.email.unwrap_or_else(|| self.email.clone()),
            language: patch.language.unwrap_or_else(|| self.language.clone()),
            notifications: patch.notifications.unwrap_or(self.notifications),
            theme: patch.theme.or_else(|| self.theme.clone()),
        }
    }
}
