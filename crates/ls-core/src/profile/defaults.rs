use super::model::UserProfile;

pub const DEFAULT_NAME: &str = "John Doe";
pub const DEFAULT_EMAIL: &str = "john.doe@example.com";
pub const DEFAULT_LANGUAGE: &str = "english";

/// Shown in place of the name when no profile could be loaded.
pub const PLACEHOLDER_NAME: &str = "User";

/// First-run profile (**keep stable**: written on first load).
impl Default for UserProfile {
    fn default() -> Self {
        Self {
            name: DEFAULT_NAME.to_string(),
            email: DEFAULT_EMAIL.to_string(),
            language: DEFAULT_LANGUAGE.to_string(),
            notifications: true,
            theme: None,
        }
    }
}
