//! Use case for updating the user profile

use std::sync::Arc;

use anyhow::Result;
use ls_core::profile::{ProfilePatch, UserProfile};
use tracing::{info, info_span, Instrument};

use crate::profile_store::ProfileStore;

/// Applies a partial update to the loaded profile.
///
/// ## Behavior
/// - Merges supplied fields, persists, replaces the in-memory value
/// - Logs changed fields with old/new values
///
/// An empty patch still rewrites the current record.
pub struct UpdateProfile {
    store: Arc<ProfileStore>,
}

impl UpdateProfile {
    pub fn new(store: Arc<ProfileStore>) -> Self {
        Self { store }
    }

    pub async fn execute(&self, patch: ProfilePatch) -> Result<UserProfile> {
        let span = info_span!("usecase.update_profile.execute");

        async {
            let change = self.store.apply(patch).await?;

            let diff = ProfileDiff::diff(&change.previous, &change.current);
            info!(changed_fields = %diff.to_log_string(), "User profile updated");

            Ok(change.current)
        }
        .instrument(span)
        .await
    }
}

/// Field-level difference between two profiles, for logging.
struct ProfileDiff {
    name: Option<(String, String)>,
    email: Option<(String, String)>,
    language: Option<(String, String)>,
    notifications: Option<(bool, bool)>,
    theme: Option<(Option<String>, Option<String>)>,
}

impl ProfileDiff {
    fn diff(old: &UserProfile, new: &UserProfile) -> Self {
        Self {
            name: (old.name != new.name).then(|| (old.name.clone(), new.name.clone())),
            email: (old.email != new.email).then(|| (old.email.clone(), new.email.clone())),
            language: (old.language != new.language)
                .then(|| (old.language.clone(), new.language.clone())),
            notifications: (old.notifications != new.notifications)
                .then_some((old.notifications, new.notifications)),
            theme: (old.theme != new.theme).then(|| (old.theme.clone(), new.theme.clone())),
        }
    }

    fn is_empty(&self) -> bool {
        self.name.is_none()
            && self.email.is_none()
            && self.language.is_none()
            && self.notifications.is_none()
            && self.theme.is_none()
    }

    fn to_log_string(&self) -> String {
        if self.is_empty() {
            return "(no changes)".to_string();
        }

        let mut parts = Vec::new();

        if let Some((old, new)) = &self.name {
            parts.push(format!("name: {:?} → {:?}", old, new));
        }
        if let Some((old, new)) = &self.email {
            parts.push(format!("email: {:?} → {:?}", old, new));
        }
        if let Some((old, new)) = &self.language {
            parts.push(format!("language: {} → {}", old, new));
        }
        if let Some((old, new)) = &self.notifications {
            parts.push(format!("notifications: {} → {}", old, new));
        }
        if let Some((old, new)) = &self.theme {
            parts.push(format!("theme: {:?} → {:?}", old, new));
        }

        parts.join(", ")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_profile_diff_empty_when_no_changes() {
        let profile = UserProfile::default();
        let diff = ProfileDiff::diff(&profile, &profile);

        assert!(diff.is_empty());
        assert_eq!(diff.to_log_string(), "(no changes)");
    }

    #[test]
    fn test_profile_diff_logs_each_changed_field() {
        let old = UserProfile::default();
        let new = UserProfile {
            name: "Grace".to_string(),
            language: "german".to_string(),
            notifications: false,
            theme: Some("dark".to_string()),
            ..old.clone()
        };

        let log = ProfileDiff::diff(&old, &new).to_log_string();

        assert!(log.contains(r#"name: "John Doe" → "Grace""#));
        assert!(log.contains("language: english → german"));
        assert!(log.contains("notifications: true → false"));
        assert!(log.contains(r#"theme: None → Some("dark")"#));
        assert!(!log.contains("email"));
    }
}
