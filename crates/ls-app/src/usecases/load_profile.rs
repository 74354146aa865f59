//! Use case for loading the user profile at session start

use std::sync::Arc;

use anyhow::Result;
use ls_core::profile::UserProfile;
use tracing::{info, info_span, Instrument};

use crate::profile_store::ProfileStore;

/// Loads the stored profile (initializing it on first run).
pub struct LoadProfile {
    store: Arc<ProfileStore>,
}

impl LoadProfile {
    pub fn new(store: Arc<ProfileStore>) -> Self {
        Self { store }
    }

    /// # Returns
    /// - `Ok(UserProfile)` once the profile is in memory
    /// - `Err(e)` wrapping a [`ls_core::ProfileError`] if the slot is
    ///   unreadable or holds a malformed record
    pub async fn execute(&self) -> Result<UserProfile> {
        let span = info_span!("usecase.load_profile.execute");

        async {
            info!("Loading user profile");

            let profile = self.store.load().await?;

            info!(language = %profile.language, "User profile loaded");
            Ok(profile)
        }
        .instrument(span)
        .await
    }
}
