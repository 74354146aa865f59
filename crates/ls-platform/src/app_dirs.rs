use std::path::PathBuf;

use ls_core::{
    app_dirs::AppDirs,
    ports::{AppDirsError, AppDirsPort},
};

const APP_DIR_NAME: &str = "lifesync";
pub const INSTANCE_ENV_VAR: &str = "LIFESYNC_INSTANCE";

/// `lifesync`, or `lifesync-<instance>` when `LIFESYNC_INSTANCE` is set, so
/// side-by-side installations never share a profile slot.
///
/// The instance name must stay a single path component.
fn resolved_app_dir_name() -> Result<String, AppDirsError> {
    match std::env::var(INSTANCE_ENV_VAR) {
        Ok(instance) if !instance.is_empty() => {
            let valid = instance
                .chars()
                .all(|c| c.is_ascii_alphanumeric() || c == '-' || c == '_');
            if !valid {
                return Err(AppDirsError::InvalidInstanceName(instance));
            }
            Ok(format!("{APP_DIR_NAME}-{instance}"))
        }
        _ => Ok(APP_DIR_NAME.to_string()),
    }
}

pub struct DirsAppDirsAdapter {
    base_data_local_dir_override: Option<PathBuf>,
}

impl DirsAppDirsAdapter {
    pub fn new() -> Self {
        Self {
            base_data_local_dir_override: None,
        }
    }

    /// Uses `base` instead of the system data-local directory.
    pub fn with_base_data_local_dir(base: PathBuf) -> Self {
        Self {
            base_data_local_dir_override: Some(base),
        }
    }

    /// Returns the override if set, else `dirs::data_local_dir()`.
    pub fn base_data_local_dir(&self) -> Option<PathBuf> {
        if let Some(base) = &self.base_data_local_dir_override {
            return Some(base.clone());
        }
        dirs::data_local_dir()
    }
}

impl Default for DirsAppDirsAdapter {
    fn default() -> Self {
        Self::new()
    }
}

impl AppDirsPort for DirsAppDirsAdapter {
    fn get_app_dirs(&self) -> Result<AppDirs, AppDirsError> {
        let base_data = self
            .base_data_local_dir()
            .ok_or(AppDirsError::DataLocalDirUnavailable)?;

        Ok(AppDirs {
            app_data_root: base_data.join(resolved_app_dir_name()?),
        })
    }
}
