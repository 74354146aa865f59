//! Dependency wiring: resolves paths and configuration, then assembles the
//! profile store over the file-backed slot.

use std::path::{Path, PathBuf};
use std::sync::Arc;

use anyhow::Context;
use ls_app::app_paths::AppPaths;
use ls_app::{LoadProfile, ProfileStore, UpdateProfile};
use ls_core::config::AppConfig;
use ls_core::ports::{AppDirsPort, KeyValueStoragePort, ProfileRepositoryPort};
use ls_core::AppDirs;
use ls_infra::{FileKeyValueStore, KeyValueProfileRepository};
use ls_platform::DirsAppDirsAdapter;
use tracing::debug;

use super::config::{load_config, load_optional_config};

/// Everything the runtime needs to know before it is built.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RuntimeSettings {
    pub paths: AppPaths,
    pub config_path: PathBuf,
    pub config: AppConfig,
}

impl RuntimeSettings {
    /// Directory holding the profile slot: the configured one, else the
    /// installation default.
    pub fn storage_dir(&self) -> &Path {
        if self.config.storage_dir.as_os_str().is_empty() {
            &self.paths.profile_dir
        } else {
            &self.config.storage_dir
        }
    }

    pub fn log_dir(&self) -> Option<&Path> {
        self.config
            .log_to_file
            .then_some(self.paths.logs_dir.as_path())
    }
}

/// Resolves the data root and configuration.
///
/// `data_dir` replaces the platform data directory. An explicit
/// `config_path` must exist; the default `<root>/config.toml` may be absent.
pub fn resolve_settings(
    config_path: Option<PathBuf>,
    data_dir: Option<PathBuf>,
) -> anyhow::Result<RuntimeSettings> {
    let app_dirs = match data_dir {
        Some(root) => AppDirs {
            app_data_root: root,
        },
        None => DirsAppDirsAdapter::new()
            .get_app_dirs()
            .context("Failed to resolve application data directory")?,
    };
    let paths = AppPaths::from_app_dirs(&app_dirs);

    let (config_path, config) = match config_path {
        Some(path) => {
            let config = load_config(&path)?;
            (path, config)
        }
        None => {
            let config = load_optional_config(&paths.config_path)?;
            (paths.config_path.clone(), config)
        }
    };

    Ok(RuntimeSettings {
        paths,
        config_path,
        config,
    })
}

/// Session-wide handles shared by all commands.
pub struct AppRuntime {
    storage_dir: PathBuf,
    config_path: PathBuf,
    store: Arc<ProfileStore>,
}

impl AppRuntime {
    pub fn storage_dir(&self) -> &Path {
        &self.storage_dir
    }

    pub fn config_path(&self) -> &Path {
        &self.config_path
    }

    pub fn store(&self) -> &Arc<ProfileStore> {
        &self.store
    }

    pub fn load_profile(&self) -> LoadProfile {
        LoadProfile::new(self.store.clone())
    }

    pub fn update_profile(&self) -> UpdateProfile {
        UpdateProfile::new(self.store.clone())
    }
}

pub fn build_runtime(settings: &RuntimeSettings) -> AppRuntime {
    let storage_dir = settings.storage_dir().to_path_buf();
    debug!(storage_dir = %storage_dir.display(), "wiring file-backed profile store");

    let slot: Arc<dyn KeyValueStoragePort> = Arc::new(FileKeyValueStore::new(&storage_dir));
    let repository: Arc<dyn ProfileRepositoryPort> =
        Arc::new(KeyValueProfileRepository::new(slot));

    AppRuntime {
        storage_dir,
        config_path: settings.config_path.clone(),
        store: Arc::new(ProfileStore::new(repository)),
    }
}
