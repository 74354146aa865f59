use std::path::PathBuf;

use ls_core::app_dirs::AppDirs;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AppPaths {
    pub profile_dir: PathBuf,
    pub config_path: PathBuf,
    pub logs_dir: PathBuf,
}

impl AppPaths {
    pub fn from_app_dirs(dirs: &AppDirs) -> Self {
        Self {
            profile_dir: dirs.app_data_root.join("storage"),
            config_path: dirs.app_data_root.join("config.toml"),
            logs_dir: dirs.app_data_root.join("logs"),
        }
    }
}
