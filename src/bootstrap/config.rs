//! # Configuration Loader
//!
//! Reads the TOML file and maps it onto [`AppConfig`]. Pure data loading:
//! whatever is in the file is accepted, missing keys become empty values.

use std::path::Path;

use anyhow::Context;
use ls_core::config::AppConfig;

/// Load configuration from a TOML file
///
/// # Errors
///
/// Returns error if the file cannot be read or is not valid TOML.
pub fn load_config(config_path: &Path) -> anyhow::Result<AppConfig> {
    let content = std::fs::read_to_string(config_path)
        .with_context(|| format!("Failed to read config file: {}", config_path.display()))?;
    let toml_value: toml::Value =
        toml::from_str(&content).context("Failed to parse config as TOML")?;
    AppConfig::from_toml(&toml_value)
}

/// Like [`load_config`], but a missing file yields [`AppConfig::empty`].
pub fn load_optional_config(config_path: &Path) -> anyhow::Result<AppConfig> {
    if !config_path.exists() {
        return Ok(AppConfig::empty());
    }
    load_config(config_path)
}
