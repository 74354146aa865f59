use std::path::PathBuf;

/// Application configuration DTO (pure data, no logic)
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AppConfig {
    /// Directory holding the profile slot. Empty means "not configured".
    pub storage_dir: PathBuf,

    /// Whether logs are also written to a file.
    pub log_to_file: bool,
}

impl AppConfig {
    /// Create AppConfig from a TOML value
    ///
    /// Must NOT validate or compute defaults. Missing sections map to empty
    /// values.
    pub fn from_toml(toml_value: &toml::Value) -> anyhow::Result<Self> {
        Ok(Self {
            storage_dir: PathBuf::from(
                toml_value
                    .get("storage")
                    .and_then(|s| s.get("data_dir"))
                    .and_then(|v| v.as_str())
                    .unwrap_or(""),
            ),
            log_to_file: toml_value
                .get("logging")
                .and_then(|l| l.get("file"))
                .and_then(|v| v.as_bool())
                .unwrap_or(false),
        })
    }

    /// Create empty AppConfig (all empty/default values)
    pub fn empty() -> Self {
        Self {
            storage_dir: PathBuf::new(),
            log_to_file: false,
        }
    }
}
