//! # Configuration DTO
//!
//! Data only: TOML → [`AppConfig`] mapping with no validation and no
//! default-value policy. Empty values are valid facts; the bootstrap layer
//! decides what an empty path means.

mod app_config;

pub use app_config::AppConfig;
