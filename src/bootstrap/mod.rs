pub mod config;
pub mod tracing;
pub mod wiring;

pub use config::{load_config, load_optional_config};
pub use wiring::{build_runtime, resolve_settings, AppRuntime, RuntimeSettings};
