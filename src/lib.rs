//! LifeSync Library
//!
//! Command-line consumer of the profile store plus the bootstrap that wires
//! storage, configuration and logging together.

pub mod bootstrap;
pub mod cli;
pub mod commands;

pub use bootstrap::{AppRuntime, RuntimeSettings};
pub use cli::{Cli, Command};
