//! # ls-core
//!
//! Core domain models and port definitions for LifeSync.
//!
//! This crate contains the user profile model and the contracts that the
//! storage and platform layers implement. It has no infrastructure
//! dependencies.

pub mod app_dirs;
pub mod config;
pub mod ports;
pub mod profile;

pub use app_dirs::AppDirs;
pub use config::AppConfig;
pub use profile::{ProfileError, ProfilePatch, UserProfile, PROFILE_STORAGE_KEY};
