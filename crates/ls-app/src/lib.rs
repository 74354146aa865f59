//! LifeSync application layer
//!
//! Owns the session's profile state and the use cases consumers call.

pub mod app_paths;
pub mod profile_store;
pub mod usecases;

pub use profile_store::{ProfileChange, ProfileStore};
pub use usecases::{LoadProfile, UpdateProfile};
