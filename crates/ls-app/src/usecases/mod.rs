//! Profile use cases called by consumers (CLI commands, settings views).

pub mod load_profile;
pub mod update_profile;

pub use load_profile::LoadProfile;
pub use update_profile::UpdateProfile;
