//! Port interfaces for the application layer
//!
//! Ports define the contract between the profile store and the
//! infrastructure that persists it. Use cases depend on these traits only;
//! adapters in `ls-infra` and `ls-platform` implement them.

pub mod app_dirs;
pub mod errors;
pub mod key_value;
pub mod profile;

pub use app_dirs::AppDirsPort;
pub use errors::{AppDirsError, StorageError};
pub use key_value::KeyValueStoragePort;
pub use profile::ProfileRepositoryPort;
