pub mod profile;
pub mod storage;

pub use profile::KeyValueProfileRepository;
pub use storage::{FileKeyValueStore, InMemoryKeyValueStore};
