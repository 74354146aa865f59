use thiserror::Error;

#[derive(Debug, Error)]
pub enum StorageError {
    #[error("storage I/O failed for key `{key}`: {source}")]
    Io {
        key: String,
        #[source]
        source: std::io::Error,
    },

    #[error("invalid storage key: {0:?}")]
    InvalidKey(String),
}

#[derive(Debug, Error)]
pub enum AppDirsError {
    #[error("system data-local directory is unavailable")]
    DataLocalDirUnavailable,

    #[error("invalid instance name {0:?}: use ASCII letters, digits, '-' or '_'")]
    InvalidInstanceName(String),
}
