use std::path::PathBuf;
use thiserror::Error;

/// Failures of the persistent key-value layer.
///
/// None of these ever reach the UI: the store logs them and keeps running on
/// its in-memory state.
#[derive(Debug, Error)]
pub enum StorageError {
    #[error("storage I/O failed for {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("storage file {path} is not valid JSON: {source}")]
    Parse {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },

    #[error("could not determine config directory")]
    NoConfigDir,
}
