use std::path::PathBuf;

use thiserror::Error;

#[derive(Debug, Error)]
pub enum EngineError {
    #[error("Invalid configuration: {0}")]
    Config(String),

    /// The visited-entry cap was reached; the whole traversal was abandoned.
    #[error("Traversal limit of {limit} entries exceeded")]
    LimitExceeded { limit: usize },

    #[error("File system operation failed: {operation} on '{path}': {source}")]
    FileSystem {
        operation: &'static str,
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

impl EngineError {
    pub(crate) fn read_dir(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        Self::FileSystem { operation: "read_dir", path: path.into(), source }
    }

    pub(crate) fn stat(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        Self::FileSystem { operation: "stat", path: path.into(), source }
    }
}

pub type Result<T> = std::result::Result<T, EngineError>;
