//! Store error types.

use std::path::PathBuf;

use thiserror::Error;

/// Errors that can occur while reading or writing a persisted record.
#[derive(Debug, Error)]
pub enum StoreError {
    /// Filesystem access failed.
    #[error("i/o error on {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// The record is not valid JSON of the expected shape.
    #[error("malformed record {path}: {source}")]
    Json {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },

    /// The temporary file could not be renamed over the record.
    #[error("could not replace {path}: {source}")]
    Persist {
        path: PathBuf,
        #[source]
        source: tempfile::PersistError,
    },
}

impl StoreError {
    /// Returns `true` if the record simply does not exist yet.
    pub fn is_not_found(&self) -> bool {
        matches!(
            self,
            StoreError::Io { source, .. } if source.kind() == std::io::ErrorKind::NotFound
        )
    }
}
