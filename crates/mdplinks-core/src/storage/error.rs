//! Storage error handling
//!
//! Provides typed errors for database file operations with descriptive
//! messages and recovery suggestions. Read failures, write failures and
//! parse failures are kept apart so callers can report them distinctly.

use std::io;
use std::path::PathBuf;
use thiserror::Error;

/// Errors that can occur during storage operations
#[derive(Error, Debug)]
pub enum StorageError {
    /// Failed to create data directory
    #[error("Failed to create data directory '{path}': {source}")]
    CreateDirectory {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    /// Data directory is missing or not a directory
    #[error("Data directory '{path}' does not exist or is not a directory")]
    MissingDirectory { path: PathBuf },

    /// Database already exists where a new one was requested
    #[error("Database already exists at '{path}'")]
    AlreadyInitialized { path: PathBuf },

    /// Failed to open or read the database file
    #[error("Failed to read '{path}': {source}")]
    ReadError {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    /// Failed to write the database file
    #[error("Failed to write '{path}': {source}")]
    WriteError {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    /// Database content is not a valid link array
    #[error("Invalid database format in '{path}': {source}")]
    InvalidFormat {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },
}

impl StorageError {
    /// Check whether the underlying I/O error was a missing file
    pub fn is_not_found(&self) -> bool {
        matches!(
            self,
            StorageError::ReadError { source, .. } if source.kind() == io::ErrorKind::NotFound
        )
    }

    /// Get a recovery suggestion for this error
    pub fn recovery_suggestion(&self) -> Option<&'static str> {
        match self {
            StorageError::ReadError { source, .. }
                if source.kind() == io::ErrorKind::NotFound =>
            {
                Some("Run `mdplinks init` to create the database.")
            }
            StorageError::ReadError { source, .. } | StorageError::WriteError { source, .. }
                if source.kind() == io::ErrorKind::PermissionDenied =>
            {
                Some("Check file and directory permissions.")
            }
            StorageError::WriteError { source, .. } if is_disk_full_error(source) => {
                Some("Free up disk space and try again.")
            }
            StorageError::InvalidFormat { .. } => {
                Some("The database file is not a JSON array of links. Fix it by hand or move it aside and run `mdplinks init`.")
            }
            StorageError::CreateDirectory { .. } | StorageError::MissingDirectory { .. } => {
                Some("Check that the parent directory exists and you have write permissions.")
            }
            _ => None,
        }
    }
}

/// Check if an I/O error indicates disk full condition
fn is_disk_full_error(error: &io::Error) -> bool {
    let msg = error.to_string().to_lowercase();
    msg.contains("no space left")
        || msg.contains("disk full")
        || msg.contains("quota exceeded")
        || msg.contains("not enough space")
}

/// Result type for storage operations
pub type StorageResult<T> = Result<T, StorageError>;
