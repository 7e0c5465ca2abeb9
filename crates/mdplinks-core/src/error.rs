//! Engine errors
//!
//! `LinkError` is what every `Store` operation returns on failure. Each error
//! maps onto an [`ErrorCode`] from a fixed catalog so front ends can show a
//! stable message and exit status.

use std::fmt;

use thiserror::Error;

use crate::models::Link;
use crate::storage::StorageError;

/// Errors returned by link operations
#[derive(Error, Debug)]
pub enum LinkError {
    /// Tag string contains a rejected character
    #[error("Tags contain one or more punctuation marks or spaces: '{tags}'")]
    InvalidTags { tags: String },

    /// No link has the given URL
    #[error("Link not found for URL '{url}'")]
    NotFound { url: String },

    /// The database could not be read, parsed or initialized
    #[error(transparent)]
    Storage(#[from] StorageError),

    /// The operation succeeded in memory but the result was not saved
    ///
    /// Carries the link as it would have been stored so callers can still
    /// show it.
    #[error("Link '{}' was not saved: {source}", .link.url)]
    NotSaved {
        link: Box<Link>,
        #[source]
        source: StorageError,
    },
}

impl LinkError {
    /// Catalog code for this error
    pub fn code(&self) -> ErrorCode {
        match self {
            LinkError::InvalidTags { .. } => ErrorCode::TagError,
            LinkError::NotFound { .. } => ErrorCode::IdError,
            LinkError::Storage(e) => ErrorCode::from(e),
            LinkError::NotSaved { .. } => ErrorCode::DbWriteError,
        }
    }

    /// The unsaved link, if this is a failed save
    pub fn unsaved_link(&self) -> Option<&Link> {
        match self {
            LinkError::NotSaved { link, .. } => Some(link.as_ref()),
            _ => None,
        }
    }

    /// Get a recovery suggestion for this error
    pub fn recovery_suggestion(&self) -> Option<&'static str> {
        match self {
            LinkError::Storage(e) | LinkError::NotSaved { source: e, .. } => {
                e.recovery_suggestion()
            }
            LinkError::InvalidTags { .. } => {
                Some("Separate tags with commas only, e.g. `news,tech`.")
            }
            LinkError::NotFound { .. } => None,
        }
    }
}

/// Result type for link operations
pub type LinkResult<T> = Result<T, LinkError>;

/// Fixed error catalog shared with front ends
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[repr(u8)]
pub enum ErrorCode {
    Success = 0,
    DirError = 1,
    FileError = 2,
    DbReadError = 3,
    DbWriteError = 4,
    JsonError = 5,
    IdError = 6,
    TagError = 7,
}

impl ErrorCode {
    /// Numeric value, usable as a process exit status
    pub fn value(self) -> u8 {
        self as u8
    }

    /// User-facing message
    pub fn message(self) -> &'static str {
        match self {
            ErrorCode::Success => "success",
            ErrorCode::DirError => "config directory error",
            ErrorCode::FileError => "config file error",
            ErrorCode::DbReadError => "database read error",
            ErrorCode::DbWriteError => "database write error",
            ErrorCode::JsonError => "database file is not valid JSON",
            ErrorCode::IdError => "link not found for the given URL",
            ErrorCode::TagError => "tags contain one or more punctuation marks or spaces",
        }
    }
}

impl From<&StorageError> for ErrorCode {
    fn from(err: &StorageError) -> Self {
        match err {
            StorageError::CreateDirectory { .. } | StorageError::MissingDirectory { .. } => {
                ErrorCode::DirError
            }
            StorageError::AlreadyInitialized { .. } => ErrorCode::FileError,
            StorageError::ReadError { .. } => ErrorCode::DbReadError,
            StorageError::WriteError { .. } => ErrorCode::DbWriteError,
            StorageError::InvalidFormat { .. } => ErrorCode::JsonError,
        }
    }
}

impl fmt::Display for ErrorCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.message())
    }
}
