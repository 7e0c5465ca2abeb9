//! JSON database persistence
//!
//! Handles loading and saving the full link collection to/from a single JSON
//! file. There is no partial update: every save rewrites the whole array.
//! Uses atomic writes (write to temp file, then rename) to prevent corruption.
//!
//! Storage location: `~/.local/share/mdplinks/` (configurable via `Config`)
//!
//! Files:
//! - `database.json` - JSON array of links, `[]` when empty

use std::fs::{self, File};
use std::io::{self, Write};
use std::path::{Path, PathBuf};

use serde::Serialize;
use tracing::debug;

use super::error::{StorageError, StorageResult};
use crate::config::Config;
use crate::models::Link;

/// Content of a freshly initialized database
const EMPTY_DATABASE: &[u8] = b"[]";

/// Persistence layer for the link database
pub struct JsonPersistence {
    config: Config,
}

impl JsonPersistence {
    /// Create a new persistence handler with the given configuration
    pub fn new(config: Config) -> Self {
        Self { config }
    }

    /// Get the configuration
    pub fn config(&self) -> &Config {
        &self.config
    }

    /// Path of the database file
    pub fn path(&self) -> PathBuf {
        self.config.database_path()
    }

    /// Check if the database file exists on disk
    pub fn exists(&self) -> bool {
        self.path().exists()
    }

    /// Create an empty database (`[]`)
    ///
    /// Creates the data directory if needed. Never overwrites an existing
    /// database.
    pub fn init(&self) -> StorageResult<()> {
        let dir = &self.config.data_dir;
        if dir.exists() && !dir.is_dir() {
            return Err(StorageError::MissingDirectory { path: dir.clone() });
        }

        let path = self.path();
        if path.exists() {
            return Err(StorageError::AlreadyInitialized { path });
        }

        atomic_write(&path, EMPTY_DATABASE)?;
        debug!("Initialized empty database at {:?}", path);
        Ok(())
    }

    /// Read every link, in storage order
    pub fn read_all(&self) -> StorageResult<Vec<Link>> {
        let path = self.path();

        let content = fs::read_to_string(&path).map_err(|source| StorageError::ReadError {
            path: path.clone(),
            source,
        })?;

        let links: Vec<Link> = serde_json::from_str(&content)
            .map_err(|source| StorageError::InvalidFormat { path: path.clone(), source })?;

        debug!("Read {} link(s) from {:?}", links.len(), path);
        Ok(links)
    }

    /// Replace the database content with `links`
    pub fn write_all(&self, links: &[Link]) -> StorageResult<()> {
        let path = self.path();
        let bytes = to_json_bytes(links).map_err(|source| StorageError::WriteError {
            path: path.clone(),
            source,
        })?;

        atomic_write(&path, &bytes)?;
        debug!("Wrote {} link(s) to {:?}", links.len(), path);
        Ok(())
    }
}

/// Serialize links as a JSON array indented with four spaces
fn to_json_bytes(links: &[Link]) -> io::Result<Vec<u8>> {
    let mut buf = Vec::new();
    let formatter = serde_json::ser::PrettyFormatter::with_indent(b"    ");
    let mut serializer = serde_json::Serializer::with_formatter(&mut buf, formatter);
    links.serialize(&mut serializer).map_err(io::Error::from)?;
    Ok(buf)
}

/// Write data to a file atomically
///
/// 1. Write to a temporary file in the same directory
/// 2. Sync the file to disk
/// 3. Rename the temp file to the target path
///
/// If any step fails the target keeps its previous content.
fn atomic_write(path: &Path, data: &[u8]) -> StorageResult<()> {
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent).map_err(|source| StorageError::CreateDirectory {
            path: parent.to_path_buf(),
            source,
        })?;
    }

    let temp_path = path.with_extension("json.tmp");
    let write_err = |source: io::Error| StorageError::WriteError {
        path: path.to_path_buf(),
        source,
    };

    let result = File::create(&temp_path)
        .and_then(|mut file| {
            file.write_all(data)?;
            file.sync_all()
        })
        .and_then(|_| fs::rename(&temp_path, path));

    if let Err(e) = result {
        let _ = fs::remove_file(&temp_path);
        return Err(write_err(e));
    }

    Ok(())
}
