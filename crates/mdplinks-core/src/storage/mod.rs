//! Storage layer
//!
//! Handles persistence of the link collection.
//!
//! ## Architecture
//!
//! - **JSON file**: Source of truth, one array of link objects
//!
//! Every load reads the whole file and every save rewrites it, so the file
//! on disk is always a complete snapshot.

pub mod error;
pub mod persistence;

pub use error::{StorageError, StorageResult};
pub use persistence::JsonPersistence;
