//! MDPLinks Core Library
//!
//! This crate provides the link-store engine for MDPLinks, a command-line
//! bookmark manager. Links carry an optional title, a list of lowercase tags
//! and a creation timestamp, and are kept in a single JSON file.
//!
//! # Architecture
//!
//! - **JSON file**: Source of truth, one array holding every link
//! - **Store**: Stateless engine; each call reads the whole file, acts, and
//!   rewrites the whole file if anything changed
//!
//! # Quick Start
//!
//! ```text
//! let store = Store::new(Config::load()?);
//!
//! // Add a link
//! store.add_link("https://example.com", "news,tech", "Example")?;
//!
//! // Query links
//! let links = store.search_by_tag("news")?;
//! ```
//!
//! # Modules
//!
//! - `store`: Link engine (main entry point)
//! - `models`: The `Link` record and its on-disk format
//! - `tags`: Tag validation, splitting and matching
//! - `storage`: JSON file persistence
//! - `error`: Engine errors and the error-code catalog
//! - `config`: Application configuration

pub mod config;
pub mod error;
pub mod models;
pub mod storage;
pub mod store;
pub mod tags;

pub use config::Config;
pub use error::{ErrorCode, LinkError, LinkResult};
pub use models::Link;
pub use storage::{JsonPersistence, StorageError, StorageResult};
pub use store::Store;
