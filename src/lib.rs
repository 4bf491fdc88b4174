//! HSC Study - curriculum data service for the Maharashtra HSC study browser
//!
//! Serves Class 12 subjects and their chapters from a document store, seeds a fixed
//! catalog idempotently, and exposes both over a small HTTP API.
#![warn(missing_docs)]

// Core foundational modules
pub mod core;
pub mod types;

// Main functional modules
pub mod storage;
pub mod seed;
pub mod queries;
pub mod api;

// Re-export commonly used items for convenience
pub use core::{AppState, Config, Error, Result, StorageError};
pub use storage::{find_or_create, DocumentStore, Upserted};
pub use types::{Chapter, DocId, Document, Filter, Subject, Value};

/// Crate version information
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
/// Crate name
pub const NAME: &str = env!("CARGO_PKG_NAME");
