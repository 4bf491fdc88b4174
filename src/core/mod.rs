//! Core system foundations
//!
//! Error handling, configuration, logging and application state.

pub mod error;
pub mod config;
pub mod logging;
pub mod app_state;
pub mod factory;

// Re-export commonly used items
pub use error::{Error, Result, StorageError};
pub use config::{Config, StorageType};
pub use app_state::{AppState, SharedStore};
pub use factory::{create_app_state, create_store};
