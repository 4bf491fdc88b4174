//! Application State Management
//!
//! The store handle is built once at startup by the factory and handed to every request
//! handler through axum state. It is read-only after construction.

use std::sync::Arc;
use crate::core::config::Config;
use crate::core::error::StorageError;
use crate::storage::DocumentStore;

/// Shared, type-erased store handle
pub type SharedStore = Arc<dyn DocumentStore>;

/// Central application state
#[derive(Clone)]
pub struct AppState {
    /// Configured store; `None` when storage is disabled
    store: Option<SharedStore>,

    /// Application configuration
    pub config: Arc<Config>,
}

impl AppState {
    /// Create a new AppState
    pub fn new(store: Option<SharedStore>, config: Config) -> Self {
        Self {
            store,
            config: Arc::new(config),
        }
    }

    /// The live store, or [`StorageError::Unavailable`]
    pub fn store(&self) -> Result<&SharedStore, StorageError> {
        self.store.as_ref().ok_or(StorageError::Unavailable)
    }

    /// Whether a store is configured
    pub fn has_store(&self) -> bool {
        self.store.is_some()
    }
}
