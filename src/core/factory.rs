//! Application Factory
//!
//! Builds the configured store and wraps it, with the configuration, in an [`AppState`].

use std::sync::Arc;
use crate::core::app_state::{AppState, SharedStore};
use crate::core::config::{Config, StorageConfig, StorageType};
use crate::core::error::Result;
use crate::storage::{FileStore, MemoryStore};

/// Create the store selected by configuration; `None` for [`StorageType::Disabled`]
pub fn create_store(config: &StorageConfig) -> Result<Option<SharedStore>> {
    match config.storage_type {
        StorageType::Memory => {
            tracing::info!("Initializing MemoryStore");
            let store = MemoryStore::new(config.database_name.clone());
            Ok(Some(Arc::new(store)))
        }
        StorageType::File => {
            tracing::info!("Initializing FileStore in {:?}", config.data_dir);
            let store = FileStore::open(&config.data_dir, config.database_name.clone())?;
            Ok(Some(Arc::new(store)))
        }
        StorageType::Disabled => {
            tracing::warn!("Storage disabled; data endpoints will report the database as not configured");
            Ok(None)
        }
    }
}

/// Create AppState based on configuration
pub fn create_app_state(config: Config) -> Result<AppState> {
    tracing::info!("Creating AppState with storage type: {:?}", config.storage.storage_type);

    let store = create_store(&config.storage)?;
    let app_state = AppState::new(store, config);

    tracing::info!("AppState created successfully");
    Ok(app_state)
}
