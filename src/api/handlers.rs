//! HTTP request handlers for the HSC study API

use axum::{
    extract::{Path, Query, State},
    response::Json,
};
use serde::Serialize;
use serde_json::{json, Value as JsonValue};
use crate::core::AppState;
use crate::queries::{self, SubjectFilter};
use crate::seed::{seed_catalog, SeedReport};
use super::error::ApiError;

/// Longest error excerpt reported by the diagnostic endpoint
const DIAGNOSTIC_ERROR_CHARS: usize = 80;

/// Store diagnostics returned by `GET /test`
#[derive(Debug, Serialize)]
pub struct Diagnostics {
    /// Always reports the process as running
    pub backend: String,
    /// Store availability and health
    pub database: String,
    /// Whether a connection target is configured
    pub database_url: String,
    /// Name of the store, once reachable
    pub database_name: String,
    /// `Connected` or `Not Connected`
    pub connection_status: String,
    /// Collection names present in the store
    pub collections: Vec<String>,
}

impl Default for Diagnostics {
    fn default() -> Self {
        Self {
            backend: "✅ Running".to_string(),
            database: "❌ Not Available".to_string(),
            database_url: "❌ Not Set".to_string(),
            database_name: "❌ Not Set".to_string(),
            connection_status: "Not Connected".to_string(),
            collections: Vec::new(),
        }
    }
}

/// Liveness check; never touches the store
pub async fn root_handler() -> Json<JsonValue> {
    Json(json!({ "message": "Maharashtra HSC Study API is running" }))
}

/// Store diagnostics. Never fails: store errors are folded into the `database` field.
pub async fn test_database(State(state): State<AppState>) -> Json<Diagnostics> {
    let mut resp = Diagnostics::default();

    if let Ok(store) = state.store() {
        resp.database = "✅ Available".to_string();
        resp.database_url = "✅ Set".to_string();

        match store.list_collection_names() {
            Ok(collections) => {
                resp.collections = collections;
                resp.database_name = store.name().to_string();
                resp.connection_status = "Connected".to_string();
                resp.database = "✅ Connected & Working".to_string();
            }
            Err(e) => {
                let excerpt: String = e.to_string().chars().take(DIAGNOSTIC_ERROR_CHARS).collect();
                tracing::warn!("Store diagnostics failed: {}", e);
                resp.database = format!("⚠️ Connected but Error: {}", excerpt);
            }
        }
    }

    Json(resp)
}

/// Seed the fixed catalog, returning how many records were created
pub async fn seed_handler(State(state): State<AppState>) -> Result<Json<SeedReport>, ApiError> {
    let store = state.store()?.clone();

    let report = tokio::task::spawn_blocking(move || seed_catalog(store.as_ref()))
        .await
        .map_err(|e| ApiError::Internal(format!("Seed task failed: {}", e)))??;

    Ok(Json(report))
}

/// `GET /subjects?std&board&medium`
pub async fn list_subjects(
    State(state): State<AppState>,
    Query(filter): Query<SubjectFilter>,
) -> Result<Json<Vec<JsonValue>>, ApiError> {
    let store = state.store()?;
    Ok(Json(queries::list_subjects(store.as_ref(), &filter)?))
}

/// `GET /subjects/{subject_id}/chapters`
pub async fn list_chapters(
    State(state): State<AppState>,
    Path(subject_id): Path<String>,
) -> Result<Json<Vec<JsonValue>>, ApiError> {
    let store = state.store()?;
    Ok(Json(queries::list_chapters(store.as_ref(), &subject_id)?))
}
