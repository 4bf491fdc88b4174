//! HTTP server for the HSC study API

use axum::{
    routing::{get, post},
    Router,
};
use std::future::Future;
use tower::ServiceBuilder;
use tower_http::{
    cors::{Any, CorsLayer},
    trace::TraceLayer,
};
use crate::core::{AppState, Error, Result};
use super::handlers;

/// Creates the application router with all routes and middleware
pub fn create_app(state: AppState) -> Router {
    // Any origin, method and header. Credentials stay off: they cannot be combined with `Any`.
    let cors = CorsLayer::new()
        .allow_methods(Any)
        .allow_headers(Any)
        .allow_origin(Any);

    Router::new()
        .route("/", get(handlers::root_handler))
        .route("/test", get(handlers::test_database))
        .route("/seed", post(handlers::seed_handler))
        .route("/subjects", get(handlers::list_subjects))
        .route("/subjects/{subject_id}/chapters", get(handlers::list_chapters))
        .layer(
            ServiceBuilder::new()
                .layer(TraceLayer::new_for_http())
                .layer(cors)
        )
        .with_state(state)
}

/// Serve the API on the configured address until `shutdown` resolves
pub async fn start_server<F>(state: AppState, shutdown: F) -> Result<()>
where
    F: Future<Output = ()> + Send + 'static,
{
    let addr = state.config.server.http_addr;
    let app = create_app(state);

    let listener = tokio::net::TcpListener::bind(addr)
        .await
        .map_err(|e| Error::config(format!("Cannot bind {}: {}", addr, e)))?;

    tracing::info!("Server listening on http://{}", addr);
    tracing::info!("Store diagnostics available at http://{}/test", addr);

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown)
        .await?;

    tracing::info!("HTTP server stopped");
    Ok(())
}
