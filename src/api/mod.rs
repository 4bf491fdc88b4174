//! # API Module
//!
//! HTTP interface for the HSC study backend.
//!
//! ## Endpoints
//! - `GET /` - Liveness message
//! - `GET /test` - Store diagnostics, never fails
//! - `POST /seed` - Seed the fixed catalog, returns created counts
//! - `GET /subjects?std&board&medium` - Subjects matching the filter
//! - `GET /subjects/{subject_id}/chapters` - Chapters of a subject, ordered by number
//!
//! Errors are returned as `{"detail": "..."}`.

pub mod error;
pub mod handlers;
pub mod server;

// Re-export commonly used items
pub use error::{ApiError, ErrorResponse};
pub use server::{create_app, start_server};
