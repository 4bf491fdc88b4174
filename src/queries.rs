//! Read queries over subjects and chapters
//!
//! Results are already in their external shape (see [`crate::types::serialize`]).

use serde::Deserialize;
use serde_json::Value as JsonValue;
use crate::core::error::StorageError;
use crate::storage::DocumentStore;
use crate::types::schemas::{DEFAULT_BOARD, DEFAULT_MEDIUM, DEFAULT_STD};
use crate::types::{serialize_all, Filter, CHAPTER_COLLECTION, SUBJECT_COLLECTION};

/// Subject listing filter; each field defaults to the seeded catalog's value
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct SubjectFilter {
    /// Standard / grade
    pub std: String,
    /// Education board
    pub board: String,
    /// Medium of instruction
    pub medium: String,
}

impl Default for SubjectFilter {
    fn default() -> Self {
        Self {
            std: DEFAULT_STD.to_string(),
            board: DEFAULT_BOARD.to_string(),
            medium: DEFAULT_MEDIUM.to_string(),
        }
    }
}

impl SubjectFilter {
    fn to_filter(&self) -> Filter {
        Filter::all()
            .eq("std", self.std.as_str())
            .eq("board", self.board.as_str())
            .eq("medium", self.medium.as_str())
    }
}

/// Every subject exactly matching std, board and medium
pub fn list_subjects(
    store: &dyn DocumentStore,
    filter: &SubjectFilter,
) -> Result<Vec<JsonValue>, StorageError> {
    let docs = store.find(SUBJECT_COLLECTION, &filter.to_filter(), None)?;
    Ok(serialize_all(docs))
}

/// Chapters of one subject, ascending by number.
///
/// A record without an integer `number` sorts as 0. The sort is stable, so ties keep
/// insertion order. An unknown subject id yields an empty list.
pub fn list_chapters(
    store: &dyn DocumentStore,
    subject_id: &str,
) -> Result<Vec<JsonValue>, StorageError> {
    let mut docs = store.find(
        CHAPTER_COLLECTION,
        &Filter::all().eq("subject_id", subject_id),
        None,
    )?;
    docs.sort_by_key(|doc| doc.get_i64("number").unwrap_or(0));
    Ok(serialize_all(docs))
}
