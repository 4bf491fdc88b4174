//! Storage layer
//!
//! [`DocumentStore`] is the adapter every other component talks to: generic create/read
//! operations keyed by collection name and exact-match filter. It holds no business logic.

use crate::core::error::{Result, StorageError};
use crate::types::{DocId, Document, Filter, ValidationError, ID_FIELD};

/// Volatile in-memory backend
pub mod mem_store;

/// JSON-file backed backend
pub mod file_store;

pub use mem_store::MemoryStore;
pub use file_store::FileStore;

/// Field stamped with the insertion time
pub const CREATED_AT_FIELD: &str = "created_at";
/// Field stamped with the last write time
pub const UPDATED_AT_FIELD: &str = "updated_at";

/// Outcome of an idempotent insert
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Upserted {
    /// A record matching the natural key already existed
    Found(DocId),
    /// A new record was written
    Created(DocId),
}

impl Upserted {
    /// Identity of the found or created record
    pub fn id(&self) -> DocId {
        match self {
            Upserted::Found(id) | Upserted::Created(id) => *id,
        }
    }

    /// True when this call wrote a record
    pub fn was_created(&self) -> bool {
        matches!(self, Upserted::Created(_))
    }
}

/// Trait for document store implementations
pub trait DocumentStore: Send + Sync {
    /// Database name, reported by diagnostics
    fn name(&self) -> &str;

    /// Insert a record and return the identity assigned by the store
    fn create(&self, collection: &str, doc: Document) -> std::result::Result<DocId, StorageError>;

    /// Records matching `filter` in insertion order, at most `limit` of them
    fn find(
        &self,
        collection: &str,
        filter: &Filter,
        limit: Option<usize>,
    ) -> std::result::Result<Vec<Document>, StorageError>;

    /// First match, or `None`
    fn find_one(
        &self,
        collection: &str,
        filter: &Filter,
    ) -> std::result::Result<Option<Document>, StorageError> {
        Ok(self.find(collection, filter, Some(1))?.into_iter().next())
    }

    /// Names of collections holding at least one record, sorted
    fn list_collection_names(&self) -> std::result::Result<Vec<String>, StorageError>;

    /// Insert `doc` unless a record matching `filter` exists.
    ///
    /// The default is a plain find-then-create and can race with a concurrent caller.
    /// Backends that can hold a collection lock across both steps override it.
    fn insert_if_absent(
        &self,
        collection: &str,
        filter: &Filter,
        doc: Document,
    ) -> std::result::Result<Upserted, StorageError> {
        match self.find_one(collection, filter)? {
            Some(existing) => existing_id(collection, &existing).map(Upserted::Found),
            None => self.create(collection, doc).map(Upserted::Created),
        }
    }
}

/// Look up a record by natural key, creating it from `factory` when absent.
///
/// The factory only runs when the lookup misses, so validation of a record that already
/// exists is skipped.
pub fn find_or_create<F>(
    store: &dyn DocumentStore,
    collection: &str,
    filter: &Filter,
    factory: F,
) -> Result<Upserted>
where
    F: FnOnce() -> std::result::Result<Document, ValidationError>,
{
    if let Some(existing) = store.find_one(collection, filter)? {
        return Ok(Upserted::Found(existing_id(collection, &existing)?));
    }

    let doc = factory()?;
    Ok(store.insert_if_absent(collection, filter, doc)?)
}

/// Assign identity and timestamps to a record about to be written
pub(crate) fn stamp(doc: &mut Document, id: DocId) {
    let now = chrono::Utc::now().to_rfc3339();
    doc.insert(ID_FIELD, id);
    if !doc.contains(CREATED_AT_FIELD) {
        doc.insert(CREATED_AT_FIELD, now.clone());
    }
    if !doc.contains(UPDATED_AT_FIELD) {
        doc.insert(UPDATED_AT_FIELD, now);
    }
}

pub(crate) fn existing_id(collection: &str, doc: &Document) -> std::result::Result<DocId, StorageError> {
    doc.id().ok_or_else(|| StorageError::Corruption {
        collection: collection.to_string(),
        message: "stored record has no identity".to_string(),
    })
}
