//! In-memory document store using DashMap
//!
//! Each collection is a `Vec<Document>` in insertion order behind one DashMap entry, so a
//! single write lock covers the existence check and the insert in `insert_if_absent`.

use std::collections::HashMap;
use dashmap::DashMap;
use crate::core::error::StorageError;
use crate::storage::{stamp, DocumentStore, Upserted};
use crate::types::{DocId, Document, Filter};

/// Volatile store; contents are lost on process exit
pub struct MemoryStore {
    /// Database name
    name: String,

    /// Map of collection name to records
    collections: DashMap<String, Vec<Document>>,
}

impl MemoryStore {
    /// Create an empty store
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            collections: DashMap::new(),
        }
    }

    /// Create a store pre-populated with already-stamped records
    pub(crate) fn from_collections(
        name: impl Into<String>,
        collections: HashMap<String, Vec<Document>>,
    ) -> Self {
        Self {
            name: name.into(),
            collections: collections.into_iter().collect(),
        }
    }

    /// Total record count across collections
    pub fn document_count(&self) -> usize {
        self.collections.iter().map(|entry| entry.value().len()).sum()
    }

    /// Record count of one collection
    pub fn collection_len(&self, collection: &str) -> usize {
        self.collections.get(collection).map_or(0, |docs| docs.len())
    }

    /// Copy of every record in a collection
    pub(crate) fn snapshot(&self, collection: &str) -> Vec<Document> {
        self.collections
            .get(collection)
            .map(|docs| docs.value().clone())
            .unwrap_or_default()
    }

    /// Append an already-stamped record, making it visible to readers
    pub(crate) fn publish(&self, collection: &str, doc: Document) {
        self.collections.entry(collection.to_string()).or_default().push(doc);
    }

    fn insert_stamped(docs: &mut Vec<Document>, mut doc: Document) -> DocId {
        let id = DocId::random();
        stamp(&mut doc, id);
        docs.push(doc);
        id
    }
}

impl DocumentStore for MemoryStore {
    fn name(&self) -> &str {
        &self.name
    }

    fn create(&self, collection: &str, doc: Document) -> Result<DocId, StorageError> {
        let mut docs = self.collections.entry(collection.to_string()).or_default();
        let id = Self::insert_stamped(docs.value_mut(), doc);
        tracing::debug!(collection, id = %id, "created document");
        Ok(id)
    }

    fn find(
        &self,
        collection: &str,
        filter: &Filter,
        limit: Option<usize>,
    ) -> Result<Vec<Document>, StorageError> {
        let Some(docs) = self.collections.get(collection) else {
            return Ok(Vec::new());
        };

        let matches = docs.iter().filter(|doc| filter.matches(doc)).cloned();
        Ok(match limit {
            Some(limit) => matches.take(limit).collect(),
            None => matches.collect(),
        })
    }

    fn list_collection_names(&self) -> Result<Vec<String>, StorageError> {
        let mut names: Vec<String> = self
            .collections
            .iter()
            .filter(|entry| !entry.value().is_empty())
            .map(|entry| entry.key().clone())
            .collect();
        names.sort();
        Ok(names)
    }

    fn insert_if_absent(
        &self,
        collection: &str,
        filter: &Filter,
        doc: Document,
    ) -> Result<Upserted, StorageError> {
        let mut docs = self.collections.entry(collection.to_string()).or_default();

        if let Some(existing) = docs.iter().find(|d| filter.matches(d)) {
            return existing.id().map(Upserted::Found).ok_or_else(|| StorageError::Corruption {
                collection: collection.to_string(),
                message: "stored record has no identity".to_string(),
            });
        }

        Ok(Upserted::Created(Self::insert_stamped(docs.value_mut(), doc)))
    }
}

impl Default for MemoryStore {
    fn default() -> Self {
        Self::new("memory")
    }
}
