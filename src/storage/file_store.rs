//! JSON-file backed document store
//!
//! Same semantics as [`MemoryStore`], plus write-through persistence: every write rewrites
//! `<data_dir>/<collection>.json` (temp file, then rename) before the record becomes visible. Identifiers are persisted in
//! extended form (`{"$oid": "..."}`) so they come back as identifiers, not strings.

use std::collections::HashMap;
use std::fs;
use std::path::{Path, PathBuf};
use parking_lot::Mutex;
use crate::core::error::StorageError;
use crate::storage::{existing_id, stamp, DocumentStore, MemoryStore, Upserted};
use crate::types::{DocId, Document, Filter};

const SNAPSHOT_EXTENSION: &str = "json";

/// Persistent store rooted at a data directory
pub struct FileStore {
    /// Live records
    inner: MemoryStore,

    /// Directory holding one snapshot file per collection
    data_dir: PathBuf,

    /// Serializes writers so snapshots land in mutation order
    write_lock: Mutex<()>,
}

impl FileStore {
    /// Open (or initialise) a store in `data_dir`, loading existing snapshots
    pub fn open(data_dir: impl AsRef<Path>, name: impl Into<String>) -> Result<Self, StorageError> {
        let data_dir = data_dir.as_ref().to_path_buf();
        fs::create_dir_all(&data_dir)?;

        let mut collections = HashMap::new();
        for entry in fs::read_dir(&data_dir)? {
            let path = entry?.path();
            if path.extension().and_then(|e| e.to_str()) != Some(SNAPSHOT_EXTENSION) {
                continue;
            }
            let Some(collection) = path.file_stem().and_then(|s| s.to_str()) else {
                continue;
            };

            let bytes = fs::read(&path)?;
            let docs: Vec<Document> =
                serde_json::from_slice(&bytes).map_err(|e| StorageError::Corruption {
                    collection: collection.to_string(),
                    message: e.to_string(),
                })?;
            tracing::debug!(collection, count = docs.len(), "loaded collection snapshot");
            collections.insert(collection.to_string(), docs);
        }

        let name = name.into();
        tracing::info!(
            "Opened file store {} at {:?} ({} collections)",
            name,
            data_dir,
            collections.len()
        );

        Ok(Self {
            inner: MemoryStore::from_collections(name, collections),
            data_dir,
            write_lock: Mutex::new(()),
        })
    }

    /// Total record count across collections
    pub fn document_count(&self) -> usize {
        self.inner.document_count()
    }

    fn snapshot_path(&self, collection: &str) -> PathBuf {
        self.data_dir.join(format!("{}.{}", collection, SNAPSHOT_EXTENSION))
    }

    fn check_collection(collection: &str) -> Result<(), StorageError> {
        let usable = !collection.is_empty()
            && collection
                .chars()
                .all(|c| c.is_ascii_alphanumeric() || c == '_' || c == '-');
        if usable {
            Ok(())
        } else {
            Err(StorageError::InvalidCollection(collection.to_string()))
        }
    }

    /// Write one collection's snapshot
    fn flush(&self, collection: &str, docs: &[Document]) -> Result<(), StorageError> {
        let encoded = serde_json::to_vec_pretty(docs)?;

        let target = self.snapshot_path(collection);
        let staging = target.with_extension("json.tmp");
        fs::write(&staging, encoded)?;
        fs::rename(&staging, &target)?;
        Ok(())
    }

    /// Persist a new record, then publish it to memory.
    ///
    /// Callers hold `write_lock`. Readers never see a record whose snapshot write failed.
    fn write_through(&self, collection: &str, mut doc: Document) -> Result<DocId, StorageError> {
        let id = DocId::random();
        stamp(&mut doc, id);

        let mut docs = self.inner.snapshot(collection);
        docs.push(doc.clone());
        if let Err(e) = self.flush(collection, &docs) {
            tracing::error!(collection, id = %id, "snapshot write failed: {}", e);
            return Err(e);
        }

        self.inner.publish(collection, doc);
        tracing::debug!(collection, id = %id, "created document");
        Ok(id)
    }
}

impl DocumentStore for FileStore {
    fn name(&self) -> &str {
        self.inner.name()
    }

    fn create(&self, collection: &str, doc: Document) -> Result<DocId, StorageError> {
        Self::check_collection(collection)?;
        let _guard = self.write_lock.lock();

        self.write_through(collection, doc)
    }

    fn find(
        &self,
        collection: &str,
        filter: &Filter,
        limit: Option<usize>,
    ) -> Result<Vec<Document>, StorageError> {
        self.inner.find(collection, filter, limit)
    }

    fn list_collection_names(&self) -> Result<Vec<String>, StorageError> {
        self.inner.list_collection_names()
    }

    fn insert_if_absent(
        &self,
        collection: &str,
        filter: &Filter,
        doc: Document,
    ) -> Result<Upserted, StorageError> {
        Self::check_collection(collection)?;
        let _guard = self.write_lock.lock();

        // Every writer holds the lock, so nothing can land between the check and the write.
        if let Some(existing) = self.inner.find_one(collection, filter)? {
            return existing_id(collection, &existing).map(Upserted::Found);
        }
        self.write_through(collection, doc).map(Upserted::Created)
    }
}
