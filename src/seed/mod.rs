//! Idempotent catalog seeding
//!
//! Each subject and chapter is written through [`find_or_create`] keyed by its natural key,
//! so re-running the routine writes nothing new. There is no transaction: an interrupted run
//! leaves a prefix of the catalog in place and the next run fills in the rest.

pub mod catalog;

use serde::Serialize;
use crate::core::error::Result;
use crate::storage::{find_or_create, DocumentStore};
use crate::types::{Chapter, Subject, CHAPTER_COLLECTION, SUBJECT_COLLECTION};
pub use catalog::{chapter_total, CatalogSubject, CATALOG};

/// Records written by one seeding run
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct SeedReport {
    /// Subjects created
    pub subjects: usize,
    /// Chapters created
    pub chapters: usize,
}

/// Seed the compiled-in [`CATALOG`]
pub fn seed_catalog(store: &dyn DocumentStore) -> Result<SeedReport> {
    tracing::debug!(
        subjects = CATALOG.len(),
        chapters = chapter_total(),
        "seeding compiled-in catalog"
    );
    seed(store, CATALOG)
}

/// Seed an arbitrary catalog; the caller guarantees a live store
pub fn seed(store: &dyn DocumentStore, catalog: &[CatalogSubject]) -> Result<SeedReport> {
    let mut report = SeedReport::default();

    for entry in catalog {
        let subject = Subject::new(entry.title)?;
        let key = subject.natural_key();
        let outcome = find_or_create(store, SUBJECT_COLLECTION, &key, || {
            Ok(subject.clone().into_document())
        })?;

        let subject_id = outcome.id().to_string();
        if outcome.was_created() {
            report.subjects += 1;
            tracing::info!(subject = subject.title(), id = %subject_id, "created subject");
        } else {
            tracing::debug!(subject = subject.title(), id = %subject_id, "subject already present");
        }

        for (index, title) in entry.chapters.iter().enumerate() {
            let chapter = Chapter::new(subject_id.as_str(), index as i64 + 1, *title)?;
            let key = chapter.natural_key();
            let outcome = find_or_create(store, CHAPTER_COLLECTION, &key, || {
                Ok(chapter.clone().into_document())
            })?;

            if outcome.was_created() {
                report.chapters += 1;
                tracing::debug!(
                    subject_id = chapter.subject_id(),
                    number = chapter.number(),
                    title = chapter.title(),
                    "created chapter"
                );
            }
        }
    }

    tracing::info!(
        subjects = report.subjects,
        chapters = report.chapters,
        "catalog seeding finished"
    );
    Ok(report)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::storage::MemoryStore;
    use crate::types::{Filter, Value};

    #[test]
    fn seeding_empty_store_creates_whole_catalog() {
        let store = MemoryStore::new("test");
        let report = seed_catalog(&store).unwrap();

        assert_eq!(report, SeedReport { subjects: 4, chapters: 49 });
        assert_eq!(store.collection_len(SUBJECT_COLLECTION), 4);
        assert_eq!(store.collection_len(CHAPTER_COLLECTION), 49);
    }

    #[test]
    fn second_run_writes_nothing() {
        let store = MemoryStore::new("test");
        seed_catalog(&store).unwrap();

        let again = seed_catalog(&store).unwrap();
        assert_eq!(again, SeedReport::default());
        assert_eq!(store.document_count(), 53);
    }

    #[test]
    fn chapters_reference_subject_external_id() {
        let store = MemoryStore::new("test");
        seed_catalog(&store).unwrap();

        let economics = store
            .find_one(SUBJECT_COLLECTION, &Filter::all().eq("title", "Economics"))
            .unwrap()
            .unwrap();
        let id = economics.id().unwrap().to_string();

        let chapters = store
            .find(CHAPTER_COLLECTION, &Filter::all().eq("subject_id", id.as_str()), None)
            .unwrap();
        assert_eq!(chapters.len(), 13);
        assert!(chapters.iter().all(|c| c.get("description") == Some(&Value::Null)));
        assert!(chapters.iter().all(|c| c.get_str("syllabus_year") == Some("2024-25")));

        let mut numbers: Vec<i64> = chapters.iter().filter_map(|c| c.get_i64("number")).collect();
        numbers.sort();
        assert_eq!(numbers, (1..=13).collect::<Vec<_>>());
    }

    #[test]
    fn partial_state_is_completed_without_duplicates() {
        let store = MemoryStore::new("test");
        let economics = CatalogSubject {
            title: "Economics",
            chapters: &CATALOG[0].chapters[..5],
        };
        let first = seed(&store, &[economics]).unwrap();
        assert_eq!(first, SeedReport { subjects: 1, chapters: 5 });

        let rest = seed_catalog(&store).unwrap();
        assert_eq!(rest, SeedReport { subjects: 3, chapters: 44 });
        assert_eq!(store.collection_len(SUBJECT_COLLECTION), 4);
        assert_eq!(store.collection_len(CHAPTER_COLLECTION), 49);
    }

    #[test]
    fn natural_keys_stay_unique() {
        let store = MemoryStore::new("test");
        seed_catalog(&store).unwrap();
        seed_catalog(&store).unwrap();

        for entry in CATALOG {
            let key = Subject::new(entry.title).unwrap().natural_key();
            let subjects = store.find(SUBJECT_COLLECTION, &key, None).unwrap();
            assert_eq!(subjects.len(), 1);

            let subject_id = subjects[0].id().unwrap().to_string();
            for (index, title) in entry.chapters.iter().enumerate() {
                let key = Chapter::new(subject_id.as_str(), index as i64 + 1, *title)
                    .unwrap()
                    .natural_key();
                assert_eq!(store.find(CHAPTER_COLLECTION, &key, None).unwrap().len(), 1);
            }
        }

        let chapters = store.find(CHAPTER_COLLECTION, &Filter::all(), None).unwrap();
        let mut keys: Vec<(String, i64, String)> = chapters
            .iter()
            .map(|c| {
                (
                    c.get_str("subject_id").unwrap().to_string(),
                    c.get_i64("number").unwrap(),
                    c.get_str("title").unwrap().to_string(),
                )
            })
            .collect();
        keys.sort();
        keys.dedup();
        assert_eq!(keys.len(), chapters.len());
    }

    #[test]
    fn report_serializes_as_counters() {
        let json = serde_json::to_value(SeedReport { subjects: 4, chapters: 49 }).unwrap();
        assert_eq!(json, serde_json::json!({"subjects": 4, "chapters": 49}));
    }
}
