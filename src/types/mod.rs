//! Type definitions shared by the store, the seeding routine and the API

/// Store-generated identifiers
pub mod ids;

/// Store-native field values
pub mod value;

/// Records and filters
pub mod document;

/// Subject / Chapter schemas
pub mod schemas;

/// Boundary serialization of records
pub mod serialize;

pub use ids::{DocId, DocIdError};
pub use value::Value;
pub use document::{Document, Filter, ID_FIELD};
pub use schemas::{Chapter, Subject, ValidationError, CHAPTER_COLLECTION, SUBJECT_COLLECTION};
pub use serialize::{serialize_all, serialize_doc, serialize_opt};
