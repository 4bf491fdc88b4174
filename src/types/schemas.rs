//! Subject and Chapter schemas.
//!
//! Both are validated at construction so a malformed record never reaches the store.
//! Each maps onto one collection:
//! - [`Subject`] -> `subject`
//! - [`Chapter`] -> `chapter`

use serde::Serialize;
use crate::types::{Document, Filter};

/// Collection holding subjects
pub const SUBJECT_COLLECTION: &str = "subject";
/// Collection holding chapters
pub const CHAPTER_COLLECTION: &str = "chapter";

/// Default standard / grade
pub const DEFAULT_STD: &str = "12";
/// Default education board
pub const DEFAULT_BOARD: &str = "Maharashtra State Board";
/// Default medium of instruction
pub const DEFAULT_MEDIUM: &str = "English";
/// Default syllabus academic year for chapters
pub const DEFAULT_SYLLABUS_YEAR: &str = "2024-25";

/// Schema violations detected before persistence
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ValidationError {
    /// A required text field was empty or whitespace
    #[error("{0} must not be empty")]
    Empty(&'static str),
    /// Chapter numbers start at 1
    #[error("chapter number must be at least 1, got {0}")]
    ChapterNumber(i64),
}

fn required(field: &'static str, value: impl Into<String>) -> Result<String, ValidationError> {
    let value = value.into();
    if value.trim().is_empty() {
        return Err(ValidationError::Empty(field));
    }
    Ok(value)
}

/// An academic subject, e.g. "Economics"
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Subject {
    title: String,
    code: Option<String>,
    std: String,
    board: String,
    medium: String,
}

impl Subject {
    /// Subject with the default standard, board and medium
    pub fn new(title: impl Into<String>) -> Result<Self, ValidationError> {
        Ok(Self {
            title: required("title", title)?,
            code: None,
            std: DEFAULT_STD.to_string(),
            board: DEFAULT_BOARD.to_string(),
            medium: DEFAULT_MEDIUM.to_string(),
        })
    }

    /// Title
    pub fn title(&self) -> &str {
        &self.title
    }

    /// (title, std, board, medium)
    pub fn natural_key(&self) -> Filter {
        Filter::all()
            .eq("title", self.title.as_str())
            .eq("std", self.std.as_str())
            .eq("board", self.board.as_str())
            .eq("medium", self.medium.as_str())
    }

    /// Record shape written to the `subject` collection
    pub fn into_document(self) -> Document {
        Document::new()
            .with("title", self.title)
            .with("code", self.code)
            .with("std", self.std)
            .with("board", self.board)
            .with("medium", self.medium)
    }
}

/// A numbered chapter belonging to a subject
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Chapter {
    subject_id: String,
    number: i64,
    title: String,
    description: Option<String>,
    syllabus_year: Option<String>,
}

impl Chapter {
    /// Chapter `number` (1-based) of the subject with external id `subject_id`
    pub fn new(
        subject_id: impl Into<String>,
        number: i64,
        title: impl Into<String>,
    ) -> Result<Self, ValidationError> {
        if number < 1 {
            return Err(ValidationError::ChapterNumber(number));
        }
        Ok(Self {
            subject_id: required("subject_id", subject_id)?,
            number,
            title: required("title", title)?,
            description: None,
            syllabus_year: Some(DEFAULT_SYLLABUS_YEAR.to_string()),
        })
    }

    /// External id of the owning subject
    pub fn subject_id(&self) -> &str {
        &self.subject_id
    }

    /// 1-based position within the subject
    pub fn number(&self) -> i64 {
        self.number
    }

    /// Title
    pub fn title(&self) -> &str {
        &self.title
    }

    /// (subject_id, number, title)
    pub fn natural_key(&self) -> Filter {
        Filter::all()
            .eq("subject_id", self.subject_id.as_str())
            .eq("number", self.number)
            .eq("title", self.title.as_str())
    }

    /// Record shape written to the `chapter` collection
    pub fn into_document(self) -> Document {
        Document::new()
            .with("subject_id", self.subject_id)
            .with("number", self.number)
            .with("title", self.title)
            .with("description", self.description)
            .with("syllabus_year", self.syllabus_year)
    }
}
