/// Store-generated identifiers.
/// Uses base62 encoding [0-9a-zA-Z] for the canonical string form while keeping a
/// fixed memory layout so ids stay `Copy` and cheap to compare.

use std::fmt;
use std::str::FromStr;
use rand::{rng, Rng};
use serde::{Deserialize, Deserializer, Serialize, Serializer};

/// Base62 character set used for generated ids
pub const BASE62_CHARS: &[u8] = b"0123456789abcdefghijklmnopqrstuvwxyzABCDEFGHIJKLMNOPQRSTUVWXYZ";

/// Length of a [`DocId`] in characters
pub const DOC_ID_LENGTH: usize = 16;

/// Fixed-size 16-character identifier assigned by the document store.
///
/// Memory Layout:
/// - [u8; 16] - base62 ASCII bytes
#[repr(transparent)]
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct DocId([u8; DOC_ID_LENGTH]);

/// Error returned when parsing a [`DocId`] from text
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum DocIdError {
    /// Input had the wrong number of characters
    #[error("document id must be exactly 16 characters, got {0}")]
    Length(usize),
    /// Input contained a character outside [0-9a-zA-Z]
    #[error("document id contains invalid character {0:?}")]
    Character(char),
}

impl DocId {
    /// Generate a random 16-character base62 id
    pub fn random() -> Self {
        let mut rng = rng();
        let mut bytes = [0u8; DOC_ID_LENGTH];

        for byte in bytes.iter_mut() {
            *byte = BASE62_CHARS[rng.random_range(0..BASE62_CHARS.len())];
        }

        DocId(bytes)
    }

    /// Canonical string form
    pub fn as_str(&self) -> &str {
        // Construction only ever admits base62 ASCII.
        std::str::from_utf8(&self.0).unwrap_or_default()
    }
}

impl fmt::Display for DocId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for DocId {
    type Err = DocIdError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let len = s.chars().count();
        if len != DOC_ID_LENGTH {
            return Err(DocIdError::Length(len));
        }
        if let Some(bad) = s.chars().find(|c| !c.is_ascii_alphanumeric()) {
            return Err(DocIdError::Character(bad));
        }

        let mut bytes = [0u8; DOC_ID_LENGTH];
        bytes.copy_from_slice(s.as_bytes());
        Ok(DocId(bytes))
    }
}

impl Serialize for DocId {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(self.as_str())
    }
}

impl<'de> Deserialize<'de> for DocId {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let raw = String::deserialize(deserializer)?;
        raw.parse().map_err(serde::de::Error::custom)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn random_ids_are_base62_and_distinct() {
        let a = DocId::random();
        let b = DocId::random();
        assert_ne!(a, b);
        assert_eq!(a.as_str().len(), DOC_ID_LENGTH);
        assert!(a.as_str().bytes().all(|c| BASE62_CHARS.contains(&c)));
    }

    #[test]
    fn parse_round_trips_display() {
        let id = DocId::random();
        let parsed: DocId = id.to_string().parse().unwrap();
        assert_eq!(parsed, id);
    }

    #[test]
    fn parse_rejects_bad_input() {
        assert_eq!("abc".parse::<DocId>(), Err(DocIdError::Length(3)));
        assert_eq!(
            "abcdefgh-jklmnop".parse::<DocId>(),
            Err(DocIdError::Character('-'))
        );
    }

    #[test]
    fn length_counts_characters_not_bytes() {
        assert_eq!("ééé".parse::<DocId>(), Err(DocIdError::Length(3)));
        assert_eq!(
            "é".repeat(DOC_ID_LENGTH).parse::<DocId>(),
            Err(DocIdError::Character('é'))
        );
        assert_eq!("0123456789abcdeé".parse::<DocId>(), Err(DocIdError::Character('é')));
    }

    #[test]
    fn serde_uses_string_form() {
        let id: DocId = "0123456789abcDEF".parse().unwrap();
        let json = serde_json::to_string(&id).unwrap();
        assert_eq!(json, "\"0123456789abcDEF\"");
        let back: DocId = serde_json::from_str(&json).unwrap();
        assert_eq!(back, id);
    }
}
