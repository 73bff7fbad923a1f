//! Vocabulary entry, the unit of storage

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use std::fmt;

/// A word, the user's meaning for it, and the day it was recorded
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Entry {
    pub key: String,
    pub value: String,
    /// Serialized as `YYYY-MM-DD`
    #[serde(rename = "createdAt")]
    pub created_at: NaiveDate,
}

impl Entry {
    pub fn new(key: impl Into<String>, value: impl Into<String>, created_at: NaiveDate) -> Self {
        Entry {
            key: key.into(),
            value: value.into(),
            created_at,
        }
    }
}

/// Field that made an entry invalid
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EmptyField {
    Key,
    Value,
}

impl fmt::Display for EmptyField {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            EmptyField::Key => write!(f, "word is empty"),
            EmptyField::Value => write!(f, "meaning is empty"),
        }
    }
}

/// Check that both the word and the meaning are non-empty.
///
/// Only the zero-length string counts as empty; whitespace is kept as content.
pub fn validate(key: &str, value: &str) -> Result<(), EmptyField> {
    if key.is_empty() {
        return Err(EmptyField::Key);
    }
    if value.is_empty() {
        return Err(EmptyField::Value);
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    #[test]
    fn test_serializes_created_at_as_plain_date() {
        let entry = Entry::new("ephemeral", "fleeting", date(2024, 1, 10));
        let json = serde_json::to_string(&entry).unwrap();
        assert_eq!(
            json,
            r#"{"key":"ephemeral","value":"fleeting","createdAt":"2024-01-10"}"#
        );
    }

    #[test]
    fn test_deserialize_ignores_unknown_fields() {
        let json = r#"{"key":"laconic","value":"brief","createdAt":"2024-02-29","id":7}"#;
        let entry: Entry = serde_json::from_str(json).unwrap();
        assert_eq!(entry, Entry::new("laconic", "brief", date(2024, 2, 29)));
    }

    #[test]
    fn test_deserialize_rejects_impossible_date() {
        let json = r#"{"key":"a","value":"b","createdAt":"2023-02-30"}"#;
        assert!(serde_json::from_str::<Entry>(json).is_err());
    }

    #[test]
    fn test_validate() {
        assert_eq!(validate("word", "meaning"), Ok(()));
        assert_eq!(validate("", "meaning"), Err(EmptyField::Key));
        assert_eq!(validate("word", ""), Err(EmptyField::Value));
        assert_eq!(validate("", ""), Err(EmptyField::Key));
        // whitespace is content
        assert_eq!(validate(" ", " "), Ok(()));
    }
}
