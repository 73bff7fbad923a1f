//! Error types for vocab

use std::path::PathBuf;
use thiserror::Error;

/// Main error type for vocab
#[derive(Debug, Error)]
pub enum VocabError {
    #[error("Not a vocab directory: {0}")]
    NotVocabDirectory(PathBuf),

    #[error("Invalid date: {0}")]
    InvalidDate(String),

    #[error("Entry rejected: {0}")]
    Validation(String),

    #[error("Stored entries could not be read: {0}")]
    Deserialize(String),

    #[error("Failed to write entries to {path}: {source}")]
    WriteFailure {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Configuration error: {0}")]
    Config(String),

    #[error("TOML deserialization error: {0}")]
    TomlDeserialize(#[from] toml::de::Error),

    #[error("TOML serialization error: {0}")]
    TomlSerialize(#[from] toml::ser::Error),
}

impl VocabError {
    /// Get the exit code for this error
    pub fn exit_code(&self) -> i32 {
        match self {
            VocabError::NotVocabDirectory(_) => 2,
            VocabError::InvalidDate(_) => 3,
            VocabError::Validation(_) => 4,
            VocabError::WriteFailure { .. } => 5,
            _ => 1,
        }
    }

    /// Get a user-friendly error message with suggestions
    pub fn display_with_suggestions(&self) -> String {
        match self {
            VocabError::NotVocabDirectory(path) => {
                format!(
                    "Not a vocab directory: {}\n\n\
                    Suggestions:\n\
                    • Run 'vocab init' in this directory to start a journal\n\
                    • Navigate to an existing vocab directory\n\
                    • Set VOCAB_ROOT environment variable to your journal path",
                    path.display()
                )
            }
            VocabError::InvalidDate(input) => {
                format!(
                    "Invalid date: '{}'\n\n\
                    Valid dates:\n\
                    • today, yesterday, tomorrow\n\
                    • monday, tuesday, ..., sunday (most recent)\n\
                    • last monday, last friday, etc.\n\
                    • Specific dates: YYYY-MM-DD (e.g., 2024-01-10)\n\n\
                    Examples:\n\
                    vocab show yesterday\n\
                    vocab add ephemeral 'fleeting' --date 2024-01-10",
                    input
                )
            }
            VocabError::Validation(msg) => {
                format!(
                    "Entry rejected: {}\n\n\
                    Both the word and its meaning must be non-empty.",
                    msg
                )
            }
            VocabError::WriteFailure { path, source } => {
                format!(
                    "Failed to write entries to {}: {}\n\n\
                    The new word was not saved and will not survive a restart.\n\
                    Check that the journal directory is writable and try again.",
                    path.display(),
                    source
                )
            }
            VocabError::Deserialize(msg) => {
                format!(
                    "Stored entries could not be read: {}\n\n\
                    The journal was started from the seed entries instead.\n\
                    The next saved word will overwrite the unreadable data.",
                    msg
                )
            }
            _ => self.to_string(),
        }
    }
}

/// Result type using VocabError
pub type Result<T> = std::result::Result<T, VocabError>;
