//! Persistence slot for the entry collection
//!
//! The whole collection lives in one slot as a JSON array of
//! `{ "key", "value", "createdAt" }` records. Every save rewrites the slot.

use crate::domain::Entry;
use crate::error::{Result, VocabError};
use std::fs;
use std::io;
use std::path::{Path, PathBuf};

/// Slot name used when the config does not name one
pub const DEFAULT_SLOT: &str = "entries";

/// Durable storage for the full entry collection
pub trait PersistenceAdapter {
    /// Load the stored collection; `Ok(None)` when nothing was stored yet
    fn load(&self) -> Result<Option<Vec<Entry>>>;

    /// Replace the stored collection with `entries`
    fn save(&mut self, entries: &[Entry]) -> Result<()>;
}

/// Serialize a collection into the slot's text form.
///
/// Errors come back as `io::Error` so that `save` reports every failure as `WriteFailure`.
pub fn encode_entries(entries: &[Entry]) -> io::Result<String> {
    serde_json::to_string_pretty(entries).map_err(io::Error::from)
}

/// Parse the slot's text form
pub fn decode_entries(text: &str) -> Result<Vec<Entry>> {
    serde_json::from_str(text).map_err(|e| VocabError::Deserialize(e.to_string()))
}

/// Slot stored as `<root>/.vocab/<slot>.json`
#[derive(Debug, Clone)]
pub struct FileSlot {
    path: PathBuf,
}

impl FileSlot {
    /// Slot named `slot` inside the journal at `root`
    pub fn new(root: &Path, slot: &str) -> Self {
        FileSlot {
            path: root.join(".vocab").join(format!("{}.json", slot)),
        }
    }

    /// Slot at an explicit file path
    pub fn at(path: PathBuf) -> Self {
        FileSlot { path }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Write to a temp file next to the slot, then rename into place.
    fn write_replacing(&self, contents: &str) -> io::Result<()> {
        if let Some(parent) = self.path.parent() {
            if !parent.exists() {
                fs::create_dir_all(parent)?;
            }
        }

        let tmp_name = format!(
            "{}.vocab-tmp-{}",
            self.path
                .file_name()
                .and_then(|s| s.to_str())
                .unwrap_or("entries.json"),
            std::process::id()
        );
        let tmp_path = self.path.with_file_name(tmp_name);

        fs::write(&tmp_path, contents)?;
        fs::rename(&tmp_path, &self.path)
    }
}

impl PersistenceAdapter for FileSlot {
    fn load(&self) -> Result<Option<Vec<Entry>>> {
        let text = match fs::read_to_string(&self.path) {
            Ok(text) => text,
            Err(e) if e.kind() == io::ErrorKind::NotFound => {
                tracing::debug!(path = %self.path.display(), "no stored entries");
                return Ok(None);
            }
            Err(e) => return Err(VocabError::Io(e)),
        };

        let entries = decode_entries(&text)?;
        tracing::debug!(path = %self.path.display(), count = entries.len(), "loaded entries");
        Ok(Some(entries))
    }

    fn save(&mut self, entries: &[Entry]) -> Result<()> {
        encode_entries(entries)
            .and_then(|contents| self.write_replacing(&contents))
            .map_err(|source| VocabError::WriteFailure {
                path: self.path.clone(),
                source,
            })?;
        tracing::debug!(path = %self.path.display(), count = entries.len(), "saved entries");
        Ok(())
    }
}

/// In-memory slot holding the serialized text
#[derive(Debug, Clone, Default)]
pub struct MemorySlot {
    stored: Option<String>,
    saves: usize,
    fail_writes: bool,
}

impl MemorySlot {
    /// Empty slot; `load` returns `None`
    pub fn new() -> Self {
        Self::default()
    }

    /// Slot that already holds `text`, valid or not
    pub fn with_text(text: impl Into<String>) -> Self {
        MemorySlot {
            stored: Some(text.into()),
            ..Self::default()
        }
    }

    /// Make every later `save` fail with `WriteFailure`
    pub fn fail_writes(mut self, fail: bool) -> Self {
        self.fail_writes = fail;
        self
    }

    pub fn set_fail_writes(&mut self, fail: bool) {
        self.fail_writes = fail;
    }

    /// Number of successful saves
    pub fn save_count(&self) -> usize {
        self.saves
    }

    /// Raw stored text
    pub fn stored_text(&self) -> Option<&str> {
        self.stored.as_deref()
    }
}

impl PersistenceAdapter for MemorySlot {
    fn load(&self) -> Result<Option<Vec<Entry>>> {
        self.stored.as_deref().map(decode_entries).transpose()
    }

    fn save(&mut self, entries: &[Entry]) -> Result<()> {
        if self.fail_writes {
            return Err(VocabError::WriteFailure {
                path: PathBuf::from("<memory>"),
                source: io::Error::other("writes disabled"),
            });
        }
        let text = encode_entries(entries).map_err(|source| VocabError::WriteFailure {
            path: PathBuf::from("<memory>"),
            source,
        })?;
        self.stored = Some(text);
        self.saves += 1;
        Ok(())
    }
}
