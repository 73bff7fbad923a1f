//! Entry store: owns the collection and keeps the slot in sync

use crate::domain::{validate, EmptyField, Entry};
use crate::error::{Result, VocabError};
use crate::infrastructure::PersistenceAdapter;
use chrono::NaiveDate;

/// Result of an `add` that did not fail to persist
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AddOutcome {
    /// Entry prepended and saved
    Added,
    /// Nothing happened; the named field was empty
    Rejected(EmptyField),
}

/// The in-memory entry collection and the adapter that persists it.
///
/// The collection is newest-added-first. Every successful `add` is saved
/// before it returns.
#[derive(Debug)]
pub struct EntryStore<P: PersistenceAdapter> {
    adapter: P,
    entries: Vec<Entry>,
    load_warning: Option<VocabError>,
}

impl<P: PersistenceAdapter> EntryStore<P> {
    /// Load the stored collection, or start from `seed` when there is none.
    ///
    /// A slot that cannot be read or parsed also starts from `seed`; the
    /// failure is kept as a load warning instead of being returned.
    pub fn initialize(adapter: P, seed: Vec<Entry>) -> Self {
        let (entries, load_warning) = match adapter.load() {
            Ok(Some(entries)) => (entries, None),
            Ok(None) => {
                tracing::debug!(count = seed.len(), "no stored entries, using seed");
                (seed, None)
            }
            Err(e) => {
                tracing::warn!("stored entries unusable, falling back to seed: {e}");
                (seed, Some(e))
            }
        };

        EntryStore {
            adapter,
            entries,
            load_warning,
        }
    }

    /// Prepend a new entry and save the full collection.
    ///
    /// Empty `key` or `value` is rejected without touching state or the slot.
    /// On `WriteFailure` the entry stays in memory but is not persisted.
    pub fn add(&mut self, key: &str, value: &str, date: NaiveDate) -> Result<AddOutcome> {
        if let Err(field) = validate(key, value) {
            tracing::debug!(%field, "entry rejected");
            return Ok(AddOutcome::Rejected(field));
        }

        self.entries.insert(0, Entry::new(key, value, date));

        if let Err(e) = self.adapter.save(&self.entries) {
            tracing::warn!(key, "entry kept in memory but not saved: {e}");
            return Err(e);
        }

        tracing::info!(key, date = %date, "entry added");
        Ok(AddOutcome::Added)
    }

    /// Current collection, newest-added-first
    pub fn snapshot(&self) -> &[Entry] {
        &self.entries
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Why the stored collection was replaced by the seed, if it was
    pub fn load_warning(&self) -> Option<&VocabError> {
        self.load_warning.as_ref()
    }

    pub fn take_load_warning(&mut self) -> Option<VocabError> {
        self.load_warning.take()
    }

    pub fn adapter(&self) -> &P {
        &self.adapter
    }

    /// End the store's lifetime and hand back the adapter
    pub fn dispose(self) -> P {
        tracing::debug!(count = self.entries.len(), "entry store disposed");
        self.adapter
    }
}
