//! Journal session: the operations a front end drives

use crate::application::store::{AddOutcome, EntryStore};
use crate::domain::{grouped_view, DaySection, ViewMode};
use crate::error::Result;
use crate::infrastructure::PersistenceAdapter;
use chrono::NaiveDate;

/// Current view state over an entry store.
///
/// Holds no derived data; `grouped_view` recomputes from the store every call.
#[derive(Debug)]
pub struct JournalSession<'s, P: PersistenceAdapter> {
    store: &'s mut EntryStore<P>,
    view_date: NaiveDate,
    show_all: bool,
}

impl<'s, P: PersistenceAdapter> JournalSession<'s, P> {
    /// Session viewing only `view_date`
    pub fn new(store: &'s mut EntryStore<P>, view_date: NaiveDate) -> Self {
        JournalSession {
            store,
            view_date,
            show_all: false,
        }
    }

    /// Record a word on `date`
    pub fn submit_entry(&mut self, key: &str, value: &str, date: NaiveDate) -> Result<AddOutcome> {
        self.store.add(key, value, date)
    }

    /// Pick the day to view; leaves show-all mode
    pub fn set_view_date(&mut self, date: NaiveDate) {
        self.view_date = date;
        self.show_all = false;
    }

    pub fn set_show_all(&mut self, show_all: bool) {
        self.show_all = show_all;
    }

    pub fn view_date(&self) -> NaiveDate {
        self.view_date
    }

    pub fn view_mode(&self) -> ViewMode {
        ViewMode::from_show_all(self.show_all)
    }

    /// Sections to render, newest day first
    pub fn grouped_view(&self) -> Vec<DaySection<'_>> {
        grouped_view(self.store.snapshot(), self.view_mode(), self.view_date)
    }

    pub fn store(&self) -> &EntryStore<P> {
        self.store
    }
}
