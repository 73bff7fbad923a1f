//! View mode and entry selection

use crate::domain::Entry;
use chrono::NaiveDate;

/// Which entries a view shows
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ViewMode {
    /// Only entries recorded on the reference date
    #[default]
    SingleDate,
    /// Every entry, regardless of date
    All,
}

impl ViewMode {
    pub fn from_show_all(show_all: bool) -> Self {
        if show_all {
            ViewMode::All
        } else {
            ViewMode::SingleDate
        }
    }
}

/// Select the entries visible in `mode`, keeping their input order.
///
/// `reference` is ignored in `ViewMode::All`.
pub fn select(entries: &[Entry], mode: ViewMode, reference: NaiveDate) -> Vec<&Entry> {
    match mode {
        ViewMode::All => entries.iter().collect(),
        ViewMode::SingleDate => entries
            .iter()
            .filter(|e| e.created_at == reference)
            .collect(),
    }
}
