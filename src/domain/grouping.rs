//! Grouping entries by day and ordering the days

use crate::domain::{select, Entry, ViewMode};
use chrono::NaiveDate;
use std::collections::BTreeMap;

/// Entries bucketed by the date they were recorded
pub type Grouping<'a> = BTreeMap<NaiveDate, Vec<&'a Entry>>;

/// One day of a grouped view
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DaySection<'a> {
    pub date: NaiveDate,
    pub entries: Vec<&'a Entry>,
}

/// Bucket entries by `created_at` in a single pass.
///
/// Each bucket keeps the order entries had in the input.
pub fn group<'a, I>(entries: I) -> Grouping<'a>
where
    I: IntoIterator<Item = &'a Entry>,
{
    let mut grouping = Grouping::new();
    for entry in entries {
        grouping.entry(entry.created_at).or_default().push(entry);
    }
    grouping
}

/// Dates present in `grouping`, newest first.
pub fn ordered_dates(grouping: &Grouping<'_>) -> Vec<NaiveDate> {
    grouping.keys().rev().copied().collect()
}

/// Select, group and order in one go: the sections a view renders, newest day first.
pub fn grouped_view(entries: &[Entry], mode: ViewMode, reference: NaiveDate) -> Vec<DaySection<'_>> {
    let mut grouping = group(select(entries, mode, reference));
    ordered_dates(&grouping)
        .into_iter()
        .map(|date| DaySection {
            date,
            entries: grouping.remove(&date).unwrap_or_default(),
        })
        .collect()
}
