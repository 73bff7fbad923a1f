//! Domain layer - Entries, selection and grouping

pub mod date_ref;
pub mod entry;
pub mod grouping;
pub mod view;

pub use date_ref::{resolve_date, DateReference};
pub use entry::{validate, EmptyField, Entry};
pub use grouping::{group, grouped_view, ordered_dates, DaySection, Grouping};
pub use view::{select, ViewMode};
