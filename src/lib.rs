//! vocab - Personal vocabulary journal
//!
//! Records words and their meanings on particular days, persists the whole
//! collection to a single slot, and derives day-grouped views (one day, or
//! all history) with the newest day first.

pub mod application;
pub mod cli;
pub mod domain;
pub mod error;
pub mod infrastructure;

pub use error::VocabError;
