//! Date references accepted on the command line

use crate::error::{Result, VocabError};
use chrono::{Datelike, Duration, NaiveDate, Weekday};
use std::str::FromStr;

/// A day named relative to today, or an explicit calendar date
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DateReference {
    Today,
    Yesterday,
    Tomorrow,
    /// Most recent occurrence of the weekday, today included
    Weekday(Weekday),
    /// Occurrence of the weekday strictly before today
    LastWeekday(Weekday),
    /// Explicit `YYYY-MM-DD` date
    Specific(NaiveDate),
}

impl DateReference {
    /// Parse a date reference
    pub fn parse(input: &str) -> Result<Self> {
        let normalized = input.trim().to_lowercase();

        match normalized.as_str() {
            "today" | "now" => Ok(DateReference::Today),
            "yesterday" => Ok(DateReference::Yesterday),
            "tomorrow" => Ok(DateReference::Tomorrow),
            _ => {
                if let Some(day) = normalized.strip_prefix("last ") {
                    return Self::parse_weekday(day)
                        .map(DateReference::LastWeekday)
                        .ok_or_else(|| VocabError::InvalidDate(input.to_string()));
                }
                if let Some(weekday) = Self::parse_weekday(&normalized) {
                    return Ok(DateReference::Weekday(weekday));
                }
                NaiveDate::parse_from_str(&normalized, "%Y-%m-%d")
                    .map(DateReference::Specific)
                    .map_err(|_| VocabError::InvalidDate(input.to_string()))
            }
        }
    }

    /// Full weekday names only; chrono alone would also take "mon", "tue", ...
    fn parse_weekday(day: &str) -> Option<Weekday> {
        if !day.ends_with("day") {
            return None;
        }
        Weekday::from_str(day).ok()
    }

    /// Resolve to a concrete date relative to `today`
    pub fn resolve(&self, today: NaiveDate) -> NaiveDate {
        match self {
            DateReference::Today => today,
            DateReference::Yesterday => today - Duration::days(1),
            DateReference::Tomorrow => today + Duration::days(1),
            DateReference::Weekday(target) => today - Duration::days(days_back(today, *target)),
            DateReference::LastWeekday(target) => {
                let back = match days_back(today, *target) {
                    0 => 7,
                    n => n,
                };
                today - Duration::days(back)
            }
            DateReference::Specific(date) => *date,
        }
    }
}

/// Days from the most recent `target` (today included) up to `today`
fn days_back(today: NaiveDate, target: Weekday) -> i64 {
    let current = today.weekday().num_days_from_monday();
    let wanted = target.num_days_from_monday();
    i64::from((current + 7 - wanted) % 7)
}

/// Parse and resolve in one step
pub fn resolve_date(input: &str, today: NaiveDate) -> Result<NaiveDate> {
    DateReference::parse(input).map(|r| r.resolve(today))
}
