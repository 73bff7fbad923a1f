//! Output formatting utilities

use crate::domain::DaySection;

/// Shown when a view has no sections
pub const EMPTY_VIEW: &str = "No words saved yet";

/// Format a grouped view: one header per day, then its words in order
pub fn format_grouped_view(sections: &[DaySection<'_>], date_format: &str) -> String {
    if sections.is_empty() {
        return EMPTY_VIEW.to_string();
    }

    let mut output = String::new();
    for (i, section) in sections.iter().enumerate() {
        if i > 0 {
            output.push('\n');
        }
        output.push_str(&format!("── {} ──\n", section.date.format(date_format)));

        let width = section
            .entries
            .iter()
            .map(|e| e.key.chars().count())
            .max()
            .unwrap_or(0);
        for entry in &section.entries {
            output.push_str(&format!(
                "  {:<width$}  {}\n",
                entry.key,
                entry.value,
                width = width
            ));
        }
    }
    output
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::Entry;
    use chrono::NaiveDate;

    fn date(d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(2024, 1, d).unwrap()
    }

    #[test]
    fn test_format_empty_view() {
        assert_eq!(format_grouped_view(&[], "%Y-%m-%d"), EMPTY_VIEW);
    }

    #[test]
    fn test_format_sections_in_given_order() {
        let a = Entry::new("ephemeral", "fleeting", date(10));
        let b = Entry::new("ad hoc", "for this purpose", date(10));
        let c = Entry::new("laconic", "brief", date(9));
        let sections = vec![
            DaySection {
                date: date(10),
                entries: vec![&a, &b],
            },
            DaySection {
                date: date(9),
                entries: vec![&c],
            },
        ];

        let output = format_grouped_view(&sections, "%a %b %d %Y");

        assert_eq!(
            output,
            "── Wed Jan 10 2024 ──\n\
             \x20 ephemeral  fleeting\n\
             \x20 ad hoc     for this purpose\n\
             \n\
             ── Tue Jan 09 2024 ──\n\
             \x20 laconic  brief\n"
        );
    }
}
