use super::Category;
use std::fmt;
use time::Date;
use time::macros::format_description;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Task {
    pub category: Category,
    pub title: String,
    pub due_date: Date,
}

impl Task {
    pub fn new<T: Into<String>>(category: Category, title: T, due_date: Date) -> Self {
        Self {
            category,
            title: title.into(),
            due_date,
        }
    }
}

impl fmt::Display for Task {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} | {} | Due: {}",
            self.category,
            self.title,
            format_date(self.due_date)
        )
    }
}

/// Parses `yyyy-MM-dd`. Surrounding whitespace is ignored.
pub fn parse_date(text: &str) -> Option<Date> {
    Date::parse(text.trim(), format_description!("[year]-[month]-[day]")).ok()
}

pub fn format_date(date: Date) -> String {
    format!(
        "{:04}-{:02}-{:02}",
        date.year(),
        u8::from(date.month()),
        date.day()
    )
}

#[cfg(test)]
mod tests {
    use super::{Task, format_date, parse_date};
    use crate::model::Category;
    use time::macros::date;

    #[test]
    fn parse_date_accepts_iso_calendar_dates() {
        assert_eq!(parse_date("2025-06-04"), Some(date!(2025 - 06 - 04)));
        assert_eq!(parse_date(" 2024-02-29 "), Some(date!(2024 - 02 - 29)));
    }

    #[test]
    fn parse_date_rejects_malformed_and_impossible_dates() {
        assert_eq!(parse_date("not-a-date"), None);
        assert_eq!(parse_date("2025-02-30"), None);
        assert_eq!(parse_date("2025-13-01"), None);
        assert_eq!(parse_date("04/06/2025"), None);
        assert_eq!(parse_date(""), None);
    }

    #[test]
    fn format_date_pads_components() {
        assert_eq!(format_date(date!(2025 - 06 - 04)), "2025-06-04");
        assert_eq!(format_date(date!(2026 - 10 - 14)), "2026-10-14");
    }

    #[test]
    fn display_matches_list_row_format() {
        let task = Task::new(Category::Study, "Read", date!(2099 - 01 - 01));
        assert_eq!(task.to_string(), "Study | Read | Due: 2099-01-01");
    }
}
