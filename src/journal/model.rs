use chrono::{Local, NaiveDateTime, Timelike};
use serde::{Deserialize, Serialize};

/// `strftime` layout of entry timestamps, e.g. `2024-03-09_18-05-42`.
pub const TIMESTAMP_FORMAT: &str = "%Y-%m-%d_%H-%M-%S";

/// One record of the index document.
///
/// The title is kept here so listing never has to open entry files.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct IndexEntry {
    pub title: String,
    pub timestamp: String,
    pub filename: String,
}

impl IndexEntry {
    pub fn new(
        title: impl Into<String>,
        timestamp: impl Into<String>,
        filename: impl Into<String>,
    ) -> Self {
        Self {
            title: title.into(),
            timestamp: timestamp.into(),
            filename: filename.into(),
        }
    }

    /// Parses the timestamp back into a local date-time, if it is well formed.
    ///
    /// Index documents may be edited by hand, so this is not guaranteed.
    pub fn created_at(&self) -> Option<NaiveDateTime> {
        parse_timestamp(&self.timestamp)
    }
}

/// An entry together with its body, as returned by `view`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Entry {
    pub meta: IndexEntry,
    pub content: String,
}

/// An index entry paired with its 1-based display position.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DisplayEntry {
    pub position: usize,
    pub entry: IndexEntry,
}

pub fn format_timestamp(at: NaiveDateTime) -> String {
    at.format(TIMESTAMP_FORMAT).to_string()
}

pub fn parse_timestamp(s: &str) -> Option<NaiveDateTime> {
    NaiveDateTime::parse_from_str(s, TIMESTAMP_FORMAT).ok()
}

/// Current local wall-clock time, truncated to whole seconds.
pub fn now() -> NaiveDateTime {
    let now = Local::now().naive_local();
    now.with_nanosecond(0).unwrap_or(now)
}

/// Joins body lines the way they are written to disk: `\n` separated,
/// no trailing newline.
pub fn join_body<I, S>(lines: I) -> String
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    lines
        .into_iter()
        .map(|l| l.as_ref().to_string())
        .collect::<Vec<_>>()
        .join("\n")
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;

    fn at(h: u32, m: u32, s: u32) -> NaiveDateTime {
        NaiveDate::from_ymd_opt(2024, 3, 9)
            .unwrap()
            .and_hms_opt(h, m, s)
            .unwrap()
    }

    #[test]
    fn formats_with_second_resolution() {
        assert_eq!(format_timestamp(at(18, 5, 42)), "2024-03-09_18-05-42");
    }

    #[test]
    fn parses_formatted_timestamp() {
        let entry = IndexEntry::new("T", "2024-03-09_18-05-42", "2024-03-09_18-05-42.txt");
        assert_eq!(entry.created_at(), Some(at(18, 5, 42)));
    }

    #[test]
    fn hand_edited_timestamp_does_not_parse() {
        let entry = IndexEntry::new("T", "yesterday", "x.txt");
        assert_eq!(entry.created_at(), None);
    }

    #[test]
    fn now_has_no_subsecond_part() {
        assert_eq!(now().nanosecond(), 0);
    }

    #[test]
    fn join_body_has_no_trailing_newline() {
        assert_eq!(join_body(["hello", "world"]), "hello\nworld");
        assert_eq!(join_body(Vec::<String>::new()), "");
    }

    #[test]
    fn serializes_fields_in_document_order() {
        let entry = IndexEntry::new("Día", "2024-03-09_18-05-42", "2024-03-09_18-05-42.txt");
        let json = serde_json::to_string(&entry).unwrap();
        assert_eq!(
            json,
            r#"{"title":"Día","timestamp":"2024-03-09_18-05-42","filename":"2024-03-09_18-05-42.txt"}"#
        );
    }
}
