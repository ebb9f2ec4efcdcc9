use crate::commands::{CmdMessage, CmdResult};
use crate::error::{JournalError, Result};
use crate::model::{self, IndexEntry};
use crate::store::JournalStore;
use chrono::NaiveDateTime;

use super::helpers::unique_filename;

pub fn run<S: JournalStore>(store: &mut S, title: &str, content: &str) -> Result<CmdResult> {
    run_at(store, title, content, model::now())
}

/// Create an entry stamped with `at` instead of the current time.
pub fn run_at<S: JournalStore>(
    store: &mut S,
    title: &str,
    content: &str,
    at: NaiveDateTime,
) -> Result<CmdResult> {
    let title = title.trim();
    if title.is_empty() {
        return Err(JournalError::EmptyTitle);
    }

    let timestamp = model::format_timestamp(at);
    let mut entries = store.load_index();
    let filename = unique_filename(&*store, &entries, &timestamp);

    // File first: the index must never point at something not yet written.
    store.write_entry(&filename, content)?;

    let entry = IndexEntry::new(title, timestamp, filename);
    entries.push(entry.clone());
    store.save_index(&entries)?;

    let mut result = CmdResult::default();
    result.add_message(CmdMessage::success(format!(
        "Entry saved as: {}",
        entry.filename
    )));
    result.affected_entries.push(entry);
    Ok(result)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::store::memory::InMemoryStore;
    use crate::store::{EntryRepository, IndexStore};
    use chrono::NaiveDate;

    fn at(s: u32) -> NaiveDateTime {
        NaiveDate::from_ymd_opt(2024, 3, 9)
            .unwrap()
            .and_hms_opt(18, 5, s)
            .unwrap()
    }

    #[test]
    fn creates_file_and_index_entry() {
        let mut store = InMemoryStore::new();
        let result = run_at(&mut store, "Test", "hello\nworld", at(42)).unwrap();

        let index = store.load_index();
        assert_eq!(
            index,
            vec![IndexEntry::new(
                "Test",
                "2024-03-09_18-05-42",
                "2024-03-09_18-05-42.txt"
            )]
        );
        assert_eq!(
            store.read_entry("2024-03-09_18-05-42.txt").unwrap(),
            Some("hello\nworld".into())
        );
        assert_eq!(result.affected_entries, index);
        assert_eq!(
            result.messages[0].content,
            "Entry saved as: 2024-03-09_18-05-42.txt"
        );
    }

    #[test]
    fn trims_title() {
        let mut store = InMemoryStore::new();
        run_at(&mut store, "  Morning  ", "", at(0)).unwrap();
        assert_eq!(store.load_index()[0].title, "Morning");
    }

    #[test]
    fn empty_title_writes_nothing() {
        let mut store = InMemoryStore::new();
        for title in ["", "   ", "\t"] {
            let err = run_at(&mut store, title, "body", at(0)).unwrap_err();
            assert!(matches!(err, JournalError::EmptyTitle));
        }
        assert!(store.load_index().is_empty());
        assert_eq!(store.file_count(), 0);
    }

    #[test]
    fn index_grows_in_creation_order() {
        let mut store = InMemoryStore::new();
        for (i, title) in ["one", "two", "three"].iter().enumerate() {
            run_at(&mut store, title, "", at(i as u32)).unwrap();
        }
        run_at(&mut store, "", "rejected", at(10)).unwrap_err();

        let titles: Vec<_> = store.load_index().into_iter().map(|e| e.title).collect();
        assert_eq!(titles, vec!["one", "two", "three"]);
    }

    #[test]
    fn same_second_gets_distinct_files() {
        let mut store = InMemoryStore::new();
        run_at(&mut store, "first", "1", at(7)).unwrap();
        run_at(&mut store, "second", "2", at(7)).unwrap();

        let index = store.load_index();
        assert_eq!(index[0].filename, "2024-03-09_18-05-07.txt");
        assert_eq!(index[1].filename, "2024-03-09_18-05-07-2.txt");
        assert_eq!(index[1].timestamp, "2024-03-09_18-05-07");
        assert_eq!(
            store.read_entry(&index[0].filename).unwrap(),
            Some("1".into())
        );
        assert_eq!(
            store.read_entry(&index[1].filename).unwrap(),
            Some("2".into())
        );
    }

    #[test]
    fn run_uses_current_time() {
        let mut store = InMemoryStore::new();
        run(&mut store, "now", "").unwrap();
        let entry = &store.load_index()[0];
        assert!(entry.created_at().is_some());
        assert!(entry.filename.starts_with(&entry.timestamp));
    }
}
