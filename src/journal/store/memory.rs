use super::{EntryRepository, IndexStore};
use crate::error::Result;
use crate::model::IndexEntry;
use std::collections::HashMap;

/// In-memory storage for testing and development.
/// Does NOT persist data.
#[derive(Default)]
pub struct InMemoryStore {
    index: Vec<IndexEntry>,
    files: HashMap<String, String>,
}

impl InMemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of entry files currently held, whether indexed or not.
    pub fn file_count(&self) -> usize {
        self.files.len()
    }
}

impl IndexStore for InMemoryStore {
    fn load_index(&self) -> Vec<IndexEntry> {
        self.index.clone()
    }

    fn save_index(&mut self, entries: &[IndexEntry]) -> Result<()> {
        self.index = entries.to_vec();
        Ok(())
    }
}

impl EntryRepository for InMemoryStore {
    fn write_entry(&mut self, filename: &str, content: &str) -> Result<()> {
        self.files.insert(filename.to_string(), content.to_string());
        Ok(())
    }

    fn read_entry(&self, filename: &str) -> Result<Option<String>> {
        Ok(self.files.get(filename).cloned())
    }

    fn delete_entry(&mut self, filename: &str) -> Result<()> {
        self.files.remove(filename);
        Ok(())
    }

    fn entry_exists(&self, filename: &str) -> bool {
        self.files.contains_key(filename)
    }

    fn file_ext(&self) -> &str {
        ".txt"
    }
}

// --- Test Fixtures ---

#[cfg(any(test, feature = "test_utils"))]
pub mod fixtures {
    use super::*;

    /// A store pre-populated with `titles`, one second apart, each body
    /// being `"body of <title>"`.
    pub fn store_with(titles: &[&str]) -> InMemoryStore {
        let mut store = InMemoryStore::new();
        let mut index = Vec::new();
        for (i, title) in titles.iter().enumerate() {
            let timestamp = format!("2024-01-01_00-00-{:02}", i);
            let filename = format!("{}.txt", timestamp);
            store
                .files
                .insert(filename.clone(), format!("body of {}", title));
            index.push(IndexEntry::new(*title, timestamp, filename));
        }
        store.index = index;
        store
    }
}
