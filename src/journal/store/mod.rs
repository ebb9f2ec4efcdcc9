//! # Storage Layer
//!
//! A journal is persisted as two cooperating pieces:
//!
//! - the **index**: one JSON document listing every entry's title, timestamp
//!   and filename, in display order;
//! - the **entry repository**: one plain-text file per entry body.
//!
//! They are separate traits, [`IndexStore`] and [`EntryRepository`], so the
//! commands can be written against either half. Anything that implements both
//! is a [`JournalStore`].
//!
//! ## Implementations
//!
//! - [`fs::FileStore`]: production storage in a single directory
//! - [`memory::InMemoryStore`]: no persistence, for tests
//!
//! ## Storage Format
//!
//! ```text
//! <journal dir>/
//! ├── index.json                  # [{title, timestamp, filename}, ...]
//! ├── config.json                 # optional, see config.rs
//! └── 2024-03-09_18-05-42.txt     # one file per entry
//! ```
//!
//! The index is always rewritten whole. Index and files are not updated
//! transactionally; commands order their writes so a crash can only leave an
//! orphaned file behind, never an index row without a file.

use crate::error::Result;
use crate::model::IndexEntry;

pub mod fs;
pub mod memory;

pub trait IndexStore {
    /// Load the index. A missing or unparsable document is an empty index.
    fn load_index(&self) -> Vec<IndexEntry>;

    /// Replace the persisted index with `entries`.
    fn save_index(&mut self, entries: &[IndexEntry]) -> Result<()>;
}

pub trait EntryRepository {
    /// Write raw entry text, creating or overwriting the file.
    fn write_entry(&mut self, filename: &str, content: &str) -> Result<()>;

    /// Read entry text.
    /// Returns Ok(None) if the file does not exist.
    /// Returns Err only on actual I/O errors (permissions, disk failure).
    fn read_entry(&self, filename: &str) -> Result<Option<String>>;

    /// Delete an entry file. Deleting a missing file is not an error.
    fn delete_entry(&mut self, filename: &str) -> Result<()>;

    fn entry_exists(&self, filename: &str) -> bool;

    /// Extension (with leading dot) for new entry files.
    fn file_ext(&self) -> &str;
}

/// A complete journal backend.
pub trait JournalStore: IndexStore + EntryRepository {}

impl<T: IndexStore + EntryRepository> JournalStore for T {}
