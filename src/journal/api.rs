//! # API Facade
//!
//! A thin facade over the command layer and the single entry point for the
//! journal's operations, whatever UI drives them.
//!
//! The API dispatches to `commands/*.rs` and returns structured
//! `Result<CmdResult>` values. It never prints and never decides how errors
//! are shown; that is the caller's job.
//!
//! `JournalApi<S: JournalStore>` is generic over the storage backend:
//! - Production: `JournalApi<FileStore>`
//! - Testing: `JournalApi<InMemoryStore>`

use crate::commands;
use crate::error::Result;
use crate::store::JournalStore;

pub struct JournalApi<S: JournalStore> {
    store: S,
}

impl<S: JournalStore> JournalApi<S> {
    pub fn new(store: S) -> Self {
        Self { store }
    }

    pub fn create_entry(&mut self, title: &str, content: &str) -> Result<CmdResult> {
        commands::create::run(&mut self.store, title, content)
    }

    pub fn list_entries(&self) -> CmdResult {
        commands::list::run(&self.store)
    }

    pub fn view_entry(&self, selection: &str) -> Result<CmdResult> {
        commands::view::run(&self.store, selection)
    }

    pub fn delete_entry(&mut self, selection: &str) -> Result<CmdResult> {
        commands::delete::run(&mut self.store, selection)
    }

    pub fn store(&self) -> &S {
        &self.store
    }

    pub fn into_store(self) -> S {
        self.store
    }
}

pub use commands::{CmdMessage, CmdResult, MessageLevel};
