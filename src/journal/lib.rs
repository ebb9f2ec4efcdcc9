//! # Journal Architecture
//!
//! A plain-text journal: every entry body is its own file, and a JSON index
//! next to them records each entry's title, timestamp and filename in display
//! order.
//!
//! The crate is a library with an interactive CLI on top.
//!
//! ```text
//! ┌─────────────────────────────────────────────────────────────┐
//! │  CLI Layer (cli/, wired by main.rs)                         │
//! │  - Menu loop, prompts, printing                             │
//! │  - The ONLY place that knows about stdin/stdout/exit codes  │
//! └─────────────────────────────────────────────────────────────┘
//!                              │
//!                              ▼
//! ┌─────────────────────────────────────────────────────────────┐
//! │  API Layer (api.rs)                                         │
//! │  - Thin facade over commands                                │
//! └─────────────────────────────────────────────────────────────┘
//!                              │
//!                              ▼
//! ┌─────────────────────────────────────────────────────────────┐
//! │  Command Layer (commands/*.rs)                              │
//! │  - create / list / view / delete                            │
//! │  - Selection parsing, filename allocation, write ordering   │
//! └─────────────────────────────────────────────────────────────┘
//!                              │
//!                              ▼
//! ┌─────────────────────────────────────────────────────────────┐
//! │  Storage Layer (store/)                                     │
//! │  - IndexStore + EntryRepository traits                      │
//! │  - FileStore (production), InMemoryStore (testing)          │
//! └─────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Positions
//!
//! Entries have no ids. They are addressed by their 1-based position in the
//! index, which is also creation order.
//!
//! ## Error handling
//!
//! Everything below the CLI returns [`error::Result`]. User mistakes (empty
//! title, bad selection) are error variants too; the menu loop prints them and
//! carries on.
//!
//! ## Module Overview
//!
//! - [`api`]: The API facade
//! - [`commands`]: Business logic for each operation
//! - [`store`]: Storage abstraction and implementations
//! - [`model`]: `IndexEntry`, timestamps
//! - [`config`]: Per-journal configuration
//! - [`init`]: Directory resolution and startup
//! - [`error`]: Error types

pub mod api;
pub mod commands;
pub mod config;
pub mod error;
pub mod init;
pub mod model;
pub mod store;
