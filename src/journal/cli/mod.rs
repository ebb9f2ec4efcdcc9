//! # CLI Layer
//!
//! One possible UI for the journal: an interactive numbered menu.
//!
//! - `setup`: startup options (clap)
//! - `commands`: the menu loop and one handler per menu item
//! - `prompt`: reading answers and multi-line bodies from input
//! - `print`: everything written to the terminal
//!
//! The session is generic over its input, output and store so tests can drive
//! it with in-memory buffers.

mod commands;
mod print;
mod prompt;
mod setup;

pub use commands::run;
