use crate::commands::{CmdMessage, CmdResult};
use crate::error::Result;
use crate::store::JournalStore;
use log::warn;

use super::helpers::parse_position;

/// Delete the entry at the 1-based position typed in `selection`.
///
/// The index is saved before the file is removed, so an interruption in
/// between leaves an orphaned file rather than an index row with no file.
pub fn run<S: JournalStore>(store: &mut S, selection: &str) -> Result<CmdResult> {
    let mut entries = store.load_index();
    let idx = parse_position(selection, entries.len())?;

    let entry = entries.remove(idx);
    store.save_index(&entries)?;

    let mut result = CmdResult::default();
    if let Err(e) = store.delete_entry(&entry.filename) {
        warn!("could not remove {}: {}", entry.filename, e);
        result.add_message(CmdMessage::warning(format!(
            "Could not remove {}: {}",
            entry.filename, e
        )));
    }

    result.add_message(CmdMessage::success(format!(
        "Deleted entry: {}",
        entry.title
    )));
    result.affected_entries.push(entry);
    Ok(result)
}
