use crate::commands::{CmdMessage, CmdResult};
use crate::error::Result;
use crate::model::Entry;
use crate::store::JournalStore;

use super::helpers::parse_position;

/// View the entry at the 1-based position typed in `selection`.
pub fn run<S: JournalStore>(store: &S, selection: &str) -> Result<CmdResult> {
    let entries = store.load_index();
    let idx = parse_position(selection, entries.len())?;
    let meta = entries[idx].clone();

    let mut result = CmdResult::default();
    match store.read_entry(&meta.filename)? {
        Some(content) => {
            result = result.with_viewed_entries(vec![Entry { meta, content }]);
        }
        None => {
            log::warn!("{} is indexed but missing on disk", meta.filename);
            result.add_message(CmdMessage::warning("File missing on disk."));
        }
    }
    Ok(result)
}
