use crate::error::{JournalError, Result};
use crate::model::{DisplayEntry, IndexEntry};
use crate::store::{EntryRepository, IndexStore};

pub fn indexed_entries<S: IndexStore>(store: &S) -> Vec<DisplayEntry> {
    store
        .load_index()
        .into_iter()
        .enumerate()
        .map(|(i, entry)| DisplayEntry {
            position: i + 1,
            entry,
        })
        .collect()
}

/// Turn a 1-based position typed by the user into a 0-based index into a
/// sequence of `count` entries.
pub fn parse_position(input: &str, count: usize) -> Result<usize> {
    let n: i64 = input
        .trim()
        .parse()
        .map_err(|_| JournalError::InvalidInput(input.to_string()))?;

    if n < 1 || n as u64 > count as u64 {
        return Err(JournalError::InvalidChoice(n));
    }
    Ok((n - 1) as usize)
}

/// Filename for an entry created at `timestamp`.
///
/// Normally `<timestamp><ext>`. If that name is already on disk or referenced
/// by the index, a numeric suffix is added: `<timestamp>-2<ext>`, `-3`, ...
pub fn unique_filename<S: EntryRepository>(
    store: &S,
    entries: &[IndexEntry],
    timestamp: &str,
) -> String {
    let ext = store.file_ext();
    let taken = |name: &str| store.entry_exists(name) || entries.iter().any(|e| e.filename == name);

    let mut candidate = format!("{}{}", timestamp, ext);
    let mut n = 2;
    while taken(&candidate) {
        candidate = format!("{}-{}{}", timestamp, n, ext);
        n += 1;
    }
    candidate
}
