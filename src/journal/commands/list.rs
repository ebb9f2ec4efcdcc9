use crate::commands::CmdResult;
use crate::store::IndexStore;

use super::helpers::indexed_entries;

pub fn run<S: IndexStore>(store: &S) -> CmdResult {
    CmdResult::default().with_listed_entries(indexed_entries(store))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::store::memory::fixtures::store_with;
    use crate::store::memory::InMemoryStore;

    #[test]
    fn lists_in_stored_order() {
        let store = store_with(&["A", "B"]);
        let result = run(&store);
        assert_eq!(result.listed_entries.len(), 2);
        assert_eq!(result.listed_entries[0].position, 1);
        assert_eq!(result.listed_entries[0].entry.title, "A");
        assert_eq!(result.listed_entries[1].position, 2);
        assert_eq!(result.listed_entries[1].entry.title, "B");
    }

    #[test]
    fn empty_store_lists_nothing() {
        let store = InMemoryStore::new();
        assert!(run(&store).listed_entries.is_empty());
    }
}
