use super::{EntryRepository, IndexStore};
use crate::error::{JournalError, Result};
use crate::model::IndexEntry;
use log::{debug, warn};
use std::fs;
use std::io::ErrorKind;
use std::path::{Path, PathBuf};
use uuid::Uuid;

pub const INDEX_FILENAME: &str = "index.json";

pub struct FileStore {
    root: PathBuf,
    file_ext: String,
}

impl FileStore {
    pub fn new(root: PathBuf) -> Self {
        Self {
            root,
            file_ext: ".txt".to_string(),
        }
    }

    pub fn with_file_ext(mut self, ext: &str) -> Self {
        if ext.starts_with('.') {
            self.file_ext = ext.to_string();
        } else {
            self.file_ext = format!(".{}", ext);
        }
        self
    }

    pub fn root(&self) -> &Path {
        &self.root
    }

    pub fn index_path(&self) -> PathBuf {
        self.root.join(INDEX_FILENAME)
    }

    /// Create the journal directory if needed. Nothing else creates it.
    pub fn init(&self) -> Result<()> {
        if !self.root.exists() {
            debug!("creating journal directory {}", self.root.display());
            fs::create_dir_all(&self.root).map_err(JournalError::Io)?;
        }
        Ok(())
    }

    /// Resolve an entry filename inside the journal directory.
    ///
    /// Filenames come from the index document, which can be edited by hand;
    /// anything that is not a bare file name is refused.
    pub fn entry_path(&self, filename: &str) -> Result<PathBuf> {
        let is_bare = Path::new(filename)
            .file_name()
            .is_some_and(|name| name == filename);
        if !is_bare {
            return Err(JournalError::Store(format!(
                "Invalid entry filename: {}",
                filename
            )));
        }
        Ok(self.root.join(filename))
    }

    /// Write to a temporary sibling then rename over the target.
    fn write_atomic(&self, target: &Path, content: &str) -> Result<()> {
        let tmp_file = self.root.join(format!(".journal-{}.tmp", Uuid::new_v4()));
        fs::write(&tmp_file, content).map_err(JournalError::Io)?;
        if let Err(e) = fs::rename(&tmp_file, target) {
            let _ = fs::remove_file(&tmp_file);
            return Err(JournalError::Io(e));
        }
        Ok(())
    }
}

impl IndexStore for FileStore {
    fn load_index(&self) -> Vec<IndexEntry> {
        let index_file = self.index_path();
        let content = match fs::read_to_string(&index_file) {
            Ok(content) => content,
            Err(e) if e.kind() == ErrorKind::NotFound => {
                debug!("no index at {}, starting empty", index_file.display());
                return Vec::new();
            }
            Err(e) => {
                warn!("could not read {}: {}", index_file.display(), e);
                return Vec::new();
            }
        };

        match serde_json::from_str::<Vec<IndexEntry>>(&content) {
            Ok(entries) => {
                debug!("loaded {} index entries", entries.len());
                entries
            }
            Err(e) => {
                warn!(
                    "index {} is not valid, treating as empty: {}",
                    index_file.display(),
                    e
                );
                Vec::new()
            }
        }
    }

    fn save_index(&mut self, entries: &[IndexEntry]) -> Result<()> {
        let content = serde_json::to_string_pretty(entries).map_err(JournalError::Serialization)?;
        self.write_atomic(&self.index_path(), &content)?;
        debug!("saved {} index entries", entries.len());
        Ok(())
    }
}

impl EntryRepository for FileStore {
    fn write_entry(&mut self, filename: &str, content: &str) -> Result<()> {
        let path = self.entry_path(filename)?;
        self.write_atomic(&path, content)?;
        debug!("wrote entry file {}", path.display());
        Ok(())
    }

    fn read_entry(&self, filename: &str) -> Result<Option<String>> {
        let path = self.entry_path(filename)?;
        match fs::read_to_string(&path) {
            Ok(content) => Ok(Some(content)),
            Err(e) if e.kind() == ErrorKind::NotFound => Ok(None),
            Err(e) => Err(JournalError::Io(e)),
        }
    }

    fn delete_entry(&mut self, filename: &str) -> Result<()> {
        let path = self.entry_path(filename)?;
        match fs::remove_file(&path) {
            Ok(()) => {
                debug!("deleted entry file {}", path.display());
                Ok(())
            }
            Err(e) if e.kind() == ErrorKind::NotFound => {
                debug!("entry file {} already gone", path.display());
                Ok(())
            }
            Err(e) => Err(JournalError::Io(e)),
        }
    }

    fn entry_exists(&self, filename: &str) -> bool {
        self.entry_path(filename)
            .map(|path| path.exists())
            .unwrap_or(false)
    }

    fn file_ext(&self) -> &str {
        &self.file_ext
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    fn setup() -> (TempDir, FileStore) {
        let dir = TempDir::new().unwrap();
        let store = FileStore::new(dir.path().join("journal"));
        store.init().unwrap();
        (dir, store)
    }

    fn sample() -> Vec<IndexEntry> {
        vec![
            IndexEntry::new("First", "2024-03-09_18-05-42", "2024-03-09_18-05-42.txt"),
            IndexEntry::new("Zweiter Tag ✓", "2024-03-10_07-00-00", "2024-03-10_07-00-00.txt"),
        ]
    }

    #[test]
    fn init_creates_directory() {
        let (_dir, store) = setup();
        assert!(store.root().is_dir());
        // idempotent
        store.init().unwrap();
    }

    #[test]
    fn missing_index_is_empty() {
        let (_dir, store) = setup();
        assert!(store.load_index().is_empty());
    }

    #[test]
    fn index_round_trips() {
        let (_dir, mut store) = setup();
        store.save_index(&sample()).unwrap();
        assert_eq!(store.load_index(), sample());
    }

    #[test]
    fn index_is_pretty_and_keeps_non_ascii() {
        let (_dir, mut store) = setup();
        store.save_index(&sample()).unwrap();

        let raw = fs::read_to_string(store.index_path()).unwrap();
        assert!(raw.contains("Zweiter Tag ✓"));
        assert!(raw.contains("\n  {"));
    }

    #[test]
    fn corrupt_index_is_empty() {
        let (_dir, store) = setup();
        fs::write(store.index_path(), "{ not json").unwrap();
        assert!(store.load_index().is_empty());
    }

    #[test]
    fn wrong_shape_index_is_empty() {
        let (_dir, store) = setup();
        fs::write(store.index_path(), r#"{"title": "not an array"}"#).unwrap();
        assert!(store.load_index().is_empty());

        fs::write(store.index_path(), r#"[{"title": "no filename"}]"#).unwrap();
        assert!(store.load_index().is_empty());
    }

    #[test]
    fn save_leaves_no_tmp_files() {
        let (_dir, mut store) = setup();
        store.save_index(&sample()).unwrap();
        store.write_entry("a.txt", "body").unwrap();

        for entry in fs::read_dir(store.root()).unwrap() {
            let path = entry.unwrap().path();
            let name = path.file_name().unwrap().to_str().unwrap();
            assert!(!name.ends_with(".tmp"), "Found leftover tmp file: {}", name);
        }
    }

    #[test]
    fn entry_content_io() {
        let (_dir, mut store) = setup();

        store.write_entry("a.txt", "Hello\nWorld").unwrap();
        assert!(store.entry_exists("a.txt"));
        assert_eq!(store.read_entry("a.txt").unwrap(), Some("Hello\nWorld".into()));

        // overwrite
        store.write_entry("a.txt", "again").unwrap();
        assert_eq!(store.read_entry("a.txt").unwrap(), Some("again".into()));

        store.delete_entry("a.txt").unwrap();
        assert!(!store.entry_exists("a.txt"));
        assert_eq!(store.read_entry("a.txt").unwrap(), None);
    }

    #[test]
    fn deleting_missing_entry_is_noop() {
        let (_dir, mut store) = setup();
        store.delete_entry("never-written.txt").unwrap();
    }

    #[test]
    fn rejects_filenames_outside_directory() {
        let (dir, mut store) = setup();
        let outside = dir.path().join("outside.txt");
        fs::write(&outside, "keep me").unwrap();

        assert!(store.read_entry("../outside.txt").is_err());
        assert!(store.delete_entry("../outside.txt").is_err());
        assert!(!store.entry_exists("../outside.txt"));
        assert!(outside.exists());
    }

    #[test]
    fn file_ext_is_normalized() {
        let store = FileStore::new(PathBuf::from("x")).with_file_ext("md");
        assert_eq!(store.file_ext(), ".md");
    }
}
