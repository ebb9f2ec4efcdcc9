use crate::api::JournalApi;
use crate::config::JournalConfig;
use crate::error::{JournalError, Result};
use crate::store::fs::FileStore;
use directories::ProjectDirs;
use log::{debug, warn};
use std::path::{Path, PathBuf};

pub struct JournalContext {
    pub api: JournalApi<FileStore>,
    pub config: JournalConfig,
    pub dir: PathBuf,
}

/// Platform data directory for the journal, e.g.
/// `~/.local/share/journal/entries` on Linux.
pub fn default_journal_dir() -> Result<PathBuf> {
    let proj_dirs = ProjectDirs::from("com", "journal", "journal").ok_or_else(|| {
        JournalError::Store("Could not determine a data directory; use --dir".to_string())
    })?;
    Ok(proj_dirs.data_dir().join("entries"))
}

/// Resolve the journal directory, create it, load its config and build the API.
///
/// `dir` is the user's explicit choice (flag or environment); without it the
/// platform default is used.
pub fn initialize(dir: Option<&Path>) -> Result<JournalContext> {
    let dir = match dir {
        Some(d) => d.to_path_buf(),
        None => default_journal_dir()?,
    };
    debug!("journal directory: {}", dir.display());

    let config = JournalConfig::load(&dir).unwrap_or_else(|e| {
        warn!("ignoring unreadable config in {}: {}", dir.display(), e);
        JournalConfig::default()
    });

    let store = FileStore::new(dir.clone()).with_file_ext(config.file_ext());
    store.init()?;

    Ok(JournalContext {
        api: JournalApi::new(store),
        config,
        dir,
    })
}
