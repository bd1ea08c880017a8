//! Read-only access to the desktop app's note files
//!
//! The desktop app keeps every note in a single `notes.json` array and every
//! folder in `folders.json`. The search engine only needs an in-memory list,
//! so this module loads those files and never writes them.

pub mod paths;

use std::fs;
use std::path::{Path, PathBuf};

use serde::de::DeserializeOwned;
use tracing::debug;

use crate::config::SearchConfig;
use crate::error::{NotecapError, Result};
use crate::note::{Folder, Note};
use paths::{FOLDERS_FILE, NOTES_FILE};

/// Anything that can supply the notes to search
pub trait NoteSource {
    /// Load every note
    fn load_notes(&self) -> Result<Vec<Note>>;

    /// Load every folder
    fn load_folders(&self) -> Result<Vec<Folder>>;
}

/// Note files in a data directory
#[derive(Debug)]
pub struct Store {
    root: PathBuf,
    config: SearchConfig,
}

impl Store {
    /// Open the data directory at `path`, loading `search.toml` if present
    #[tracing::instrument(skip(path), fields(path = %path.display()))]
    pub fn open(path: &Path) -> Result<Self> {
        Self::open_with_config(path, None)
    }

    /// Open the data directory, reading configuration from `config_path` when given
    #[tracing::instrument(skip(path, config_path), fields(path = %path.display()))]
    pub fn open_with_config(path: &Path, config_path: Option<&Path>) -> Result<Self> {
        if !path.is_dir() {
            return Err(NotecapError::DataDirNotFound {
                path: path.to_path_buf(),
            });
        }

        let config = match config_path {
            Some(config_path) => SearchConfig::load(config_path)?,
            None => SearchConfig::load_or_default(path)?,
        };

        Ok(Store {
            root: path.to_path_buf(),
            config,
        })
    }

    /// Root path of the data directory
    pub fn root(&self) -> &Path {
        &self.root
    }

    /// Search configuration
    pub fn config(&self) -> &SearchConfig {
        &self.config
    }

    /// Find a note by id
    pub fn get_note(&self, id: &str) -> Result<Note> {
        self.load_notes()?
            .into_iter()
            .find(|n| n.id == id)
            .ok_or_else(|| NotecapError::NoteNotFound { id: id.to_string() })
    }
}

impl NoteSource for Store {
    fn load_notes(&self) -> Result<Vec<Note>> {
        let notes: Vec<Note> = read_json_array(&self.root.join(NOTES_FILE))?;
        debug!(count = notes.len(), "load_notes");
        Ok(notes)
    }

    fn load_folders(&self) -> Result<Vec<Folder>> {
        let folders: Vec<Folder> = read_json_array(&self.root.join(FOLDERS_FILE))?;
        debug!(count = folders.len(), "load_folders");
        Ok(folders)
    }
}

/// Read a JSON array file; a missing file is an empty list
fn read_json_array<T: DeserializeOwned>(path: &Path) -> Result<Vec<T>> {
    let content = match fs::read_to_string(path) {
        Ok(content) => content,
        Err(e) if e.kind() == std::io::ErrorKind::NotFound => return Ok(Vec::new()),
        Err(e) => return Err(NotecapError::io_operation("read", path.display(), e)),
    };

    if content.trim().is_empty() {
        return Ok(Vec::new());
    }

    serde_json::from_str(&content).map_err(|e| NotecapError::InvalidNotesFile {
        path: path.to_path_buf(),
        reason: e.to_string(),
    })
}
