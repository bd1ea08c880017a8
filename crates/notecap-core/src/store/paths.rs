//! Data directory layout

use std::path::PathBuf;

/// Application directory name under the platform config directory
pub const APP_DIR_NAME: &str = "NotesDesktopApp";

/// Notes file inside the data directory
pub const NOTES_FILE: &str = "notes.json";

/// Folders file inside the data directory
pub const FOLDERS_FILE: &str = "folders.json";

/// Platform default data directory used by the desktop app
///
/// `~/.config/NotesDesktopApp` on Linux,
/// `~/Library/Application Support/NotesDesktopApp` on macOS and
/// `%APPDATA%\NotesDesktopApp` on Windows.
pub fn default_data_dir() -> Option<PathBuf> {
    dirs::config_dir().map(|dir| dir.join(APP_DIR_NAME))
}
