//! Helper functions shared across commands

use std::collections::HashMap;

use chrono::{DateTime, Utc};
use notecap_core::note::{Folder, Note};

/// Render an epoch-millisecond timestamp as a UTC date and time
pub fn format_timestamp(ms: i64) -> String {
    DateTime::<Utc>::from_timestamp_millis(ms)
        .map(|dt| dt.format("%Y-%m-%d %H:%M").to_string())
        .unwrap_or_else(|| "-".to_string())
}

/// Render an epoch-millisecond timestamp as RFC 3339
pub fn format_timestamp_rfc3339(ms: i64) -> Option<String> {
    DateTime::<Utc>::from_timestamp_millis(ms).map(|dt| dt.to_rfc3339())
}

/// Current time in epoch milliseconds
pub fn now_ms() -> i64 {
    Utc::now().timestamp_millis()
}

/// Title for display, with a placeholder for untitled notes
pub fn display_title(note: &Note) -> &str {
    if note.title.trim().is_empty() {
        "(untitled)"
    } else {
        &note.title
    }
}

/// Map folder ids to folder names
pub fn folder_names(folders: &[Folder]) -> HashMap<&str, &str> {
    folders
        .iter()
        .map(|f| (f.id.as_str(), f.name.as_str()))
        .collect()
}

/// Comma-separated tags, or `-` when there are none
pub fn tags_csv(tags: &[String]) -> String {
    if tags.is_empty() {
        "-".to_string()
    } else {
        tags.join(",")
    }
}
