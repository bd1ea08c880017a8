//! Note and folder records
//!
//! These mirror the records the capture app writes to `notes.json` and
//! `folders.json`. The search engine only ever borrows them.

use serde::{Deserialize, Serialize};

/// Provenance recorded by the browser extension when a page is captured
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CaptureMetadata {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub source: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub user_agent: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub original_title: Option<String>,
}

/// A captured note
///
/// Missing `title`, `content` and `tags` deserialize as empty so that
/// hand-edited or older records remain searchable.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Note {
    /// Opaque unique identifier
    pub id: String,
    #[serde(default)]
    pub title: String,
    /// Document body, may contain markdown
    #[serde(default)]
    pub content: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub folder_id: Option<String>,
    #[serde(default)]
    pub tags: Vec<String>,
    /// Source URL of the captured page
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub url: Option<String>,
    /// Epoch milliseconds
    #[serde(default)]
    pub created_at: i64,
    /// Epoch milliseconds
    #[serde(default)]
    pub updated_at: i64,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub metadata: Option<CaptureMetadata>,
}

impl Note {
    /// Create a note with the given id, title and content and no tags
    pub fn new(id: impl Into<String>, title: impl Into<String>, content: impl Into<String>) -> Self {
        Note {
            id: id.into(),
            title: title.into(),
            content: content.into(),
            ..Default::default()
        }
    }

    /// Builder-style tag setter
    pub fn with_tags<I, S>(mut self, tags: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.tags = tags.into_iter().map(Into::into).collect();
        self
    }

    /// Builder-style url setter
    pub fn with_url(mut self, url: impl Into<String>) -> Self {
        self.url = Some(url.into());
        self
    }

    /// Builder-style folder setter
    pub fn with_folder(mut self, folder_id: impl Into<String>) -> Self {
        self.folder_id = Some(folder_id.into());
        self
    }

    /// Builder-style timestamp setter
    pub fn with_timestamps(mut self, created_at: i64, updated_at: i64) -> Self {
        self.created_at = created_at;
        self.updated_at = updated_at;
        self
    }
}

/// A folder notes can be filed under
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Folder {
    pub id: String,
    pub name: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub parent_id: Option<String>,
    #[serde(default)]
    pub created_at: i64,
    #[serde(default)]
    pub updated_at: i64,
}
