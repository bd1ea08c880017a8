//! Note filtering and pagination
//!
//! Plain listing, separate from ranked search: notes are filtered, sorted
//! newest-updated first and sliced into pages.

use serde::Serialize;

use crate::note::Note;

/// Notes per page when no limit is given
pub const DEFAULT_PAGE_SIZE: usize = 20;

/// Filter and paging configuration for note listing
#[derive(Debug, Clone)]
pub struct NotesQuery<'a> {
    /// Only notes filed in this folder
    pub folder_id: Option<&'a str>,
    /// Only notes carrying at least one of these tags
    pub tags: Vec<String>,
    /// Case-insensitive substring over title, content and tags
    pub search: Option<&'a str>,
    /// 1-based page number
    pub page: usize,
    pub limit: usize,
}

impl Default for NotesQuery<'_> {
    fn default() -> Self {
        Self {
            folder_id: None,
            tags: Vec::new(),
            search: None,
            page: 1,
            limit: DEFAULT_PAGE_SIZE,
        }
    }
}

impl<'a> NotesQuery<'a> {
    /// Create a new query with default settings
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the folder filter
    pub fn with_folder(mut self, folder_id: Option<&'a str>) -> Self {
        self.folder_id = folder_id;
        self
    }

    /// Set the tag filter
    pub fn with_tags(mut self, tags: Vec<String>) -> Self {
        self.tags = tags;
        self
    }

    /// Set the substring filter
    pub fn with_search(mut self, search: Option<&'a str>) -> Self {
        self.search = search;
        self
    }

    /// Set page and page size
    pub fn with_page(mut self, page: usize, limit: usize) -> Self {
        self.page = page;
        self.limit = limit;
        self
    }

    /// Check if a note matches all configured filters
    pub fn matches(&self, note: &Note) -> bool {
        self.matches_folder(note) && self.matches_tags(note) && self.matches_search(note)
    }

    fn matches_folder(&self, note: &Note) -> bool {
        match self.folder_id {
            Some(folder) => note.folder_id.as_deref() == Some(folder),
            None => true,
        }
    }

    fn matches_tags(&self, note: &Note) -> bool {
        self.tags.is_empty() || self.tags.iter().any(|t| note.tags.contains(t))
    }

    fn matches_search(&self, note: &Note) -> bool {
        let Some(search) = self.search.filter(|s| !s.is_empty()) else {
            return true;
        };
        let needle = search.to_lowercase();

        note.title.to_lowercase().contains(&needle)
            || note.content.to_lowercase().contains(&needle)
            || note.tags.iter().any(|t| t.to_lowercase().contains(&needle))
    }
}

/// One page of listed notes
#[derive(Debug, Clone, Serialize)]
pub struct NotePage<'a> {
    pub notes: Vec<&'a Note>,
    /// Matching notes across all pages
    pub total: usize,
    pub page: usize,
    pub limit: usize,
}

/// Filter, sort by `updated_at` descending, and paginate
pub fn list_notes<'a>(notes: &'a [Note], query: &NotesQuery<'_>) -> NotePage<'a> {
    let mut matching: Vec<&Note> = notes.iter().filter(|n| query.matches(n)).collect();
    matching.sort_by(|a, b| b.updated_at.cmp(&a.updated_at));

    let total = matching.len();
    let page = query.page.max(1);
    let start = (page - 1).saturating_mul(query.limit);

    let notes = matching
        .into_iter()
        .skip(start)
        .take(query.limit)
        .collect();

    NotePage {
        notes,
        total,
        page,
        limit: query.limit,
    }
}
