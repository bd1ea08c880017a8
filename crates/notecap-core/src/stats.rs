//! Collection statistics: totals, recent captures and popular tags

use std::collections::HashMap;

use serde::Serialize;

use crate::note::{Folder, Note};

/// Window for "recent" notes, in milliseconds
pub const RECENT_WINDOW_MS: i64 = 7 * 24 * 60 * 60 * 1000;

/// Maximum recent notes reported
pub const MAX_RECENT_NOTES: usize = 5;

/// Maximum popular tags reported
pub const MAX_POPULAR_TAGS: usize = 10;

/// Tag usage count
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct TagCount {
    pub tag: String,
    pub count: usize,
}

/// Summary of a note collection
#[derive(Debug, Clone, Serialize)]
pub struct NoteStats<'a> {
    pub total_notes: usize,
    pub total_folders: usize,
    /// Created within [`RECENT_WINDOW_MS`] of `now`, newest first
    pub recent_notes: Vec<&'a Note>,
    /// Most used tags, ties broken alphabetically
    pub popular_tags: Vec<TagCount>,
}

/// Compute statistics relative to `now_ms` (epoch milliseconds)
pub fn collect_stats<'a>(notes: &'a [Note], folders: &[Folder], now_ms: i64) -> NoteStats<'a> {
    let cutoff = now_ms.saturating_sub(RECENT_WINDOW_MS);
    let mut recent_notes: Vec<&Note> = notes.iter().filter(|n| n.created_at > cutoff).collect();
    recent_notes.sort_by(|a, b| b.created_at.cmp(&a.created_at));
    recent_notes.truncate(MAX_RECENT_NOTES);

    NoteStats {
        total_notes: notes.len(),
        total_folders: folders.len(),
        recent_notes,
        popular_tags: popular_tags(notes, MAX_POPULAR_TAGS),
    }
}

/// Count tag usage across `notes`, most used first
pub fn popular_tags(notes: &[Note], limit: usize) -> Vec<TagCount> {
    let mut counts: HashMap<&str, usize> = HashMap::new();
    for tag in notes.iter().flat_map(|n| n.tags.iter()) {
        *counts.entry(tag.as_str()).or_default() += 1;
    }

    let mut tags: Vec<TagCount> = counts
        .into_iter()
        .map(|(tag, count)| TagCount {
            tag: tag.to_string(),
            count,
        })
        .collect();
    tags.sort_by(|a, b| b.count.cmp(&a.count).then_with(|| a.tag.cmp(&b.tag)));
    tags.truncate(limit);
    tags
}
