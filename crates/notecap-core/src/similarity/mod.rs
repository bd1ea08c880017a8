//! Related-note discovery
//!
//! Independent of query scoring: notes are compared on shared tags and on
//! term overlap of their titles and the opening of their content.

mod calculation;

pub use calculation::{jaccard, text_similarity};

use tracing::debug;

use crate::note::Note;

/// Weight of each tag shared with the target note
pub const SHARED_TAG_WEIGHT: f64 = 2.0;

/// Weight of the content similarity
pub const CONTENT_SIMILARITY_WEIGHT: f64 = 0.5;

/// Characters of content compared between notes
pub const CONTENT_SAMPLE_CHARS: usize = 300;

/// Candidates must score strictly above this to be related
pub const RELATED_THRESHOLD: f64 = 0.1;

/// Default number of related notes returned
pub const DEFAULT_RELATED_LIMIT: usize = 5;

/// A related note and its similarity score
#[derive(Debug, Clone, PartialEq)]
pub struct RelatedNote<'a> {
    pub note: &'a Note,
    pub score: f64,
}

/// Similarity score of `candidate` relative to `target`
pub fn related_score(target: &Note, candidate: &Note) -> f64 {
    let shared_tags = candidate
        .tags
        .iter()
        .filter(|tag| target.tags.contains(tag))
        .count();

    let title_similarity = text_similarity(&target.title, &candidate.title);
    let content_similarity = text_similarity(
        &content_sample(&target.content),
        &content_sample(&candidate.content),
    );

    shared_tags as f64 * SHARED_TAG_WEIGHT
        + title_similarity
        + content_similarity * CONTENT_SIMILARITY_WEIGHT
}

/// Notes related to `target`, highest score first
///
/// The target itself (matched by id) is skipped. Ties keep the order of
/// `all_notes`.
pub fn find_related<'a>(target: &Note, all_notes: &'a [Note], limit: usize) -> Vec<RelatedNote<'a>> {
    let mut results: Vec<RelatedNote<'a>> = all_notes
        .iter()
        .filter(|note| note.id != target.id)
        .filter_map(|note| {
            let score = related_score(target, note);
            (score > RELATED_THRESHOLD).then_some(RelatedNote { note, score })
        })
        .collect();

    results.sort_by(|a, b| b.score.total_cmp(&a.score));
    results.truncate(limit);

    debug!(
        note_id = %target.id,
        candidates = all_notes.len(),
        related = results.len(),
        "find_related"
    );
    results
}

/// Bare note references for the notes related to `target`
pub fn get_related_notes<'a>(target: &Note, all_notes: &'a [Note], limit: usize) -> Vec<&'a Note> {
    find_related(target, all_notes, limit)
        .into_iter()
        .map(|related| related.note)
        .collect()
}

fn content_sample(content: &str) -> String {
    content.chars().take(CONTENT_SAMPLE_CHARS).collect()
}
