//! Relevance-ranked search over captured notes
//!
//! Every query is a full scan: terms are extracted from the query, each note
//! is scored field by field, and the positive scores are sorted and capped.
//! The engine holds no state besides its tuning constants and never mutates
//! the notes it is given.

mod highlight;
mod matching;
mod options;
mod weights;

pub use highlight::{create_highlight, ELLIPSIS};
pub use matching::{exact_match, field_score, fuzzy_match, subsequence_ratio};
pub use options::SearchOptions;
pub use weights::{
    ScoringTuning, CONTENT_WEIGHT, SEMANTIC_BONUS_WEIGHT, SUBSTRING_SCORE, TAGS_WEIGHT,
    TITLE_WEIGHT, URL_WEIGHT, WHOLE_WORD_SCORE,
};

use std::fmt;

use serde::Serialize;
use tracing::debug;

use crate::note::Note;
use crate::text::extract_terms;

/// A note field that can contribute to a match
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Field {
    Title,
    Content,
    Tags,
    Url,
}

impl Field {
    pub fn as_str(&self) -> &'static str {
        match self {
            Field::Title => "title",
            Field::Content => "content",
            Field::Tags => "tags",
            Field::Url => "url",
        }
    }
}

impl fmt::Display for Field {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A scored match, borrowing the note it refers to
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SearchResult<'a> {
    pub note: &'a Note,
    /// Always strictly positive
    pub score: f64,
    /// Contributing fields in title, content, tags, url order
    pub matched_fields: Vec<Field>,
    /// Excerpts for the matched title and content, empty ones dropped
    pub highlights: Vec<String>,
}

impl SearchResult<'_> {
    /// Whether `field` contributed to the score
    pub fn matched(&self, field: Field) -> bool {
        self.matched_fields.contains(&field)
    }
}

/// Search engine
#[derive(Debug, Clone, Default)]
pub struct SearchEngine {
    tuning: ScoringTuning,
}

impl SearchEngine {
    /// Create an engine with custom tuning
    pub fn new(tuning: ScoringTuning) -> Self {
        SearchEngine { tuning }
    }

    pub fn tuning(&self) -> &ScoringTuning {
        &self.tuning
    }

    /// Rank `notes` against `query`
    ///
    /// Returns at most `options.max_results` results in descending score
    /// order; equal scores keep the order of `notes`. A blank query, or one
    /// consisting only of stop words, yields no results.
    pub fn search_notes<'a>(
        &self,
        notes: &'a [Note],
        query: &str,
        options: &SearchOptions,
    ) -> Vec<SearchResult<'a>> {
        let mut results = self.rank(notes, query, options);
        results.truncate(options.max_results);
        results
    }

    /// Keyword search re-weighted by term overlap with each note
    ///
    /// Fuzzy matching is always on. The bonus is applied to every candidate
    /// before sorting and capping, so a boosted note can overtake one that
    /// scored higher on keywords alone.
    pub fn semantic_search<'a>(
        &self,
        notes: &'a [Note],
        query: &str,
        options: &SearchOptions,
    ) -> Vec<SearchResult<'a>> {
        let options = options.clone().with_fuzzy_search(true);
        let mut results = self.rank(notes, query, &options);

        for result in &mut results {
            result.score *= semantic_bonus(result.note, query);
        }
        sort_by_score(&mut results);
        results.truncate(options.max_results);

        debug!(
            query,
            result_count = results.len(),
            "semantic_search"
        );
        results
    }

    /// Score every note and sort the positive ones, uncapped
    fn rank<'a>(
        &self,
        notes: &'a [Note],
        query: &str,
        options: &SearchOptions,
    ) -> Vec<SearchResult<'a>> {
        if query.trim().is_empty() {
            return Vec::new();
        }

        let terms = extract_terms(query);
        if terms.is_empty() {
            debug!(query, "no search terms after stop word filtering");
            return Vec::new();
        }

        let mut results: Vec<SearchResult<'a>> = notes
            .iter()
            .filter_map(|note| self.score_note(note, &terms, options))
            .collect();
        sort_by_score(&mut results);

        debug!(
            term_count = terms.len(),
            note_count = notes.len(),
            match_count = results.len(),
            "search_notes"
        );
        results
    }

    fn score_note<'a>(
        &self,
        note: &'a Note,
        terms: &[String],
        options: &SearchOptions,
    ) -> Option<SearchResult<'a>> {
        let tuning = &self.tuning;
        let mut score = 0.0;
        let mut matched_fields = Vec::new();
        let mut highlights = Vec::new();

        let title_score = field_score(&note.title, terms, options.fuzzy_search, tuning);
        if title_score > 0.0 {
            score += title_score * options.title_weight;
            matched_fields.push(Field::Title);
            highlights.push(create_highlight(
                &note.title,
                terms,
                tuning.highlight_max_len,
                tuning.highlight_context,
            ));
        }

        if options.include_content {
            let content_score = field_score(&note.content, terms, options.fuzzy_search, tuning);
            if content_score > 0.0 {
                score += content_score * options.content_weight;
                matched_fields.push(Field::Content);
                highlights.push(create_highlight(
                    &note.content,
                    terms,
                    tuning.content_highlight_max_len,
                    tuning.highlight_context,
                ));
            }
        }

        let tag_text = note.tags.join(" ");
        let tag_score = field_score(&tag_text, terms, options.fuzzy_search, tuning);
        if tag_score > 0.0 {
            score += tag_score * TAGS_WEIGHT;
            matched_fields.push(Field::Tags);
        }

        if let Some(url) = note.url.as_deref() {
            let url_score = field_score(url, terms, false, tuning);
            if url_score > 0.0 {
                score += url_score * URL_WEIGHT;
                matched_fields.push(Field::Url);
            }
        }

        // Zero or negative weights can cancel out a matched field
        if score.is_nan() || score <= 0.0 {
            return None;
        }

        highlights.retain(|h| !h.is_empty());
        Some(SearchResult {
            note,
            score,
            matched_fields,
            highlights,
        })
    }
}

/// Multiplier in `[1, 1.5]` for how many query terms overlap the note's terms
///
/// A query term overlaps when it contains, or is contained in, one of the
/// terms extracted from the note's title and content.
pub fn semantic_bonus(note: &Note, query: &str) -> f64 {
    let query_terms = extract_terms(query);
    if query_terms.is_empty() {
        return 1.0;
    }

    let note_terms = extract_terms(&format!("{} {}", note.title, note.content));
    let overlap = query_terms
        .iter()
        .filter(|q| {
            note_terms
                .iter()
                .any(|n| n.contains(q.as_str()) || q.contains(n.as_str()))
        })
        .count();

    1.0 + (overlap as f64 / query_terms.len() as f64) * SEMANTIC_BONUS_WEIGHT
}

/// Descending by score; the sort is stable so ties keep input order
fn sort_by_score(results: &mut [SearchResult<'_>]) {
    results.sort_by(|a, b| b.score.total_cmp(&a.score));
}

/// [`SearchEngine::search_notes`] with default tuning
pub fn search_notes<'a>(
    notes: &'a [Note],
    query: &str,
    options: &SearchOptions,
) -> Vec<SearchResult<'a>> {
    SearchEngine::default().search_notes(notes, query, options)
}

/// [`SearchEngine::semantic_search`] with default tuning
pub fn semantic_search<'a>(
    notes: &'a [Note],
    query: &str,
    options: &SearchOptions,
) -> Vec<SearchResult<'a>> {
    SearchEngine::default().semantic_search(notes, query, options)
}
