//! Per-term match scoring
//!
//! All functions expect `text` and `term` already lower-cased.

use super::weights::{ScoringTuning, SUBSTRING_SCORE, WHOLE_WORD_SCORE};
use crate::text::is_word_char;

/// Score the first occurrence of `term` in `text`
///
/// Returns [`WHOLE_WORD_SCORE`] when the occurrence is bounded by non-word
/// characters or string edges, [`SUBSTRING_SCORE`] when it sits inside a
/// longer word, and 0 when `term` does not occur.
pub fn exact_match(text: &str, term: &str) -> f64 {
    if term.is_empty() {
        return 0.0;
    }

    let Some(start) = text.find(term) else {
        return 0.0;
    };
    let end = start + term.len();

    let before_ok = text[..start]
        .chars()
        .next_back()
        .is_none_or(|c| !is_word_char(c));
    let after_ok = text[end..].chars().next().is_none_or(|c| !is_word_char(c));

    if before_ok && after_ok {
        WHOLE_WORD_SCORE
    } else {
        SUBSTRING_SCORE
    }
}

/// Share of `term`'s characters found in order in `text`
///
/// Each character is searched for strictly after the previously matched
/// position; characters that cannot be found are skipped.
pub fn subsequence_ratio(text: &str, term: &str) -> f64 {
    let term_len = term.chars().count();
    if term_len == 0 {
        return 0.0;
    }

    let text_chars: Vec<char> = text.chars().collect();
    let mut next_from = 0;
    let mut matched = 0usize;

    for c in term.chars() {
        if let Some(offset) = text_chars[next_from.min(text_chars.len())..]
            .iter()
            .position(|&t| t == c)
        {
            matched += 1;
            next_from += offset + 1;
        }
    }

    matched as f64 / term_len as f64
}

/// Exact score if positive, otherwise a subsequence score
///
/// Terms shorter than two characters never fuzzy-match.
pub fn fuzzy_match(text: &str, term: &str, tuning: &ScoringTuning) -> f64 {
    let exact = exact_match(text, term);
    if exact > 0.0 {
        return exact;
    }

    if term.chars().count() < 2 {
        return 0.0;
    }

    let ratio = subsequence_ratio(text, term);
    if ratio > tuning.fuzzy_min_ratio {
        ratio * tuning.fuzzy_weight
    } else {
        0.0
    }
}

/// Sum of per-term scores for one field, with the short-text boost applied
pub fn field_score(text: &str, terms: &[String], fuzzy: bool, tuning: &ScoringTuning) -> f64 {
    if text.is_empty() {
        return 0.0;
    }

    let normalized = text.to_lowercase();
    let mut score: f64 = terms
        .iter()
        .map(|term| {
            if fuzzy {
                fuzzy_match(&normalized, term, tuning)
            } else {
                exact_match(&normalized, term)
            }
        })
        .sum();

    if score > 0.0 && text.chars().count() < tuning.short_text_threshold {
        score *= tuning.short_text_boost;
    }

    score
}
