//! Field weights and scoring constants
//!
//! - `title`: configurable, default 2.0
//! - `content`: configurable, default 1.0
//! - `tags`: fixed 1.5
//! - `url`: fixed 0.5, never fuzzy-matched

use serde::{Deserialize, Serialize};

/// Default weight multiplier for title fields
pub const TITLE_WEIGHT: f64 = 2.0;

/// Default weight multiplier for content fields (baseline)
pub const CONTENT_WEIGHT: f64 = 1.0;

/// Weight multiplier for the joined tag string
pub const TAGS_WEIGHT: f64 = 1.5;

/// Weight multiplier for the source url
pub const URL_WEIGHT: f64 = 0.5;

/// Per-term score when the match is bounded by non-word characters
pub const WHOLE_WORD_SCORE: f64 = 2.0;

/// Per-term score when the term only occurs inside a longer word
pub const SUBSTRING_SCORE: f64 = 1.0;

/// Maximum share of the score the semantic bonus can add
pub const SEMANTIC_BONUS_WEIGHT: f64 = 0.5;

/// Tunable constants that change ranking behaviour
///
/// Every field has a default, so a partial `[tuning]` table in the config
/// file only overrides what it names.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ScoringTuning {
    /// Fields shorter than this many characters get the short-text boost
    pub short_text_threshold: usize,
    /// Multiplier applied to a positive score of a short field
    pub short_text_boost: f64,
    /// A fuzzy match must locate strictly more than this share of the term
    pub fuzzy_min_ratio: f64,
    /// Multiplier applied to an accepted fuzzy match ratio
    pub fuzzy_weight: f64,
    /// Characters of context kept on each side of a highlighted match
    pub highlight_context: usize,
    /// Maximum highlight length for titles
    pub highlight_max_len: usize,
    /// Maximum highlight length for content
    pub content_highlight_max_len: usize,
}

impl Default for ScoringTuning {
    fn default() -> Self {
        ScoringTuning {
            short_text_threshold: 100,
            short_text_boost: 1.2,
            fuzzy_min_ratio: 0.6,
            fuzzy_weight: 0.5,
            highlight_context: 50,
            highlight_max_len: 100,
            content_highlight_max_len: 150,
        }
    }
}
