//! Per-query search options

use serde::{Deserialize, Serialize};

use super::weights::{CONTENT_WEIGHT, TITLE_WEIGHT};

/// Options controlling a single query
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SearchOptions {
    /// Maximum number of results returned
    pub max_results: usize,
    /// Whether the content field participates in scoring
    pub include_content: bool,
    /// Fall back to subsequence matching when a term has no exact match
    pub fuzzy_search: bool,
    pub title_weight: f64,
    pub content_weight: f64,
}

impl Default for SearchOptions {
    fn default() -> Self {
        SearchOptions {
            max_results: 10,
            include_content: true,
            fuzzy_search: true,
            title_weight: TITLE_WEIGHT,
            content_weight: CONTENT_WEIGHT,
        }
    }
}

impl SearchOptions {
    /// Create options with default settings
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the result cap
    pub fn with_max_results(mut self, max_results: usize) -> Self {
        self.max_results = max_results;
        self
    }

    /// Set whether content is scored
    pub fn with_include_content(mut self, include_content: bool) -> Self {
        self.include_content = include_content;
        self
    }

    /// Set whether fuzzy matching is used
    pub fn with_fuzzy_search(mut self, fuzzy_search: bool) -> Self {
        self.fuzzy_search = fuzzy_search;
        self
    }

    /// Set the title weight
    pub fn with_title_weight(mut self, title_weight: f64) -> Self {
        self.title_weight = title_weight;
        self
    }

    /// Set the content weight
    pub fn with_content_weight(mut self, content_weight: f64) -> Self {
        self.content_weight = content_weight;
        self
    }
}
