//! Term extraction for queries and note text

use std::collections::HashSet;
use std::sync::OnceLock;

/// Maximum number of terms kept from a single extraction
pub const MAX_TERMS: usize = 10;

/// High-frequency function words that never become search terms
static STOP_WORDS: OnceLock<HashSet<&'static str>> = OnceLock::new();

fn get_stop_words() -> &'static HashSet<&'static str> {
    STOP_WORDS.get_or_init(|| {
        [
            // CJK function words common in captured pages
            "的", "了", "在", "是", "我", "有", "和", "就", "不", "人", "都", "一", "个", "上",
            "也", "很", "到", "说", "要", "去", "你", "会", "着", "没", "看", "好", "自己", "这",
            "那", "能", "可以", "但是", "因为", "所以",
            // English
            "a", "an", "and", "are", "as", "at", "be", "but", "by", "for", "if", "in", "into",
            "is", "it", "no", "not", "of", "on", "or", "such", "that", "the", "their", "then",
            "there", "these", "they", "this", "to", "was", "will", "with",
        ]
        .iter()
        .copied()
        .collect()
    })
}

/// Whether a lower-cased token is a stop word
pub fn is_stop_word(token: &str) -> bool {
    get_stop_words().contains(token)
}

/// `\w` character class: ASCII letters, digits and underscore
pub fn is_word_char(c: char) -> bool {
    c.is_ascii_alphanumeric() || c == '_'
}

/// Lower-case, split on whitespace, drop stop words and single-character tokens
pub fn extract_terms_unbounded(text: &str) -> Vec<String> {
    text.to_lowercase()
        .split_whitespace()
        .filter(|t| !is_stop_word(t))
        .filter(|t| t.chars().count() > 1)
        .map(str::to_string)
        .collect()
}

/// Extract search terms, keeping at most the first [`MAX_TERMS`]
pub fn extract_terms(text: &str) -> Vec<String> {
    let mut terms = extract_terms_unbounded(text);
    terms.truncate(MAX_TERMS);
    terms
}
