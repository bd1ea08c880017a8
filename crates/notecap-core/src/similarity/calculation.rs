use std::collections::HashSet;

use crate::text::extract_terms;

/// Jaccard similarity of two term sets, 0 when both are empty
pub fn jaccard(a: &HashSet<String>, b: &HashSet<String>) -> f64 {
    let union = a.union(b).count();
    if union == 0 {
        return 0.0;
    }
    a.intersection(b).count() as f64 / union as f64
}

/// Jaccard similarity of the search terms extracted from two texts
pub fn text_similarity(a: &str, b: &str) -> f64 {
    let terms_a: HashSet<String> = extract_terms(a).into_iter().collect();
    let terms_b: HashSet<String> = extract_terms(b).into_iter().collect();
    jaccard(&terms_a, &terms_b)
}
