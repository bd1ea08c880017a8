//! Highlight excerpts for matched fields

/// Marker appended to a highlight that was cut short
pub const ELLIPSIS: &str = "...";

/// Build a bounded excerpt of `text` around the best term occurrence
///
/// For every term found (case-insensitively) a window of `context`
/// characters on either side of the first occurrence is considered; the
/// longest window wins, earlier terms winning ties. Without any hit the
/// start of the text is used. The result holds at most `max_len` characters
/// of `text`, followed by [`ELLIPSIS`] when it was truncated.
pub fn create_highlight(text: &str, terms: &[String], max_len: usize, context: usize) -> String {
    if text.is_empty() {
        return String::new();
    }

    let chars: Vec<char> = text.chars().collect();
    let lower = text.to_lowercase();

    // Lower-casing can change the character count for a few scripts, so
    // windows are clamped against the original text.
    let mut best: Option<(usize, usize)> = None;
    for term in terms {
        let Some(byte_idx) = lower.find(term.as_str()) else {
            continue;
        };
        let idx = lower[..byte_idx].chars().count().min(chars.len());
        let start = idx.saturating_sub(context);
        let end = (idx + term.chars().count() + context).min(chars.len());

        let longer = best.is_none_or(|(s, e)| end - start > e - s);
        if longer {
            best = Some((start, end));
        }
    }

    let (start, end) = best.unwrap_or((0, max_len.min(chars.len())));
    let window = &chars[start..end];

    if window.len() > max_len {
        let mut out: String = window[..max_len].iter().collect();
        out.push_str(ELLIPSIS);
        out
    } else {
        window.iter().collect()
    }
}
