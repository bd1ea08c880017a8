//! JSON output formatting for search command

use crate::commands::helpers::format_timestamp_rfc3339;
use notecap_core::error::Result;
use notecap_core::search::SearchResult;

/// Output in JSON format
pub fn output_json(results: &[SearchResult<'_>]) -> Result<()> {
    let output: Vec<_> = results
        .iter()
        .map(|r| {
            let mut obj = serde_json::json!({
                "id": r.note.id,
                "title": r.note.title,
                "tags": r.note.tags,
                "score": r.score,
                "matched_fields": r.matched_fields,
                "highlights": r.highlights,
            });

            if let Some(obj_mut) = obj.as_object_mut() {
                if let Some(url) = &r.note.url {
                    obj_mut.insert("url".to_string(), serde_json::json!(url));
                }
                if let Some(folder_id) = &r.note.folder_id {
                    obj_mut.insert("folder_id".to_string(), serde_json::json!(folder_id));
                }
                if let Some(updated) = format_timestamp_rfc3339(r.note.updated_at) {
                    obj_mut.insert("updated".to_string(), serde_json::json!(updated));
                }
            }

            obj
        })
        .collect();
    println!("{}", serde_json::to_string_pretty(&output)?);
    Ok(())
}
