//! Records output formatting for search command

use notecap_core::records::{escape_quotes, single_line};
use notecap_core::search::SearchResult;
use notecap_core::store::Store;

use crate::commands::helpers::tags_csv;

/// Output in records format
///
/// ```text
/// H notecap=1 records=1 data_dir=<path> mode=search query="<query>" results=<n>
/// N <id> score=<score> fields=<fields> tags=<tags> "<title>"
/// S <id> "<highlight>"
/// ```
pub fn output_records(store: &Store, results: &[SearchResult<'_>], query: &str) {
    println!(
        "H notecap=1 records=1 data_dir={} mode=search query=\"{}\" results={}",
        store.root().display(),
        escape_quotes(query),
        results.len()
    );

    for result in results {
        let fields: Vec<&str> = result.matched_fields.iter().map(|f| f.as_str()).collect();
        println!(
            "N {} score={:.4} fields={} tags={} \"{}\"",
            result.note.id,
            result.score,
            fields.join(","),
            tags_csv(&result.note.tags),
            escape_quotes(&result.note.title)
        );
        for highlight in &result.highlights {
            println!(
                "S {} \"{}\"",
                result.note.id,
                escape_quotes(&single_line(highlight))
            );
        }
    }
}
