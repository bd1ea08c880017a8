//! Human-readable output formatting for search command

use crate::cli::Cli;
use crate::commands::helpers::display_title;
use notecap_core::records::single_line;
use notecap_core::search::SearchResult;

/// Output in human-readable format
pub fn output_human(cli: &Cli, results: &[SearchResult<'_>], query: &str) {
    if results.is_empty() {
        if !cli.quiet {
            println!("No results found for '{}'", query);
        }
        return;
    }

    for result in results {
        let fields: Vec<&str> = result.matched_fields.iter().map(|f| f.as_str()).collect();
        println!(
            "{} [{:.2}] {} ({})",
            result.note.id,
            result.score,
            display_title(result.note),
            fields.join(", ")
        );

        if cli.quiet {
            continue;
        }

        for highlight in &result.highlights {
            println!("    {}", single_line(highlight));
        }
        if cli.verbose {
            if let Some(url) = &result.note.url {
                println!("    {}", url);
            }
        }
    }
}
