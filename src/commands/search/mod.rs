//! `notecap search` command - relevance-ranked search
//!
//! - `notecap search <query>` - keyword search over titles, content, tags and urls
//! - `--semantic` - re-weight by term overlap with each note
//! - `--title-only`, `--exact`, weight overrides on top of `search.toml` defaults

pub mod format;

use std::time::Instant;

use tracing::debug;

use crate::cli::{Cli, OutputFormat, SearchArgs};
use notecap_core::error::Result;
use notecap_core::search::SearchOptions;
use notecap_core::store::{NoteSource, Store};

use self::format::{output_human, output_json, output_records};

/// Merge command-line overrides into the configured defaults
fn build_options(defaults: &SearchOptions, args: &SearchArgs) -> SearchOptions {
    let mut options = defaults.clone();
    if let Some(limit) = args.limit {
        options.max_results = limit;
    }
    if args.title_only {
        options.include_content = false;
    }
    if args.exact {
        options.fuzzy_search = false;
    }
    if let Some(weight) = args.title_weight {
        options.title_weight = weight;
    }
    if let Some(weight) = args.content_weight {
        options.content_weight = weight;
    }
    options
}

/// Execute the search command
pub fn execute(cli: &Cli, store: &Store, args: &SearchArgs) -> Result<()> {
    let start = Instant::now();

    let notes = store.load_notes()?;
    let options = build_options(&store.config().defaults, args);
    let engine = store.config().engine();

    debug!(
        query = %args.query,
        semantic = args.semantic,
        ?options,
        note_count = notes.len(),
        "search_params"
    );

    let results = if args.semantic {
        engine.semantic_search(&notes, &args.query, &options)
    } else {
        engine.search_notes(&notes, &args.query, &options)
    };

    debug!(result_count = results.len(), elapsed = ?start.elapsed(), "search");

    match cli.format {
        OutputFormat::Human => output_human(cli, &results, &args.query),
        OutputFormat::Json => output_json(&results)?,
        OutputFormat::Records => output_records(store, &results, &args.query),
    }

    Ok(())
}
