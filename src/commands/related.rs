//! `notecap related` command - notes similar to a given note
//!
//! Similarity combines shared tags with term overlap of titles and the
//! opening of each note's content.

use std::time::Instant;

use tracing::debug;

use crate::cli::{Cli, OutputFormat};
use crate::commands::helpers::{display_title, tags_csv};
use notecap_core::error::{NotecapError, Result};
use notecap_core::records::escape_quotes;
use notecap_core::similarity::find_related;
use notecap_core::store::{NoteSource, Store};

/// Execute the related command
pub fn execute(cli: &Cli, store: &Store, id: &str, limit: usize) -> Result<()> {
    let start = Instant::now();
    let notes = store.load_notes()?;
    notecap_core::trace_time!(start, "load_notes", note_count = notes.len());

    let target = notes
        .iter()
        .find(|n| n.id == id)
        .ok_or_else(|| NotecapError::NoteNotFound { id: id.to_string() })?;

    let related = find_related(target, &notes, limit);
    debug!(id, limit, related = related.len(), "related");

    match cli.format {
        OutputFormat::Human => {
            if related.is_empty() {
                if !cli.quiet {
                    println!("No related notes found for {}", id);
                }
                return Ok(());
            }
            for r in &related {
                println!("{} [{:.2}] {}", r.note.id, r.score, display_title(r.note));
            }
        }
        OutputFormat::Json => {
            let output: Vec<_> = related
                .iter()
                .map(|r| {
                    serde_json::json!({
                        "id": r.note.id,
                        "title": r.note.title,
                        "tags": r.note.tags,
                        "score": r.score,
                    })
                })
                .collect();
            println!("{}", serde_json::to_string_pretty(&output)?);
        }
        OutputFormat::Records => {
            println!(
                "H notecap=1 records=1 mode=related id={} results={}",
                id,
                related.len()
            );
            for r in &related {
                println!(
                    "N {} score={:.4} tags={} \"{}\"",
                    r.note.id,
                    r.score,
                    tags_csv(&r.note.tags),
                    escape_quotes(&r.note.title)
                );
            }
        }
    }

    Ok(())
}
