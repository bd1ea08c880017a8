//! `notecap stats` command - collection statistics

use crate::cli::{Cli, OutputFormat};
use crate::commands::helpers::{display_title, format_timestamp, now_ms};
use notecap_core::error::Result;
use notecap_core::stats::collect_stats;
use notecap_core::store::{NoteSource, Store};

/// Execute the stats command
pub fn execute(cli: &Cli, store: &Store) -> Result<()> {
    let notes = store.load_notes()?;
    let folders = store.load_folders()?;
    let stats = collect_stats(&notes, &folders, now_ms());

    match cli.format {
        OutputFormat::Human => {
            println!("Notes:   {}", stats.total_notes);
            println!("Folders: {}", stats.total_folders);

            if !stats.recent_notes.is_empty() {
                println!();
                println!("Recent:");
                for note in &stats.recent_notes {
                    println!(
                        "  {} {} {}",
                        format_timestamp(note.created_at),
                        note.id,
                        display_title(note)
                    );
                }
            }

            if !stats.popular_tags.is_empty() {
                println!();
                println!("Tags:");
                for tag in &stats.popular_tags {
                    println!("  {} ({})", tag.tag, tag.count);
                }
            }
        }
        OutputFormat::Json => {
            let output = serde_json::json!({
                "total_notes": stats.total_notes,
                "total_folders": stats.total_folders,
                "recent_notes": stats
                    .recent_notes
                    .iter()
                    .map(|n| serde_json::json!({
                        "id": n.id,
                        "title": n.title,
                        "created_at": n.created_at,
                    }))
                    .collect::<Vec<_>>(),
                "popular_tags": stats.popular_tags,
            });
            println!("{}", serde_json::to_string_pretty(&output)?);
        }
        OutputFormat::Records => {
            println!(
                "H notecap=1 records=1 mode=stats notes={} folders={} recent={} tags={}",
                stats.total_notes,
                stats.total_folders,
                stats.recent_notes.len(),
                stats.popular_tags.len()
            );
            for tag in &stats.popular_tags {
                println!("T {} count={}", tag.tag, tag.count);
            }
        }
    }

    Ok(())
}
