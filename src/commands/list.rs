//! `notecap list` command - list notes newest first
//!
//! Filters by folder, tag (any of) and a case-insensitive substring, with
//! page-based pagination.

use serde::Serialize;

use crate::cli::{Cli, ListArgs, OutputFormat};
use crate::commands::helpers::{display_title, folder_names, format_timestamp, tags_csv};
use notecap_core::error::Result;
use notecap_core::query::{list_notes, NotesQuery};
use notecap_core::records::escape_quotes;
use notecap_core::store::{NoteSource, Store};

#[derive(Serialize)]
struct ListedNote<'a> {
    id: &'a str,
    title: &'a str,
    tags: &'a [String],
    #[serde(skip_serializing_if = "Option::is_none")]
    folder: Option<&'a str>,
    #[serde(skip_serializing_if = "Option::is_none")]
    url: Option<&'a str>,
    updated_at: i64,
}

#[derive(Serialize)]
struct ListOutput<'a> {
    notes: Vec<ListedNote<'a>>,
    total: usize,
    page: usize,
    limit: usize,
}

/// Execute the list command
pub fn execute(cli: &Cli, store: &Store, args: &ListArgs) -> Result<()> {
    if args.limit == 0 {
        notecap_core::bail_usage!("--limit must be at least 1");
    }

    let notes = store.load_notes()?;
    let folders = store.load_folders()?;
    let names = folder_names(&folders);

    let query = NotesQuery::new()
        .with_folder(args.folder.as_deref())
        .with_tags(args.tag.clone())
        .with_search(args.search.as_deref())
        .with_page(args.page, args.limit);
    let page = list_notes(&notes, &query);

    let folder_of = |folder_id: Option<&str>| -> Option<String> {
        folder_id.map(|id| names.get(id).copied().unwrap_or(id).to_string())
    };

    match cli.format {
        OutputFormat::Human => {
            if page.notes.is_empty() {
                if !cli.quiet {
                    println!("No notes found");
                }
                return Ok(());
            }
            for note in &page.notes {
                let folder = folder_of(note.folder_id.as_deref())
                    .map(|f| format!(" [{}]", f))
                    .unwrap_or_default();
                println!(
                    "{} {} {}{}",
                    note.id,
                    format_timestamp(note.updated_at),
                    display_title(note),
                    folder
                );
            }
            if !cli.quiet {
                let pages = page.total.div_ceil(page.limit);
                println!("Page {} of {} ({} notes)", page.page, pages, page.total);
            }
        }
        OutputFormat::Json => {
            let output = ListOutput {
                notes: page
                    .notes
                    .iter()
                    .map(|n| ListedNote {
                        id: &n.id,
                        title: &n.title,
                        tags: &n.tags,
                        folder: n.folder_id.as_deref(),
                        url: n.url.as_deref(),
                        updated_at: n.updated_at,
                    })
                    .collect(),
                total: page.total,
                page: page.page,
                limit: page.limit,
            };
            println!("{}", serde_json::to_string_pretty(&output)?);
        }
        OutputFormat::Records => {
            println!(
                "H notecap=1 records=1 mode=list total={} page={} limit={}",
                page.total, page.page, page.limit
            );
            for note in &page.notes {
                let folder = folder_of(note.folder_id.as_deref()).unwrap_or_else(|| "-".into());
                println!(
                    "N {} updated={} folder=\"{}\" tags={} \"{}\"",
                    note.id,
                    note.updated_at,
                    escape_quotes(&folder),
                    tags_csv(&note.tags),
                    escape_quotes(&note.title)
                );
            }
        }
    }

    Ok(())
}
