//! Command dispatch logic for notecap
use std::path::PathBuf;
use std::time::Instant;

use tracing::debug;

use crate::cli::{Cli, Commands};
use crate::commands;
use notecap_core::error::{NotecapError, Result};
use notecap_core::store::paths::default_data_dir;
use notecap_core::store::Store;

pub fn run(cli: &Cli, start: Instant) -> Result<()> {
    let Some(command) = &cli.command else {
        return handle_no_command();
    };

    let store = open_store(cli)?;
    debug!(
        data_dir = %store.root().display(),
        elapsed = ?start.elapsed(),
        "open_store"
    );

    let result = match command {
        Commands::Search(args) => commands::search::execute(cli, &store, args),
        Commands::Related { id, limit } => commands::related::execute(cli, &store, id, *limit),
        Commands::List(args) => commands::list::execute(cli, &store, args),
        Commands::Stats => commands::stats::execute(cli, &store),
    };

    debug!(elapsed = ?start.elapsed(), "command_complete");
    result
}

fn handle_no_command() -> Result<()> {
    println!("notecap - search notes captured from the web");
    println!();
    println!("Run `notecap --help` for usage information.");
    Ok(())
}

fn resolve_data_dir(cli: &Cli) -> Result<PathBuf> {
    cli.data_dir.clone().or_else(default_data_dir).ok_or_else(|| {
        NotecapError::UsageError(
            "could not determine the data directory; pass --data-dir".to_string(),
        )
    })
}

fn open_store(cli: &Cli) -> Result<Store> {
    let data_dir = resolve_data_dir(cli)?;
    Store::open_with_config(&data_dir, cli.config.as_deref())
}
