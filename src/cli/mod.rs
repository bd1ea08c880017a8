//! CLI argument parsing for notecap
//!
//! Global flags: --data-dir, --config, --format, --quiet, --verbose

pub mod args;
pub mod parse;

use clap::{Parser, Subcommand};
use std::path::PathBuf;

pub use args::{ListArgs, SearchArgs};
pub use notecap_core::format::OutputFormat;
use parse::parse_output_format;

/// Notecap - search notes captured from the web
#[derive(Parser, Debug)]
#[command(name = "notecap")]
#[command(author, version, about, long_about = None)]
#[command(propagate_version = true)]
pub struct Cli {
    /// Directory holding notes.json and folders.json
    #[arg(long, global = true, env = "NOTECAP_DATA_DIR")]
    pub data_dir: Option<PathBuf>,

    /// Search configuration file (defaults to search.toml in the data directory)
    #[arg(long, global = true)]
    pub config: Option<PathBuf>,

    /// Output format
    #[arg(long, global = true, value_parser = parse_output_format, default_value = "human")]
    pub format: OutputFormat,

    /// Suppress non-essential output
    #[arg(long, short, global = true)]
    pub quiet: bool,

    /// Enable debug logging
    #[arg(long, short, global = true)]
    pub verbose: bool,

    /// Log level or filter directive (e.g. "debug", "notecap_core=trace")
    #[arg(long, global = true)]
    pub log_level: Option<String>,

    /// Emit logs as JSON
    #[arg(long, global = true)]
    pub log_json: bool,

    #[command(subcommand)]
    pub command: Option<Commands>,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Search notes by relevance
    Search(SearchArgs),

    /// Show notes related to a note
    Related {
        /// Note ID
        id: String,

        /// Maximum number of related notes
        #[arg(long, short = 'n', default_value_t = notecap_core::similarity::DEFAULT_RELATED_LIMIT)]
        limit: usize,
    },

    /// List notes, newest updated first
    List(ListArgs),

    /// Show collection statistics
    Stats,
}
