use super::parse::parse_weight;
use clap::Args;

#[derive(Args, Debug, Clone)]
pub struct SearchArgs {
    /// Search query
    pub query: String,

    /// Maximum number of results
    #[arg(long, short = 'n')]
    pub limit: Option<usize>,

    /// Score titles, tags and urls only
    #[arg(long)]
    pub title_only: bool,

    /// Disable fuzzy (subsequence) matching
    #[arg(long, conflicts_with = "semantic")]
    pub exact: bool,

    /// Weight of title matches
    #[arg(long, value_parser = parse_weight)]
    pub title_weight: Option<f64>,

    /// Weight of content matches
    #[arg(long, value_parser = parse_weight)]
    pub content_weight: Option<f64>,

    /// Re-weight results by term overlap with each note
    #[arg(long)]
    pub semantic: bool,
}

#[derive(Args, Debug, Clone)]
pub struct ListArgs {
    /// Filter by folder ID
    #[arg(long)]
    pub folder: Option<String>,

    /// Filter by tag (can be specified multiple times, any match)
    #[arg(long, short, action = clap::ArgAction::Append)]
    pub tag: Vec<String>,

    /// Case-insensitive substring filter
    #[arg(long, short)]
    pub search: Option<String>,

    /// Page number, starting at 1
    #[arg(long, default_value_t = 1)]
    pub page: usize,

    /// Notes per page
    #[arg(long, short = 'n', default_value_t = notecap_core::query::DEFAULT_PAGE_SIZE)]
    pub limit: usize,
}
