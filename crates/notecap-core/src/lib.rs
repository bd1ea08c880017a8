//! Notecap Core Library
//!
//! Note model and relevance-ranked search for the notecap knowledge capture tool.

pub mod config;
pub mod error;
pub mod format;
pub mod logging;
pub mod note;
pub mod query;
pub mod records;
pub mod search;
pub mod similarity;
pub mod stats;
pub mod store;
pub mod text;
