//! Note listing queries

mod filter;

pub use filter::{list_notes, NotePage, NotesQuery, DEFAULT_PAGE_SIZE};
