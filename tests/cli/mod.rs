pub mod list;
pub mod related;
pub mod search;
pub mod stats;
pub mod support;
