//! Command implementations for notecap

pub mod dispatch;
pub mod helpers;
pub mod list;
pub mod related;
pub mod search;
pub mod stats;
