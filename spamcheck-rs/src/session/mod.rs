//! Per-session conversation state and history records

pub mod history;
pub mod types;

pub use history::migrate_history;
pub use types::{HistoryEntry, LastChecked, SessionContext};
