//! assistant-runtime: HTTP service around the spam classifier
//!
//! Serves the check/ask assistant flow over a JSON API, keeps per-session
//! conversation contexts in memory, and persists check history to SQLite.
//!
//! # Endpoints
//!
//! - `GET /`, `GET /health`: service info
//! - `POST /api/check`: classify a message, append it to the history
//! - `POST /api/ask`: answer a follow-up question about the last check
//! - `GET /api/history`: stats plus recent entries, filterable by label
//! - `POST /api/history/import`: migrate legacy history entries
//! - `POST /api/admin/reload`: hot-swap the model artifacts

pub mod config;
pub mod error;
pub mod handlers;
pub mod history;
pub mod state;

// Re-export commonly used types
pub use config::RuntimeConfig;
pub use error::{Result, RuntimeError};
pub use state::{build_router, AppState};
