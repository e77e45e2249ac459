//! Shared application state and router assembly

use std::collections::HashMap;
use std::sync::Arc;

use axum::routing::{get, post};
use axum::Router;
use spamcheck_rs::artifacts::ArtifactStore;
use spamcheck_rs::assistant::Assistant;
use spamcheck_rs::session::SessionContext;
use tokio::sync::RwLock;
use tower_http::cors::{Any, CorsLayer};
use tower_http::trace::TraceLayer;

use crate::handlers;
use crate::history::HistoryStore;

/// Application state shared by all handlers.
pub struct AppState {
    pub assistant: Assistant,
    /// Per-session conversation contexts, keyed by the caller's session id.
    pub sessions: RwLock<HashMap<String, SessionContext>>,
    pub history: HistoryStore,
}

impl AppState {
    pub fn new(store: Arc<ArtifactStore>, history: HistoryStore) -> Self {
        Self {
            assistant: Assistant::new(store),
            sessions: RwLock::new(HashMap::new()),
            history,
        }
    }
}

/// Build the router with all routes.
pub fn build_router(state: Arc<AppState>) -> Router {
    // CORS configuration
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any);

    Router::new()
        .route("/", get(handlers::index))
        .route("/health", get(handlers::health))
        .route("/api/check", post(handlers::check))
        .route("/api/ask", post(handlers::ask))
        .route("/api/history", get(handlers::history))
        .route("/api/history/import", post(handlers::import_history))
        .route("/api/admin/reload", post(handlers::reload_artifacts))
        .layer(TraceLayer::new_for_http())
        .layer(cors)
        .with_state(state)
}
