//! HTTP request handlers

use axum::extract::{Query, State};
use axum::http::StatusCode;
use axum::response::IntoResponse;
use axum::Json;
use serde::{Deserialize, Serialize};
use std::sync::Arc;
use tracing::{error, info};

use spamcheck_rs::assistant::{AnswerKind, CheckOutcome, EMPTY_INPUT_NOTICE};
use spamcheck_rs::classifier::Label;
use spamcheck_rs::session::{migrate_history, SessionContext};

use crate::error::RuntimeError;
use crate::history::{HistoryRecord, HistoryStats, DEFAULT_HISTORY_LIMIT};
use crate::state::AppState;

/// API error response
#[derive(Debug, Serialize)]
pub struct ApiError {
    pub error: String,
}

impl ApiError {
    pub fn new(msg: &str) -> Self {
        Self {
            error: msg.to_string(),
        }
    }
}

fn internal_error(e: RuntimeError) -> (StatusCode, Json<ApiError>) {
    error!("❌ {}", e);
    (
        StatusCode::INTERNAL_SERVER_ERROR,
        Json(ApiError::new(&e.to_string())),
    )
}

/// Check request body
#[derive(Debug, Deserialize)]
pub struct CheckRequest {
    pub session_id: String,
    pub message: String,
}

/// Check response
#[derive(Debug, Serialize)]
pub struct CheckResponse {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub label: Option<Label>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub ham_probability: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub spam_probability: Option<f64>,
    /// Rendered bot reply: the colored verdict, or the empty-input warning.
    pub reply: String,
}

/// Ask request body
#[derive(Debug, Deserialize)]
pub struct AskRequest {
    pub session_id: String,
    pub question: String,
}

/// Ask response
#[derive(Debug, Serialize)]
pub struct AskResponse {
    pub kind: AnswerKind,
    pub answer: String,
}

/// History listing query
#[derive(Debug, Deserialize)]
pub struct HistoryQuery {
    pub session_id: String,
    /// "all" (default), "spam", or "ham"
    pub filter: Option<String>,
    pub limit: Option<usize>,
}

/// History response
#[derive(Debug, Serialize)]
pub struct HistoryResponse {
    pub stats: HistoryStats,
    pub entries: Vec<HistoryRecord>,
}

/// Legacy history import body
#[derive(Debug, Deserialize)]
pub struct ImportRequest {
    pub session_id: String,
    /// Raw legacy values in whatever shape the old store kept them.
    pub entries: Vec<serde_json::Value>,
}

/// Import response
#[derive(Debug, Serialize)]
pub struct ImportResponse {
    pub imported: usize,
}

/// Reload response
#[derive(Debug, Serialize)]
pub struct ReloadResponse {
    pub status: String,
    pub features: usize,
}

/// GET / - service banner
pub async fn index() -> impl IntoResponse {
    Json(serde_json::json!({
        "service": "assistant-runtime",
        "title": "🤖 AI-Based Spam Mail & Message Detector with Awareness Chatbot",
        "subtitle": "AI-powered assistant to detect and learn about scam messages 📩"
    }))
}

/// GET /health - health check endpoint
pub async fn health() -> impl IntoResponse {
    Json(serde_json::json!({
        "status": "healthy",
        "service": "assistant-runtime",
        "version": "0.1.0"
    }))
}

/// POST /api/check - classify a message and append it to the history
pub async fn check(
    State(state): State<Arc<AppState>>,
    Json(req): Json<CheckRequest>,
) -> Result<Json<CheckResponse>, (StatusCode, Json<ApiError>)> {
    info!("📥 Check request from session {}", req.session_id);

    let outcome = {
        let mut sessions = state.sessions.write().await;
        let ctx = sessions
            .entry(req.session_id.clone())
            .or_insert_with(SessionContext::new);
        state
            .assistant
            .check(ctx, &req.message)
            .map_err(|e| internal_error(e.into()))?
    };

    match outcome {
        CheckOutcome::EmptyInput => Ok(Json(CheckResponse {
            label: None,
            ham_probability: None,
            spam_probability: None,
            reply: EMPTY_INPUT_NOTICE.to_string(),
        })),
        CheckOutcome::Classified(report) => {
            state
                .history
                .append(&req.session_id, &report.entry)
                .await
                .map_err(internal_error)?;

            info!(
                "📤 Session {} verdict: {}",
                req.session_id, report.classification.label
            );

            Ok(Json(CheckResponse {
                label: Some(report.classification.label),
                ham_probability: Some(report.classification.ham_probability),
                spam_probability: Some(report.classification.spam_probability),
                reply: report.reply_html,
            }))
        }
    }
}

/// POST /api/ask - answer a follow-up question about the last check
pub async fn ask(
    State(state): State<Arc<AppState>>,
    Json(req): Json<AskRequest>,
) -> Result<Json<AskResponse>, (StatusCode, Json<ApiError>)> {
    info!("📥 Question from session {}: {}", req.session_id, req.question);

    // an unknown session simply has no context yet
    let ctx = {
        let sessions = state.sessions.read().await;
        sessions.get(&req.session_id).cloned().unwrap_or_default()
    };

    let answer = state
        .assistant
        .answer(&ctx, &req.question)
        .map_err(|e| internal_error(e.into()))?;

    Ok(Json(AskResponse {
        kind: answer.kind,
        answer: answer.html,
    }))
}

/// GET /api/history - stats plus recent entries for a session
pub async fn history(
    State(state): State<Arc<AppState>>,
    Query(query): Query<HistoryQuery>,
) -> Result<Json<HistoryResponse>, (StatusCode, Json<ApiError>)> {
    let filter = match query.filter.as_deref() {
        None => None,
        Some(raw) if raw.eq_ignore_ascii_case("all") => None,
        Some(raw) => match Label::parse(raw) {
            Some(label) => Some(label),
            None => {
                return Err((
                    StatusCode::BAD_REQUEST,
                    Json(ApiError::new("filter must be all, spam, or ham")),
                ))
            }
        },
    };
    let limit = query.limit.unwrap_or(DEFAULT_HISTORY_LIMIT);

    let stats = state
        .history
        .stats(&query.session_id)
        .await
        .map_err(internal_error)?;
    let entries = state
        .history
        .recent(&query.session_id, filter, limit)
        .await
        .map_err(internal_error)?;

    Ok(Json(HistoryResponse { stats, entries }))
}

/// POST /api/history/import - migrate legacy history entries
pub async fn import_history(
    State(state): State<Arc<AppState>>,
    Json(req): Json<ImportRequest>,
) -> Result<Json<ImportResponse>, (StatusCode, Json<ApiError>)> {
    let bundle = state
        .assistant
        .store()
        .load()
        .map_err(|e| internal_error(e.into()))?;

    let entries = migrate_history(&req.entries, &bundle);
    let imported = state
        .history
        .import(&req.session_id, &entries)
        .await
        .map_err(internal_error)?;

    info!(
        "🧹 Imported {} legacy history entries for session {}",
        imported, req.session_id
    );

    Ok(Json(ImportResponse { imported }))
}

/// POST /api/admin/reload - hot-swap the model artifacts
pub async fn reload_artifacts(
    State(state): State<Arc<AppState>>,
) -> Result<Json<ReloadResponse>, (StatusCode, Json<ApiError>)> {
    let bundle = state
        .assistant
        .store()
        .reload()
        .map_err(|e| internal_error(e.into()))?;

    Ok(Json(ReloadResponse {
        status: "reloaded".to_string(),
        features: bundle.dim(),
    }))
}
