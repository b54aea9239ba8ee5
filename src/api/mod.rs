//! HTTP API module
//!
//! This module contains all HTTP endpoint handlers and response structures.

pub mod handlers;
pub mod responses;

use std::sync::Arc;
use axum::{
    routing::{delete, get, post, put},
    Router,
};
use tower_http::{cors::CorsLayer, trace::TraceLayer};

use crate::state::AppState;
use handlers::*;

/// Create the HTTP router with all endpoints
pub fn create_router(state: Arc<AppState>) -> Router {
    Router::new()
        .route("/timer", get(timer_handler))
        .route("/timer/start", post(timer_start_handler))
        .route("/timer/pause", post(timer_pause_handler))
        .route("/timer/reset", post(timer_reset_handler))
        .route("/timer/minutes", put(timer_minutes_handler))
        .route("/documents", get(list_documents_handler).post(create_document_handler))
        .route("/documents/active", get(active_document_handler))
        .route("/documents/active/content", put(set_content_handler))
        .route("/documents/active/indent", post(indent_handler))
        .route("/documents/active/copy", post(copy_handler))
        .route("/documents/:id", delete(close_handler))
        .route("/documents/:id/activate", post(activate_handler))
        .route("/documents/:id/rename", post(rename_handler))
        .route("/documents/:id/rename/begin", post(begin_rename_handler))
        .route("/rename", put(update_rename_handler))
        .route("/rename/submit", post(submit_rename_handler))
        .route("/rename/blur", post(blur_rename_handler))
        .route("/rename/cancel", post(cancel_rename_handler))
        .route("/notifications", get(notifications_handler))
        .route("/status", get(status_handler))
        .route("/health", get(health_handler))
        .layer(CorsLayer::permissive())
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}
