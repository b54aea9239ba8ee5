//! HTTP endpoint handlers

use std::sync::Arc;
use axum::{
    extract::{Path, State},
    http::StatusCode,
    response::Json,
};
use tracing::info;

use crate::{
    error::PadResult,
    services::copy_active_document,
    state::{AppState, DocumentId, Notification},
};
use super::responses::{
    ContentRequest, CopyResponse, CreateDocumentRequest, DocumentResponse, HealthResponse,
    IndentRequest, IndentResponse, MinutesRequest, NameRequest, StatusResponse, TabsResponse,
    TimerResponse,
};

/// Handle GET /timer
pub async fn timer_handler(State(state): State<Arc<AppState>>) -> PadResult<Json<TimerResponse>> {
    Ok(Json(state.get_timer_state()?.into()))
}

/// Handle POST /timer/start
pub async fn timer_start_handler(State(state): State<Arc<AppState>>) -> PadResult<Json<TimerResponse>> {
    Ok(Json(state.start_timer()?.into()))
}

/// Handle POST /timer/pause
pub async fn timer_pause_handler(State(state): State<Arc<AppState>>) -> PadResult<Json<TimerResponse>> {
    Ok(Json(state.pause_timer()?.into()))
}

/// Handle POST /timer/reset
pub async fn timer_reset_handler(State(state): State<Arc<AppState>>) -> PadResult<Json<TimerResponse>> {
    Ok(Json(state.reset_timer()?.into()))
}

/// Handle PUT /timer/minutes - clamps to 1-60 and rewinds the countdown
pub async fn timer_minutes_handler(
    State(state): State<Arc<AppState>>,
    Json(request): Json<MinutesRequest>,
) -> PadResult<Json<TimerResponse>> {
    Ok(Json(state.set_timer_minutes(request.minutes.value())?.into()))
}

/// Handle GET /documents - the tab strip
pub async fn list_documents_handler(State(state): State<Arc<AppState>>) -> PadResult<Json<TabsResponse>> {
    Ok(Json(state.read_documents(TabsResponse::from_store)?))
}

/// Handle POST /documents - add a generic or language tab
pub async fn create_document_handler(
    State(state): State<Arc<AppState>>,
    Json(request): Json<CreateDocumentRequest>,
) -> PadResult<(StatusCode, Json<DocumentResponse>)> {
    let doc = state.with_documents("create", |store| {
        Ok(DocumentResponse::from_document(store.create_document(request.kind)))
    })?;
    Ok((StatusCode::CREATED, Json(doc)))
}

/// Handle GET /documents/active
pub async fn active_document_handler(State(state): State<Arc<AppState>>) -> PadResult<Json<DocumentResponse>> {
    Ok(Json(state.read_documents(DocumentResponse::active)?))
}

/// Handle PUT /documents/active/content
pub async fn set_content_handler(
    State(state): State<Arc<AppState>>,
    Json(request): Json<ContentRequest>,
) -> PadResult<Json<DocumentResponse>> {
    let doc = state.with_documents("edit", |store| {
        store.set_active_content(request.content);
        Ok(DocumentResponse::active(store))
    })?;
    Ok(Json(doc))
}

/// Handle POST /documents/active/indent - the tab key
pub async fn indent_handler(
    State(state): State<Arc<AppState>>,
    Json(request): Json<IndentRequest>,
) -> PadResult<Json<IndentResponse>> {
    let response = state.with_documents("indent", |store| {
        let cursor = store.insert_indent_at_cursor(request.start, request.end);
        Ok(IndentResponse {
            content: store.active().content.clone(),
            cursor,
        })
    })?;
    Ok(Json(response))
}

/// Handle POST /documents/active/copy
pub async fn copy_handler(State(state): State<Arc<AppState>>) -> PadResult<Json<CopyResponse>> {
    let copied = copy_active_document(state).await?;
    Ok(Json(CopyResponse { copied }))
}

/// Handle POST /documents/:id/activate
pub async fn activate_handler(
    State(state): State<Arc<AppState>>,
    Path(id): Path<DocumentId>,
) -> PadResult<Json<TabsResponse>> {
    let tabs = state.with_documents("activate", |store| {
        let index = store.index_of(id)?;
        store.switch_to(index)?;
        Ok(TabsResponse::from_store(store))
    })?;
    Ok(Json(tabs))
}

/// Handle DELETE /documents/:id - refused for the last remaining document
pub async fn close_handler(
    State(state): State<Arc<AppState>>,
    Path(id): Path<DocumentId>,
) -> PadResult<Json<TabsResponse>> {
    let tabs = state.with_documents("close", |store| {
        let index = store.index_of(id)?;
        store.close_document(index)?;
        Ok(TabsResponse::from_store(store))
    })?;
    Ok(Json(tabs))
}

/// Handle POST /documents/:id/rename - rename in one step
pub async fn rename_handler(
    State(state): State<Arc<AppState>>,
    Path(id): Path<DocumentId>,
    Json(request): Json<NameRequest>,
) -> PadResult<Json<DocumentResponse>> {
    let doc = state.with_documents("rename", |store| {
        let index = store.index_of(id)?;
        store
            .rename_document(index, &request.name)
            .map(DocumentResponse::from_document)
    })?;
    Ok(Json(doc))
}

/// Handle POST /documents/:id/rename/begin
pub async fn begin_rename_handler(
    State(state): State<Arc<AppState>>,
    Path(id): Path<DocumentId>,
) -> PadResult<Json<TabsResponse>> {
    let tabs = state.with_documents("rename-begin", |store| {
        let index = store.index_of(id)?;
        store.begin_rename(index)?;
        Ok(TabsResponse::from_store(store))
    })?;
    Ok(Json(tabs))
}

/// Handle PUT /rename - keystrokes in the rename field
pub async fn update_rename_handler(
    State(state): State<Arc<AppState>>,
    Json(request): Json<NameRequest>,
) -> PadResult<Json<TabsResponse>> {
    let tabs = state.with_documents("rename-edit", |store| {
        store.update_rename(request.name)?;
        Ok(TabsResponse::from_store(store))
    })?;
    Ok(Json(tabs))
}

/// Handle POST /rename/submit - Enter; an empty name keeps the field open
pub async fn submit_rename_handler(State(state): State<Arc<AppState>>) -> PadResult<Json<DocumentResponse>> {
    let doc = state.with_documents("rename-submit", |store| {
        store.submit_rename().map(DocumentResponse::from_document)
    })?;
    Ok(Json(doc))
}

/// Handle POST /rename/blur - focus loss; an empty name closes the field
pub async fn blur_rename_handler(State(state): State<Arc<AppState>>) -> PadResult<Json<DocumentResponse>> {
    let doc = state.with_documents("rename-blur", |store| {
        store.blur_rename().map(DocumentResponse::from_document)
    })?;
    Ok(Json(doc))
}

/// Handle POST /rename/cancel - Escape
pub async fn cancel_rename_handler(State(state): State<Arc<AppState>>) -> PadResult<Json<TabsResponse>> {
    let tabs = state.with_documents("rename-cancel", |store| {
        store.cancel_rename();
        Ok(TabsResponse::from_store(store))
    })?;
    Ok(Json(tabs))
}

/// Handle GET /notifications - drains the queue
pub async fn notifications_handler(State(state): State<Arc<AppState>>) -> PadResult<Json<Vec<Notification>>> {
    let notifications = state.take_notifications()?;
    if !notifications.is_empty() {
        info!("Delivering {} notifications", notifications.len());
    }
    Ok(Json(notifications))
}

/// Handle GET /status - Return current timer and tab status
pub async fn status_handler(State(state): State<Arc<AppState>>) -> PadResult<Json<StatusResponse>> {
    let timer = state.get_timer_state()?;
    let tabs = state.read_documents(TabsResponse::from_store)?;
    let pending_notifications = state.pending_notifications()?;
    let (last_action, last_action_time) = state.get_last_action();

    Ok(Json(StatusResponse {
        timer: timer.into(),
        tabs,
        pending_notifications,
        uptime: state.get_uptime(),
        port: state.port,
        host: state.host.clone(),
        last_action,
        last_action_time,
    }))
}

/// Handle GET /health - Health check endpoint
pub async fn health_handler() -> Json<HealthResponse> {
    Json(HealthResponse::ok())
}
