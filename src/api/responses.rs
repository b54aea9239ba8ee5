//! API request and response structures

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use chrono::{DateTime, Utc};
use serde::{de::IgnoredAny, Deserialize, Serialize};

use crate::{
    error::PadError,
    state::{Document, DocumentId, DocumentStore, RenameSession, TimerState},
    templates::DocumentKind,
    utils::text::{format_time, parse_minutes},
};

/// Timer view returned by every timer endpoint
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TimerResponse {
    pub running: bool,
    pub remaining_seconds: u64,
    pub configured_minutes: u32,
    pub display: String,
}

impl From<TimerState> for TimerResponse {
    fn from(timer: TimerState) -> Self {
        Self {
            running: timer.running,
            remaining_seconds: timer.remaining_seconds,
            configured_minutes: timer.configured_minutes,
            display: format_time(timer.remaining_seconds),
        }
    }
}

/// One entry of the tab strip
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TabSummary {
    pub id: DocumentId,
    pub name: String,
    pub active: bool,
    pub renaming: bool,
}

/// The tab strip: every document name plus the rename in progress
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TabsResponse {
    pub active_index: usize,
    pub tabs: Vec<TabSummary>,
    pub rename: Option<RenameSession>,
    /// Closing is only offered while more than one tab exists
    pub can_close: bool,
}

impl TabsResponse {
    pub fn from_store(store: &DocumentStore) -> Self {
        let rename = store.rename_session().cloned();
        let tabs = store
            .documents()
            .iter()
            .enumerate()
            .map(|(index, doc)| TabSummary {
                id: doc.id,
                name: doc.name.clone(),
                active: index == store.active_index(),
                renaming: rename.as_ref().is_some_and(|r| r.id == doc.id),
            })
            .collect();

        Self {
            active_index: store.active_index(),
            tabs,
            rename,
            can_close: store.len() > 1,
        }
    }
}

/// A document with its derived line numbers
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DocumentResponse {
    pub id: DocumentId,
    pub name: String,
    pub content: String,
    pub line_numbers: Vec<usize>,
}

impl DocumentResponse {
    pub fn active(store: &DocumentStore) -> Self {
        Self::from_document(store.active())
    }

    pub fn from_document(doc: &Document) -> Self {
        Self {
            id: doc.id,
            name: doc.name.clone(),
            content: doc.content.clone(),
            line_numbers: crate::utils::text::line_numbers(&doc.content),
        }
    }
}

/// Result of an indent key press
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct IndentResponse {
    pub content: String,
    pub cursor: usize,
}

/// Combined status of both stores
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct StatusResponse {
    pub timer: TimerResponse,
    pub tabs: TabsResponse,
    pub pending_notifications: usize,
    pub uptime: String,
    pub port: u16,
    pub host: String,
    pub last_action: Option<String>,
    pub last_action_time: Option<DateTime<Utc>>,
}

/// Health check response
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct HealthResponse {
    pub status: String,
    pub timestamp: DateTime<Utc>,
    pub version: String,
}

impl HealthResponse {
    /// Create a new health response
    pub fn ok() -> Self {
        Self {
            status: "ok".to_string(),
            timestamp: Utc::now(),
            version: env!("CARGO_PKG_VERSION").to_string(),
        }
    }
}

/// Response for the clipboard copy endpoint
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CopyResponse {
    pub copied: String,
}

/// Body of a failed request
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ErrorResponse {
    pub status: String,
    pub message: String,
    pub timestamp: DateTime<Utc>,
}

impl IntoResponse for PadError {
    fn into_response(self) -> Response {
        let status = match self {
            PadError::LastDocument | PadError::NoRenameSession => StatusCode::CONFLICT,
            PadError::NoSuchIndex(_) | PadError::NoSuchDocument(_) => StatusCode::NOT_FOUND,
            PadError::EmptyName => StatusCode::UNPROCESSABLE_ENTITY,
            PadError::Clipboard(_) => StatusCode::SERVICE_UNAVAILABLE,
            PadError::Poisoned(_) => StatusCode::INTERNAL_SERVER_ERROR,
        };

        let body = ErrorResponse {
            status: "error".to_string(),
            message: self.to_string(),
            timestamp: Utc::now(),
        };
        (status, Json(body)).into_response()
    }
}

#[derive(Debug, Clone, Deserialize)]
pub struct CreateDocumentRequest {
    pub kind: DocumentKind,
}

#[derive(Debug, Clone, Deserialize)]
pub struct ContentRequest {
    pub content: String,
}

#[derive(Debug, Clone, Deserialize)]
pub struct IndentRequest {
    pub start: usize,
    pub end: usize,
}

#[derive(Debug, Clone, Deserialize)]
pub struct NameRequest {
    pub name: String,
}

/// A minutes field as typed into a number input
///
/// Never rejected: whatever arrives is turned into a number and clamped later.
#[derive(Debug, Clone, Deserialize)]
#[serde(untagged)]
pub enum MinutesInput {
    Number(i64),
    /// Fractions, exponents and integers past `i64`
    Float(f64),
    Text(String),
    /// `null`, booleans and anything else, read as 0
    Other(IgnoredAny),
}

impl MinutesInput {
    pub fn value(&self) -> i64 {
        match self {
            MinutesInput::Number(value) => *value,
            // Truncates toward zero and saturates; NaN becomes 0
            MinutesInput::Float(value) => *value as i64,
            MinutesInput::Text(text) => parse_minutes(text),
            MinutesInput::Other(_) => 0,
        }
    }
}

impl Default for MinutesInput {
    fn default() -> Self {
        MinutesInput::Other(IgnoredAny)
    }
}

#[derive(Debug, Clone, Deserialize)]
pub struct MinutesRequest {
    #[serde(default)]
    pub minutes: MinutesInput,
}
