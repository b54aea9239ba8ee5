//! State management module
//! 
//! This module contains the document store, the timer and the application state
//! that owns both.

pub mod app_state;
pub mod document_store;
pub mod notification;
pub mod timer_state;

// Re-export main types
pub use app_state::AppState;
pub use document_store::{Document, DocumentId, DocumentStore, RenameSession};
pub use notification::{Notification, NotificationKind, NotificationLog};
pub use timer_state::{TickOutcome, TimerState};
