//! Error types shared by the stores, the API and the host services

use thiserror::Error;

use crate::state::DocumentId;

/// Rejections produced by pad operations.
///
/// Every store operation that returns one of these leaves its state untouched.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum PadError {
    #[error("cannot close the last remaining document")]
    LastDocument,

    #[error("no document at index {0}")]
    NoSuchIndex(usize),

    #[error("no document with id {0}")]
    NoSuchDocument(DocumentId),

    #[error("document name must not be empty")]
    EmptyName,

    #[error("no rename in progress")]
    NoRenameSession,

    #[error("failed to lock {0} state")]
    Poisoned(&'static str),

    #[error("clipboard unavailable: {0}")]
    Clipboard(String),
}

pub type PadResult<T> = Result<T, PadError>;
