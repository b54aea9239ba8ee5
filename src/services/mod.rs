//! Host service module
//! 
//! This module contains the side effects delegated to the host environment,
//! such as the system clipboard.

pub mod clipboard;

// Re-export main functions
pub use clipboard::*;
