//! Utility functions module
//! 
//! Text helpers for document content plus process signal handling.

pub mod signals;
pub mod text;

// Re-export main functions
pub use signals::shutdown_signal;
pub use text::{format_time, insert_indent, line_numbers, parse_minutes, rewrite_java_class};
