//! Pomodoro Pad - A focus timer and multi-tab code scratchpad
//! 
//! This library provides the two independent stores behind the pad (the
//! tab/document store and the countdown timer), the background task that drives
//! the countdown, and the HTTP API a front end uses to work with both.

pub mod config;
pub mod error;
pub mod state;
pub mod templates;
pub mod api;
pub mod services;
pub mod tasks;
pub mod utils;

// Re-export commonly used types
pub use config::Config;
pub use error::{PadError, PadResult};
pub use state::AppState;
pub use api::create_router;
pub use utils::signals::shutdown_signal;
