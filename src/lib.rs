//! Terminal client for an AI-reranked Stack Overflow question search
//! backend.
//!
//! The library half holds everything the interactive session needs: the
//! REST client, the background fetch worker, the session state machine,
//! and the ratatui rendering code. The binary adds CLI parsing and the
//! configuration pipeline on top.

pub mod api;
pub mod app;
pub mod app_dirs;
pub mod fetch;
pub mod logging;
pub mod text;
pub mod theme;
pub mod types;
pub mod ui;

pub use crate::api::ApiClient;
pub use crate::app::App;
pub use crate::theme::Theme;
pub use crate::types::SessionOutcome;
