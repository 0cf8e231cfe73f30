//! # Application State
//!
//! Core view state for Kindred. This module contains domain state only,
//! no TUI-specific types. Presentation state lives in the `tui` module.
//!
//! ```text
//! App
//! ├── backend: Arc<dyn CompareBackend>  // comparison service
//! ├── handle: String                    // raw input, verbatim
//! ├── status_message: Option<String>    // last success notice
//! └── error: Option<String>             // last failure notice
//! ```
//!
//! State changes only happen through `update(state, action)` in action.rs.

use std::sync::Arc;

use crate::api::CompareBackend;

/// Shown after the backend answers with a success status and a JSON body.
pub const COMPARISON_COMPLETE: &str = "Comparison complete";

/// Shown for every failure: transport, HTTP status, or unreadable body.
pub const COMPARISON_FAILED: &str = "Failed to help you make a friend";

pub struct App {
    pub backend: Arc<dyn CompareBackend>,
    pub handle: String,
    pub status_message: Option<String>,
    pub error: Option<String>,
}

impl App {
    pub fn new(backend: Arc<dyn CompareBackend>) -> Self {
        Self {
            backend,
            handle: String::new(),
            status_message: None,
            error: None,
        }
    }
}
