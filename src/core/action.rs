//! # Actions
//!
//! Everything that can happen in Kindred becomes an `Action`.
//! User edits the handle? That's `Action::HandleEdited(text)`.
//! Backend responds? That's `Action::ComparisonSucceeded { .. }`.
//!
//! The `update()` function applies an action to the state and returns an
//! `Effect` describing the I/O the caller must perform. No side effects here.
//!
//! ```text
//! State + Action  →  update()  →  New State + Effect
//! ```
//!
//! Completions are applied in the order they arrive. Two overlapping
//! comparisons are not reconciled: whichever result is processed last decides
//! what the user sees.

use log::{debug, info, warn};
use serde_json::Value;

use crate::core::handle::clean_handle;
use crate::core::state::{App, COMPARISON_COMPLETE, COMPARISON_FAILED};

#[derive(Debug, Clone, PartialEq)]
pub enum Action {
    /// The text field changed. Carries the full raw contents.
    HandleEdited(String),
    /// The user pressed Go.
    Compare,
    /// A spawned request came back with a success status and a JSON body.
    ComparisonSucceeded { request_id: String, body: Value },
    /// A spawned request failed. `reason` is for the log only.
    ComparisonFailed { request_id: String, reason: String },
    Quit,
}

/// I/O the event loop performs after `update()` returns.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Effect {
    None,
    /// Issue `GET /compare/{handle}` in the background.
    SpawnComparison { handle: String },
    Quit,
}

pub fn update(app: &mut App, action: Action) -> Effect {
    match action {
        Action::HandleEdited(text) => {
            app.handle = text;
            Effect::None
        }
        Action::Compare => {
            if app.handle.is_empty() {
                debug!("Compare requested with empty handle, ignoring");
                return Effect::None;
            }
            let handle = clean_handle(&app.handle);
            info!("Comparison requested for handle '{}'", handle);
            Effect::SpawnComparison { handle }
        }
        Action::ComparisonSucceeded { request_id, body } => {
            info!("Comparison {} succeeded: {}", request_id, body);
            app.status_message = Some(COMPARISON_COMPLETE.to_string());
            app.error = None;
            Effect::None
        }
        Action::ComparisonFailed { request_id, reason } => {
            warn!("Comparison {} failed: {}", request_id, reason);
            app.error = Some(COMPARISON_FAILED.to_string());
            Effect::None
        }
        Action::Quit => Effect::Quit,
    }
}
