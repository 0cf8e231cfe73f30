//! # TUI Components
//!
//! All UI components for the comparison screen.
//!
//! ## Component Architecture
//!
//! ### Stateless Components (Props-Based Rendering)
//!
//! Display components that receive all data as struct fields:
//! - `TitleBar`: server address and last status message
//! - `ErrorBanner`: the failure notice, only drawn while `App::error` is set
//! - `ResultsPanel`: the (empty) results container
//!
//! ### Stateful Components (Event-Driven)
//!
//! Components that manage local state and emit events:
//! - `HandleInput`: single-line text field with placeholder
//! - `GoButton`: focusable, hoverable button
//!
//! ## Props-Based Data Flow
//!
//! Components receive external data as props, not by reaching into `App`.
//!
//! ```rust,ignore
//! // Good: dependencies are explicit
//! TitleBar::new(server_url, app.status_message.clone()).render(frame, area);
//! ```
//!
//! ## Module Structure
//!
//! ```text
//! components/
//! ├── mod.rs            (this file)
//! ├── title_bar.rs      (Top status bar)
//! ├── handle_input/     (Text field + cursor/scroll)
//! ├── go_button.rs      (The Go button)
//! ├── error_banner.rs   (Failure notice)
//! └── results_panel.rs  (Results container)
//! ```

pub mod error_banner;
pub mod go_button;
pub mod handle_input;
pub mod results_panel;
mod title_bar;

pub use error_banner::ErrorBanner;
pub use go_button::{ButtonEvent, GoButton};
pub use handle_input::{HandleEvent, HandleInput};
pub use results_panel::ResultsPanel;
pub use title_bar::TitleBar;
