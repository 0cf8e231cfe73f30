//! # TitleBar Component
//!
//! Top status bar showing the backend address and the last status message.
//!
//! ## Conditional Formatting
//!
//! 1. **Status message**: `"Kindred (server: http://127.0.0.1:5000) | Comparison complete"`
//! 2. **Default**: `"Kindred (server: http://127.0.0.1:5000)"`
//!
//! TitleBar is purely presentational. It receives all data as props and has
//! no internal state.

use crate::tui::component::Component;
use ratatui::Frame;
use ratatui::layout::Rect;
use ratatui::style::{Color, Style};
use ratatui::text::{Line, Span};

/// # Props
///
/// - `server_url`: base URL of the comparison backend (configuration)
/// - `status_message`: last status from `App` (e.g. "Comparison complete")
pub struct TitleBar {
    pub server_url: String,
    pub status_message: Option<String>,
}

impl TitleBar {
    pub fn new(server_url: String, status_message: Option<String>) -> Self {
        Self {
            server_url,
            status_message,
        }
    }
}

impl Component for TitleBar {
    fn render(&mut self, frame: &mut Frame, area: Rect) {
        let mut spans = vec![Span::raw(format!("Kindred (server: {})", self.server_url))];
        if let Some(status) = &self.status_message {
            spans.push(Span::raw(" | "));
            spans.push(Span::styled(
                status.clone(),
                Style::default().fg(Color::LightGreen),
            ));
        }

        frame.render_widget(Line::from(spans), area);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use ratatui::Terminal;
    use ratatui::backend::TestBackend;

    fn rendered(title_bar: &mut TitleBar) -> String {
        let backend = TestBackend::new(80, 1);
        let mut terminal = Terminal::new(backend).unwrap();
        terminal
            .draw(|f| {
                title_bar.render(f, f.area());
            })
            .unwrap();

        terminal
            .backend()
            .buffer()
            .content()
            .iter()
            .map(|c| c.symbol())
            .collect::<String>()
    }

    #[test]
    fn test_title_bar_with_status_message() {
        let mut title_bar = TitleBar::new(
            "http://127.0.0.1:5000".to_string(),
            Some("Comparison complete".to_string()),
        );

        let text = rendered(&mut title_bar);

        assert!(text.contains("Kindred"));
        assert!(text.contains("http://127.0.0.1:5000"));
        assert!(text.contains("| Comparison complete"));
    }

    #[test]
    fn test_title_bar_default_no_status() {
        let mut title_bar = TitleBar::new("http://127.0.0.1:5000".to_string(), None);

        let text = rendered(&mut title_bar);

        assert!(text.contains("Kindred"));
        assert!(!text.contains('|'));
    }
}
