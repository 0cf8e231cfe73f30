//! # ResultsPanel Component
//!
//! Container for comparison results. The backend's body is logged, not
//! interpreted, so the panel is drawn empty.

use ratatui::Frame;
use ratatui::layout::Rect;
use ratatui::style::{Color, Style};
use ratatui::widgets::{Block, BorderType};

use crate::tui::component::Component;

#[derive(Debug, Default)]
pub struct ResultsPanel;

impl Component for ResultsPanel {
    fn render(&mut self, frame: &mut Frame, area: Rect) {
        let block = Block::bordered()
            .border_type(BorderType::Rounded)
            .border_style(Style::default().fg(Color::DarkGray))
            .title("Results");
        frame.render_widget(block, area);
    }
}
