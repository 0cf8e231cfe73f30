//! # GoButton Component
//!
//! The "Go" button that triggers a comparison. Pressed with Enter or Space
//! while focused, or with a left click anywhere inside its area (the click
//! hit test lives in `ui.rs`, next to the layout it depends on).

use ratatui::Frame;
use ratatui::layout::{Alignment, Rect};
use ratatui::style::{Color, Modifier, Style};
use ratatui::widgets::{Block, BorderType, Paragraph};

use crate::tui::component::{Component, EventHandler};
use crate::tui::event::TuiEvent;

pub const LABEL: &str = "Go";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ButtonEvent {
    Pressed,
}

/// # Props
///
/// - `focused`: keyboard focus is on the button
/// - `hovered`: mouse pointer is over the button
#[derive(Debug, Default)]
pub struct GoButton {
    pub focused: bool,
    pub hovered: bool,
}

impl GoButton {
    pub fn new() -> Self {
        Self::default()
    }

    fn style(&self) -> Style {
        let base = Style::default().fg(Color::Black).bg(Color::Green);
        if self.focused || self.hovered {
            base.add_modifier(Modifier::BOLD).bg(Color::LightGreen)
        } else {
            base
        }
    }
}

impl Component for GoButton {
    fn render(&mut self, frame: &mut Frame, area: Rect) {
        let border_style = if self.focused {
            Style::default().fg(Color::LightGreen)
        } else {
            Style::default().fg(Color::Green)
        };
        let button = Paragraph::new(LABEL)
            .alignment(Alignment::Center)
            .style(self.style())
            .block(
                Block::bordered()
                    .border_type(BorderType::Thick)
                    .border_style(border_style),
            );
        frame.render_widget(button, area);
    }
}

impl EventHandler for GoButton {
    type Event = ButtonEvent;

    fn handle_event(&mut self, event: &TuiEvent) -> Option<Self::Event> {
        match event {
            TuiEvent::Submit | TuiEvent::InputChar(' ') => Some(ButtonEvent::Pressed),
            _ => None,
        }
    }
}
