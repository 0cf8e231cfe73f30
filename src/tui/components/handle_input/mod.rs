//! # HandleInput Component
//!
//! Single-line text field for the handle, with a dimmed placeholder
//! ("Twitter handle") while empty.
//!
//! ## Responsibilities
//!
//! - Capture text input (typing, paste, backspace, delete, cursor movement)
//! - Report every edit with the full buffer so the parent can mirror it into `App`
//! - Emit `Submit` on Enter. The buffer is *not* cleared on submit.
//!
//! ## State Management
//!
//! The buffer and cursor are internal state. `focused` is a prop from the
//! parent's focus tracking.

mod cursor;

use ratatui::Frame;
use ratatui::layout::Rect;
use ratatui::style::{Color, Modifier, Style};
use ratatui::widgets::{Block, BorderType, Paragraph};

use crate::tui::component::{Component, EventHandler};
use crate::tui::event::TuiEvent;

use cursor::{CursorState, next_char_boundary, prev_char_boundary, visible_slice};

pub const PLACEHOLDER: &str = "Twitter handle";

/// High-level events emitted by the HandleInput
#[derive(Debug, Clone, PartialEq)]
pub enum HandleEvent {
    /// Buffer contents changed. Carries the whole buffer, verbatim.
    Changed(String),
    /// Cursor moved without changing the text
    CursorMoved,
    /// User pressed Enter
    Submit,
}

/// Text field for the handle.
///
/// # Props
///
/// - `focused`: whether keyboard input is routed here
///
/// # State
///
/// - `buffer`: current text
/// - `cursor`: cursor byte offset and horizontal scroll (see `CursorState`)
pub struct HandleInput {
    pub buffer: String,
    pub focused: bool,
    cursor: CursorState,
}

impl HandleInput {
    pub fn new() -> Self {
        Self {
            buffer: String::new(),
            focused: true,
            cursor: CursorState::new(),
        }
    }

    /// Replace the buffer (used for `--handle` prefill). Cursor goes to the end.
    pub fn set_text(&mut self, text: &str) {
        self.buffer = text.to_string();
        self.cursor.pos = self.buffer.len();
    }

    fn changed(&self) -> Option<HandleEvent> {
        Some(HandleEvent::Changed(self.buffer.clone()))
    }
}

impl Default for HandleInput {
    fn default() -> Self {
        Self::new()
    }
}

impl Component for HandleInput {
    fn render(&mut self, frame: &mut Frame, area: Rect) {
        let inner_width = area.width.saturating_sub(2);
        self.cursor.update_scroll(&self.buffer, inner_width);

        let border_style = if self.focused {
            Style::default().fg(Color::Cyan)
        } else {
            Style::default().fg(Color::DarkGray)
        };
        let block = Block::bordered()
            .border_type(BorderType::Rounded)
            .border_style(border_style);

        let paragraph = if self.buffer.is_empty() {
            Paragraph::new(PLACEHOLDER).style(
                Style::default()
                    .fg(Color::DarkGray)
                    .add_modifier(Modifier::ITALIC),
            )
        } else {
            let visible = visible_slice(&self.buffer, self.cursor.scroll, usize::from(inner_width));
            Paragraph::new(visible.to_string()).style(Style::default().fg(Color::White))
        };

        frame.render_widget(paragraph.block(block), area);

        if self.focused && inner_width > 0 {
            let col = self.cursor.column(&self.buffer) - self.cursor.scroll;
            let x = area.x + 1 + (col as u16).min(inner_width - 1);
            frame.set_cursor_position((x, area.y + 1));
        }
    }
}

impl EventHandler for HandleInput {
    type Event = HandleEvent;

    fn handle_event(&mut self, event: &TuiEvent) -> Option<Self::Event> {
        match event {
            TuiEvent::InputChar(c) => {
                self.buffer.insert(self.cursor.pos, *c);
                self.cursor.pos += c.len_utf8();
                self.changed()
            }
            TuiEvent::Paste(text) => {
                // Single-line field: line breaks in pasted text are dropped
                let text: String = text.chars().filter(|c| *c != '\n' && *c != '\r').collect();
                if text.is_empty() {
                    return None;
                }
                self.buffer.insert_str(self.cursor.pos, &text);
                self.cursor.pos += text.len();
                self.changed()
            }
            TuiEvent::Backspace => {
                if self.cursor.pos > 0 {
                    let prev = prev_char_boundary(&self.buffer, self.cursor.pos);
                    self.buffer.drain(prev..self.cursor.pos);
                    self.cursor.pos = prev;
                    self.changed()
                } else {
                    None
                }
            }
            TuiEvent::Delete => {
                if self.cursor.pos < self.buffer.len() {
                    let next = next_char_boundary(&self.buffer, self.cursor.pos);
                    self.buffer.drain(self.cursor.pos..next);
                    self.changed()
                } else {
                    None
                }
            }
            TuiEvent::CursorLeft => (self.cursor.pos > 0).then(|| {
                self.cursor.pos = prev_char_boundary(&self.buffer, self.cursor.pos);
                HandleEvent::CursorMoved
            }),
            TuiEvent::CursorRight => (self.cursor.pos < self.buffer.len()).then(|| {
                self.cursor.pos = next_char_boundary(&self.buffer, self.cursor.pos);
                HandleEvent::CursorMoved
            }),
            TuiEvent::CursorHome => (self.cursor.pos != 0).then(|| {
                self.cursor.pos = 0;
                HandleEvent::CursorMoved
            }),
            TuiEvent::CursorEnd => (self.cursor.pos != self.buffer.len()).then(|| {
                self.cursor.pos = self.buffer.len();
                HandleEvent::CursorMoved
            }),
            TuiEvent::Submit => Some(HandleEvent::Submit),
            _ => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use ratatui::Terminal;
    use ratatui::backend::TestBackend;

    fn screen_text(terminal: &Terminal<TestBackend>) -> String {
        terminal
            .backend()
            .buffer()
            .content()
            .iter()
            .map(|c| c.symbol())
            .collect()
    }

    #[test]
    fn test_handle_input_new() {
        let input = HandleInput::new();
        assert!(input.buffer.is_empty());
        assert!(input.focused);
    }

    #[test]
    fn test_typing_reports_full_buffer() {
        let mut input = HandleInput::new();

        let res = input.handle_event(&TuiEvent::InputChar('@'));
        assert_eq!(res, Some(HandleEvent::Changed("@".to_string())));

        let res = input.handle_event(&TuiEvent::InputChar('j'));
        assert_eq!(res, Some(HandleEvent::Changed("@j".to_string())));

        let res = input.handle_event(&TuiEvent::Backspace);
        assert_eq!(res, Some(HandleEvent::Changed("@".to_string())));
    }

    #[test]
    fn test_whitespace_is_kept_verbatim() {
        let mut input = HandleInput::new();
        input.handle_event(&TuiEvent::InputChar(' '));
        let res = input.handle_event(&TuiEvent::Paste("@jdoe ".to_string()));
        assert_eq!(res, Some(HandleEvent::Changed(" @jdoe ".to_string())));
    }

    #[test]
    fn test_paste_drops_newlines() {
        let mut input = HandleInput::new();
        let res = input.handle_event(&TuiEvent::Paste("@jdoe\r\n".to_string()));
        assert_eq!(res, Some(HandleEvent::Changed("@jdoe".to_string())));
        assert_eq!(input.handle_event(&TuiEvent::Paste("\n".to_string())), None);
    }

    #[test]
    fn test_insert_at_cursor() {
        let mut input = HandleInput::new();
        input.set_text("jdoe");
        input.handle_event(&TuiEvent::CursorHome);
        let res = input.handle_event(&TuiEvent::InputChar('@'));
        assert_eq!(res, Some(HandleEvent::Changed("@jdoe".to_string())));
    }

    #[test]
    fn test_delete_under_cursor() {
        let mut input = HandleInput::new();
        input.set_text("@jdoe");
        input.handle_event(&TuiEvent::CursorHome);
        let res = input.handle_event(&TuiEvent::Delete);
        assert_eq!(res, Some(HandleEvent::Changed("jdoe".to_string())));
        input.handle_event(&TuiEvent::CursorEnd);
        assert_eq!(input.handle_event(&TuiEvent::Delete), None);
    }

    #[test]
    fn test_backspace_at_start_is_noop() {
        let mut input = HandleInput::new();
        assert_eq!(input.handle_event(&TuiEvent::Backspace), None);
    }

    #[test]
    fn test_cursor_movement_multibyte() {
        let mut input = HandleInput::new();
        input.set_text("café");
        assert_eq!(
            input.handle_event(&TuiEvent::CursorLeft),
            Some(HandleEvent::CursorMoved)
        );
        let res = input.handle_event(&TuiEvent::Backspace);
        assert_eq!(res, Some(HandleEvent::Changed("caé".to_string())));
        assert_eq!(
            input.handle_event(&TuiEvent::CursorRight),
            Some(HandleEvent::CursorMoved)
        );
        assert_eq!(input.handle_event(&TuiEvent::CursorRight), None);
    }

    #[test]
    fn test_submit_keeps_buffer() {
        let mut input = HandleInput::new();
        input.set_text("@jdoe");
        assert_eq!(
            input.handle_event(&TuiEvent::Submit),
            Some(HandleEvent::Submit)
        );
        assert_eq!(input.buffer, "@jdoe");
    }

    #[test]
    fn test_render_placeholder_when_empty() {
        let backend = TestBackend::new(30, 3);
        let mut terminal = Terminal::new(backend).unwrap();
        let mut input = HandleInput::new();

        terminal.draw(|f| input.render(f, f.area())).unwrap();

        assert!(screen_text(&terminal).contains(PLACEHOLDER));
    }

    #[test]
    fn test_render_shows_tail_of_long_handle() {
        let backend = TestBackend::new(8, 3);
        let mut terminal = Terminal::new(backend).unwrap();
        let mut input = HandleInput::new();
        input.set_text("abcdefghij");

        terminal.draw(|f| input.render(f, f.area())).unwrap();

        let text = screen_text(&terminal);
        assert!(text.contains("ghij"));
        assert!(!text.contains("abc"));
        assert!(!text.contains(PLACEHOLDER));
    }
}
