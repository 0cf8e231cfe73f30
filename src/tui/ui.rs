use ratatui::Frame;
use ratatui::layout::{Constraint, Layout, Position, Rect};
use ratatui::style::{Color, Style};
use ratatui::widgets::{Block, Padding, Paragraph};
use unicode_width::UnicodeWidthStr;

use crate::core::state::App;
use crate::tui::component::Component;
use crate::tui::components::{ErrorBanner, ResultsPanel, TitleBar};
use crate::tui::{Focus, TuiState};

pub const PROMPT: &str = "What do I have in common with";

const BUTTON_WIDTH: u16 = 8;
const MIN_INPUT_WIDTH: u16 = 18;

/// Where everything sits on screen. Shared by drawing and mouse hit testing.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ScreenLayout {
    pub title: Rect,
    pub prompt: Rect,
    pub input: Rect,
    pub button: Rect,
    pub error: Option<Rect>,
    pub results: Rect,
}

/// What a mouse position landed on.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HitTarget {
    Input,
    Button,
}

pub fn screen_layout(area: Rect, error_height: u16) -> ScreenLayout {
    use Constraint::{Length, Min};

    let [title, _gap, row, error, results] = Layout::vertical([
        Length(1),
        Length(1),
        Length(3),
        Length(error_height),
        Min(0),
    ])
    .areas(area);

    let prompt_width = PROMPT.width() as u16 + 2;
    let [prompt, input, button] = Layout::horizontal([
        Length(prompt_width),
        Min(MIN_INPUT_WIDTH),
        Length(BUTTON_WIDTH),
    ])
    .areas(row);

    ScreenLayout {
        title,
        prompt,
        input,
        button,
        error: (error_height > 0).then_some(error),
        results,
    }
}

/// Rows the error banner needs for the current state (0 when there is no error).
pub fn error_height(app: &App, width: u16) -> u16 {
    app.error
        .as_deref()
        .map(|message| ErrorBanner::new(message).height(width))
        .unwrap_or(0)
}

pub fn draw_ui(frame: &mut Frame, app: &App, tui: &mut TuiState) {
    let area = frame.area();

    // Page backdrop first; later widgets only patch foreground colours on top of it
    if let Some(background) = tui.page.background {
        frame.render_widget(Block::default().style(Style::default().bg(background)), area);
    }

    let layout = screen_layout(area, error_height(app, area.width));

    TitleBar::new(tui.server_url.clone(), app.status_message.clone()).render(frame, layout.title);

    let prompt = Paragraph::new(PROMPT)
        .style(Style::default().fg(Color::White))
        .block(Block::default().padding(Padding::top(1)));
    frame.render_widget(prompt, layout.prompt);

    tui.input.focused = tui.focus == Focus::Input;
    tui.button.focused = tui.focus == Focus::Button;
    tui.input.render(frame, layout.input);
    tui.button.render(frame, layout.button);

    if let (Some(message), Some(rect)) = (app.error.as_deref(), layout.error) {
        ErrorBanner::new(message).render(frame, rect);
    }

    ResultsPanel.render(frame, layout.results);
}

/// Hit test: given a screen position, find which interactive element (if any) is there.
pub fn hit_test(column: u16, row: u16, layout: &ScreenLayout) -> Option<HitTarget> {
    let position = Position::new(column, row);
    if layout.button.contains(position) {
        Some(HitTarget::Button)
    } else if layout.input.contains(position) {
        Some(HitTarget::Input)
    } else {
        None
    }
}
