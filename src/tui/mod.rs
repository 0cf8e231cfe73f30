//! # TUI Adapter
//!
//! The ratatui-specific layer. Handles terminal I/O, renders the UI,
//! and translates keyboard and mouse events into `core::Action` values.
//!
//! This is the only module that knows about ratatui and crossterm.
//!
//! ## Redraw Strategy
//!
//! Nothing animates, so the loop sleeps up to 250ms waiting for input and
//! only redraws after an event or a finished request.
//!
//! ## Requests
//!
//! Each press of Go spawns one tokio task. The task reports back through an
//! `mpsc` channel that the loop drains between frames. Requests are never
//! cancelled or de-duplicated; results are applied in the order they arrive.

pub mod backdrop;
mod component;
pub mod components;
mod event;
pub mod ui;

use log::{debug, info, warn};
use std::io::stdout;
use std::sync::{Arc, mpsc};
use std::time::Duration;

use crossterm::cursor::{Hide, SetCursorStyle, Show};
use crossterm::event::{
    DisableBracketedPaste, DisableMouseCapture, EnableBracketedPaste, EnableMouseCapture,
};
use crossterm::execute;

use crate::api::{CompareBackend, CompareClient};
use crate::core::action::{Action, Effect, update};
use crate::core::config::ResolvedConfig;
use crate::core::state::App;
use crate::tui::backdrop::Page;
use crate::tui::component::EventHandler;
use crate::tui::components::{ButtonEvent, GoButton, HandleEvent, HandleInput};
use crate::tui::event::{TuiEvent, poll_event_immediate, poll_event_timeout};
use crate::tui::ui::HitTarget;

const IDLE_POLL: Duration = Duration::from_millis(250);

/// Which element receives keyboard input.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Focus {
    Input,
    Button,
}

impl Focus {
    fn toggled(self) -> Self {
        match self {
            Focus::Input => Focus::Button,
            Focus::Button => Focus::Input,
        }
    }
}

/// TUI-specific presentation state (not part of core view state)
pub struct TuiState {
    pub input: HandleInput,
    pub button: GoButton,
    pub focus: Focus,
    pub page: Page,
    pub server_url: String,
}

impl TuiState {
    pub fn new(server_url: String) -> Self {
        Self {
            input: HandleInput::new(),
            button: GoButton::new(),
            focus: Focus::Input, // User expects to type immediately
            page: Page::default(),
            server_url,
        }
    }
}

struct TerminalModeGuard;

impl TerminalModeGuard {
    fn new() -> std::io::Result<Self> {
        execute!(
            stdout(),
            EnableMouseCapture,
            EnableBracketedPaste,
            Show,                        // Show cursor for input editing
            SetCursorStyle::SteadyBlock // Non-blinking: draw() resets the blink timer
        )?;
        info!("Terminal modes enabled (mouse, bracketed paste, steady block cursor)");
        Ok(Self)
    }
}

impl Drop for TerminalModeGuard {
    fn drop(&mut self) {
        let _ = execute!(
            stdout(),
            DisableMouseCapture,
            DisableBracketedPaste,
            SetCursorStyle::DefaultUserShape,
            Hide
        );
    }
}

/// Routes one terminal event. Returns the resulting core effect, if any.
fn handle_event(
    event: TuiEvent,
    app: &mut App,
    tui: &mut TuiState,
    layout: &ui::ScreenLayout,
) -> Effect {
    match event {
        TuiEvent::Quit => return update(app, Action::Quit),
        TuiEvent::Resize => return Effect::None,
        TuiEvent::FocusNext | TuiEvent::FocusPrev => {
            tui.focus = tui.focus.toggled();
            return Effect::None;
        }
        TuiEvent::MouseMove(col, row) => {
            tui.button.hovered = ui::hit_test(col, row, layout) == Some(HitTarget::Button);
            return Effect::None;
        }
        TuiEvent::MouseClick(col, row) => {
            return match ui::hit_test(col, row, layout) {
                Some(HitTarget::Button) => {
                    tui.focus = Focus::Button;
                    update(app, Action::Compare)
                }
                Some(HitTarget::Input) => {
                    tui.focus = Focus::Input;
                    Effect::None
                }
                None => Effect::None,
            };
        }
        _ => {}
    }

    match tui.focus {
        Focus::Input => match tui.input.handle_event(&event) {
            Some(HandleEvent::Changed(text)) => update(app, Action::HandleEdited(text)),
            Some(HandleEvent::Submit) => update(app, Action::Compare),
            Some(HandleEvent::CursorMoved) | None => Effect::None,
        },
        Focus::Button => {
            if let Some(ButtonEvent::Pressed) = tui.button.handle_event(&event) {
                return update(app, Action::Compare);
            }
            // Typing on the button moves focus back and forwards the keystroke
            if matches!(event, TuiEvent::InputChar(_) | TuiEvent::Paste(_)) {
                tui.focus = Focus::Input;
                if let Some(HandleEvent::Changed(text)) = tui.input.handle_event(&event) {
                    return update(app, Action::HandleEdited(text));
                }
            }
            Effect::None
        }
    }
}

pub fn run(config: ResolvedConfig, prefill: Option<String>) -> std::io::Result<()> {
    let backend: Arc<dyn CompareBackend> = Arc::new(CompareClient::new(config.server_url.clone()));
    let mut app = App::new(backend);
    let mut tui = TuiState::new(config.server_url.clone());

    if let Some(handle) = prefill {
        tui.input.set_text(&handle);
        update(&mut app, Action::HandleEdited(handle));
    }

    let mut terminal = ratatui::init();
    let _terminal_mode_guard = TerminalModeGuard::new();
    let mounted = tui.page.mount();

    // Channel for actions from background tasks
    let (tx, rx) = mpsc::channel();

    let mut needs_redraw = true; // Force first frame

    loop {
        if needs_redraw {
            terminal.draw(|f| ui::draw_ui(f, &app, &mut tui))?;
            needs_redraw = false;
        }

        let first_event = poll_event_timeout(IDLE_POLL);
        if first_event.is_some() {
            needs_redraw = true;
        }

        // Process first event + drain ALL pending events before next draw
        let mut should_quit = false;
        for event in first_event
            .into_iter()
            .chain(std::iter::from_fn(poll_event_immediate))
        {
            let area = terminal.get_frame().area();
            let layout = ui::screen_layout(area, ui::error_height(&app, area.width));
            match handle_event(event, &mut app, &mut tui, &layout) {
                Effect::Quit => should_quit = true,
                Effect::SpawnComparison { handle } => {
                    spawn_comparison(app.backend.clone(), handle, tx.clone());
                }
                Effect::None => {}
            }
            if should_quit {
                break;
            }
        }

        if should_quit {
            break;
        }

        // Handle background task actions (finished comparisons)
        while let Ok(action) = rx.try_recv() {
            needs_redraw = true;
            debug!("Event loop received: {:?}", action);
            let effect = update(&mut app, action);
            if effect != Effect::None {
                warn!("Unexpected effect from background action: {:?}", effect);
            }
        }
    }

    mounted.unmount(&mut tui.page);
    ratatui::restore();
    info!("Kindred shutting down");
    Ok(())
}

/// Runs one comparison in the background and reports the outcome as an `Action`.
///
/// The returned handle is only used by tests; the loop lets requests run
/// to completion without tracking them.
fn spawn_comparison(
    backend: Arc<dyn CompareBackend>,
    handle: String,
    tx: mpsc::Sender<Action>,
) -> tokio::task::JoinHandle<()> {
    let request_id = uuid::Uuid::new_v4().to_string();
    info!(
        "Spawning comparison {} for '{}' via {}",
        request_id,
        handle,
        backend.name()
    );

    tokio::spawn(async move {
        let action = match backend.compare(&handle).await {
            Ok(body) => Action::ComparisonSucceeded {
                request_id: request_id.clone(),
                body,
            },
            Err(e) => Action::ComparisonFailed {
                request_id: request_id.clone(),
                reason: e.to_string(),
            },
        };
        if tx.send(action).is_err() {
            warn!(
                "Failed to report comparison {}: receiver dropped",
                request_id
            );
        }
    })
}
