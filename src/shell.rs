//! The application shell: owns the state and drives the event loop.
//!
//! The loop has two states, running and terminated. `Shell::run` consumes the
//! shell, so once it returns there is nothing left to re-enter.

use tracing::{debug, error, info, trace, warn};

use crate::config::ShellConfig;
use crate::core::error::WindowError;
use crate::core::event::{KeyCode, KeyEvent, MouseEvent, MouseEventKind, ShellEvent};
use crate::models::{AppState, ScrollDelta};
use crate::ui::backend::Window;
use crate::ui::core::geom::Rect;
use crate::ui::core::painter::Painter;
use crate::views::{layout, text_view, Regions};

const WHEEL_LINES: isize = 3;

/// What the loop does after an event.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Flow {
    Continue,
    Exit(Result<(), WindowError>),
}

/// Process exit status for the outcome of [`Shell::run`]: 0 for a clean
/// shutdown, 1 when the window reported a failure.
pub fn exit_code(result: &Result<(), WindowError>) -> u8 {
    match result {
        Ok(()) => 0,
        Err(_) => 1,
    }
}

pub struct Shell {
    state: AppState,
    margin: u16,
    painter: Painter,
    regions: Option<Regions>,
    frames: u64,
}

impl Shell {
    /// Generate the placeholder data for `config` and build the initial state.
    pub fn initialize(config: &ShellConfig) -> Self {
        let fixture = config.fixture().generate();
        if fixture.is_empty() {
            warn!(stage = ?config.stage, "fixture produced no feeds or entries");
        }
        info!(
            stage = ?config.stage,
            feeds = fixture.feeds.len(),
            entries = fixture.entries.len(),
            "shell initialized"
        );
        Self::with_state(AppState::from_fixture(config.stage, fixture), config.margin)
    }

    pub fn with_state(state: AppState, margin: u16) -> Self {
        Self {
            state,
            margin,
            painter: Painter::new(),
            regions: None,
            frames: 0,
        }
    }

    pub fn state(&self) -> &AppState {
        &self.state
    }

    /// Pane placement from the most recent frame.
    pub fn regions(&self) -> Option<Regions> {
        self.regions
    }

    pub fn frames(&self) -> u64 {
        self.frames
    }

    /// Consume events from `window` until Escape, destroy, or the end of the
    /// stream. A destroy event's error is returned unchanged.
    pub fn run<W: Window + ?Sized>(mut self, window: &mut W) -> Result<(), WindowError> {
        debug!("event loop started");
        while let Some(event) = window.next_event() {
            if let Flow::Exit(result) = self.handle_event(window, event) {
                info!(frames = self.frames, ok = result.is_ok(), "event loop terminated");
                return result;
            }
        }
        info!(frames = self.frames, "event stream ended");
        Ok(())
    }

    pub fn handle_event<W: Window + ?Sized>(&mut self, window: &mut W, event: ShellEvent) -> Flow {
        match event {
            ShellEvent::Frame { area } => {
                self.frame(window, area);
                Flow::Continue
            }
            ShellEvent::Key(key) if key.is_escape() => {
                debug!("escape pressed");
                Flow::Exit(Ok(()))
            }
            ShellEvent::Key(key) => {
                self.on_key(key);
                Flow::Continue
            }
            ShellEvent::Mouse(mouse) => {
                self.on_mouse(mouse);
                Flow::Continue
            }
            ShellEvent::Destroy(Some(err)) => {
                error!(error = %err, "window destroyed");
                Flow::Exit(Err(err))
            }
            ShellEvent::Destroy(None) => {
                debug!("window closed");
                Flow::Exit(Ok(()))
            }
            ShellEvent::Resize(..) | ShellEvent::FocusGained | ShellEvent::FocusLost => {
                Flow::Continue
            }
        }
    }

    fn frame<W: Window + ?Sized>(&mut self, window: &mut W, area: Rect) {
        self.painter.clear();
        let regions = layout(&self.state, area, self.margin, &mut self.painter);
        self.regions = Some(regions);
        self.frames += 1;
        debug!(frame = self.frames, cmds = self.painter.len(), ?area, "frame");
        window.present(area, self.painter.cmds());
    }

    fn on_key(&mut self, key: KeyEvent) {
        if !key.is_press() {
            return;
        }
        let page = self.page_lines();
        let delta = match key.code {
            KeyCode::Up => ScrollDelta::Lines(-1),
            KeyCode::Down => ScrollDelta::Lines(1),
            KeyCode::PageUp => ScrollDelta::Lines(-page),
            KeyCode::PageDown => ScrollDelta::Lines(page),
            KeyCode::Home => ScrollDelta::Top,
            KeyCode::End => ScrollDelta::Bottom,
            _ => return,
        };
        self.scroll_text(delta);
    }

    fn on_mouse(&mut self, mouse: MouseEvent) {
        let Some(regions) = self.regions else {
            return;
        };
        if !regions.text.contains(mouse.pos()) {
            return;
        }
        match mouse.kind {
            MouseEventKind::ScrollUp => self.scroll_text(ScrollDelta::Lines(-WHEEL_LINES)),
            MouseEventKind::ScrollDown => self.scroll_text(ScrollDelta::Lines(WHEEL_LINES)),
            _ => {}
        }
    }

    fn page_lines(&self) -> isize {
        let h = self.regions.map_or(1, |r| r.text.h);
        h.saturating_sub(1).max(1) as isize
    }

    fn scroll_text(&mut self, delta: ScrollDelta) {
        if !self.state.stage().shows_text_view() {
            return;
        }
        let Some(regions) = self.regions else {
            return;
        };
        let max = text_view::max_scroll(self.state.text(), regions.text);
        self.state.text_mut().scroll_by(delta, max);
        trace!(scroll = self.state.text().scroll(), max, "text scrolled");
    }
}

#[cfg(test)]
#[path = "../tests/unit/shell.rs"]
mod tests;
