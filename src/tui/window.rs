//! The terminal as the shell's window.
//!
//! A frame-request is issued when the window opens and again after every
//! input event, so a resize or a scroll is repainted on the next turn of the
//! loop. Terminal failures never escape as `Err`; they come back as
//! `ShellEvent::Destroy(Some(..))`.

use std::collections::VecDeque;
use std::io;
use std::sync::mpsc::{self, Receiver, TryRecvError};
use std::time::Duration;

use ::crossterm::event as term;
use tracing::{debug, warn};

use super::crossterm::into_shell_event;
use super::terminal_guard::{TerminalGuard, TerminationSignal};
use crate::config::ShellConfig;
use crate::core::event::ShellEvent;
use crate::ui::backend::terminal::RatatuiTerminal;
use crate::ui::backend::Window;
use crate::ui::core::geom::Rect;
use crate::ui::core::painter::PaintCmd;

const POLL_INTERVAL: Duration = Duration::from_millis(100);

/// What the window needs from an open terminal.
pub trait TerminalIo {
    fn area(&mut self) -> io::Result<Rect>;
    fn poll(&mut self, timeout: Duration) -> io::Result<bool>;
    fn read(&mut self) -> io::Result<term::Event>;
    fn present(&mut self, area: Rect, cmds: &[PaintCmd]) -> io::Result<()>;
}

/// Stdout through ratatui, input through crossterm.
pub struct CrosstermIo {
    terminal: RatatuiTerminal,
}

impl TerminalIo for CrosstermIo {
    fn area(&mut self) -> io::Result<Rect> {
        self.terminal.area()
    }

    fn poll(&mut self, timeout: Duration) -> io::Result<bool> {
        term::poll(timeout)
    }

    fn read(&mut self) -> io::Result<term::Event> {
        term::read()
    }

    fn present(&mut self, area: Rect, cmds: &[PaintCmd]) -> io::Result<()> {
        self.terminal.present(area, cmds)
    }
}

pub struct TerminalWindow<T = CrosstermIo> {
    io: T,
    _guard: TerminalGuard,
    signals: Receiver<TerminationSignal>,
    pending: VecDeque<ShellEvent>,
    needs_frame: bool,
}

impl TerminalWindow {
    /// Take over the terminal: raw mode, alternate screen, title and size.
    pub fn open(config: &ShellConfig) -> io::Result<Self> {
        let guard = TerminalGuard::new(&config.title, Some(config.size))?;
        let io = CrosstermIo {
            terminal: RatatuiTerminal::new(io::stdout())?,
        };

        let (tx, signals) = mpsc::channel();
        #[cfg(unix)]
        super::terminal_guard::install_termination_signals(guard.restorer(), tx)?;
        #[cfg(not(unix))]
        drop(tx);

        debug!(title = %config.title, size = ?config.size, "terminal window opened");
        Ok(Self::with_io(io, guard, signals))
    }
}

impl<T: TerminalIo> TerminalWindow<T> {
    /// A window over an already entered terminal. Termination signals
    /// arrive on `signals`.
    pub fn with_io(io: T, guard: TerminalGuard, signals: Receiver<TerminationSignal>) -> Self {
        Self {
            io,
            _guard: guard,
            signals,
            pending: VecDeque::new(),
            needs_frame: true,
        }
    }

    fn poll_signal(&mut self) -> Option<ShellEvent> {
        match self.signals.try_recv() {
            Ok(signal) => {
                warn!(?signal, "termination signal received");
                Some(ShellEvent::Destroy(None))
            }
            Err(TryRecvError::Empty | TryRecvError::Disconnected) => None,
        }
    }
}

fn destroyed(err: io::Error) -> ShellEvent {
    ShellEvent::Destroy(Some(err.into()))
}

impl<T: TerminalIo> Window for TerminalWindow<T> {
    fn next_event(&mut self) -> Option<ShellEvent> {
        loop {
            if let Some(event) = self.pending.pop_front() {
                return Some(event);
            }
            if let Some(event) = self.poll_signal() {
                return Some(event);
            }
            if self.needs_frame {
                self.needs_frame = false;
                return Some(match self.io.area() {
                    Ok(area) => ShellEvent::Frame { area },
                    Err(err) => destroyed(err),
                });
            }

            match self.io.poll(POLL_INTERVAL) {
                Ok(true) => {}
                Ok(false) => continue,
                Err(err) => return Some(destroyed(err)),
            }
            match self.io.read() {
                Ok(raw) => {
                    self.needs_frame = true;
                    if let Some(event) = into_shell_event(raw) {
                        return Some(event);
                    }
                }
                Err(err) => return Some(destroyed(err)),
            }
        }
    }

    fn present(&mut self, area: Rect, cmds: &[PaintCmd]) {
        if let Err(err) = self.io.present(area, cmds) {
            warn!(error = %err, "frame presentation failed");
            self.pending.push_back(destroyed(err));
        }
    }
}

#[cfg(test)]
#[path = "../../tests/unit/tui/window.rs"]
mod tests;
