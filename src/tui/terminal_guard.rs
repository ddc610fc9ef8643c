//! Terminal mode switching and its undo.
//!
//! Entering the mode hands back a [`TerminalGuard`]; dropping the guard, or
//! calling any [`TerminalRestorer`] cloned from it, leaves the mode again.
//! Only the first restore does any work, so the signal thread and the main
//! thread can both try.

use std::io;
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::{Arc, OnceLock};

use tracing::warn;

use crate::config::WindowSize;
use crate::core::WindowError;
use crate::shell::exit_code;

pub trait TerminalMode: Send + Sync + 'static {
    fn enter(&self) -> io::Result<()>;
    fn leave(&self) -> io::Result<()>;
}

/// Raw mode, alternate screen and mouse capture, plus the window title and
/// initial size. The size the terminal had before is put back on leave.
#[derive(Debug)]
pub struct CrosstermMode {
    title: String,
    size: Option<WindowSize>,
    original_size: OnceLock<(u16, u16)>,
}

impl CrosstermMode {
    pub fn new(title: impl Into<String>, size: Option<WindowSize>) -> Self {
        Self {
            title: title.into(),
            size,
            original_size: OnceLock::new(),
        }
    }
}

impl TerminalMode for CrosstermMode {
    fn enter(&self) -> io::Result<()> {
        use ::crossterm::event::EnableMouseCapture;
        use ::crossterm::execute;
        use ::crossterm::terminal::{self, EnterAlternateScreen, SetSize, SetTitle};

        terminal::enable_raw_mode()?;
        let mut out = io::stdout();
        execute!(out, EnterAlternateScreen, EnableMouseCapture, SetTitle(&self.title))?;

        let Some(size) = self.size else {
            return Ok(());
        };
        let current = terminal::size()?;
        if current != (size.width, size.height) {
            let _ = self.original_size.set(current);
            // Terminals that ignore resize requests keep their size.
            let _ = execute!(out, SetSize(size.width, size.height));
        }
        Ok(())
    }

    fn leave(&self) -> io::Result<()> {
        use ::crossterm::event::DisableMouseCapture;
        use ::crossterm::execute;
        use ::crossterm::terminal::{self, LeaveAlternateScreen, SetSize};

        let mut out = io::stdout();
        let resized = match self.original_size.get() {
            Some(&(w, h)) => execute!(out, SetSize(w, h)),
            None => Ok(()),
        };
        let raw = terminal::disable_raw_mode();
        let screen = execute!(out, DisableMouseCapture, LeaveAlternateScreen);
        // Every step runs; the first failure is reported.
        resized.and(raw).and(screen)
    }
}

struct RestoreState {
    mode: Box<dyn TerminalMode>,
    done: AtomicBool,
}

#[derive(Clone)]
pub struct TerminalRestorer(Arc<RestoreState>);

impl TerminalRestorer {
    pub fn restore(&self) -> io::Result<()> {
        if self.0.done.swap(true, Ordering::SeqCst) {
            return Ok(());
        }
        self.0.mode.leave()
    }
}

pub struct TerminalGuard {
    restorer: TerminalRestorer,
}

impl TerminalGuard {
    pub fn new(title: &str, size: Option<WindowSize>) -> io::Result<Self> {
        Self::enter(CrosstermMode::new(title, size))
    }

    pub fn enter(mode: impl TerminalMode) -> io::Result<Self> {
        mode.enter()?;
        let state = RestoreState {
            mode: Box::new(mode),
            done: AtomicBool::new(false),
        };
        Ok(Self {
            restorer: TerminalRestorer(Arc::new(state)),
        })
    }

    pub fn restorer(&self) -> TerminalRestorer {
        self.restorer.clone()
    }
}

impl Drop for TerminalGuard {
    fn drop(&mut self) {
        if let Err(err) = self.restorer.restore() {
            warn!(error = %err, "terminal restore failed");
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TerminationSignal {
    SigInt,
    SigTerm,
}

#[cfg(unix)]
impl TerminationSignal {
    pub fn from_raw(signal: i32) -> Option<Self> {
        use signal_hook::consts::signal::{SIGINT, SIGTERM};

        match signal {
            SIGINT => Some(TerminationSignal::SigInt),
            SIGTERM => Some(TerminationSignal::SigTerm),
            _ => None,
        }
    }
}

/// Exit status of a process ended by SIGINT or SIGTERM. The event loop sees
/// the signal as a destroy event without an error, so both paths exit with
/// the clean-shutdown status.
pub fn signal_exit_code() -> i32 {
    i32::from(exit_code(&Ok::<(), WindowError>(())))
}

/// Forward the first SIGINT/SIGTERM to `tx`. If the event loop has not wound
/// down after the grace period, restore the terminal and exit.
#[cfg(unix)]
pub fn install_termination_signals(
    restorer: TerminalRestorer,
    tx: std::sync::mpsc::Sender<TerminationSignal>,
) -> io::Result<std::thread::JoinHandle<()>> {
    use signal_hook::consts::signal::{SIGINT, SIGTERM};
    use signal_hook::iterator::Signals;
    use std::time::Duration;

    const GRACE: Duration = Duration::from_secs(2);

    let mut signals = Signals::new([SIGINT, SIGTERM])?;
    Ok(std::thread::spawn(move || {
        let Some(signal) = signals.forever().find_map(TerminationSignal::from_raw) else {
            return;
        };
        let _ = tx.send(signal);
        std::thread::sleep(GRACE);
        let _ = restorer.restore();
        std::process::exit(signal_exit_code());
    }))
}

#[cfg(test)]
#[path = "../../tests/unit/tui/terminal_guard.rs"]
mod tests;
