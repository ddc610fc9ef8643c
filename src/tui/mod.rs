//! Terminal integration layer (crossterm + ratatui).
//!
//! Kept apart from `shell`/`views` so the shell runs against any `Window`,
//! including the headless one used in tests.

pub mod crossterm;
pub mod terminal_guard;
pub mod window;

pub use window::TerminalWindow;
