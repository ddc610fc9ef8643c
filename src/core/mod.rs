//! Frontend-neutral shell vocabulary: the events a window delivers and the
//! errors it can report. Nothing here depends on terminal crates.

pub mod error;
pub mod event;

pub use error::WindowError;
pub use event::{KeyCode, KeyEvent, KeyEventKind, ShellEvent};
