//! Rendering and windowing collaborators.
//!
//! A [`Backend`] rasterizes one drawing-command list. A [`Window`] is the
//! collaborator the shell's event loop talks to: it hands out events and
//! accepts a list per frame-request.

use crate::core::event::ShellEvent;
use crate::ui::core::geom::Rect;
use crate::ui::core::painter::PaintCmd;

pub trait Backend {
    fn draw(&mut self, area: Rect, cmds: &[PaintCmd]);
}

pub trait Window {
    /// Block until the next event. `None` means the event stream has ended.
    fn next_event(&mut self) -> Option<ShellEvent>;

    /// Present the drawing-command list built for the last frame-request.
    ///
    /// Failures are not returned here; a window that cannot present reports
    /// it as its next event, `ShellEvent::Destroy(Some(err))`.
    fn present(&mut self, area: Rect, cmds: &[PaintCmd]);
}

// The concrete terminal backend lives in `ratatui.rs`, but we keep the module name generic so the
// rest of the codebase does not need to mention ratatui.
#[cfg(feature = "tui")]
#[path = "ratatui.rs"]
pub mod terminal;
