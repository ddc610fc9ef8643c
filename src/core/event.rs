use super::error::WindowError;
use crate::ui::core::geom::{Pos, Rect};

/// Everything a window can deliver to the shell's event loop.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ShellEvent {
    /// The window is ready for a new drawing-command list covering `area`.
    Frame { area: Rect },
    Key(KeyEvent),
    Mouse(MouseEvent),
    Resize(u16, u16),
    FocusGained,
    FocusLost,
    /// The window is gone. Carries the failure that caused it, if any.
    Destroy(Option<WindowError>),
}

impl ShellEvent {
    pub fn frame(w: u16, h: u16) -> Self {
        ShellEvent::Frame {
            area: Rect::sized(w, h),
        }
    }

    pub fn key(code: KeyCode) -> Self {
        ShellEvent::Key(KeyEvent::press(code))
    }
}

/// The keys the shell reacts to. Everything else arrives as `Unknown`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum KeyCode {
    Esc,
    Up,
    Down,
    PageUp,
    PageDown,
    Home,
    End,
    Unknown,
}

impl KeyCode {
    /// Toolkit-style key name, e.g. `"Escape"`.
    pub fn name(self) -> &'static str {
        match self {
            KeyCode::Esc => "Escape",
            KeyCode::Up => "Up",
            KeyCode::Down => "Down",
            KeyCode::PageUp => "PageUp",
            KeyCode::PageDown => "PageDown",
            KeyCode::Home => "Home",
            KeyCode::End => "End",
            KeyCode::Unknown => "",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum KeyEventKind {
    #[default]
    Press,
    Release,
    Repeat,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct KeyEvent {
    pub code: KeyCode,
    pub kind: KeyEventKind,
}

impl KeyEvent {
    pub fn press(code: KeyCode) -> Self {
        Self {
            code,
            kind: KeyEventKind::Press,
        }
    }

    pub fn is_press(&self) -> bool {
        self.kind == KeyEventKind::Press
    }

    /// A press of the key named "Escape".
    pub fn is_escape(&self) -> bool {
        self.is_press() && self.code.name() == "Escape"
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MouseEventKind {
    ScrollUp,
    ScrollDown,
    /// Clicks, drags, moves and horizontal scrolling.
    Other,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MouseEvent {
    pub kind: MouseEventKind,
    pub column: u16,
    pub row: u16,
}

impl MouseEvent {
    pub fn pos(&self) -> Pos {
        Pos::new(self.column, self.row)
    }
}

#[cfg(test)]
#[path = "../../tests/unit/core/event.rs"]
mod tests;
