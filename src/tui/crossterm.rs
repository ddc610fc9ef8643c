//! Terminal input translated into shell events.

use ::crossterm::event as term;

use crate::core::event::{KeyCode, KeyEvent, KeyEventKind, MouseEvent, MouseEventKind, ShellEvent};

/// `None` for input the shell has no use for (bracketed pastes).
pub fn into_shell_event(event: term::Event) -> Option<ShellEvent> {
    let event = match event {
        term::Event::Key(key) => ShellEvent::Key(into_key_event(key)),
        term::Event::Mouse(mouse) => ShellEvent::Mouse(into_mouse_event(mouse)),
        term::Event::Resize(w, h) => ShellEvent::Resize(w, h),
        term::Event::FocusGained => ShellEvent::FocusGained,
        term::Event::FocusLost => ShellEvent::FocusLost,
        term::Event::Paste(_) => return None,
    };
    Some(event)
}

pub fn into_key_event(event: term::KeyEvent) -> KeyEvent {
    let code = match event.code {
        term::KeyCode::Esc => KeyCode::Esc,
        term::KeyCode::Up => KeyCode::Up,
        term::KeyCode::Down => KeyCode::Down,
        term::KeyCode::PageUp => KeyCode::PageUp,
        term::KeyCode::PageDown => KeyCode::PageDown,
        term::KeyCode::Home => KeyCode::Home,
        term::KeyCode::End => KeyCode::End,
        _ => KeyCode::Unknown,
    };
    let kind = match event.kind {
        term::KeyEventKind::Press => KeyEventKind::Press,
        term::KeyEventKind::Release => KeyEventKind::Release,
        term::KeyEventKind::Repeat => KeyEventKind::Repeat,
    };
    KeyEvent { code, kind }
}

pub fn into_mouse_event(event: term::MouseEvent) -> MouseEvent {
    let kind = match event.kind {
        term::MouseEventKind::ScrollUp => MouseEventKind::ScrollUp,
        term::MouseEventKind::ScrollDown => MouseEventKind::ScrollDown,
        _ => MouseEventKind::Other,
    };
    MouseEvent {
        kind,
        column: event.column,
        row: event.row,
    }
}

#[cfg(test)]
#[path = "../../tests/unit/tui/crossterm.rs"]
mod tests;
