use super::*;

fn key(code: term::KeyCode) -> KeyEvent {
    into_key_event(term::KeyEvent::new(code, term::KeyModifiers::NONE))
}

fn mouse(kind: term::MouseEventKind) -> MouseEvent {
    into_mouse_event(term::MouseEvent {
        kind,
        column: 7,
        row: 3,
        modifiers: term::KeyModifiers::NONE,
    })
}

#[test]
fn escape_press_is_recognized() {
    let converted = key(term::KeyCode::Esc);
    assert!(converted.is_escape());
    assert_eq!(converted.code.name(), "Escape");
}

#[test]
fn escape_release_is_not_an_escape_press() {
    let converted = into_key_event(term::KeyEvent::new_with_kind(
        term::KeyCode::Esc,
        term::KeyModifiers::NONE,
        term::KeyEventKind::Release,
    ));
    assert_eq!(converted.kind, KeyEventKind::Release);
    assert!(!converted.is_escape());
}

#[test]
fn scroll_keys_map_one_to_one() {
    assert_eq!(key(term::KeyCode::Up).code, KeyCode::Up);
    assert_eq!(key(term::KeyCode::Down).code, KeyCode::Down);
    assert_eq!(key(term::KeyCode::PageUp).code, KeyCode::PageUp);
    assert_eq!(key(term::KeyCode::PageDown).code, KeyCode::PageDown);
    assert_eq!(key(term::KeyCode::Home).code, KeyCode::Home);
    assert_eq!(key(term::KeyCode::End).code, KeyCode::End);
}

#[test]
fn other_keys_are_unknown() {
    assert_eq!(key(term::KeyCode::Char('q')).code, KeyCode::Unknown);
    assert_eq!(key(term::KeyCode::F(5)).code, KeyCode::Unknown);
    assert_eq!(key(term::KeyCode::Null).code, KeyCode::Unknown);
}

#[test]
fn mouse_wheel_keeps_its_position() {
    let converted = mouse(term::MouseEventKind::ScrollDown);
    assert_eq!(converted.kind, MouseEventKind::ScrollDown);
    assert_eq!((converted.column, converted.row), (7, 3));
    assert_eq!(
        mouse(term::MouseEventKind::Down(term::MouseButton::Left)).kind,
        MouseEventKind::Other
    );
}

#[test]
fn pastes_are_dropped_and_resizes_kept() {
    assert_eq!(into_shell_event(term::Event::Paste("x".to_string())), None);
    assert_eq!(
        into_shell_event(term::Event::Resize(80, 24)),
        Some(ShellEvent::Resize(80, 24))
    );
    assert_eq!(
        into_shell_event(term::Event::FocusLost),
        Some(ShellEvent::FocusLost)
    );
}
