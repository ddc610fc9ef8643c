use super::*;
use std::io::ErrorKind;

use crate::core::error::WindowError;
use crate::core::event::{KeyCode, KeyEvent};
use crate::shell::{exit_code, Shell};
use crate::tui::terminal_guard::{signal_exit_code, TerminalMode};
use crate::ui::core::painter::Painter;

struct InertMode;

impl TerminalMode for InertMode {
    fn enter(&self) -> io::Result<()> {
        Ok(())
    }

    fn leave(&self) -> io::Result<()> {
        Ok(())
    }
}

/// Replays scripted poll and read results. Once the script runs out, polls
/// fail with `UnexpectedEof` so a test can never spin forever.
#[derive(Default)]
struct FakeTerminal {
    area: Option<Rect>,
    polls: VecDeque<io::Result<bool>>,
    reads: VecDeque<io::Result<term::Event>>,
    fail_present: Option<ErrorKind>,
    presented: Vec<(Rect, usize)>,
}

impl FakeTerminal {
    fn sized(w: u16, h: u16) -> Self {
        Self {
            area: Some(Rect::sized(w, h)),
            ..Self::default()
        }
    }

    fn input(mut self, event: term::Event) -> Self {
        self.polls.push_back(Ok(true));
        self.reads.push_back(Ok(event));
        self
    }

    fn idle(mut self) -> Self {
        self.polls.push_back(Ok(false));
        self
    }
}

impl TerminalIo for FakeTerminal {
    fn area(&mut self) -> io::Result<Rect> {
        self.area
            .ok_or_else(|| io::Error::new(ErrorKind::NotConnected, "no tty"))
    }

    fn poll(&mut self, _timeout: Duration) -> io::Result<bool> {
        self.polls
            .pop_front()
            .unwrap_or_else(|| Err(io::Error::new(ErrorKind::UnexpectedEof, "script exhausted")))
    }

    fn read(&mut self) -> io::Result<term::Event> {
        self.reads
            .pop_front()
            .unwrap_or_else(|| Err(io::Error::new(ErrorKind::UnexpectedEof, "script exhausted")))
    }

    fn present(&mut self, area: Rect, cmds: &[PaintCmd]) -> io::Result<()> {
        if let Some(kind) = self.fail_present.take() {
            return Err(io::Error::new(kind, "write failed"));
        }
        self.presented.push((area, cmds.len()));
        Ok(())
    }
}

fn open(
    terminal: FakeTerminal,
) -> (
    TerminalWindow<FakeTerminal>,
    mpsc::Sender<TerminationSignal>,
) {
    let guard = TerminalGuard::enter(InertMode).unwrap();
    let (tx, rx) = mpsc::channel();
    (TerminalWindow::with_io(terminal, guard, rx), tx)
}

fn press(code: term::KeyCode) -> term::Event {
    term::Event::Key(term::KeyEvent::new(code, term::KeyModifiers::NONE))
}

fn io_failure(event: Option<ShellEvent>) -> Option<ErrorKind> {
    match event {
        Some(ShellEvent::Destroy(Some(WindowError::Io { kind, .. }))) => Some(kind),
        _ => None,
    }
}

#[test]
fn opening_requests_a_frame_of_the_terminal_size() {
    let (mut window, _tx) = open(FakeTerminal::sized(80, 24));
    assert_eq!(window.next_event(), Some(ShellEvent::frame(80, 24)));
}

#[test]
fn every_input_is_followed_by_a_frame_request() {
    let terminal = FakeTerminal::sized(80, 24)
        .idle()
        .input(press(term::KeyCode::Down))
        .input(term::Event::Paste("ignored".to_string()))
        .input(term::Event::Resize(100, 30));
    let (mut window, _tx) = open(terminal);

    assert_eq!(window.next_event(), Some(ShellEvent::frame(80, 24)));
    assert_eq!(
        window.next_event(),
        Some(ShellEvent::Key(KeyEvent::press(KeyCode::Down)))
    );
    assert_eq!(window.next_event(), Some(ShellEvent::frame(80, 24)));
    // The paste is dropped but still repaints.
    assert_eq!(window.next_event(), Some(ShellEvent::frame(80, 24)));
    assert_eq!(window.next_event(), Some(ShellEvent::Resize(100, 30)));
    assert_eq!(window.next_event(), Some(ShellEvent::frame(80, 24)));
}

#[test]
fn termination_signal_is_a_clean_destroy() {
    let (mut window, tx) = open(FakeTerminal::sized(80, 24));
    tx.send(TerminationSignal::SigTerm).unwrap();
    assert_eq!(window.next_event(), Some(ShellEvent::Destroy(None)));
    assert_eq!(window.next_event(), Some(ShellEvent::frame(80, 24)));
}

#[test]
fn poll_failure_destroys_the_window() {
    let mut terminal = FakeTerminal::sized(80, 24);
    terminal
        .polls
        .push_back(Err(io::Error::new(ErrorKind::BrokenPipe, "poll")));
    let (mut window, _tx) = open(terminal);

    window.next_event();
    assert_eq!(io_failure(window.next_event()), Some(ErrorKind::BrokenPipe));
}

#[test]
fn read_failure_destroys_the_window() {
    let mut terminal = FakeTerminal::sized(80, 24);
    terminal.polls.push_back(Ok(true));
    terminal
        .reads
        .push_back(Err(io::Error::new(ErrorKind::Interrupted, "read")));
    let (mut window, _tx) = open(terminal);

    window.next_event();
    assert_eq!(io_failure(window.next_event()), Some(ErrorKind::Interrupted));
}

#[test]
fn unknown_size_destroys_the_window() {
    let (mut window, _tx) = open(FakeTerminal::default());
    assert_eq!(io_failure(window.next_event()), Some(ErrorKind::NotConnected));
}

#[test]
fn present_failure_is_the_next_event() {
    let mut terminal = FakeTerminal::sized(80, 24);
    terminal.fail_present = Some(ErrorKind::BrokenPipe);
    let (mut window, tx) = open(terminal);
    tx.send(TerminationSignal::SigInt).unwrap();

    window.present(Rect::sized(80, 24), &[]);
    assert_eq!(io_failure(window.next_event()), Some(ErrorKind::BrokenPipe));
    assert_eq!(window.next_event(), Some(ShellEvent::Destroy(None)));
    assert!(window.io.presented.is_empty());
}

#[test]
fn present_hands_the_list_to_the_terminal() {
    let (mut window, _tx) = open(FakeTerminal::sized(10, 4));
    let mut painter = Painter::new();
    painter.fill_rect(Rect::sized(10, 4), Default::default());

    window.present(Rect::sized(10, 4), painter.cmds());
    assert_eq!(window.io.presented, [(Rect::sized(10, 4), 1)]);
}

#[test]
fn shell_exits_on_escape_after_one_frame() {
    let terminal = FakeTerminal::sized(108, 35).input(press(term::KeyCode::Esc));
    let (mut window, _tx) = open(terminal);

    let shell = Shell::initialize(&ShellConfig::default());
    assert_eq!(shell.run(&mut window), Ok(()));
    assert_eq!(window.io.presented.len(), 1);
}

#[test]
fn signalled_shell_exits_with_the_signal_status() {
    let (mut window, tx) = open(FakeTerminal::sized(108, 35));
    tx.send(TerminationSignal::SigInt).unwrap();

    let result = Shell::initialize(&ShellConfig::default()).run(&mut window);
    assert_eq!(result, Ok(()));
    assert_eq!(i32::from(exit_code(&result)), signal_exit_code());
}
