use super::*;
use std::sync::Mutex;

#[derive(Clone, Default)]
struct RecordingMode {
    calls: Arc<Mutex<Vec<&'static str>>>,
    fail_leave: bool,
}

impl RecordingMode {
    fn calls(&self) -> Vec<&'static str> {
        self.calls.lock().unwrap().clone()
    }
}

impl TerminalMode for RecordingMode {
    fn enter(&self) -> io::Result<()> {
        self.calls.lock().unwrap().push("enter");
        Ok(())
    }

    fn leave(&self) -> io::Result<()> {
        self.calls.lock().unwrap().push("leave");
        if self.fail_leave {
            return Err(io::Error::new(io::ErrorKind::BrokenPipe, "tty gone"));
        }
        Ok(())
    }
}

#[test]
fn guard_leaves_the_mode_on_drop() {
    let mode = RecordingMode::default();
    {
        let _guard = TerminalGuard::enter(mode.clone()).unwrap();
        assert_eq!(mode.calls(), ["enter"]);
    }
    assert_eq!(mode.calls(), ["enter", "leave"]);
}

#[test]
fn restore_runs_once_across_clones() {
    let mode = RecordingMode::default();
    let guard = TerminalGuard::enter(mode.clone()).unwrap();
    let restorer = guard.restorer();

    restorer.restore().unwrap();
    restorer.clone().restore().unwrap();
    drop(guard);

    assert_eq!(mode.calls(), ["enter", "leave"]);
}

#[test]
fn failed_restore_is_reported_once() {
    let mode = RecordingMode {
        fail_leave: true,
        ..RecordingMode::default()
    };
    let guard = TerminalGuard::enter(mode.clone()).unwrap();

    let err = guard.restorer().restore().unwrap_err();
    assert_eq!(err.kind(), io::ErrorKind::BrokenPipe);
    assert!(guard.restorer().restore().is_ok());
    drop(guard);

    assert_eq!(mode.calls(), ["enter", "leave"]);
}

#[test]
fn signals_exit_like_a_clean_shutdown() {
    assert_eq!(signal_exit_code(), 0);
    assert_eq!(signal_exit_code(), i32::from(exit_code(&Ok(()))));
}

#[cfg(unix)]
#[test]
fn only_int_and_term_are_termination_signals() {
    use signal_hook::consts::signal::{SIGHUP, SIGINT, SIGTERM};

    assert_eq!(
        TerminationSignal::from_raw(SIGINT),
        Some(TerminationSignal::SigInt)
    );
    assert_eq!(
        TerminationSignal::from_raw(SIGTERM),
        Some(TerminationSignal::SigTerm)
    );
    assert_eq!(TerminationSignal::from_raw(SIGHUP), None);
}
