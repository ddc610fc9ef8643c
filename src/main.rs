use std::process::ExitCode;

use feedshell::core::WindowError;
use feedshell::logging;
use feedshell::shell::exit_code;
use feedshell::tui::TerminalWindow;
use feedshell::{Shell, ShellConfig};

fn main() -> ExitCode {
    let _logging = logging::init();

    let config = ShellConfig::default();
    let shell = Shell::initialize(&config);

    // The window is dropped before reporting so the terminal is restored
    // when the error reaches stderr.
    let result = match TerminalWindow::open(&config) {
        Ok(mut window) => shell.run(&mut window),
        Err(err) => Err(WindowError::from(err)),
    };

    match &result {
        Ok(()) => tracing::info!("feedshell exited"),
        Err(err) => {
            tracing::error!(error = %err, "feedshell exited with error");
            eprintln!("feedshell: {err}");
        }
    }
    ExitCode::from(exit_code(&result))
}
