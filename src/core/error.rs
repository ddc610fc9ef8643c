use std::io;

use thiserror::Error;

/// Failure reported by the windowing collaborator through a destroy event.
///
/// Comparable and cloneable so the event loop can hand back the exact value
/// it received.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum WindowError {
    #[error("window i/o failed ({kind:?}): {message}")]
    Io { kind: io::ErrorKind, message: String },
    #[error("window closed unexpectedly: {0}")]
    Closed(String),
}

impl From<io::Error> for WindowError {
    fn from(err: io::Error) -> Self {
        WindowError::Io {
            kind: err.kind(),
            message: err.to_string(),
        }
    }
}
