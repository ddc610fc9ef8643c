//! Data model: placeholder feeds and entries plus the state the shell renders.

pub mod app_state;
pub mod feed;
pub mod text_buffer;

pub use app_state::AppState;
pub use feed::{Entry, Feed};
pub use text_buffer::{ScrollDelta, TextBuffer};
