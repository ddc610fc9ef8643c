//! feedshell - a feed-reader window mockup
//!
//! Module layout:
//! - core: shell events and window errors
//! - models: feeds, entries and the application state
//! - fixture: seeded placeholder data
//! - config: shell configuration and mockup stages
//! - ui: geometry, drawing commands and rendering backends
//! - views: layout and pane widgets
//! - shell: the event loop
//! - tui: the terminal window (feature `tui`)

pub mod config;
pub mod core;
pub mod fixture;
pub mod logging;
pub mod models;
pub mod shell;
#[cfg(feature = "tui")]
pub mod tui;
pub mod ui;
pub mod views;

pub use config::{MockupStage, ShellConfig};
pub use shell::{Flow, Shell};
