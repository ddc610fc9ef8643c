//! Views: pure functions from state to drawing commands.
//!
//! - `layout`: the window split into feed list, entry list and text view
//! - `color_box`: a solid block standing in for an unbuilt pane
//! - `label_list`: rows of single-line, truncated labels
//! - `text_view`: wrapped, scrollable read-only text

pub mod color_box;
pub mod label_list;
pub mod layout;
pub mod text_view;

pub use layout::{layout, Regions, ENTRY_LIST_RATIO, FEED_LIST_RATIO};
pub use text_view::{ScrollbarMetrics, TextViewLayout};
