//! Read-only text shown by the text view.
//!
//! The buffer never edits its contents; the only mutable part is the scroll
//! offset, counted in wrapped display lines. The view decides how many
//! display lines exist, so every scroll operation takes that bound.

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ScrollDelta {
    Lines(isize),
    Top,
    Bottom,
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TextBuffer {
    contents: String,
    scroll: usize,
}

impl TextBuffer {
    pub fn new(contents: impl Into<String>) -> Self {
        Self {
            contents: contents.into(),
            scroll: 0,
        }
    }

    pub fn text(&self) -> &str {
        &self.contents
    }

    pub fn is_empty(&self) -> bool {
        self.contents.is_empty()
    }

    /// First visible display line.
    pub fn scroll(&self) -> usize {
        self.scroll
    }

    /// Apply `delta`, keeping the offset within `0..=max_scroll`.
    pub fn scroll_by(&mut self, delta: ScrollDelta, max_scroll: usize) {
        let current = self.scroll.min(max_scroll);
        self.scroll = match delta {
            ScrollDelta::Top => 0,
            ScrollDelta::Bottom => max_scroll,
            ScrollDelta::Lines(n) if n < 0 => current.saturating_sub(n.unsigned_abs()),
            ScrollDelta::Lines(n) => current.saturating_add(n.unsigned_abs()).min(max_scroll),
        };
    }
}

#[cfg(test)]
#[path = "../../tests/unit/models/text_buffer.rs"]
mod tests;
