use super::feed::{Entry, Feed};
use super::text_buffer::TextBuffer;
use crate::config::MockupStage;
use crate::fixture::Fixture;

/// Everything the shell renders. Owned by the shell and lent to `layout`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AppState {
    stage: MockupStage,
    feeds: Vec<Feed>,
    entries: Vec<Entry>,
    text: TextBuffer,
}

impl AppState {
    /// The text buffer starts out with the first entry's contents, or empty
    /// when there are no entries.
    pub fn new(stage: MockupStage, feeds: Vec<Feed>, entries: Vec<Entry>) -> Self {
        let text = entries
            .first()
            .map(|entry| TextBuffer::new(entry.contents.clone()))
            .unwrap_or_default();
        Self {
            stage,
            feeds,
            entries,
            text,
        }
    }

    pub fn from_fixture(stage: MockupStage, fixture: Fixture) -> Self {
        Self::new(stage, fixture.feeds, fixture.entries)
    }

    pub fn stage(&self) -> MockupStage {
        self.stage
    }

    pub fn feeds(&self) -> &[Feed] {
        &self.feeds
    }

    pub fn entries(&self) -> &[Entry] {
        &self.entries
    }

    pub fn text(&self) -> &TextBuffer {
        &self.text
    }

    pub fn text_mut(&mut self) -> &mut TextBuffer {
        &mut self.text
    }
}

#[cfg(test)]
#[path = "../../tests/unit/models/app_state.rs"]
mod tests;
