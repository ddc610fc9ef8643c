//! Shell configuration.
//!
//! The binary runs with `ShellConfig::default()`; embedders and tests can
//! build one from partial JSON, missing fields falling back to the defaults.

use serde::{Deserialize, Serialize};

use crate::fixture::{FixtureSource, RandomFixture, SampleFixture};

pub const DEFAULT_TITLE: &str = "feedshell";
/// 540×350 dp at 5×10 dp per terminal cell.
pub const DEFAULT_SIZE: WindowSize = WindowSize {
    width: 108,
    height: 35,
};
pub const DEFAULT_SEED: u64 = 0x5eed;
pub const DEFAULT_MARGIN: u16 = 1;

/// Which sketch of the window gets rendered.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum MockupStage {
    /// Three solid color blocks.
    ColorBlocks,
    /// Two color blocks and a text view over the sample text.
    TextEditor,
    /// Feed list, entry list and text view over a small fixture.
    FeedList,
    /// Same as `FeedList` with a larger fixture.
    #[default]
    LargeFeedList,
}

impl MockupStage {
    pub fn shows_lists(self) -> bool {
        matches!(self, MockupStage::FeedList | MockupStage::LargeFeedList)
    }

    pub fn shows_text_view(self) -> bool {
        !matches!(self, MockupStage::ColorBlocks)
    }

    /// `(feeds, entries)` to generate, or `None` for the fixed sample text.
    pub fn fixture_counts(self) -> Option<(usize, usize)> {
        match self {
            MockupStage::ColorBlocks | MockupStage::TextEditor => None,
            MockupStage::FeedList => Some((12, 24)),
            MockupStage::LargeFeedList => Some((120, 600)),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct WindowSize {
    pub width: u16,
    pub height: u16,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ShellConfig {
    pub title: String,
    pub size: WindowSize,
    pub stage: MockupStage,
    pub seed: u64,
    /// Uniform inset around the whole layout, in cells.
    pub margin: u16,
}

impl Default for ShellConfig {
    fn default() -> Self {
        Self {
            title: DEFAULT_TITLE.to_string(),
            size: DEFAULT_SIZE,
            stage: MockupStage::default(),
            seed: DEFAULT_SEED,
            margin: DEFAULT_MARGIN,
        }
    }
}

impl ShellConfig {
    pub fn from_json_str(data: &str) -> serde_json::Result<Self> {
        serde_json::from_str(data)
    }

    pub fn with_stage(mut self, stage: MockupStage) -> Self {
        self.stage = stage;
        self
    }

    /// The placeholder source matching the configured stage.
    pub fn fixture(&self) -> Box<dyn FixtureSource> {
        match self.stage.fixture_counts() {
            Some((feeds, entries)) => Box::new(RandomFixture::new(self.seed, feeds, entries)),
            None => Box::new(SampleFixture),
        }
    }
}

#[cfg(test)]
#[path = "../tests/unit/config.rs"]
mod tests;
