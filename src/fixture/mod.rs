//! Placeholder data for the mockup.
//!
//! Nothing here is product logic: the shell only needs *some* feeds and
//! entries to lay out. Sources are seeded so two runs with the same
//! configuration render identical windows.

mod random;
mod sample;

pub use random::RandomFixture;
pub use sample::{SampleFixture, SAMPLE_TEXT};

use crate::models::{Entry, Feed};

/// Generated feeds and entries, handed to `AppState::from_fixture`.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Fixture {
    pub feeds: Vec<Feed>,
    pub entries: Vec<Entry>,
}

impl Fixture {
    pub fn is_empty(&self) -> bool {
        self.feeds.is_empty() || self.entries.is_empty()
    }
}

pub trait FixtureSource {
    /// Produce at least one feed and one entry.
    fn generate(&mut self) -> Fixture;
}

impl<F: FnMut() -> Fixture> FixtureSource for F {
    fn generate(&mut self) -> Fixture {
        self()
    }
}
