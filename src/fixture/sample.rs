use super::{Fixture, FixtureSource};
use crate::models::{Entry, Feed};

/// Book one of the *Meditations*, used by the earliest sketches.
pub const SAMPLE_TEXT: &str = include_str!("meditations.txt");

/// One feed with one entry whose contents are [`SAMPLE_TEXT`].
#[derive(Debug, Clone, Copy, Default)]
pub struct SampleFixture;

impl FixtureSource for SampleFixture {
    fn generate(&mut self) -> Fixture {
        Fixture {
            feeds: vec![Feed::new("Meditations", "https://meditations.example/feed.xml")],
            entries: vec![Entry::new(
                "Book One",
                "https://meditations.example/book-one",
                SAMPLE_TEXT,
            )],
        }
    }
}
