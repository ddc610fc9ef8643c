use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

use super::{Fixture, FixtureSource};
use crate::models::{Entry, Feed};

const ONSETS: &[&str] = &[
    "b", "br", "c", "ch", "d", "f", "g", "gr", "h", "k", "l", "m", "n", "p", "qu", "r", "s",
    "sh", "st", "t", "th", "v", "w", "z",
];
const VOWELS: &[&str] = &["a", "e", "i", "o", "u", "ai", "ea", "io", "ou"];
const CODAS: &[&str] = &["", "", "", "n", "r", "s", "l", "m", "st", "nd"];

/// Seeded generator of pseudo-word feeds and entries.
#[derive(Debug, Clone)]
pub struct RandomFixture {
    rng: StdRng,
    feeds: usize,
    entries: usize,
}

impl RandomFixture {
    /// Counts below one are raised to one.
    pub fn new(seed: u64, feeds: usize, entries: usize) -> Self {
        Self {
            rng: StdRng::seed_from_u64(seed),
            feeds: feeds.max(1),
            entries: entries.max(1),
        }
    }

    fn word(&mut self) -> String {
        let syllables = self.rng.gen_range(1..=3);
        let mut out = String::new();
        for _ in 0..syllables {
            out.push_str(self.pick(ONSETS));
            out.push_str(self.pick(VOWELS));
        }
        out.push_str(self.pick(CODAS));
        out
    }

    fn pick(&mut self, items: &[&'static str]) -> &'static str {
        items[self.rng.gen_range(0..items.len())]
    }

    fn words(&mut self, min: usize, max: usize) -> Vec<String> {
        let n = self.rng.gen_range(min..=max);
        (0..n).map(|_| self.word()).collect()
    }

    fn sentence(&mut self) -> String {
        let mut text = capitalize(&self.words(6, 14).join(" "));
        text.push(if self.rng.gen_bool(0.1) { '?' } else { '.' });
        text
    }

    fn paragraph(&mut self) -> String {
        let n = self.rng.gen_range(3..=6);
        (0..n).map(|_| self.sentence()).collect::<Vec<_>>().join(" ")
    }

    fn feed(&mut self) -> Feed {
        let words = self.words(1, 3);
        let name = words.iter().map(|w| capitalize(w)).collect::<Vec<_>>().join(" ");
        let url = format!("https://{}.example/feed.xml", words.join("-"));
        Feed::new(name, url)
    }

    fn entry(&mut self) -> Entry {
        let words = self.words(3, 8);
        let title = capitalize(&words.join(" "));
        let host = self.word();
        let url = format!("https://{host}.example/posts/{}", words.join("-"));
        let paragraphs = self.rng.gen_range(2..=5);
        let contents = (0..paragraphs)
            .map(|_| self.paragraph())
            .collect::<Vec<_>>()
            .join("\n\n");
        Entry::new(title, url, contents)
    }
}

impl FixtureSource for RandomFixture {
    fn generate(&mut self) -> Fixture {
        let feeds = (0..self.feeds).map(|_| self.feed()).collect();
        let entries = (0..self.entries).map(|_| self.entry()).collect();
        Fixture { feeds, entries }
    }
}

fn capitalize(s: &str) -> String {
    let mut chars = s.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars).collect(),
        None => String::new(),
    }
}

#[cfg(test)]
#[path = "../../tests/unit/fixture/random.rs"]
mod tests;
