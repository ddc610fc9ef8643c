/// A subscribed feed. Only its name is ever shown.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Feed {
    pub name: String,
    pub url: String,
}

impl Feed {
    pub fn new(name: impl Into<String>, url: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            url: url.into(),
        }
    }
}

/// A single item of a feed: the entry list shows its title and the text view
/// its contents.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Entry {
    pub title: String,
    pub url: String,
    pub contents: String,
}

impl Entry {
    pub fn new(
        title: impl Into<String>,
        url: impl Into<String>,
        contents: impl Into<String>,
    ) -> Self {
        Self {
            title: title.into(),
            url: url.into(),
            contents: contents.into(),
        }
    }
}
