//! Zettel (note) model

use std::path::PathBuf;

/// A single note read from a Zettelkasten directory
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Zettel {
    /// Unique identifier, typically a timestamp such as `201906121519`
    pub id: String,

    /// Human readable title shown in hover text
    pub title: String,

    /// Identifiers of the zettels this note cites, in order of appearance
    pub links: Vec<String>,

    /// File the note was read from (if any)
    pub path: Option<PathBuf>,
}

impl Zettel {
    /// Create a new zettel without links
    #[must_use]
    pub fn new(id: impl Into<String>, title: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            title: title.into(),
            links: Vec::new(),
            path: None,
        }
    }

    /// Add a citation to another zettel
    ///
    /// Empty targets, self-citations and repeated citations are ignored.
    pub fn add_link(&mut self, target: impl Into<String>) {
        let target = target.into();
        if target.is_empty() || target == self.id || self.cites(&target) {
            return;
        }
        self.links.push(target);
    }

    /// Whether this zettel cites `target`
    #[must_use]
    pub fn cites(&self, target: &str) -> bool {
        self.links.iter().any(|link| link == target)
    }
}
