use serde::ser::{Serialize, SerializeMap, Serializer};

/// A single hypermedia link.
#[derive(Debug, Clone, PartialEq, Eq, serde::Serialize)]
pub struct Link {
    pub href: String,
}

impl Link {
    pub fn new(href: impl Into<String>) -> Self {
        Self { href: href.into() }
    }
}

/// Ordered relation -> link map. Insertion order is kept on the wire.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Links {
    entries: Vec<(String, Link)>,
}

impl Links {
    pub fn new() -> Self {
        Self::default()
    }

    /// Add or replace the link for `rel`.
    pub fn with(mut self, rel: impl Into<String>, link: Link) -> Self {
        let rel = rel.into();
        match self.entries.iter_mut().find(|(r, _)| *r == rel) {
            Some(slot) => slot.1 = link,
            None => self.entries.push((rel, link)),
        }
        self
    }

    pub fn get(&self, rel: &str) -> Option<&Link> {
        self.entries.iter().find(|(r, _)| r == rel).map(|(_, l)| l)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

impl Serialize for Links {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(Some(self.entries.len()))?;
        for (rel, link) in &self.entries {
            map.serialize_entry(rel, link)?;
        }
        map.end()
    }
}
