use serde::ser::{Serialize, SerializeMap, Serializer};

use super::Links;

/// A single resource plus its links.
///
/// `content` fields are flattened, so a counter renders as
/// `{"name": .., "count": .., "_links": {..}}`.
#[derive(Debug, Clone, PartialEq, serde::Serialize)]
pub struct EntityModel<T> {
    #[serde(flatten)]
    pub content: T,
    #[serde(rename = "_links")]
    pub links: Links,
}

impl<T> EntityModel<T> {
    pub fn new(content: T, links: Links) -> Self {
        Self { content, links }
    }
}

/// A collection of resources embedded under one relation name.
///
/// An empty collection omits `_embedded` and only renders `_links`.
#[derive(Debug, Clone, PartialEq, serde::Serialize)]
pub struct CollectionModel<T> {
    #[serde(rename = "_embedded", skip_serializing_if = "Embedded::is_empty")]
    pub embedded: Embedded<T>,
    #[serde(rename = "_links")]
    pub links: Links,
}

impl<T> CollectionModel<T> {
    pub fn new(rel: impl Into<String>, items: Vec<T>, links: Links) -> Self {
        Self {
            embedded: Embedded { rel: rel.into(), items },
            links,
        }
    }

    pub fn items(&self) -> &[T] {
        &self.embedded.items
    }
}

/// `_embedded` body: `{"<rel>": [items...]}`.
#[derive(Debug, Clone, PartialEq)]
pub struct Embedded<T> {
    pub rel: String,
    pub items: Vec<T>,
}

impl<T> Embedded<T> {
    fn is_empty(&self) -> bool {
        self.items.is_empty()
    }
}

impl<T: Serialize> Serialize for Embedded<T> {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(Some(1))?;
        map.serialize_entry(&self.rel, &self.items)?;
        map.end()
    }
}
