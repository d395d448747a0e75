//! Hypermedia shaping for counters.
//!
//! Links are built from an explicit base URL plus the `/counters` path and the
//! counter name. An empty base URL yields relative hrefs.

use tally_core::hal::{CollectionModel, EntityModel, Link, Links, REL_SELF};
use tally_core::Counter;

/// Collection path served by the endpoint layer.
pub const COUNTERS_PATH: &str = "/counters";
/// Relation from a single counter back to the collection.
pub const REL_COUNTERS: &str = "counters";
/// Relation the collection embeds its items under.
pub const REL_COUNTER_LIST: &str = "counterList";

#[derive(Debug, Clone)]
pub struct CounterPresenter {
    collection_href: String,
}

impl CounterPresenter {
    /// `base_url` must not end with `/` (config validation enforces it).
    pub fn new(base_url: &str) -> Self {
        Self {
            collection_href: format!("{base_url}{COUNTERS_PATH}"),
        }
    }

    pub fn collection_href(&self) -> &str {
        &self.collection_href
    }

    pub fn item_href(&self, name: &str) -> String {
        format!("{}/{}", self.collection_href, encode_path_segment(name))
    }

    pub fn to_model(&self, counter: Counter) -> EntityModel<Counter> {
        let links = Links::new()
            .with(REL_SELF, Link::new(self.item_href(&counter.name)))
            .with(REL_COUNTERS, Link::new(self.collection_href.clone()));
        EntityModel::new(counter, links)
    }

    /// One `to_model` per counter, order preserved.
    pub fn to_collection(&self, counters: Vec<Counter>) -> CollectionModel<EntityModel<Counter>> {
        let items = counters.into_iter().map(|c| self.to_model(c)).collect();
        let links = Links::new().with(REL_SELF, Link::new(self.collection_href.clone()));
        CollectionModel::new(REL_COUNTER_LIST, items, links)
    }
}

/// Percent-encode everything outside the RFC 3986 unreserved set.
fn encode_path_segment(raw: &str) -> String {
    let mut out = String::with_capacity(raw.len());
    for b in raw.bytes() {
        match b {
            b'A'..=b'Z' | b'a'..=b'z' | b'0'..=b'9' | b'-' | b'.' | b'_' | b'~' => out.push(b as char),
            _ => out.push_str(&format!("%{b:02X}")),
        }
    }
    out
}

#[cfg(test)]
mod tests {
    use serde_json::json;

    use super::*;

    #[test]
    fn single_counter_has_self_and_collection_links() {
        let p = CounterPresenter::new("http://localhost:8080");
        let v = serde_json::to_value(p.to_model(Counter::new("counter1", 5))).unwrap();
        assert_eq!(
            v,
            json!({
                "name": "counter1",
                "count": 5,
                "_links": {
                    "self": { "href": "http://localhost:8080/counters/counter1" },
                    "counters": { "href": "http://localhost:8080/counters" }
                }
            })
        );
    }

    #[test]
    fn collection_preserves_order() {
        let p = CounterPresenter::new("");
        let m = p.to_collection(vec![Counter::new("b", 2), Counter::new("a", 1)]);
        let v = serde_json::to_value(&m).unwrap();

        assert_eq!(v["_embedded"]["counterList"][0]["name"], "b");
        assert_eq!(v["_embedded"]["counterList"][1]["_links"]["self"]["href"], "/counters/a");
        assert_eq!(v["_links"]["self"]["href"], "/counters");
    }

    #[test]
    fn names_are_encoded_as_path_segments() {
        let p = CounterPresenter::new("");
        assert_eq!(p.item_href("a b/c"), "/counters/a%20b%2Fc");
        assert_eq!(p.item_href("plain-name_1.x~"), "/counters/plain-name_1.x~");
        assert_eq!(p.item_href("é"), "/counters/%C3%A9");
    }
}
