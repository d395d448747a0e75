use async_trait::async_trait;
use dashmap::DashMap;

use tally_core::{Counter, Result, TallyError};

use super::CounterStore;

/// In-process store backed by `DashMap`.
///
/// Each call locks a single shard, which gives the per-record atomicity the
/// service relies on. `find_all` is sorted by name so listings are stable.
#[derive(Default)]
pub struct MemoryStore {
    rows: DashMap<String, Counter>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self { rows: DashMap::new() }
    }

    pub fn len(&self) -> usize {
        self.rows.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }
}

#[async_trait]
impl CounterStore for MemoryStore {
    async fn find_all(&self) -> Result<Vec<Counter>> {
        let mut all: Vec<Counter> = self.rows.iter().map(|r| r.value().clone()).collect();
        all.sort_by(|a, b| a.name.cmp(&b.name));
        Ok(all)
    }

    async fn find_by_name(&self, name: &str) -> Result<Option<Counter>> {
        Ok(self.rows.get(name).map(|r| r.value().clone()))
    }

    async fn save(&self, counter: Counter) -> Result<Counter> {
        if counter.name.is_empty() {
            return Err(TallyError::BadRequest("counter name must not be empty".into()));
        }
        self.rows.insert(counter.name.clone(), counter.clone());
        Ok(counter)
    }

    async fn delete_by_name(&self, name: &str) -> Result<bool> {
        Ok(self.rows.remove(name).is_some())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn save_is_an_upsert() {
        let store = MemoryStore::new();
        store.save(Counter::new("a", 1)).await.unwrap();
        store.save(Counter::new("a", 7)).await.unwrap();

        assert_eq!(store.len(), 1);
        assert_eq!(store.find_by_name("a").await.unwrap(), Some(Counter::new("a", 7)));
    }

    #[tokio::test]
    async fn rejects_empty_name() {
        let store = MemoryStore::new();
        let err = store.save(Counter::new("", 1)).await.unwrap_err();
        assert_eq!(err.client_code().as_str(), "BAD_REQUEST");
        assert!(store.is_empty());
    }

    #[tokio::test]
    async fn find_all_is_sorted_and_delete_reports_presence() {
        let store = MemoryStore::new();
        store.save(Counter::new("b", 2)).await.unwrap();
        store.save(Counter::new("a", 1)).await.unwrap();

        let names: Vec<String> = store.find_all().await.unwrap().into_iter().map(|c| c.name).collect();
        assert_eq!(names, ["a", "b"]);

        assert!(store.delete_by_name("a").await.unwrap());
        assert!(!store.delete_by_name("a").await.unwrap());
        assert_eq!(store.find_by_name("a").await.unwrap(), None);
    }
}
