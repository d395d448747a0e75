use std::sync::Arc;

use tally_core::{Counter, Result, TallyError};

use crate::storage::CounterStore;

use super::KeyLocks;

/// What `decrease_or_delete` did to the record.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DecreaseOutcome {
    /// Record kept with this new count.
    Decremented(i64),
    /// New count was `<= 0`, so the record was removed.
    Deleted,
}

/// CRUD service over a `CounterStore`.
///
/// Lookups that miss fail with `TallyError::NotFound(name)` and leave storage
/// untouched. Every write path holds a per-name lock, so `increase` and
/// `decrease_or_delete` run their lookup-mutate-persist sequence without a
/// concurrent `create` or update slipping in between.
pub struct CounterService {
    store: Arc<dyn CounterStore>,
    locks: KeyLocks,
}

impl CounterService {
    pub fn new(store: Arc<dyn CounterStore>) -> Self {
        Self {
            store,
            locks: KeyLocks::new(),
        }
    }

    /// Per-name lock entries currently held in memory.
    pub fn active_locks(&self) -> usize {
        self.locks.len()
    }

    pub async fn list_all(&self) -> Result<Vec<Counter>> {
        let all = self.store.find_all().await?;
        tracing::debug!(len = all.len(), "listed counters");
        Ok(all)
    }

    /// Upsert. Overwrites any existing counter with the same name.
    ///
    /// Takes the per-name lock so an upsert never lands inside another
    /// task's lookup-mutate-persist sequence.
    pub async fn create(&self, counter: Counter) -> Result<Counter> {
        let entry = self.locks.entry(&counter.name);
        let _guard = entry.lock().await;

        let saved = self.store.save(counter).await?;
        tracing::debug!(name = %saved.name, count = saved.count, "counter saved");
        Ok(saved)
    }

    pub async fn get_by_name(&self, name: &str) -> Result<Counter> {
        self.store
            .find_by_name(name)
            .await?
            .ok_or_else(|| TallyError::NotFound(name.to_string()))
    }

    pub async fn increase(&self, name: &str) -> Result<()> {
        let entry = self.locks.entry(name);
        let _guard = entry.lock().await;
        self.increase_locked(name).await
    }

    pub async fn decrease_or_delete(&self, name: &str) -> Result<DecreaseOutcome> {
        let entry = self.locks.entry(name);
        let _guard = entry.lock().await;
        self.decrease_locked(name).await
    }

    async fn increase_locked(&self, name: &str) -> Result<()> {
        let counter = self.get_by_name(name).await?;
        let next = counter.incremented();
        tracing::debug!(name, from = counter.count, to = next.count, "counter increased");
        self.store.save(next).await?;
        Ok(())
    }

    async fn decrease_locked(&self, name: &str) -> Result<DecreaseOutcome> {
        let counter = self.get_by_name(name).await?;
        let next = counter.decremented();

        if next.is_exhausted() {
            self.store.delete_by_name(name).await?;
            tracing::info!(name, from = counter.count, "counter reached zero, deleted");
            return Ok(DecreaseOutcome::Deleted);
        }

        let count = next.count;
        self.store.save(next).await?;
        tracing::debug!(name, from = counter.count, to = count, "counter decreased");
        Ok(DecreaseOutcome::Decremented(count))
    }
}
