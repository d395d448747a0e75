//! Storage collaborator for counters.
//!
//! The service only talks to `CounterStore`. Every method is a single-record
//! (or full-scan) operation, and implementations must make each one atomic
//! on its own. Read-modify-write sequences are coordinated by the service.

mod memory;

use async_trait::async_trait;

use tally_core::{Counter, Result};

pub use memory::MemoryStore;

/// Durable name -> counter store.
#[async_trait]
pub trait CounterStore: Send + Sync {
    /// Every stored counter. Order is implementation-defined.
    async fn find_all(&self) -> Result<Vec<Counter>>;

    /// Point lookup by primary key.
    async fn find_by_name(&self, name: &str) -> Result<Option<Counter>>;

    /// Insert or overwrite the record keyed by `counter.name`.
    /// Returns the stored value.
    async fn save(&self, counter: Counter) -> Result<Counter>;

    /// Remove the record. Returns true if one existed.
    async fn delete_by_name(&self, name: &str) -> Result<bool>;
}
