use std::sync::Arc;

use dashmap::DashMap;
use tokio::sync::{Mutex, MutexGuard};

/// Per-name async mutexes.
///
/// Entries exist only while some task holds a `KeyEntry` for the name. The
/// last `KeyEntry` to drop removes the map entry, including when the owning
/// future is cancelled while waiting on the mutex.
#[derive(Default)]
pub struct KeyLocks {
    locks: DashMap<String, Arc<Mutex<()>>>,
}

impl KeyLocks {
    pub fn new() -> Self {
        Self { locks: DashMap::new() }
    }

    /// Claim the entry for `key`. Lock it with `.lock().await`.
    ///
    /// Declare the entry before the guard so the guard drops first.
    pub fn entry(&self, key: &str) -> KeyEntry<'_> {
        let lock = match self.locks.get(key) {
            Some(lock) => Arc::clone(lock.value()),
            None => Arc::clone(
                self.locks
                    .entry(key.to_string())
                    .or_insert_with(|| Arc::new(Mutex::new(())))
                    .value(),
            ),
        };
        KeyEntry {
            locks: self,
            key: key.to_string(),
            lock,
        }
    }

    /// Drop the entry for `key` if `held` is the only handle outside the map.
    /// Shard locking keeps this from racing `entry`.
    fn release(&self, key: &str, held: &Arc<Mutex<()>>) {
        self.locks
            .remove_if(key, |_, lock| Arc::ptr_eq(lock, held) && Arc::strong_count(lock) == 2);
    }

    pub fn len(&self) -> usize {
        self.locks.len()
    }

    pub fn is_empty(&self) -> bool {
        self.locks.is_empty()
    }
}

/// A claimed per-name mutex. Releases its map entry on drop.
pub struct KeyEntry<'a> {
    locks: &'a KeyLocks,
    key: String,
    lock: Arc<Mutex<()>>,
}

impl KeyEntry<'_> {
    pub async fn lock(&self) -> MutexGuard<'_, ()> {
        self.lock.lock().await
    }
}

impl Drop for KeyEntry<'_> {
    fn drop(&mut self) {
        self.locks.release(&self.key, &self.lock);
    }
}

#[cfg(test)]
mod tests {
    use std::time::Duration;

    use super::*;

    #[test]
    fn same_key_shares_one_mutex() {
        let locks = KeyLocks::new();
        let a = locks.entry("x");
        let b = locks.entry("x");
        assert!(Arc::ptr_eq(&a.lock, &b.lock));
        assert_eq!(locks.len(), 1);
    }

    #[test]
    fn last_entry_removes_the_key() {
        let locks = KeyLocks::new();
        let mine = locks.entry("x");
        let other = locks.entry("x");

        drop(mine);
        assert_eq!(locks.len(), 1);

        drop(other);
        assert!(locks.is_empty());
    }

    #[tokio::test]
    async fn cancelled_waiter_does_not_leak_an_entry() {
        let locks = KeyLocks::new();
        let holder = locks.entry("x");
        let guard = holder.lock().await;

        let waited = tokio::time::timeout(Duration::from_millis(20), async {
            let entry = locks.entry("x");
            let _guard = entry.lock().await;
        })
        .await;
        assert!(waited.is_err());
        assert_eq!(locks.len(), 1);

        drop(guard);
        drop(holder);
        assert!(locks.is_empty());
    }
}
