//! Startup seeding from the `seed` config section.

use tally_core::error::Result;
use tally_core::Counter;

use crate::config::SeedCounter;
use crate::service::CounterService;

/// Preload every seed entry (upsert). Returns how many were written.
pub async fn preload(service: &CounterService, seeds: &[SeedCounter]) -> Result<usize> {
    for s in seeds {
        let saved = service.create(Counter::from(s)).await?;
        tracing::info!("Preloading {saved}");
    }
    Ok(seeds.len())
}

#[cfg(test)]
mod tests {
    use std::sync::Arc;

    use super::*;
    use crate::storage::MemoryStore;

    #[tokio::test]
    async fn seeds_are_stored() {
        let svc = CounterService::new(Arc::new(MemoryStore::new()));
        let seeds = vec![
            SeedCounter { name: "counter1".into(), count: 8 },
            SeedCounter { name: "counter2".into(), count: 2 },
        ];

        assert_eq!(preload(&svc, &seeds).await.unwrap(), 2);
        assert_eq!(svc.get_by_name("counter1").await.unwrap().count, 8);
        assert_eq!(svc.get_by_name("counter2").await.unwrap().count, 2);
    }

    #[tokio::test]
    async fn empty_seed_is_a_noop() {
        let svc = CounterService::new(Arc::new(MemoryStore::new()));
        assert_eq!(preload(&svc, &[]).await.unwrap(), 0);
        assert!(svc.list_all().await.unwrap().is_empty());
    }
}
