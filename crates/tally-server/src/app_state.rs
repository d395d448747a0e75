//! Shared application state for the tally server.
//!
//! This is the composition root: the store, service, presenter and metrics
//! are built here once and handed to handlers as `Arc`s.

use std::sync::Arc;

use tally_core::error::Result;

use crate::config::ServerConfig;
use crate::obs::ServerMetrics;
use crate::presenter::CounterPresenter;
use crate::service::CounterService;
use crate::storage::{CounterStore, MemoryStore};

#[derive(Clone)]
pub struct AppState {
    inner: Arc<AppStateInner>,
    service: Arc<CounterService>,
    presenter: Arc<CounterPresenter>,
    metrics: Arc<ServerMetrics>,
}

struct AppStateInner {
    cfg: ServerConfig,
}

impl AppState {
    /// Build application state over a fresh in-memory store.
    pub fn new(cfg: ServerConfig) -> Result<Self> {
        Self::with_store(cfg, Arc::new(MemoryStore::new()))
    }

    /// Build application state over any storage collaborator.
    /// Returns Result so main can handle errors gracefully (no panic).
    pub fn with_store(cfg: ServerConfig, store: Arc<dyn CounterStore>) -> Result<Self> {
        cfg.validate()?;

        let service = Arc::new(CounterService::new(store));
        let presenter = Arc::new(CounterPresenter::new(&cfg.links.base_url));

        Ok(Self {
            inner: Arc::new(AppStateInner { cfg }),
            service,
            presenter,
            metrics: Arc::new(ServerMetrics::default()),
        })
    }

    pub fn cfg(&self) -> &ServerConfig {
        &self.inner.cfg
    }

    pub fn service(&self) -> Arc<CounterService> {
        Arc::clone(&self.service)
    }

    pub fn presenter(&self) -> Arc<CounterPresenter> {
        Arc::clone(&self.presenter)
    }

    pub fn metrics(&self) -> Arc<ServerMetrics> {
        Arc::clone(&self.metrics)
    }

    pub fn is_draining(&self) -> bool {
        self.metrics.is_draining()
    }

    pub fn set_draining(&self) {
        self.metrics.set_draining();
    }

    /// Extra gauge lines appended to `/metrics`.
    pub fn metrics_extra(&self) -> Vec<(&'static str, u64)> {
        vec![("tally_key_locks_active", self.service.active_locks() as u64)]
    }
}
