//! Lightweight in-process metrics (dependency-free).
//!
//! Metrics are stored as atomics, recorded by the `track` middleware and the
//! handlers, and rendered by the `/metrics` handler.

pub mod metrics;
pub mod track;

pub use metrics::ServerMetrics;
