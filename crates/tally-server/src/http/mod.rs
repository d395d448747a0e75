//! HTTP endpoint layer for `/counters`.
//!
//! Handlers only deserialize, call `CounterService`, and shape the result.
//! `ApiError` is the single place a `TallyError` becomes an HTTP response.

pub mod error;
pub mod hal;
pub mod handlers;

pub use error::ApiError;
pub use hal::Hal;
