//! tally core: the counter entity, error taxonomy, and hypermedia primitives.
//!
//! This crate defines the data contracts and error surface shared by the
//! server, its tests, and any client tooling. It carries no transport or
//! runtime dependencies so it can be reused in multiple contexts.
//!
//! # Defensive guarantees
//! Panics, `unwrap`, and `expect` are compile-denied here
//! (`#![deny(clippy::panic, clippy::unwrap_used, clippy::expect_used)]`).
//! All fallible paths must surface as `TallyError`/`Result`.

#![deny(clippy::unwrap_used)]
#![deny(clippy::expect_used)]
#![deny(clippy::panic)]

pub mod counter;
pub mod error;
pub mod hal;

pub use counter::Counter;
/// Shared result type.
pub use error::{Result, TallyError};
