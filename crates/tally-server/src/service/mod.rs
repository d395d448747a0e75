//! Counter business logic.
//!
//! `CounterService` enforces existence checks, applies the increment and
//! decrement rules, and decides deletion. `KeyLocks` serializes every write
//! per counter name.

mod counter;
mod locks;

pub use counter::{CounterService, DecreaseOutcome};
pub use locks::{KeyEntry, KeyLocks};
