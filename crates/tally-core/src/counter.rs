//! The counter entity.

use std::fmt;

use serde::{Deserialize, Serialize};

/// A named integer counter. `name` is the primary key.
///
/// Parsing is lenient: unknown fields (such as `_links` echoed back from a
/// HAL response) are ignored and a missing `count` reads as 0.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Counter {
    pub name: String,
    #[serde(default)]
    pub count: i64,
}

impl Counter {
    pub fn new(name: impl Into<String>, count: i64) -> Self {
        Self { name: name.into(), count }
    }

    /// Copy with `count + 1`. Saturates at `i64::MAX`.
    pub fn incremented(&self) -> Self {
        Self {
            name: self.name.clone(),
            count: self.count.saturating_add(1),
        }
    }

    /// Copy with `count - 1`. Saturates at `i64::MIN`.
    pub fn decremented(&self) -> Self {
        Self {
            name: self.name.clone(),
            count: self.count.saturating_sub(1),
        }
    }

    /// A counter at or below zero is not kept after a decrement.
    pub fn is_exhausted(&self) -> bool {
        self.count <= 0
    }
}

impl fmt::Display for Counter {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Counter{{name='{}', count={}}}", self.name, self.count)
    }
}

#[cfg(test)]
mod tests {
    #![allow(clippy::unwrap_used)]

    use super::*;

    #[test]
    fn increment_and_decrement_step_by_one() {
        let c = Counter::new("counter1", 8);
        assert_eq!(c.incremented().count, 9);
        assert_eq!(c.decremented().count, 7);
        assert_eq!(c.incremented().name, "counter1");
    }

    #[test]
    fn increment_saturates() {
        let c = Counter::new("max", i64::MAX);
        assert_eq!(c.incremented().count, i64::MAX);
    }

    #[test]
    fn exhausted_at_or_below_zero() {
        assert!(Counter::new("a", 1).decremented().is_exhausted());
        assert!(Counter::new("b", -3).is_exhausted());
        assert!(!Counter::new("c", 2).decremented().is_exhausted());
    }

    #[test]
    fn display_matches_log_format() {
        let c = Counter::new("counter2", 2);
        assert_eq!(c.to_string(), "Counter{name='counter2', count=2}");
    }

    #[test]
    fn json_ignores_unknown_fields() {
        let ok: Counter = serde_json::from_str(r#"{"name":"x","count":3}"#).unwrap();
        assert_eq!(ok, Counter::new("x", 3));

        let echoed: Counter =
            serde_json::from_str(r#"{"name":"x","count":3,"_links":{"self":{"href":"/counters/x"}}}"#)
                .unwrap();
        assert_eq!(echoed, Counter::new("x", 3));
    }

    #[test]
    fn json_defaults_missing_count_to_zero() {
        let c: Counter = serde_json::from_str(r#"{"name":"x"}"#).unwrap();
        assert_eq!(c, Counter::new("x", 0));
    }
}
