//! Timestamp type and period math.
//!
//! Timestamps are Unix epoch seconds (UTC). Governance never reads an
//! ambient clock: every time-sensitive operation takes `now` explicitly so
//! the whole state machine is deterministic under test.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::time::{SystemTime, UNIX_EPOCH};

/// A Unix timestamp in seconds since epoch (UTC).
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct Timestamp(u64);

impl Timestamp {
    /// The epoch (time zero).
    pub const EPOCH: Self = Self(0);

    pub fn new(secs: u64) -> Self {
        Self(secs)
    }

    /// Get the current system time as a `Timestamp`.
    pub fn now() -> Self {
        let secs = SystemTime::now()
            .duration_since(UNIX_EPOCH)
            .expect("system clock before Unix epoch")
            .as_secs();
        Self(secs)
    }

    pub fn as_secs(&self) -> u64 {
        self.0
    }

    pub fn plus_secs(&self, secs: u64) -> Self {
        Self(self.0.saturating_add(secs))
    }

    /// Number of whole fixed-length periods elapsed since `origin`.
    ///
    /// Returns 0 if `self` precedes `origin`. `period_secs` must be non-zero
    /// (guaranteed by parameter validation).
    pub fn periods_since(&self, origin: Timestamp, period_secs: u64) -> u64 {
        self.0.saturating_sub(origin.0) / period_secs
    }
}

impl fmt::Display for Timestamp {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}s", self.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn periods_since_counts_whole_periods() {
        let origin = Timestamp::new(1000);
        assert_eq!(Timestamp::new(1000).periods_since(origin, 100), 0);
        assert_eq!(Timestamp::new(1099).periods_since(origin, 100), 0);
        assert_eq!(Timestamp::new(1100).periods_since(origin, 100), 1);
        assert_eq!(Timestamp::new(2050).periods_since(origin, 100), 10);
    }

    #[test]
    fn periods_since_before_origin_is_zero() {
        let origin = Timestamp::new(1000);
        assert_eq!(Timestamp::new(500).periods_since(origin, 100), 0);
    }
}
