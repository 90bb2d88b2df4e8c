//! Monotonic load-sequence tokens.
//!
//! Every file load is tagged with a [`LoadToken`] when it is *started*. When
//! completions arrive out of order, the consumer keeps the newest token it has
//! applied and discards anything older.

use core::sync::atomic::{AtomicU64, Ordering};

use serde::{Deserialize, Serialize};

/// Identifier of a single load, ordered by start time.
#[derive(Debug, Copy, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct LoadToken(u64);

impl LoadToken {
    pub fn from_raw(value: u64) -> Self {
        Self(value)
    }

    pub fn as_u64(&self) -> u64 {
        self.0
    }

    /// True when `self` was issued after `other`.
    pub fn supersedes(&self, other: LoadToken) -> bool {
        self.0 > other.0
    }
}

impl core::fmt::Display for LoadToken {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        write!(f, "load#{}", self.0)
    }
}

impl From<LoadToken> for u64 {
    fn from(value: LoadToken) -> Self {
        value.0
    }
}

/// Issues strictly increasing [`LoadToken`]s.
///
/// Shareable across tasks; the first token issued is `load#1`.
#[derive(Debug, Default)]
pub struct LoadSequence {
    last: AtomicU64,
}

impl LoadSequence {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn next(&self) -> LoadToken {
        LoadToken(self.last.fetch_add(1, Ordering::Relaxed) + 1)
    }
}
