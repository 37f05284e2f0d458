//! Reference clock used for overdue and stale flags.
//!
//! Dashboard derivations never read the wall clock themselves; callers pass
//! a `Clock` (or the instant it produced) so renders are reproducible.

use crate::model::instant::Instant;
use chrono::Local;

/// Source of the "now" instant.
pub trait Clock {
    fn now(&self) -> Instant;
}

/// Local wall-clock time.
#[derive(Debug, Clone, Copy, Default)]
pub struct SystemClock;

impl Clock for SystemClock {
    fn now(&self) -> Instant {
        Local::now().naive_local()
    }
}

/// Clock pinned to one instant.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FixedClock(pub Instant);

impl Clock for FixedClock {
    fn now(&self) -> Instant {
        self.0
    }
}
