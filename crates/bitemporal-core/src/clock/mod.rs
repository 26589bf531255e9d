//! Reference-time providers.
//!
//! Everything that stamps or evaluates "now" takes a [`Clock`] rather than
//! reading the system time directly, so tests and backdated corrections can
//! pin the reference instant.

mod reference;

pub use reference::{Reference, ReferenceClock};

use chrono::{DateTime, NaiveDate, Utc};

/// Supplies the current instant and business date.
pub trait Clock: Send + Sync {
    fn now(&self) -> DateTime<Utc>;

    /// The current business date, derived from [`Clock::now`] unless overridden.
    fn today(&self) -> NaiveDate {
        self.now().date_naive()
    }
}

/// Live wall-clock time.
#[derive(Debug, Clone, Copy, Default)]
pub struct SystemClock;

impl Clock for SystemClock {
    fn now(&self) -> DateTime<Utc> {
        Utc::now()
    }
}

/// A clock pinned to a single instant.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FixedClock {
    at: DateTime<Utc>,
}

impl FixedClock {
    pub fn new(at: impl Into<Reference>) -> Self {
        Self {
            at: at.into().instant(),
        }
    }
}

impl Clock for FixedClock {
    fn now(&self) -> DateTime<Utc> {
        self.at
    }
}
