//! A live clock that can be overridden with a reference instant.

use std::sync::RwLock;

use chrono::{DateTime, NaiveDate, Utc};

use super::Clock;
use crate::models::start_of_day;

/// A reference point in time: either a business date or a full instant.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Reference {
    Date(NaiveDate),
    Instant(DateTime<Utc>),
}

impl Reference {
    /// The instant this reference denotes. Dates map to their start of day.
    pub fn instant(self) -> DateTime<Utc> {
        match self {
            Reference::Date(d) => start_of_day(d),
            Reference::Instant(t) => t,
        }
    }
}

impl From<NaiveDate> for Reference {
    fn from(date: NaiveDate) -> Self {
        Reference::Date(date)
    }
}

impl From<DateTime<Utc>> for Reference {
    fn from(instant: DateTime<Utc>) -> Self {
        Reference::Instant(instant)
    }
}

/// Wall-clock time unless a reference instant has been set.
///
/// Overriding affects only values stamped afterwards; entries already
/// recorded keep their instants.
#[derive(Debug, Default)]
pub struct ReferenceClock {
    reference: RwLock<Option<DateTime<Utc>>>,
}

impl ReferenceClock {
    pub fn new() -> Self {
        Self::default()
    }

    /// A clock that starts out pinned to `reference`.
    pub fn pinned(reference: impl Into<Reference>) -> Self {
        Self {
            reference: RwLock::new(Some(reference.into().instant())),
        }
    }

    pub fn set_reference(&self, reference: impl Into<Reference>) {
        let mut slot = self.reference.write().unwrap_or_else(|e| e.into_inner());
        *slot = Some(reference.into().instant());
    }

    /// Return to live wall-clock time.
    pub fn clear_reference(&self) {
        let mut slot = self.reference.write().unwrap_or_else(|e| e.into_inner());
        *slot = None;
    }

    pub fn is_reference_set(&self) -> bool {
        self.reference
            .read()
            .unwrap_or_else(|e| e.into_inner())
            .is_some()
    }
}

impl Clock for ReferenceClock {
    fn now(&self) -> DateTime<Utc> {
        let reference = *self.reference.read().unwrap_or_else(|e| e.into_inner());
        reference.unwrap_or_else(Utc::now)
    }
}
