//! Recording lifecycle: born open, closed at most once.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use bitemporal_core::errors::{BitemporalResult, TemporalError};
use bitemporal_core::models::Interval;

/// The recording state of a fact version.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(tag = "state", rename_all = "snake_case")]
pub enum Recording {
    /// Still the current belief.
    Open { since: DateTime<Utc> },
    /// Superseded or retracted at `until`.
    Closed {
        since: DateTime<Utc>,
        until: DateTime<Utc>,
    },
}

impl Recording {
    pub fn open(since: DateTime<Utc>) -> Self {
        Recording::Open { since }
    }

    pub fn since(&self) -> DateTime<Utc> {
        match *self {
            Recording::Open { since } | Recording::Closed { since, .. } => since,
        }
    }

    pub fn is_open(&self) -> bool {
        matches!(self, Recording::Open { .. })
    }

    /// `[since, ∞)` while open, `[since, until)` once closed.
    pub fn interval(&self) -> Interval<DateTime<Utc>> {
        match *self {
            Recording::Open { since } => Interval::since(since),
            Recording::Closed { since, until } => Interval::new(since, until),
        }
    }

    /// Transition `Open -> Closed` at `at`.
    ///
    /// A closed recording is final: closing it again fails with
    /// [`TemporalError::DoubleClose`] and leaves it untouched.
    pub fn close(&mut self, at: DateTime<Utc>) -> BitemporalResult<()> {
        match *self {
            Recording::Open { since } => {
                if at < since {
                    return Err(TemporalError::InvalidTemporalBounds(format!(
                        "cannot close recording at {} before it started at {}",
                        at.to_rfc3339(),
                        since.to_rfc3339()
                    ))
                    .into());
                }
                *self = Recording::Closed { since, until: at };
                Ok(())
            }
            Recording::Closed { until, .. } => Err(TemporalError::DoubleClose {
                closed_at: until,
                attempted: at,
            }
            .into()),
        }
    }
}
