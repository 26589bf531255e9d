//! TemporalValue: an immutable payload wrapped with validity and recording time.

mod recording;

pub use recording::Recording;

use std::fmt;

use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};

use bitemporal_core::clock::Clock;
use bitemporal_core::errors::BitemporalResult;
use bitemporal_core::models::Interval;
use bitemporal_core::traits::Versioned;

/// A value decorated with bitemporal information.
///
/// The payload never changes; changes to a tracked property are new
/// `TemporalValue`s added to a trace. Only the recording can be closed.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TemporalValue<V> {
    value: V,
    validity: Interval<NaiveDate>,
    recording: Recording,
}

impl<V> TemporalValue<V> {
    /// Wrap `value`, recorded from the clock's current instant onward.
    ///
    /// Validity defaults to `[today, ∞)`.
    pub fn new(value: V, validity: Option<Interval<NaiveDate>>, clock: &dyn Clock) -> Self {
        let now = clock.now();
        let validity = validity.unwrap_or_else(|| Interval::since(now.date_naive()));
        Self::recorded(value, validity, now)
    }

    /// Wrap `value` with an explicit recording start, e.g. for imported data.
    pub fn recorded(value: V, validity: Interval<NaiveDate>, recorded_at: DateTime<Utc>) -> Self {
        Self {
            value,
            validity,
            recording: Recording::open(recorded_at),
        }
    }

    pub fn value(&self) -> &V {
        &self.value
    }

    pub fn into_value(self) -> V {
        self.value
    }

    pub fn recording_state(&self) -> &Recording {
        &self.recording
    }

    pub fn is_open(&self) -> bool {
        self.recording.is_open()
    }
}

impl<V: Clone> Versioned for TemporalValue<V> {
    fn validity(&self) -> Interval<NaiveDate> {
        self.validity
    }

    fn recording(&self) -> Interval<DateTime<Utc>> {
        self.recording.interval()
    }

    fn close_recording(&mut self, at: DateTime<Utc>) -> BitemporalResult<()> {
        self.recording.close(at)
    }

    fn with_validity(&self, validity: Interval<NaiveDate>, recorded_at: DateTime<Utc>) -> Self {
        Self::recorded(self.value.clone(), validity, recorded_at)
    }

    fn is_recording_open(&self) -> bool {
        self.recording.is_open()
    }
}

impl<V: fmt::Display> fmt::Display for TemporalValue<V> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{}  ~  {}  ~  {}",
            self.validity,
            self.recording.interval(),
            self.value
        )
    }
}
