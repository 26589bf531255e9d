//! Versioned: the capability a trace entry must provide.

use chrono::{DateTime, NaiveDate, Utc};

use crate::errors::BitemporalResult;
use crate::models::Interval;

/// A fact version tracked along validity and recording time.
///
/// A trace only ever changes an entry through [`Versioned::close_recording`];
/// every other change is expressed by appending new versions built with
/// [`Versioned::with_validity`].
pub trait Versioned: Sized {
    /// When the fact holds in the modeled world.
    fn validity(&self) -> Interval<NaiveDate>;

    /// When the fact was the recorded belief.
    fn recording(&self) -> Interval<DateTime<Utc>>;

    /// Seal the recording interval at `at`.
    ///
    /// Must fail with `TemporalError::DoubleClose` if the recording is
    /// already closed; a closed interval is never reopened or moved.
    fn close_recording(&mut self, at: DateTime<Utc>) -> BitemporalResult<()>;

    /// Same fact, new validity, fresh open recording starting at `recorded_at`.
    fn with_validity(&self, validity: Interval<NaiveDate>, recorded_at: DateTime<Utc>) -> Self;

    fn is_recording_open(&self) -> bool {
        self.recording().is_open_ended()
    }
}
