use chrono::{DateTime, Utc};

use crate::models::TimeKind;

/// Errors raised by the interval algebra and trace manipulation.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum TemporalError {
    #[error("interval bound type mismatch: expected {expected}, got start={start}, end={end}")]
    TypeMismatch {
        expected: TimeKind,
        start: TimeKind,
        end: TimeKind,
    },

    #[error("cannot manipulate trace: it contains data recorded at {recorded_at}, after now ({now})")]
    FutureData {
        recorded_at: DateTime<Utc>,
        now: DateTime<Utc>,
    },

    #[error("recording already closed at {closed_at}, attempted to close again at {attempted}")]
    DoubleClose {
        closed_at: DateTime<Utc>,
        attempted: DateTime<Utc>,
    },

    #[error("invalid temporal bounds: {0}")]
    InvalidTemporalBounds(String),
}
