//! Trace manipulation configuration.

use serde::{Deserialize, Serialize};

/// What to do when an insertion or retraction would close an entry whose
/// recording is already closed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum DoubleClosePolicy {
    /// Fail the whole operation with `TemporalError::DoubleClose`.
    #[default]
    Reject,
    /// Leave the closed entry untouched and carry on.
    Ignore,
}

/// Configuration for a single trace.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct TraceConfig {
    pub double_close: DoubleClosePolicy,

    /// Refuse to mutate a trace holding entries recorded after now.
    pub reject_future_data: bool,
}

impl Default for TraceConfig {
    fn default() -> Self {
        Self {
            double_close: DoubleClosePolicy::Reject,
            reject_future_data: true,
        }
    }
}
