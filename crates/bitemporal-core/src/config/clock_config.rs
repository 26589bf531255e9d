//! Clock selection.

use std::sync::Arc;

use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};

use crate::clock::{Clock, Reference, ReferenceClock, SystemClock};
use crate::errors::{BitemporalError, BitemporalResult};

/// Which clock traces are stamped with.
///
/// `reference` accepts an RFC 3339 instant (`"1994-12-27T09:00:00Z"`) or a
/// plain date (`"1994-12-27"`, start of day). Unset means wall-clock time.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ClockConfig {
    pub reference: Option<String>,
}

impl ClockConfig {
    pub fn parse_reference(&self) -> BitemporalResult<Option<Reference>> {
        let Some(raw) = self.reference.as_deref() else {
            return Ok(None);
        };
        if let Ok(instant) = DateTime::parse_from_rfc3339(raw) {
            return Ok(Some(Reference::Instant(instant.with_timezone(&Utc))));
        }
        NaiveDate::parse_from_str(raw, "%Y-%m-%d")
            .map(|d| Some(Reference::Date(d)))
            .map_err(|e| {
                BitemporalError::ConfigError(format!("invalid clock reference {raw:?}: {e}"))
            })
    }

    pub fn build(&self) -> BitemporalResult<Arc<dyn Clock>> {
        Ok(match self.parse_reference()? {
            Some(reference) => Arc::new(ReferenceClock::pinned(reference)),
            None => Arc::new(SystemClock),
        })
    }
}
