pub mod clock_config;
pub mod trace_config;

use serde::{Deserialize, Serialize};

use crate::errors::{BitemporalError, BitemporalResult};

pub use clock_config::ClockConfig;
pub use trace_config::{DoubleClosePolicy, TraceConfig};

/// Top-level configuration aggregating all subsystem configs.
#[derive(Debug, Clone, Serialize, Deserialize, Default, PartialEq, Eq)]
#[serde(default)]
pub struct BitemporalConfig {
    pub trace: TraceConfig,
    pub clock: ClockConfig,
}

impl BitemporalConfig {
    /// Load config from a TOML string, falling back to defaults for missing fields.
    pub fn from_toml(toml_str: &str) -> BitemporalResult<Self> {
        toml::from_str(toml_str).map_err(|e| BitemporalError::ConfigError(e.to_string()))
    }
}
