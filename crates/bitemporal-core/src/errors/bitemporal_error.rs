use super::TemporalError;

/// Top-level error type for bitemporal traces.
/// Subsystem errors convert into this via `From` impls.
#[derive(Debug, thiserror::Error)]
pub enum BitemporalError {
    #[error("temporal error: {0}")]
    Temporal(#[from] TemporalError),

    #[error("config error: {0}")]
    ConfigError(String),

    #[error("concurrency error: {0}")]
    ConcurrencyError(String),
}

impl BitemporalError {
    /// The temporal error kind, if this is one.
    pub fn as_temporal(&self) -> Option<&TemporalError> {
        match self {
            Self::Temporal(e) => Some(e),
            _ => None,
        }
    }
}

/// Convenience type alias.
pub type BitemporalResult<T> = Result<T, BitemporalError>;
