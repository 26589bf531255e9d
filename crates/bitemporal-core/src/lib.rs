//! # bitemporal-core
//!
//! Foundation types for bitemporal traces: the half-open interval algebra,
//! reference-time clocks, the `Versioned` capability, errors, and config.

pub mod clock;
pub mod config;
pub mod errors;
pub mod models;
pub mod traits;

pub use clock::{Clock, FixedClock, Reference, ReferenceClock, SystemClock};
pub use config::{BitemporalConfig, ClockConfig, DoubleClosePolicy, TraceConfig};
pub use errors::{BitemporalError, BitemporalResult, TemporalError};
pub use models::{Interval, TimeBound, TimeKind, TimePoint};
pub use traits::Versioned;
