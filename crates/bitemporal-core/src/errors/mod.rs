mod bitemporal_error;
mod temporal_error;

pub use bitemporal_error::{BitemporalError, BitemporalResult};
pub use temporal_error::TemporalError;
