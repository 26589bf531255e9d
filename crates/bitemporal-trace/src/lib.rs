//! # bitemporal-trace
//!
//! Bitemporal traces: facts tracked along validity time (when they hold in
//! the modeled world) and recording time (when they were believed).
//! Insertion closes and splits superseded versions so that history is never
//! lost and every recorded instant sees one validity timeline.

pub mod property;
pub mod shared;
pub mod trace;
pub mod value;

pub use property::{Property, ValueAccessor, Wrapped};
pub use shared::SharedTrace;
pub use trace::{AddOutcome, Trace};
pub use value::{Recording, TemporalValue};
