//! Trace: the ordered sequence of versions for one bitemporal property.
//!
//! Entries are append-only: the trace never removes or reorders them, and the
//! only change ever applied to an existing entry is closing its recording.
//! Insertion keeps a single unambiguous validity timeline at every recorded
//! instant (see [`Trace::add`]).

mod insert;
mod query;

pub use insert::AddOutcome;

use std::fmt;
use std::sync::Arc;

use bitemporal_core::clock::Clock;
use bitemporal_core::config::TraceConfig;

/// A bitemporal trace over entries of type `E`.
///
/// Not synchronized; see [`crate::SharedTrace`] for concurrent use.
#[derive(Clone)]
pub struct Trace<E> {
    entries: Vec<E>,
    clock: Arc<dyn Clock>,
    config: TraceConfig,
}

impl<E> Trace<E> {
    /// Create an empty trace stamped by `clock`.
    pub fn new(clock: Arc<dyn Clock>) -> Self {
        Self::with_config(clock, TraceConfig::default())
    }

    pub fn with_config(clock: Arc<dyn Clock>, config: TraceConfig) -> Self {
        Self::from_entries_with_config(Vec::new(), clock, config)
    }

    /// Wrap existing raw data as-is. No invariant is checked or repaired.
    pub fn from_entries(entries: Vec<E>, clock: Arc<dyn Clock>) -> Self {
        Self::from_entries_with_config(entries, clock, TraceConfig::default())
    }

    pub fn from_entries_with_config(
        entries: Vec<E>,
        clock: Arc<dyn Clock>,
        config: TraceConfig,
    ) -> Self {
        Self {
            entries,
            clock,
            config,
        }
    }

    pub fn entries(&self) -> &[E] {
        &self.entries
    }

    pub fn into_entries(self) -> Vec<E> {
        self.entries
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn clock(&self) -> &Arc<dyn Clock> {
        &self.clock
    }

    pub fn config(&self) -> &TraceConfig {
        &self.config
    }
}

impl<E: fmt::Debug> fmt::Debug for Trace<E> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Trace")
            .field("entries", &self.entries)
            .field("config", &self.config)
            .finish_non_exhaustive()
    }
}

impl<E: fmt::Display> fmt::Display for Trace<E> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for entry in &self.entries {
            writeln!(f, "{entry}")?;
        }
        Ok(())
    }
}
