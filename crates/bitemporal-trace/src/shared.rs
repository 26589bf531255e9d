//! SharedTrace: a trace behind `Arc<RwLock<..>>` for concurrent use.
//!
//! Writers (`add`, `retract`) are serialized by the write lock. Readers get
//! owned snapshots, unaffected by later closes.

use std::sync::{Arc, RwLock, RwLockReadGuard, RwLockWriteGuard};

use chrono::{DateTime, NaiveDate, Utc};

use bitemporal_core::errors::{BitemporalError, BitemporalResult};
use bitemporal_core::traits::Versioned;

use crate::trace::{AddOutcome, Trace};

/// Thread-safe handle to a trace. Clones share the same trace.
pub struct SharedTrace<E> {
    inner: Arc<RwLock<Trace<E>>>,
}

impl<E> Clone for SharedTrace<E> {
    fn clone(&self) -> Self {
        Self {
            inner: Arc::clone(&self.inner),
        }
    }
}

impl<E> SharedTrace<E> {
    pub fn new(trace: Trace<E>) -> Self {
        Self {
            inner: Arc::new(RwLock::new(trace)),
        }
    }

    pub fn len(&self) -> BitemporalResult<usize> {
        Ok(self.read()?.len())
    }

    pub fn is_empty(&self) -> BitemporalResult<bool> {
        Ok(self.read()?.is_empty())
    }

    /// Read lock helper.
    fn read(&self) -> BitemporalResult<RwLockReadGuard<'_, Trace<E>>> {
        self.inner
            .read()
            .map_err(|e| BitemporalError::ConcurrencyError(e.to_string()))
    }

    /// Write lock helper.
    fn write(&self) -> BitemporalResult<RwLockWriteGuard<'_, Trace<E>>> {
        self.inner
            .write()
            .map_err(|e| BitemporalError::ConcurrencyError(e.to_string()))
    }
}

impl<E: Versioned + Clone> SharedTrace<E> {
    pub fn add(&self, entry: E) -> BitemporalResult<AddOutcome> {
        self.write()?.add(entry)
    }

    pub fn retract(&self, valid_on: NaiveDate) -> BitemporalResult<usize> {
        self.write()?.retract(valid_on)
    }

    pub fn get(&self, valid_on: NaiveDate, known_on: DateTime<Utc>) -> BitemporalResult<Vec<E>> {
        Ok(self
            .read()?
            .get(valid_on, known_on)
            .into_iter()
            .cloned()
            .collect())
    }

    pub fn get_history(&self, known_on: DateTime<Utc>) -> BitemporalResult<Vec<E>> {
        Ok(self
            .read()?
            .get_history(known_on)
            .into_iter()
            .cloned()
            .collect())
    }

    pub fn get_evolution(&self, valid_on: NaiveDate) -> BitemporalResult<Vec<E>> {
        Ok(self
            .read()?
            .get_evolution(valid_on)
            .into_iter()
            .cloned()
            .collect())
    }

    /// A copy of every entry in trace order.
    pub fn snapshot(&self) -> BitemporalResult<Vec<E>> {
        Ok(self.read()?.entries().to_vec())
    }
}
