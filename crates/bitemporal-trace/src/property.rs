//! Property: value-level convenience API over a trace.
//!
//! Every operation delegates to the trace; missing dates default to a single
//! reading of the trace clock. A [`ValueAccessor`] moves values in and out of
//! entries, so the façade works over any [`Versioned`] entry type. By default
//! entries are [`TemporalValue`]s.

use std::marker::PhantomData;
use std::sync::Arc;

use chrono::{DateTime, NaiveDate, Utc};

use bitemporal_core::clock::Clock;
use bitemporal_core::errors::BitemporalResult;
use bitemporal_core::models::Interval;
use bitemporal_core::traits::Versioned;

use crate::trace::{AddOutcome, Trace};
use crate::value::TemporalValue;

/// Moves property values in and out of trace entries of type `E`.
pub trait ValueAccessor<V, E> {
    /// The value carried by `entry`.
    fn extract<'e>(&self, entry: &'e E) -> &'e V;

    /// A new entry carrying `value`, valid for `validity`, recorded from `recorded_at`.
    fn wrap(&self, value: V, validity: Interval<NaiveDate>, recorded_at: DateTime<Utc>) -> E;
}

/// The default accessor: each value is wrapped in a [`TemporalValue`].
#[derive(Debug, Clone, Copy, Default)]
pub struct Wrapped;

impl<V> ValueAccessor<V, TemporalValue<V>> for Wrapped {
    fn extract<'e>(&self, entry: &'e TemporalValue<V>) -> &'e V {
        entry.value()
    }

    fn wrap(
        &self,
        value: V,
        validity: Interval<NaiveDate>,
        recorded_at: DateTime<Utc>,
    ) -> TemporalValue<V> {
        TemporalValue::recorded(value, validity, recorded_at)
    }
}

/// A bitemporally tracked attribute, e.g. a person's address.
#[derive(Debug, Clone)]
pub struct Property<V, E = TemporalValue<V>, A = Wrapped> {
    trace: Trace<E>,
    accessor: A,
    _value: PhantomData<fn() -> V>,
}

impl<V: Clone> Property<V> {
    pub fn new(clock: Arc<dyn Clock>) -> Self {
        Self::from_trace(Trace::new(clock))
    }

    pub fn from_trace(trace: Trace<TemporalValue<V>>) -> Self {
        Self::with_accessor(trace, Wrapped)
    }
}

impl<V, E, A> Property<V, E, A>
where
    E: Versioned,
    A: ValueAccessor<V, E>,
{
    /// A property over `trace` whose entries are read and built by `accessor`.
    pub fn with_accessor(trace: Trace<E>, accessor: A) -> Self {
        Self {
            trace,
            accessor,
            _value: PhantomData,
        }
    }

    pub fn trace(&self) -> &Trace<E> {
        &self.trace
    }

    pub fn into_trace(self) -> Trace<E> {
        self.trace
    }

    pub fn accessor(&self) -> &A {
        &self.accessor
    }

    fn now(&self) -> DateTime<Utc> {
        self.trace.clock().now()
    }

    /// The entry valid on `valid_on` as known on `known_on`.
    ///
    /// If raw data left several matches, the first in trace order wins.
    pub fn get(&self, valid_on: Option<NaiveDate>, known_on: Option<DateTime<Utc>>) -> Option<&E> {
        let (valid_on, known_on) = match (valid_on, known_on) {
            (Some(valid_on), Some(known_on)) => (valid_on, known_on),
            (valid_on, known_on) => {
                let now = self.now();
                (valid_on.unwrap_or(now.date_naive()), known_on.unwrap_or(now))
            }
        };
        self.trace.get(valid_on, known_on).into_iter().next()
    }

    /// The value valid today as currently known.
    pub fn current_value(&self) -> Option<&V> {
        self.get(None, None).map(|e| self.accessor.extract(e))
    }

    pub fn value_on(&self, valid_on: NaiveDate, known_on: Option<DateTime<Utc>>) -> Option<&V> {
        self.get(Some(valid_on), known_on).map(|e| self.accessor.extract(e))
    }

    pub fn history(&self, known_on: Option<DateTime<Utc>>) -> Vec<&E> {
        self.trace.get_history(known_on.unwrap_or_else(|| self.now()))
    }

    pub fn evolution(&self, valid_on: Option<NaiveDate>) -> Vec<&E> {
        self.trace.get_evolution(valid_on.unwrap_or_else(|| self.now().date_naive()))
    }

    /// Record `value` for `validity`, by default from today on.
    pub fn assign(
        &mut self,
        value: V,
        validity: Option<Interval<NaiveDate>>,
    ) -> BitemporalResult<AddOutcome> {
        let now = self.now();
        let validity = validity.unwrap_or_else(|| Interval::since(now.date_naive()));
        let entry = self.accessor.wrap(value, validity, now);
        self.trace.add(entry)
    }

    /// Forget the value valid on `valid_on` (default today) from now on.
    pub fn end(&mut self, valid_on: Option<NaiveDate>) -> BitemporalResult<usize> {
        let valid_on = valid_on.unwrap_or_else(|| self.now().date_naive());
        self.trace.retract(valid_on)
    }

    pub fn has_value(&self, valid_on: Option<NaiveDate>, known_on: Option<DateTime<Utc>>) -> bool {
        self.get(valid_on, known_on).is_some()
    }
}
