//! Trace manipulation: insertion and retraction.
//!
//! Both operations run in two phases. Planning reads the trace, validates
//! everything that can fail, and builds the list of closes and appends.
//! Applying the plan cannot fail, so a rejected call leaves the trace exactly
//! as it was.

use chrono::{DateTime, NaiveDate, Utc};
use tracing::{debug, warn};

use bitemporal_core::config::DoubleClosePolicy;
use bitemporal_core::errors::{BitemporalResult, TemporalError};
use bitemporal_core::models::Interval;
use bitemporal_core::traits::Versioned;

use super::Trace;

/// What an insertion did to the trace.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct AddOutcome {
    /// Existing entries whose recording was closed.
    pub closed: usize,
    /// Remainder entries synthesized to keep history that the new entry
    /// does not cover.
    pub remainders: usize,
}

/// Mutations computed by the planning phase.
struct Plan<E> {
    now: DateTime<Utc>,
    to_close: Vec<usize>,
    to_add: Vec<E>,
}

impl<E: Versioned> Trace<E> {
    /// Add a new version, closing and splitting whatever it supersedes.
    ///
    /// Algorithm, with `V` the new validity and `now` the clock's instant:
    /// 1. Every entry open at `now` whose validity overlaps `V` is closed.
    /// 2. Entries visible at `(V.start, now)` that start before `V.start`
    ///    get a left remainder `[entry.start, V.start)`.
    /// 3. Unless `V` is open-ended, entries visible at `(V.end, now)` that
    ///    start before `V.end` get a right remainder `[V.end, entry.end)`.
    /// 4. Closes are applied, remainders appended, then a fresh copy of the
    ///    new entry recorded from `now`.
    ///
    /// Fails with `TemporalError::FutureData` if any entry was recorded after
    /// `now`, and with `TemporalError::InvalidTemporalBounds` for an empty
    /// validity interval.
    pub fn add(&mut self, entry: E) -> BitemporalResult<AddOutcome> {
        let now = self.clock.now();
        self.sanity_check(now)?;

        let validity = entry.validity();
        if validity.is_empty() {
            return Err(TemporalError::InvalidTemporalBounds(format!(
                "cannot add an entry with empty validity {validity}"
            ))
            .into());
        }

        let plan = self.plan_insertion(validity, now)?;
        let outcome = AddOutcome {
            closed: plan.to_close.len(),
            remainders: plan.to_add.len(),
        };
        self.apply(plan)?;
        self.entries.push(entry.with_validity(validity, now));

        debug!(
            validity = %validity,
            closed = outcome.closed,
            remainders = outcome.remainders,
            entries = self.entries.len(),
            "added entry to trace"
        );
        Ok(outcome)
    }

    /// Close every entry valid on `valid_on` as currently known, forgetting
    /// that fact from now on. Returns how many entries were closed.
    pub fn retract(&mut self, valid_on: NaiveDate) -> BitemporalResult<usize> {
        let now = self.clock.now();
        self.sanity_check(now)?;

        let candidates: Vec<usize> = self
            .entries
            .iter()
            .enumerate()
            .filter(|(_, e)| e.validity().contains(valid_on) && e.recording().contains(now))
            .map(|(idx, _)| idx)
            .collect();
        let to_close = self.closable(candidates, now)?;
        let closed = to_close.len();

        self.apply(Plan {
            now,
            to_close,
            to_add: Vec::new(),
        })?;

        debug!(valid_on = %valid_on, closed, "retracted entries from trace");
        Ok(closed)
    }

    /// Refuse to manipulate a trace holding data recorded after `now`.
    fn sanity_check(&self, now: DateTime<Utc>) -> BitemporalResult<()> {
        if !self.config.reject_future_data {
            return Ok(());
        }
        if let Some(future) = self.entries.iter().find(|e| e.recording().start() > now) {
            let recorded_at = future.recording().start();
            warn!(
                recorded_at = %recorded_at,
                now = %now,
                "trace contains data from the future"
            );
            return Err(TemporalError::FutureData { recorded_at, now }.into());
        }
        Ok(())
    }

    fn plan_insertion(
        &self,
        validity: Interval<NaiveDate>,
        now: DateTime<Utc>,
    ) -> BitemporalResult<Plan<E>> {
        // Superseded: currently known and overlapping the new validity.
        let superseded: Vec<usize> = self
            .entries
            .iter()
            .enumerate()
            .filter(|(_, e)| e.recording().contains(now) && validity.overlaps(&e.validity()))
            .map(|(idx, _)| idx)
            .collect();
        let to_close = self.closable(superseded, now)?;

        let mut to_add = Vec::new();

        for existing in self.get(validity.start(), now) {
            let existing_validity = existing.validity();
            if existing_validity.start() < validity.start() {
                let left = Interval::new(existing_validity.start(), validity.start());
                to_add.push(existing.with_validity(left, now));
            }
        }

        if !validity.is_open_ended() {
            for existing in self.get(validity.end(), now) {
                let existing_validity = existing.validity();
                debug_assert!(existing_validity.end() > validity.end());
                // An entry starting exactly at V.end does not overlap V and stays as is.
                if existing_validity.start() < validity.end() {
                    let right = Interval::new(validity.end(), existing_validity.end());
                    to_add.push(existing.with_validity(right, now));
                }
            }
        }

        Ok(Plan {
            now,
            to_close,
            to_add,
        })
    }

    /// Drop or reject candidates whose recording is already closed,
    /// according to the double-close policy.
    fn closable(&self, candidates: Vec<usize>, now: DateTime<Utc>) -> BitemporalResult<Vec<usize>> {
        let mut result = Vec::with_capacity(candidates.len());
        for idx in candidates {
            let entry = &self.entries[idx];
            if entry.is_recording_open() {
                result.push(idx);
                continue;
            }
            let closed_at = entry.recording().end();
            match self.config.double_close {
                DoubleClosePolicy::Reject => {
                    return Err(TemporalError::DoubleClose {
                        closed_at,
                        attempted: now,
                    }
                    .into());
                }
                DoubleClosePolicy::Ignore => {
                    warn!(
                        closed_at = %closed_at,
                        attempted = %now,
                        "skipping close of already-closed entry"
                    );
                }
            }
        }
        Ok(result)
    }

    /// Apply a validated plan: closes first, then appends in plan order.
    fn apply(&mut self, plan: Plan<E>) -> BitemporalResult<()> {
        // Every index was checked open and visible at `now`, so closing
        // cannot fail here.
        for idx in plan.to_close {
            self.entries[idx].close_recording(plan.now)?;
        }
        self.entries.extend(plan.to_add);
        Ok(())
    }
}
