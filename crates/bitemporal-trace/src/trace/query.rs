//! Read-only bitemporal filters. Results keep entry order.

use chrono::{DateTime, NaiveDate, Utc};

use bitemporal_core::traits::Versioned;

use super::Trace;

impl<E: Versioned> Trace<E> {
    /// Entries valid on `valid_on` as known on `known_on`.
    pub fn get(&self, valid_on: NaiveDate, known_on: DateTime<Utc>) -> Vec<&E> {
        self.entries
            .iter()
            .filter(|e| e.validity().contains(valid_on) && e.recording().contains(known_on))
            .collect()
    }

    /// What was believed, across all validity periods, as of `known_on`.
    pub fn get_history(&self, known_on: DateTime<Utc>) -> Vec<&E> {
        self.entries
            .iter()
            .filter(|e| e.recording().contains(known_on))
            .collect()
    }

    /// How belief about `valid_on` changed across recording time.
    pub fn get_evolution(&self, valid_on: NaiveDate) -> Vec<&E> {
        self.entries
            .iter()
            .filter(|e| e.validity().contains(valid_on))
            .collect()
    }

    /// Entries valid today as currently known.
    pub fn current(&self) -> Vec<&E> {
        let now = self.clock.now();
        self.get(now.date_naive(), now)
    }
}
