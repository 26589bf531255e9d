//! Half-open intervals `[start, end)` over a single ordered time type.
//!
//! Two time types are supported: business dates (`NaiveDate`, the validity
//! axis) and instants (`DateTime<Utc>`, the recording axis). The maximal value
//! of each type is the "until further notice" sentinel.

use std::fmt;

use chrono::{DateTime, NaiveDate, NaiveTime, Utc};
use serde::{Deserialize, Serialize};

use crate::errors::{BitemporalResult, TemporalError};

/// The kind of a time value, used to report bound mismatches.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TimeKind {
    Date,
    Instant,
}

impl fmt::Display for TimeKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            TimeKind::Date => f.write_str("date"),
            TimeKind::Instant => f.write_str("instant"),
        }
    }
}

/// A dynamically typed interval bound.
///
/// Used where bounds arrive without static typing (configuration, imported
/// records) and have to be checked before an [`Interval`] can be built.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "kind", content = "value", rename_all = "snake_case")]
pub enum TimeBound {
    Date(NaiveDate),
    Instant(DateTime<Utc>),
}

impl TimeBound {
    pub fn kind(&self) -> TimeKind {
        match self {
            TimeBound::Date(_) => TimeKind::Date,
            TimeBound::Instant(_) => TimeKind::Instant,
        }
    }
}

impl From<NaiveDate> for TimeBound {
    fn from(date: NaiveDate) -> Self {
        TimeBound::Date(date)
    }
}

impl From<DateTime<Utc>> for TimeBound {
    fn from(instant: DateTime<Utc>) -> Self {
        TimeBound::Instant(instant)
    }
}

/// An ordered time type usable as an interval bound.
pub trait TimePoint: Copy + Ord + fmt::Display {
    /// The "until further notice" sentinel.
    const END_OF_TIME: Self;

    const KIND: TimeKind;

    /// Extract a value of this type from a dynamic bound, if the kinds agree.
    fn from_bound(bound: TimeBound) -> Option<Self>;

    fn is_end_of_time(&self) -> bool {
        *self == Self::END_OF_TIME
    }
}

impl TimePoint for NaiveDate {
    const END_OF_TIME: Self = NaiveDate::MAX;
    const KIND: TimeKind = TimeKind::Date;

    fn from_bound(bound: TimeBound) -> Option<Self> {
        match bound {
            TimeBound::Date(d) => Some(d),
            TimeBound::Instant(_) => None,
        }
    }
}

impl TimePoint for DateTime<Utc> {
    const END_OF_TIME: Self = DateTime::<Utc>::MAX_UTC;
    const KIND: TimeKind = TimeKind::Instant;

    fn from_bound(bound: TimeBound) -> Option<Self> {
        match bound {
            TimeBound::Instant(t) => Some(t),
            TimeBound::Date(_) => None,
        }
    }
}

/// Start-of-day instant (UTC) for a business date.
pub fn start_of_day(date: NaiveDate) -> DateTime<Utc> {
    date.and_time(NaiveTime::MIN).and_utc()
}

/// A half-open interval `[start, end)`.
///
/// Intervals with `start >= end` are empty: they contain nothing and overlap
/// nothing. Equality is structural, so two distinct empty intervals are not equal.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Interval<T> {
    start: T,
    end: T,
}

impl<T: TimePoint> Interval<T> {
    pub fn new(start: T, end: T) -> Self {
        Self { start, end }
    }

    /// `[start, END_OF_TIME)`: valid from `start` until further notice.
    pub fn since(start: T) -> Self {
        Self::new(start, T::END_OF_TIME)
    }

    /// Build an interval from dynamically typed bounds.
    ///
    /// Fails with [`TemporalError::TypeMismatch`] unless both bounds are of
    /// kind `T::KIND`.
    pub fn from_bounds(start: TimeBound, end: TimeBound) -> BitemporalResult<Self> {
        match (T::from_bound(start), T::from_bound(end)) {
            (Some(s), Some(e)) => Ok(Self::new(s, e)),
            _ => Err(TemporalError::TypeMismatch {
                expected: T::KIND,
                start: start.kind(),
                end: end.kind(),
            }
            .into()),
        }
    }

    pub fn start(&self) -> T {
        self.start
    }

    pub fn end(&self) -> T {
        self.end
    }

    /// `start <= x < end`.
    pub fn contains(&self, x: T) -> bool {
        self.start <= x && x < self.end
    }

    /// Whether the two intervals share at least one point. An empty interval
    /// overlaps nothing.
    pub fn overlaps(&self, other: &Self) -> bool {
        !self.is_empty()
            && !other.is_empty()
            && self.start < other.end
            && other.start < self.end
    }

    pub fn is_empty(&self) -> bool {
        self.start >= self.end
    }

    /// Whether the interval runs until further notice.
    pub fn is_open_ended(&self) -> bool {
        self.end.is_end_of_time()
    }
}

impl<T: TimePoint> fmt::Display for Interval<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.is_open_ended() {
            write!(f, "[{}, ∞)", self.start)
        } else {
            write!(f, "[{}, {})", self.start, self.end)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn day(d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(2000, 1, d).unwrap()
    }

    #[test]
    fn empty_interval_contains_nothing() {
        let zero = Interval::new(day(5), day(5));
        assert!(zero.is_empty());
        assert!(!zero.contains(day(4)));
        assert!(!zero.contains(day(5)));
        assert!(!zero.contains(day(6)));

        let inverted = Interval::new(day(6), day(5));
        assert!(inverted.is_empty());
        assert!(!inverted.contains(day(5)));
        assert!(!inverted.contains(day(6)));
    }

    #[test]
    fn single_element_interval() {
        let iv = Interval::new(day(1), day(2));
        assert!(iv.contains(day(1)));
        assert!(!iv.contains(day(2)));
    }

    #[test]
    fn end_is_excluded_start_is_included() {
        let iv = Interval::new(day(1), day(11));
        for d in 1..11 {
            assert!(iv.contains(day(d)), "day {d} should be inside");
        }
        assert!(!iv.contains(day(11)));
    }

    #[test]
    fn abutting_intervals_do_not_overlap() {
        let a = Interval::new(day(1), day(5));
        let b = Interval::new(day(5), day(9));
        assert!(!a.overlaps(&b));
        assert!(!b.overlaps(&a));
        assert!(a.overlaps(&Interval::new(day(4), day(9))));
    }

    #[test]
    fn empty_interval_overlaps_nothing() {
        let empty = Interval::new(day(3), day(3));
        let wide = Interval::new(day(1), day(9));
        assert!(!empty.overlaps(&wide));
        assert!(!wide.overlaps(&empty));
    }

    #[test]
    fn structural_equality() {
        assert_eq!(Interval::new(day(1), day(9)), Interval::new(day(1), day(9)));
        assert_ne!(Interval::new(day(1), day(9)), Interval::new(day(2), day(9)));
        assert_ne!(Interval::new(day(1), day(9)), Interval::new(day(1), day(8)));
    }

    #[test]
    fn open_ended_sentinel() {
        let iv = Interval::since(day(1));
        assert!(iv.is_open_ended());
        assert_eq!(iv.end(), NaiveDate::MAX);
        assert!(iv.contains(NaiveDate::from_ymd_opt(9999, 12, 31).unwrap()));

        let instants = Interval::since(start_of_day(day(1)));
        assert_eq!(instants.end(), DateTime::<Utc>::MAX_UTC);
    }

    #[test]
    fn from_bounds_rejects_mixed_kinds() {
        let err = Interval::<NaiveDate>::from_bounds(
            TimeBound::Date(day(1)),
            TimeBound::Instant(start_of_day(day(2))),
        )
        .unwrap_err();
        assert_eq!(
            err.as_temporal(),
            Some(&TemporalError::TypeMismatch {
                expected: TimeKind::Date,
                start: TimeKind::Date,
                end: TimeKind::Instant,
            })
        );
    }

    #[test]
    fn from_bounds_rejects_wrong_axis() {
        let err = Interval::<DateTime<Utc>>::from_bounds(
            TimeBound::Date(day(1)),
            TimeBound::Date(day(2)),
        )
        .unwrap_err();
        assert!(matches!(
            err.as_temporal(),
            Some(TemporalError::TypeMismatch { expected: TimeKind::Instant, .. })
        ));
    }

    #[test]
    fn from_bounds_accepts_homogeneous() {
        let iv = Interval::<NaiveDate>::from_bounds(day(1).into(), day(3).into()).unwrap();
        assert_eq!(iv, Interval::new(day(1), day(3)));
    }

    #[test]
    fn display_is_half_open() {
        assert_eq!(
            Interval::new(day(1), day(5)).to_string(),
            "[2000-01-01, 2000-01-05)"
        );
        assert_eq!(Interval::since(day(1)).to_string(), "[2000-01-01, ∞)");
    }
}
