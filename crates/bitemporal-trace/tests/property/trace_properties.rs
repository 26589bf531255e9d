//! Property tests for the interval algebra and the insertion algorithm.

use std::sync::Arc;

use chrono::{DateTime, Duration, NaiveDate, Utc};
use proptest::prelude::*;

use bitemporal_core::clock::{Clock, ReferenceClock};
use bitemporal_core::models::{start_of_day, Interval};
use bitemporal_core::traits::Versioned;
use bitemporal_trace::{TemporalValue, Trace};

fn base_date() -> NaiveDate {
    NaiveDate::from_ymd_opt(2000, 1, 1).unwrap()
}

fn date(offset: i64) -> NaiveDate {
    base_date() + Duration::days(offset)
}

/// A non-empty validity interval, open-ended roughly a quarter of the time.
fn validity_strategy() -> impl Strategy<Value = Interval<NaiveDate>> {
    (0i64..60, prop::option::weighted(0.75, 1i64..30)).prop_map(|(start, len)| match len {
        Some(len) => Interval::new(date(start), date(start + len)),
        None => Interval::since(date(start)),
    })
}

type Snapshot = Vec<(usize, Interval<NaiveDate>)>;

fn history_at(trace: &Trace<TemporalValue<usize>>, known_on: DateTime<Utc>) -> Snapshot {
    trace
        .get_history(known_on)
        .into_iter()
        .map(|e| (*e.value(), e.validity()))
        .collect()
}

fn assert_single_timeline(
    trace: &Trace<TemporalValue<usize>>,
    known_on: DateTime<Utc>,
) -> Result<(), TestCaseError> {
    let visible = trace.get_history(known_on);
    for (i, a) in visible.iter().enumerate() {
        for b in &visible[i + 1..] {
            prop_assert!(
                !a.validity().overlaps(&b.validity()),
                "at {}: {} overlaps {}",
                known_on,
                a.validity(),
                b.validity()
            );
        }
    }
    Ok(())
}

// =============================================================================
// Interval algebra
// =============================================================================
proptest! {
    #![proptest_config(ProptestConfig::with_cases(256))]

    #[test]
    fn prop_containment_is_half_open(s in -100i64..100, e in -100i64..100, x in -120i64..120) {
        let iv = Interval::new(date(s), date(e));
        prop_assert_eq!(iv.contains(date(x)), s <= x && x < e);
        prop_assert!(!iv.contains(date(e)));
        if s < e {
            prop_assert!(iv.contains(date(s)));
        }
    }

    #[test]
    fn prop_overlap_is_symmetric(
        a in (-50i64..50, -50i64..50),
        b in (-50i64..50, -50i64..50),
    ) {
        let a = Interval::new(date(a.0), date(a.1));
        let b = Interval::new(date(b.0), date(b.1));
        prop_assert_eq!(a.overlaps(&b), b.overlaps(&a));
        if a.is_empty() || b.is_empty() {
            prop_assert!(!a.overlaps(&b));
        }
    }
}

// =============================================================================
// Insertion invariants
// =============================================================================
proptest! {
    #![proptest_config(ProptestConfig::with_cases(128))]

    /// After any sequence of adds at increasing instants, every recorded
    /// instant sees pairwise non-overlapping validity.
    #[test]
    fn prop_single_timeline_at_every_instant(
        validities in prop::collection::vec(validity_strategy(), 1..12),
    ) {
        let clock = Arc::new(ReferenceClock::new());
        let mut trace = Trace::new(clock.clone());
        let start = start_of_day(base_date());
        let mut instants = Vec::new();

        for (i, validity) in validities.into_iter().enumerate() {
            let now = start + Duration::hours(i as i64);
            clock.set_reference(now);
            trace.add(TemporalValue::new(i, Some(validity), &*clock)).unwrap();
            instants.push(now);
        }

        for &known_on in &instants {
            assert_single_timeline(&trace, known_on)?;
            assert_single_timeline(&trace, known_on + Duration::minutes(30))?;
        }
    }

    /// An add never changes what was known before it.
    #[test]
    fn prop_history_is_never_lost(
        validities in prop::collection::vec(validity_strategy(), 1..12),
    ) {
        let clock = Arc::new(ReferenceClock::new());
        let mut trace = Trace::new(clock.clone());
        let start = start_of_day(base_date());
        let mut instants: Vec<DateTime<Utc>> = Vec::new();

        for (i, validity) in validities.into_iter().enumerate() {
            let before: Vec<Snapshot> =
                instants.iter().map(|&k| history_at(&trace, k)).collect();

            let now = start + Duration::hours(i as i64);
            clock.set_reference(now);
            trace.add(TemporalValue::new(i, Some(validity), &*clock)).unwrap();

            for (k, snapshot) in instants.iter().zip(before) {
                prop_assert_eq!(history_at(&trace, *k), snapshot);
            }
            instants.push(now);
        }
    }

    /// The value just added is what `get` answers everywhere inside its validity.
    #[test]
    fn prop_latest_add_wins(
        validities in prop::collection::vec(validity_strategy(), 1..8),
        probe in 0i64..100,
    ) {
        let clock = Arc::new(ReferenceClock::new());
        let mut trace = Trace::new(clock.clone());
        let start = start_of_day(base_date());
        let mut last = None;

        for (i, validity) in validities.into_iter().enumerate() {
            clock.set_reference(start + Duration::hours(i as i64));
            trace.add(TemporalValue::new(i, Some(validity), &*clock)).unwrap();
            last = Some((i, validity));
        }

        let (value, validity) = last.unwrap();
        let probe = date(probe);
        let found = trace.get(probe, clock.now());
        prop_assert!(found.len() <= 1);
        if validity.contains(probe) {
            prop_assert_eq!(found.len(), 1);
            prop_assert_eq!(*found[0].value(), value);
        }
    }
}
