//! Property-based tests for the validation engine.
//!
//! Drives the pure decision functions with random same-phase intervals and
//! checks the invariants that every committed table must satisfy: no
//! inverted ranges and no overlapping intervals within a phase, regardless
//! of insertion order.

use chrono::{Duration, NaiveDate};
use gantry::domain::{Entry, EntryId, NewEntry};
use gantry::validate::{intervals_overlap, validate};
use proptest::prelude::*;

fn base_date() -> NaiveDate {
    NaiveDate::from_ymd_opt(2024, 1, 1).unwrap()
}

fn day(offset: i64) -> NaiveDate {
    base_date() + Duration::days(offset)
}

/// A random interval as day offsets, not necessarily well ordered.
fn interval() -> impl Strategy<Value = (i64, i64)> {
    (0..120i64, 0..120i64)
}

fn accepted_entry(index: usize, start: NaiveDate, end: NaiveDate) -> Entry {
    Entry {
        id: EntryId::new(format!("prop-{index}")),
        phase: "Build".to_string(),
        milestone: format!("Milestone {index}"),
        start,
        end,
        color: "#1f77b4".to_string(),
        notes: None,
        dependencies: Vec::new(),
    }
}

proptest! {
    #[test]
    fn overlap_predicate_is_symmetric(
        (a_start, a_end) in interval(),
        (b_start, b_end) in interval(),
    ) {
        let forward = intervals_overlap(day(a_start), day(a_end), day(b_start), day(b_end));
        let backward = intervals_overlap(day(b_start), day(b_end), day(a_start), day(a_end));
        prop_assert_eq!(forward, backward);
    }

    #[test]
    fn interval_never_overlaps_a_range_entirely_before_it(
        (a_start, a_end) in interval(),
        gap in 0..30i64,
    ) {
        // b starts at or after a's end; touching endpoints coexist.
        let b_start = a_end + gap;
        let b_end = b_start + 10;
        prop_assert!(!intervals_overlap(
            day(a_start),
            day(a_end),
            day(b_start),
            day(b_end),
        ));
    }

    #[test]
    fn inverted_ranges_are_always_rejected(
        (start, end) in interval().prop_filter("inverted", |(s, e)| s > e),
    ) {
        let candidate = NewEntry::new("Build", "Milestone", day(start), day(end));
        prop_assert!(validate(&candidate, &[], None).is_err());
    }

    #[test]
    fn accepted_set_never_contains_an_overlapping_pair(
        intervals in proptest::collection::vec(interval(), 1..20),
    ) {
        // Replay the intervals through the same gate the store uses,
        // keeping only the ones it accepts.
        let mut accepted: Vec<Entry> = Vec::new();
        for (index, (start, end)) in intervals.into_iter().enumerate() {
            let candidate = NewEntry::new(
                "Build",
                format!("Milestone {index}"),
                day(start),
                day(end),
            );
            if validate(&candidate, &accepted, None).is_ok() {
                accepted.push(accepted_entry(index, day(start), day(end)));
            }
        }

        for entry in &accepted {
            prop_assert!(entry.start <= entry.end);
        }
        for (i, a) in accepted.iter().enumerate() {
            for b in &accepted[i + 1..] {
                prop_assert!(!intervals_overlap(a.start, a.end, b.start, b.end));
            }
        }
    }

    #[test]
    fn acceptance_is_insensitive_to_scan_position(
        (start, end) in interval().prop_filter("ordered", |(s, e)| s <= e),
    ) {
        // A candidate far in the future never conflicts with a fixed
        // early entry, wherever that entry sits in the slice.
        let fixed = accepted_entry(0, day(-400), day(-390));
        let candidate = NewEntry::new("Build", "Milestone later", day(start), day(end));
        prop_assert!(validate(&candidate, &[fixed], None).is_ok());
    }
}
