// SPDX-FileCopyrightText: 2025-2026 Zexin Yuan <aim@yzx9.xyz>
//
// SPDX-License-Identifier: Apache-2.0

//! Invariants of the range arithmetic, checked over many anchors.

use chrono::{Datelike, Months};
use meetcal_core::{
    ViewMode, WeekStart, add_days, end_of_day, end_of_month, end_of_week, enumerate_days,
    get_range, start_of_day, start_of_month, start_of_week,
};

use crate::common::anchors;

#[test]
fn day_range_has_one_day() {
    for anchor in anchors() {
        let range = get_range(&anchor, ViewMode::Day);
        let days: Vec<_> = enumerate_days(&range.from(), &range.to()).collect();
        assert_eq!(days, vec![start_of_day(&anchor)], "anchor = {anchor}");
    }
}

#[test]
fn week_has_seven_days_starting_on_week_start() {
    for anchor in anchors() {
        for week_start in [WeekStart::Sunday, WeekStart::Monday] {
            let from = start_of_week(&anchor, week_start);
            let to = end_of_week(&anchor, week_start);
            let days: Vec<_> = enumerate_days(&from, &to).collect();
            assert_eq!(days.len(), 7, "anchor = {anchor}, {week_start}");
            assert_eq!(
                days[0].weekday().num_days_from_sunday(),
                week_start.number(),
                "anchor = {anchor}, {week_start}"
            );
            assert!(from <= anchor && anchor <= to, "anchor = {anchor}");
        }
    }
}

#[test]
fn month_has_all_its_days() {
    for anchor in anchors() {
        let days: Vec<_> =
            enumerate_days(&start_of_month(&anchor), &end_of_month(&anchor)).collect();

        let first = anchor.date().with_day(1).unwrap();
        let expected = (first + Months::new(1) - first).num_days();
        assert_eq!(days.len() as i64, expected, "anchor = {anchor}");
        assert!((28..=31).contains(&days.len()));

        let last = days.last().unwrap();
        assert_eq!(last.month(), anchor.month());
        let next = add_days(last, 1);
        assert_ne!(next.month(), anchor.month(), "anchor = {anchor}");
        assert_eq!(next.day(), 1);
    }
}

#[test]
fn add_days_round_trips_from_start_of_day() {
    for anchor in anchors() {
        let d = start_of_day(&anchor);
        for n in [-366, -31, -7, -1, 0, 1, 7, 31, 366] {
            assert_eq!(add_days(&add_days(&d, n), -n), d, "anchor = {anchor}, n = {n}");
        }
    }
}

#[test]
fn start_and_end_of_day_are_idempotent_and_bracket() {
    for anchor in anchors() {
        let start = start_of_day(&anchor);
        let end = end_of_day(&anchor);
        assert_eq!(start_of_day(&start), start);
        assert_eq!(end_of_day(&end), end);
        assert!(start <= anchor && anchor <= end);
    }
}

#[test]
fn ranges_are_ordered() {
    for anchor in anchors() {
        for view in [ViewMode::Day, ViewMode::Week, ViewMode::Month] {
            let range = get_range(&anchor, view);
            assert!(range.from() <= range.to(), "anchor = {anchor}, view = {view}");
            assert!(range.contains(&anchor), "anchor = {anchor}, view = {view}");
        }
    }
}

#[test]
fn inverted_ranges_have_no_days() {
    for anchor in anchors() {
        let later = add_days(&anchor, 1);
        assert_eq!(enumerate_days(&later, &anchor).count(), 0, "anchor = {anchor}");

        // both bounds on the same day, `to` earlier than `from`
        let (from, to) = (end_of_day(&anchor), start_of_day(&anchor));
        assert_eq!(enumerate_days(&from, &to).count(), 0, "anchor = {anchor}");
    }
}
