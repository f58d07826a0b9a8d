// SPDX-FileCopyrightText: 2025-2026 Zexin Yuan <aim@yzx9.xyz>
//
// SPDX-License-Identifier: Apache-2.0

//! Bucketing events into displayed days.

use meetcal_core::{
    CalendarEvent, CalendarView, ViewMode, ViewOptions, bucket_events_by_day, enumerate_days,
    get_range,
};

use crate::common::{at, event_all_day, event_at, event_without_start, ids};

#[test]
fn timestamps_and_dates_share_a_day() {
    let range = get_range(&at(2024, 3, 12, 0, 0), ViewMode::Week);
    let events = vec![
        event_at("first", "2024-03-12T09:00:00Z"),
        event_at("second", "2024-03-12T09:00:00Z"),
        event_all_day("all-day", "2024-03-12"),
    ];
    let buckets = bucket_events_by_day(events, range.days());

    let day = buckets.get("2024-03-12");
    assert_eq!(day.len(), 3);
    // identical starts keep their upstream order
    let ids = ids(day);
    let first = ids.iter().position(|id| id == "first").unwrap();
    let second = ids.iter().position(|id| id == "second").unwrap();
    assert!(first < second);
}

#[test]
fn no_event_is_lost_or_duplicated() {
    let events: Vec<CalendarEvent> = (0..40)
        .map(|i| match i % 4 {
            0 => event_at(&format!("t{i}"), &format!("2024-03-{:02}T{:02}:00:00Z", i % 28 + 1, i % 24)),
            1 => event_all_day(&format!("d{i}"), &format!("2024-03-{:02}", i % 28 + 1)),
            2 => event_at(&format!("o{i}"), &format!("2024-05-{:02}T08:00:00+02:00", i % 28 + 1)),
            _ => event_without_start(&format!("n{i}")),
        })
        .collect();
    let with_start = events.iter().filter(|e| e.start.is_some()).count();

    let range = get_range(&at(2024, 3, 15, 0, 0), ViewMode::Month);
    let buckets = bucket_events_by_day(events, range.days());
    assert_eq!(buckets.total_events(), with_start);

    let mut seen: Vec<_> = buckets.iter().flat_map(|(_, v)| ids(v)).collect();
    seen.sort();
    seen.dedup();
    assert_eq!(seen.len(), with_start);
}

#[test]
fn empty_range_and_no_events() {
    let buckets = bucket_events_by_day(
        Vec::<CalendarEvent>::new(),
        enumerate_days(&at(2024, 3, 16, 0, 0), &at(2024, 3, 15, 0, 0)),
    );
    assert!(buckets.is_empty());
}

#[test]
fn month_view_buckets_in_day_order() {
    let view = CalendarView::new(at(2024, 3, 15, 0, 0), ViewMode::Month, ViewOptions::default());
    let events = vec![
        event_at("b", "2024-03-29T15:00:00Z"),
        event_at("a", "2024-03-01T08:00:00Z"),
        event_at("c", "2024-03-29T08:00:00Z"),
    ];
    let buckets = view.buckets(&events);
    assert_eq!(buckets.len(), view.days().len());
    assert_eq!(ids(buckets.for_day(&at(2024, 3, 29, 0, 0))), vec!["c", "b"]);
    assert_eq!(ids(buckets.get("2024-03-01")), vec!["a"]);

    let keys: Vec<_> = buckets.iter().map(|(k, _)| k.clone()).collect();
    let mut sorted = keys.clone();
    sorted.sort();
    assert_eq!(keys, sorted);
}
