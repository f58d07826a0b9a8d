// SPDX-FileCopyrightText: 2025-2026 Zexin Yuan <aim@yzx9.xyz>
//
// SPDX-License-Identifier: Apache-2.0

//! Worked boundary scenarios.

use chrono::NaiveTime;
use meetcal_core::{
    CalendarView, DateTimeAnchor, ViewMode, ViewOptions, enumerate_days, get_range, is_weekend,
};

use crate::common::{at, date};

fn end_of_day_time() -> NaiveTime {
    NaiveTime::from_hms_milli_opt(23, 59, 59, 999).unwrap()
}

#[test]
fn week_of_friday_starts_monday() {
    // 2024-03-15 is a Friday
    let range = get_range(&at(2024, 3, 15, 12, 0), ViewMode::Week);
    assert_eq!(range.from(), at(2024, 3, 11, 0, 0));
    assert_eq!(range.to(), date(2024, 3, 17).and_time(end_of_day_time()));
}

#[test]
fn leap_february_month() {
    let range = get_range(&at(2024, 2, 1, 0, 0), ViewMode::Month);
    assert_eq!(range.from(), at(2024, 2, 1, 0, 0));
    assert_eq!(range.to(), date(2024, 2, 29).and_time(end_of_day_time()));
}

#[test]
fn same_instant_is_one_day() {
    let day = at(2024, 3, 15, 0, 0);
    assert_eq!(enumerate_days(&day, &day).count(), 1);
}

#[test]
fn workdays_only_drops_the_weekend() {
    let view = CalendarView::new(at(2024, 3, 15, 12, 0), ViewMode::Week, ViewOptions::default());
    let days = view.days();
    assert_eq!(days.len(), 5);
    assert!(days.iter().all(|d| !is_weekend(d)));
    assert!(!days.contains(&at(2024, 3, 16, 0, 0)));
    assert!(!days.contains(&at(2024, 3, 17, 0, 0)));
}

#[test]
fn anchor_string_drives_the_view() {
    let now = at(2030, 1, 1, 8, 0);
    let anchor: DateTimeAnchor = "2024-03-15".parse().unwrap();
    let view = CalendarView::new(anchor.resolve(&now), ViewMode::Week, ViewOptions::default());
    assert_eq!(view.range().from(), at(2024, 3, 11, 0, 0));

    let anchor: DateTimeAnchor = "in 1 week".parse().unwrap();
    let view = CalendarView::new(anchor.resolve(&now), ViewMode::Day, ViewOptions::default());
    assert_eq!(view.days(), &[at(2030, 1, 8, 0, 0)]);
}

#[test]
fn paging_through_months_visits_every_month_once() {
    let mut anchor = at(2024, 1, 31, 9, 0);
    let mut months = Vec::new();
    for _ in 0..14 {
        let view = CalendarView::new(anchor, ViewMode::Month, ViewOptions::default());
        months.push(view.range().from().date());
        anchor = view.next();
    }
    let expected: Vec<_> = (0..14)
        .map(|i| date(2024 + i / 12, (i % 12) as u32 + 1, 1))
        .collect();
    assert_eq!(months, expected);
}
