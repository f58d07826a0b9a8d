// SPDX-FileCopyrightText: 2025-2026 Zexin Yuan <aim@yzx9.xyz>
//
// SPDX-License-Identifier: Apache-2.0

//! Test data factories for integration tests.

use chrono::{NaiveDate, NaiveDateTime};
use meetcal_core::{CalendarEvent, Event, EventTime, add_days};

/// Creates a datetime at the given date and time.
#[must_use]
pub fn at(y: i32, m: u32, d: u32, h: u32, mi: u32) -> NaiveDateTime {
    date(y, m, d).and_hms_opt(h, mi, 0).expect("valid time")
}

/// Creates a date.
#[must_use]
pub fn date(y: i32, m: u32, d: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(y, m, d).expect("valid date")
}

/// A spread of anchors covering every weekday, month ends, leap days and year ends.
#[must_use]
pub fn anchors() -> Vec<NaiveDateTime> {
    let mut anchors = Vec::new();
    let mut day = at(2023, 12, 1, 13, 37);
    while day < at(2025, 3, 15, 0, 0) {
        anchors.push(day);
        day = add_days(&day, 3);
    }
    anchors.extend([
        at(1900, 2, 28, 23, 59),
        at(2000, 2, 29, 0, 0),
        at(2024, 12, 31, 23, 59),
        at(2025, 1, 1, 0, 0),
    ]);
    anchors
}

/// Creates an event starting at the given timestamp.
#[must_use]
pub fn event_at(id: &str, date_time: &str) -> CalendarEvent {
    CalendarEvent {
        id: id.to_string(),
        summary: Some(format!("Event {id}")),
        start: Some(EventTime::at(date_time)),
        ..Default::default()
    }
}

/// Creates an all-day event.
#[must_use]
pub fn event_all_day(id: &str, date: &str) -> CalendarEvent {
    CalendarEvent {
        id: id.to_string(),
        summary: Some(format!("Event {id}")),
        start: Some(EventTime::all_day(date)),
        ..Default::default()
    }
}

/// Creates an event with no start at all.
#[must_use]
pub fn event_without_start(id: &str) -> CalendarEvent {
    CalendarEvent {
        id: id.to_string(),
        ..Default::default()
    }
}

/// The identifiers of the events, in order.
pub fn ids<E: Event>(events: &[E]) -> Vec<String> {
    events.iter().map(|e| e.id().to_string()).collect()
}
