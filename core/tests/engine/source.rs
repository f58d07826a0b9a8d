// SPDX-FileCopyrightText: 2025-2026 Zexin Yuan <aim@yzx9.xyz>
//
// SPDX-License-Identifier: Apache-2.0

//! Plugging an event source into a view.

use async_trait::async_trait;
use chrono::Utc;
use meetcal_core::{
    CalendarError, CalendarEvent, CalendarView, DateWindow, EventSource, LooseDateTime, ViewMode,
    ViewOptions,
};

use crate::common::{at, event_all_day, event_at, ids};

struct InMemorySource(Vec<CalendarEvent>);

#[async_trait]
impl EventSource for InMemorySource {
    async fn list_events(&self, window: &DateWindow) -> Result<Vec<CalendarEvent>, CalendarError> {
        Ok(self
            .0
            .iter()
            .filter(|e| {
                e.start
                    .as_ref()
                    .and_then(|t| t.parse())
                    .map(|t: LooseDateTime| t.instant_in(&Utc))
                    .is_some_and(|t| window.overlaps(t, t))
            })
            .cloned()
            .collect())
    }
}

struct FailingSource;

#[async_trait]
impl EventSource for FailingSource {
    async fn list_events(&self, _: &DateWindow) -> Result<Vec<CalendarEvent>, CalendarError> {
        Err(CalendarError::Source("not connected".to_string()))
    }
}

#[tokio::test]
async fn source_feeds_the_view() {
    let source = InMemorySource(vec![
        event_at("in", "2024-03-12T09:00:00Z"),
        event_all_day("also-in", "2024-03-15"),
        event_at("out", "2024-04-02T09:00:00Z"),
    ]);
    let view = CalendarView::new(at(2024, 3, 12, 0, 0), ViewMode::Week, ViewOptions::default());

    let events = source.list_events(&view.query_window(&Utc)).await.unwrap();
    let buckets = view.buckets(events);
    assert_eq!(buckets.total_events(), 2);
    assert_eq!(ids(buckets.get("2024-03-12")), vec!["in"]);
    assert_eq!(ids(buckets.get("2024-03-15")), vec!["also-in"]);
}

#[tokio::test]
async fn source_errors_are_reported() {
    let view = CalendarView::new(at(2024, 3, 12, 0, 0), ViewMode::Day, ViewOptions::default());
    let err = FailingSource
        .list_events(&view.query_window(&Utc))
        .await
        .unwrap_err();
    assert_eq!(err.to_string(), "event source error: not connected");
}
