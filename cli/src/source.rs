// SPDX-FileCopyrightText: 2025 Zexin Yuan <aim@yzx9.xyz>
//
// SPDX-License-Identifier: Apache-2.0

use std::path::{Path, PathBuf};

use async_trait::async_trait;
use chrono::{Local, TimeDelta};
use meetcal_core::{
    CalendarError, CalendarEvent, DateWindow, EventSource, EventTime, LooseDateTime,
};
use tokio::fs;

/// Reads events from a JSON export of a calendar listing.
///
/// The file holds either a bare array of events or the `{"events": [...]}` envelope.
#[derive(Debug, Clone)]
pub struct JsonFileSource {
    path: PathBuf,
}

impl JsonFileSource {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    async fn read(&self) -> Result<Vec<CalendarEvent>, CalendarError> {
        let content = fs::read_to_string(&self.path).await.map_err(|e| {
            CalendarError::Source(format!(
                "failed to read events file at {}: {e}",
                self.path.display()
            ))
        })?;

        parse_events(&content).map_err(|e| {
            CalendarError::Source(format!(
                "failed to parse events file at {}: {e}",
                self.path.display()
            ))
        })
    }
}

#[async_trait]
impl EventSource for JsonFileSource {
    async fn list_events(&self, window: &DateWindow) -> Result<Vec<CalendarEvent>, CalendarError> {
        tracing::debug!(path = %self.path.display(), ?window, "listing events...");
        let events = self.read().await?;
        let total = events.len();
        let events: Vec<_> = events
            .into_iter()
            .filter(|event| overlaps(event, window))
            .collect();

        tracing::debug!(total, kept = events.len(), "events loaded");
        Ok(events)
    }
}

#[derive(serde::Deserialize)]
#[serde(untagged)]
enum EventsFile {
    List(Vec<CalendarEvent>),
    Envelope { events: Vec<CalendarEvent> },
}

fn parse_events(s: &str) -> Result<Vec<CalendarEvent>, serde_json::Error> {
    Ok(match serde_json::from_str(s)? {
        EventsFile::List(events) => events,
        EventsFile::Envelope { events } => events,
    })
}

/// Whether the event falls into the window. Events with a missing or unreadable start are
/// kept, the bucketing decides what to do with them.
fn overlaps(event: &CalendarEvent, window: &DateWindow) -> bool {
    let Some(start) = event.start.as_ref().and_then(EventTime::parse) else {
        return true;
    };

    let start_at = start.instant_in(&Local);
    let end_at = match event.end.as_ref().and_then(EventTime::parse) {
        Some(end) => end.instant_in(&Local),
        // an all-day event without an end lasts the whole day
        None if matches!(start, LooseDateTime::DateOnly(_)) => start_at + TimeDelta::days(1),
        None => start_at,
    };

    if end_at > start_at {
        window.overlaps(start_at, end_at)
    } else {
        window.time_min <= start_at && start_at < window.time_max
    }
}
