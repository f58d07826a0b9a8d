// SPDX-FileCopyrightText: 2025 Zexin Yuan <aim@yzx9.xyz>
//
// SPDX-License-Identifier: Apache-2.0

use async_trait::async_trait;

use crate::{CalendarError, DateWindow, LooseDateTime};

/// Trait representing a calendar event that can be placed on a day.
pub trait Event {
    /// The unique identifier for the event.
    fn id(&self) -> &str;

    /// The summary of the event, if available.
    fn summary(&self) -> Option<&str>;

    /// The start of the event, if available.
    fn start(&self) -> Option<&EventTime>;

    /// The end of the event, if available.
    fn end(&self) -> Option<&EventTime>;

    /// The raw start marker used to place and order the event, the timestamp if present,
    /// otherwise the date.
    fn start_marker(&self) -> Option<&str> {
        self.start().and_then(EventTime::marker)
    }
}

impl<E: Event + ?Sized> Event for &E {
    fn id(&self) -> &str {
        (**self).id()
    }

    fn summary(&self) -> Option<&str> {
        (**self).summary()
    }

    fn start(&self) -> Option<&EventTime> {
        (**self).start()
    }

    fn end(&self) -> Option<&EventTime> {
        (**self).end()
    }
}

/// The start or end of an event, either a whole day or a timestamp.
#[derive(Debug, Default, Clone, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct EventTime {
    /// Date only, `YYYY-MM-DD`.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub date: Option<String>,

    /// Timestamp, e.g. `2024-03-12T09:00:00Z`.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub date_time: Option<String>,
}

impl EventTime {
    /// A date-only marker.
    pub fn all_day(date: impl Into<String>) -> Self {
        Self {
            date: Some(date.into()),
            date_time: None,
        }
    }

    /// A timestamp marker.
    pub fn at(date_time: impl Into<String>) -> Self {
        Self {
            date: None,
            date_time: Some(date_time.into()),
        }
    }

    /// The timestamp if present, otherwise the date. Empty strings count as absent.
    pub fn marker(&self) -> Option<&str> {
        let non_empty = |s: &&str| !s.is_empty();
        self.date_time
            .as_deref()
            .filter(non_empty)
            .or_else(|| self.date.as_deref().filter(non_empty))
    }

    /// Parses the marker.
    pub fn parse(&self) -> Option<LooseDateTime> {
        self.marker().and_then(LooseDateTime::parse)
    }
}

/// An event record as returned by the upstream calendar listing.
#[derive(Debug, Default, Clone, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CalendarEvent {
    /// The event identifier.
    pub id: String,

    /// The title of the event.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub summary: Option<String>,

    /// The description of the event.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,

    /// The location of the event.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub location: Option<String>,

    /// Link to the event in the upstream calendar.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub html_link: Option<String>,

    /// The start of the event.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub start: Option<EventTime>,

    /// The end of the event.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub end: Option<EventTime>,
}

impl Event for CalendarEvent {
    fn id(&self) -> &str {
        &self.id
    }

    fn summary(&self) -> Option<&str> {
        self.summary.as_deref()
    }

    fn start(&self) -> Option<&EventTime> {
        self.start.as_ref()
    }

    fn end(&self) -> Option<&EventTime> {
        self.end.as_ref()
    }
}

/// A source of events, e.g. a calendar API or a local export.
#[async_trait]
pub trait EventSource {
    /// Lists the events overlapping the window.
    async fn list_events(&self, window: &DateWindow) -> Result<Vec<CalendarEvent>, CalendarError>;
}
