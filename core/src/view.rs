// SPDX-FileCopyrightText: 2025 Zexin Yuan <aim@yzx9.xyz>
//
// SPDX-License-Identifier: Apache-2.0

use std::slice::Chunks;

use chrono::{NaiveDateTime, TimeZone};

use crate::{
    DateRange, DateWindow, DayBuckets, Event, ViewMode, WeekStart, bucket_events_by_day,
    get_range_with, shift_anchor,
};

/// User adjustable options of a calendar view.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ViewOptions {
    /// The first day of a displayed week.
    pub week_start: WeekStart,

    /// Hide Saturdays and Sundays in week and month views.
    pub workdays_only: bool,
}

impl Default for ViewOptions {
    fn default() -> Self {
        Self {
            week_start: WeekStart::default(),
            workdays_only: true,
        }
    }
}

/// The days to display for an anchor and a view mode.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CalendarView {
    anchor: NaiveDateTime,
    view: ViewMode,
    options: ViewOptions,
    range: DateRange,
    days: Vec<NaiveDateTime>,
}

impl CalendarView {
    /// Computes the range and the displayed days around the anchor.
    #[tracing::instrument(level = "debug")]
    pub fn new(anchor: NaiveDateTime, view: ViewMode, options: ViewOptions) -> Self {
        let range = get_range_with(&anchor, view, options.week_start);
        let all = range.days();
        // the day view always shows its day
        let days = match options.workdays_only && view != ViewMode::Day {
            true => all.workdays().collect(),
            false => all.collect(),
        };

        Self {
            anchor,
            view,
            options,
            range,
            days,
        }
    }

    /// The anchor of the view.
    pub fn anchor(&self) -> NaiveDateTime {
        self.anchor
    }

    /// The view mode.
    pub fn view(&self) -> ViewMode {
        self.view
    }

    /// The options used to compute the view.
    pub fn options(&self) -> ViewOptions {
        self.options
    }

    /// The full range of the view, regardless of workday filtering.
    pub fn range(&self) -> DateRange {
        self.range
    }

    /// The displayed days, each at the start of the day.
    pub fn days(&self) -> &[NaiveDateTime] {
        &self.days
    }

    /// The number of grid columns: up to 7 for a month, one per day for a week.
    pub fn columns(&self) -> usize {
        match self.view {
            ViewMode::Day => 1,
            ViewMode::Week => self.days.len(),
            ViewMode::Month => self.days.len().min(7),
        }
    }

    /// The displayed days split into grid rows.
    pub fn rows(&self) -> Chunks<'_, NaiveDateTime> {
        self.days.chunks(self.columns().max(1))
    }

    /// Groups the events by displayed day.
    pub fn buckets<E, I>(&self, events: I) -> DayBuckets<E>
    where
        E: Event,
        I: IntoIterator<Item = E>,
    {
        bucket_events_by_day(events, self.days.iter().copied())
    }

    /// The window of instants to query events for, reading the range in `tz`.
    pub fn query_window<Tz: TimeZone>(&self, tz: &Tz) -> DateWindow {
        self.range.resolve(tz)
    }

    /// The anchor of the previous view.
    pub fn prev(&self) -> NaiveDateTime {
        shift_anchor(&self.anchor, self.view, -1)
    }

    /// The anchor of the next view.
    pub fn next(&self) -> NaiveDateTime {
        shift_anchor(&self.anchor, self.view, 1)
    }
}
