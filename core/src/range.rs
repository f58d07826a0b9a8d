// SPDX-FileCopyrightText: 2025 Zexin Yuan <aim@yzx9.xyz>
//
// SPDX-License-Identifier: Apache-2.0

use std::{fmt, str::FromStr};

use chrono::{DateTime, NaiveDateTime, TimeZone, Utc};

use crate::datetime::{
    add_days, end_of_day, end_of_month, end_of_week, from_local_datetime, shift_months,
    start_of_day, start_of_day_naive, start_of_month, start_of_week,
};
use crate::{CalendarError, DayIter, WeekStart, enumerate_days};

/// The granularity of a displayed range.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq, Hash, serde::Serialize, serde::Deserialize)]
#[cfg_attr(feature = "clap", derive(clap::ValueEnum))]
#[serde(rename_all = "lowercase")]
pub enum ViewMode {
    /// A single day.
    Day,

    /// Seven consecutive days starting on the week start.
    #[default]
    Week,

    /// A whole calendar month.
    Month,
}

impl FromStr for ViewMode {
    type Err = CalendarError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "day" => Ok(ViewMode::Day),
            "week" => Ok(ViewMode::Week),
            "month" => Ok(ViewMode::Month),
            _ => Err(CalendarError::InvalidViewMode(s.to_string())),
        }
    }
}

impl fmt::Display for ViewMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ViewMode::Day => write!(f, "day"),
            ViewMode::Week => write!(f, "week"),
            ViewMode::Month => write!(f, "month"),
        }
    }
}

/// A closed date interval, both bounds inclusive.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, serde::Serialize)]
pub struct DateRange {
    from: NaiveDateTime,
    to: NaiveDateTime,
}

impl DateRange {
    /// The inclusive lower bound.
    pub fn from(&self) -> NaiveDateTime {
        self.from
    }

    /// The inclusive upper bound.
    pub fn to(&self) -> NaiveDateTime {
        self.to
    }

    /// Whether the datetime lies within the range.
    pub fn contains(&self, t: &NaiveDateTime) -> bool {
        self.from <= *t && *t <= self.to
    }

    /// The days of the range, each at the start of the day.
    pub fn days(&self) -> DayIter {
        enumerate_days(&self.from, &self.to)
    }

    /// Resolves the range to instants in the given timezone, e.g. to query an event source.
    pub fn resolve<Tz: TimeZone>(&self, tz: &Tz) -> DateWindow {
        DateWindow {
            time_min: from_local_datetime(tz, self.from).with_timezone(&Utc),
            time_max: from_local_datetime(tz, self.to).with_timezone(&Utc),
        }
    }
}

impl fmt::Display for DateRange {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{}~{}",
            self.from.format("%Y-%m-%d"),
            self.to.format("%Y-%m-%d")
        )
    }
}

/// A window of instants, as expected by an upstream event listing.
#[derive(Debug, Clone, Copy, PartialEq, Eq, serde::Serialize)]
pub struct DateWindow {
    /// Lower bound (exclusive) for an event's end time.
    pub time_min: DateTime<Utc>,

    /// Upper bound (exclusive) for an event's start time.
    pub time_max: DateTime<Utc>,
}

impl DateWindow {
    /// Whether an event spanning `start..end` overlaps this window.
    pub fn overlaps(&self, start: DateTime<Utc>, end: DateTime<Utc>) -> bool {
        end > self.time_min && start < self.time_max
    }
}

/// Computes the range of a view around the anchor, with weeks starting on Monday.
pub fn get_range(anchor: &NaiveDateTime, view: ViewMode) -> DateRange {
    get_range_with(anchor, view, WeekStart::default())
}

/// Computes the range of a view around the anchor with the given week start.
pub fn get_range_with(anchor: &NaiveDateTime, view: ViewMode, week_start: WeekStart) -> DateRange {
    let (from, to) = match view {
        ViewMode::Day => (start_of_day(anchor), end_of_day(anchor)),
        ViewMode::Week => (
            start_of_week(anchor, week_start),
            end_of_week(anchor, week_start),
        ),
        ViewMode::Month => (start_of_month(anchor), end_of_month(anchor)),
    };
    DateRange { from, to }
}

/// Moves the anchor `n` views forward, or backward when `n` is negative.
///
/// Day and week views shift by whole days keeping the time of day, while month view lands
/// on the first day of the target month.
pub fn shift_anchor(anchor: &NaiveDateTime, view: ViewMode, n: i64) -> NaiveDateTime {
    match view {
        ViewMode::Day => add_days(anchor, n),
        ViewMode::Week => add_days(anchor, n.saturating_mul(7)),
        ViewMode::Month => NaiveDateTime::new(shift_months(anchor.date(), n), start_of_day_naive()),
    }
}
