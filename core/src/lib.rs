// SPDX-FileCopyrightText: 2025 Zexin Yuan <aim@yzx9.xyz>
//
// SPDX-License-Identifier: Apache-2.0

//! Calendar range engine: computes the days of a day, week or month view around an anchor
//! and groups events into those days.

mod bucket;
mod config;
mod datetime;
mod days;
mod error;
mod event;
mod range;
mod view;
mod week;

pub use crate::bucket::{DayBuckets, bucket_events_by_day, day_key};
pub use crate::config::{APP_NAME, Config};
pub use crate::datetime::{
    DateTimeAnchor, LooseDateTime, STABLE_FORMAT_DATEONLY, add_days, end_of_day, end_of_month,
    end_of_week, from_local_datetime, start_of_day, start_of_month, start_of_week,
};
pub use crate::days::{DayIter, enumerate_days, is_weekend};
pub use crate::error::CalendarError;
pub use crate::event::{CalendarEvent, Event, EventSource, EventTime};
pub use crate::range::{DateRange, DateWindow, ViewMode, get_range, get_range_with, shift_anchor};
pub use crate::view::{CalendarView, ViewOptions};
pub use crate::week::WeekStart;
