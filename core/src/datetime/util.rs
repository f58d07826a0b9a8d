// SPDX-FileCopyrightText: 2025 Zexin Yuan <aim@yzx9.xyz>
//
// SPDX-License-Identifier: Apache-2.0

use chrono::{
    DateTime, Datelike, Days, Months, NaiveDate, NaiveDateTime, NaiveTime, TimeZone, Utc,
    offset::LocalResult,
};

use crate::WeekStart;

/// NOTE: Used as the day key of buckets, so it should be stable across different runs.
pub const STABLE_FORMAT_DATEONLY: &str = "%Y-%m-%d";
pub const STABLE_FORMAT_FLOATING: &str = "%Y-%m-%dT%H:%M:%S";

pub const fn start_of_day_naive() -> NaiveTime {
    NaiveTime::from_hms_opt(0, 0, 0).expect("00:00:00 must exist in NaiveTime")
}

/// The last millisecond of the day, 23:59:59.999
pub const fn end_of_day_naive() -> NaiveTime {
    NaiveTime::from_hms_milli_opt(23, 59, 59, 999).expect("23:59:59.999 must exist in NaiveTime")
}

/// The start of the day (00:00:00.000) of the given datetime.
pub fn start_of_day(dt: &NaiveDateTime) -> NaiveDateTime {
    NaiveDateTime::new(dt.date(), start_of_day_naive())
}

/// The end of the day (23:59:59.999) of the given datetime.
pub fn end_of_day(dt: &NaiveDateTime) -> NaiveDateTime {
    NaiveDateTime::new(dt.date(), end_of_day_naive())
}

/// Shifts the datetime by `n` calendar days, keeping the time of day.
///
/// Month and year roll over naturally. Saturates at the representable bounds.
pub fn add_days(dt: &NaiveDateTime, n: i64) -> NaiveDateTime {
    let days = Days::new(n.unsigned_abs());
    let shifted = match n >= 0 {
        true => dt.checked_add_days(days),
        false => dt.checked_sub_days(days),
    };
    shifted.unwrap_or(match n >= 0 {
        true => NaiveDateTime::MAX,
        false => NaiveDateTime::MIN,
    })
}

/// The start of the first day of the week containing `dt`.
pub fn start_of_week(dt: &NaiveDateTime, week_start: WeekStart) -> NaiveDateTime {
    let day = i64::from(dt.weekday().num_days_from_sunday()); // 0=Sun
    let starts_on = i64::from(week_start.number());
    let diff = if day < starts_on { 7 } else { 0 } + day - starts_on;
    add_days(&start_of_day(dt), -diff)
}

/// The end of the last day of the week containing `dt`, always six days after the week start.
pub fn end_of_week(dt: &NaiveDateTime, week_start: WeekStart) -> NaiveDateTime {
    end_of_day(&add_days(&start_of_week(dt, week_start), 6))
}

/// The first day of the month at 00:00:00.000.
pub fn start_of_month(dt: &NaiveDateTime) -> NaiveDateTime {
    NaiveDateTime::new(first_of_month(dt.date()), start_of_day_naive())
}

/// The last day of the month at 23:59:59.999, i.e. the day before the first of the next month.
pub fn end_of_month(dt: &NaiveDateTime) -> NaiveDateTime {
    let last = first_of_month(dt.date())
        .checked_add_months(Months::new(1))
        .and_then(|next| next.pred_opt())
        .unwrap_or(NaiveDate::MAX);
    NaiveDateTime::new(last, end_of_day_naive())
}

/// Moves to the first day of the month `n` months away from the one containing `date`.
pub fn shift_months(date: NaiveDate, n: i64) -> NaiveDate {
    let first = first_of_month(date);
    let shifted = u32::try_from(n.unsigned_abs())
        .ok()
        .map(Months::new)
        .and_then(|months| match n >= 0 {
            true => first.checked_add_months(months),
            false => first.checked_sub_months(months),
        });
    shifted.unwrap_or(match n >= 0 {
        true => first_of_month(NaiveDate::MAX),
        false => NaiveDate::MIN,
    })
}

fn first_of_month(date: NaiveDate) -> NaiveDate {
    date - Days::new(u64::from(date.day0()))
}

/// Convert the `NaiveDateTime` to the given timezone, handles local time ambiguities:
/// - `Single(dt)` returns directly;
/// - `Ambiguous(a, b)` takes the earlier one;
/// - `None` (local time does not exist, e.g., due to DST transition): falls back to UTC
///   combination and then converts.
pub fn from_local_datetime<Tz: TimeZone>(tz: &Tz, naive: NaiveDateTime) -> DateTime<Tz> {
    match tz.from_local_datetime(&naive) {
        LocalResult::Single(x) => x,
        LocalResult::Ambiguous(a, b) => {
            // Choose the earlier one
            if a <= b { a } else { b }
        }
        LocalResult::None => {
            tracing::warn!(%naive, "local time does not exist, falling back to UTC");
            Utc.from_utc_datetime(&naive).with_timezone(tz)
        }
    }
}
