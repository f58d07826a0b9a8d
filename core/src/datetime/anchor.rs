// SPDX-FileCopyrightText: 2025 Zexin Yuan <aim@yzx9.xyz>
//
// SPDX-License-Identifier: Apache-2.0

use std::{str::FromStr, sync::OnceLock};

use chrono::{NaiveDate, NaiveDateTime};
use regex::Regex;

use crate::CalendarError;
use crate::datetime::util::{add_days, start_of_day_naive};

/// The reference date around which a calendar view is computed.
///
/// Relative anchors are resolved against a `now` passed by the caller, the engine never
/// reads the clock itself.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DateTimeAnchor {
    /// A specific number of days in the future or past, keeping the current time of day.
    InDays(i64),

    /// A specific date, at the start of the day.
    Date(NaiveDate),

    /// A specific date and time.
    DateTime(NaiveDateTime),
}

impl DateTimeAnchor {
    /// Represents the current date.
    pub fn today() -> Self {
        DateTimeAnchor::InDays(0)
    }

    /// Represents tomorrow, which is one day after today.
    pub fn tomorrow() -> Self {
        DateTimeAnchor::InDays(1)
    }

    /// Represents yesterday, which is one day before today.
    pub fn yesterday() -> Self {
        DateTimeAnchor::InDays(-1)
    }

    /// Resolves the anchor to a datetime based on the current time.
    pub fn resolve(&self, now: &NaiveDateTime) -> NaiveDateTime {
        match self {
            DateTimeAnchor::InDays(n) => add_days(now, *n),
            DateTimeAnchor::Date(d) => NaiveDateTime::new(*d, start_of_day_naive()),
            DateTimeAnchor::DateTime(dt) => *dt,
        }
    }
}

impl Default for DateTimeAnchor {
    fn default() -> Self {
        Self::today()
    }
}

impl FromStr for DateTimeAnchor {
    type Err = CalendarError;

    fn from_str(t: &str) -> Result<Self, Self::Err> {
        // Handle keywords
        match t.trim().to_lowercase().as_str() {
            "yesterday" => return Ok(Self::yesterday()),
            "tomorrow" => return Ok(Self::tomorrow()),
            "today" | "now" => return Ok(Self::today()),
            _ => {}
        }

        if let Ok(dt) = NaiveDateTime::parse_from_str(t, "%Y-%m-%d %H:%M") {
            Ok(Self::DateTime(dt))
        } else if let Ok(date) = NaiveDate::parse_from_str(t, "%Y-%m-%d") {
            Ok(Self::Date(date))
        } else if let Some(days) = parse_days(t) {
            // e.g., "3d", "in 2 weeks", "10 days ago"
            Ok(Self::InDays(days))
        } else {
            Err(CalendarError::InvalidAnchor(t.to_string()))
        }
    }
}

/// Parse days from string formats like "10d", "in 10 days", "2w", "3 days ago"
fn parse_days(s: &str) -> Option<i64> {
    const RE: &str = r"(?i)^\s*(?:in\s*)?([+-]?\d+)\s*(d|days?|w|weeks?)(\s+ago)?\s*$";
    static REGEX: OnceLock<Regex> = OnceLock::new();
    let re = REGEX.get_or_init(|| Regex::new(RE).expect("anchor regex must compile"));

    let captures = re.captures(s)?;
    let num = captures[1].parse::<i64>().ok()?;
    let days = match captures[2].to_lowercase().starts_with('w') {
        true => num.checked_mul(7)?,
        false => num,
    };
    match captures.get(3) {
        Some(_) => days.checked_neg(),
        None => Some(days),
    }
}
