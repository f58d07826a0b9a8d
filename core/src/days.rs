// SPDX-FileCopyrightText: 2025 Zexin Yuan <aim@yzx9.xyz>
//
// SPDX-License-Identifier: Apache-2.0

use std::iter::FusedIterator;

use chrono::{Datelike, Days, NaiveDateTime, Weekday};

use crate::datetime::start_of_day;

/// Enumerates the days from `from` to `to`, each at the start of the day.
///
/// A day is yielded when its start is not after `to`, so a partial final day is never
/// produced beyond the bound. The sequence is empty when `from > to`.
pub fn enumerate_days(from: &NaiveDateTime, to: &NaiveDateTime) -> DayIter {
    DayIter {
        next: Some(start_of_day(from)).filter(|_| from <= to),
        to: *to,
    }
}

/// Whether the day falls on Saturday or Sunday, regardless of the week start in use.
pub fn is_weekend(d: &NaiveDateTime) -> bool {
    matches!(d.weekday(), Weekday::Sat | Weekday::Sun)
}

/// A lazy, finite sequence of days. Clone it to restart from the same position.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DayIter {
    next: Option<NaiveDateTime>,
    to: NaiveDateTime,
}

impl DayIter {
    /// Skips Saturdays and Sundays.
    pub fn workdays(self) -> impl Iterator<Item = NaiveDateTime> + Clone {
        self.filter(|d| !is_weekend(d))
    }
}

impl Iterator for DayIter {
    type Item = NaiveDateTime;

    fn next(&mut self) -> Option<Self::Item> {
        let current = self.next.filter(|d| *d <= self.to)?;
        self.next = current.checked_add_days(Days::new(1));
        Some(current)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let remaining = match self.next {
            Some(next) if next <= self.to => {
                let days = (self.to.date() - next.date()).num_days();
                usize::try_from(days).map_or(usize::MAX, |n| n.saturating_add(1))
            }
            _ => 0,
        };
        (remaining, Some(remaining))
    }
}

impl ExactSizeIterator for DayIter {}

impl FusedIterator for DayIter {}
