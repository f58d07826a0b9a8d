// SPDX-FileCopyrightText: 2025 Zexin Yuan <aim@yzx9.xyz>
//
// SPDX-License-Identifier: Apache-2.0

use std::collections::{BTreeMap, btree_map};

use chrono::{NaiveDate, NaiveDateTime};

use crate::Event;
use crate::datetime::STABLE_FORMAT_DATEONLY;

/// The key of a day bucket, `YYYY-MM-DD`.
pub fn day_key(date: NaiveDate) -> String {
    date.format(STABLE_FORMAT_DATEONLY).to_string()
}

/// Events grouped by day, each day ordered by start.
#[derive(Debug, Clone, PartialEq, Eq, serde::Serialize)]
#[serde(transparent)]
pub struct DayBuckets<E> {
    buckets: BTreeMap<String, Vec<E>>,
}

impl<E> DayBuckets<E> {
    /// The events of the day with the given key, empty if there is no such bucket.
    pub fn get(&self, key: &str) -> &[E] {
        self.buckets.get(key).map(Vec::as_slice).unwrap_or_default()
    }

    /// The events of the given day.
    pub fn for_day(&self, day: &NaiveDateTime) -> &[E] {
        self.get(&day_key(day.date()))
    }

    /// Whether a bucket exists for the key, even if empty.
    pub fn contains_key(&self, key: &str) -> bool {
        self.buckets.contains_key(key)
    }

    /// The number of buckets.
    pub fn len(&self) -> usize {
        self.buckets.len()
    }

    /// Whether there are no buckets at all.
    pub fn is_empty(&self) -> bool {
        self.buckets.is_empty()
    }

    /// The total number of events over all buckets.
    pub fn total_events(&self) -> usize {
        self.buckets.values().map(Vec::len).sum()
    }

    /// Iterates over the buckets in day order.
    pub fn iter(&self) -> btree_map::Iter<'_, String, Vec<E>> {
        self.buckets.iter()
    }

    /// Consumes the buckets, returning the underlying map.
    pub fn into_inner(self) -> BTreeMap<String, Vec<E>> {
        self.buckets
    }
}

impl<E> IntoIterator for DayBuckets<E> {
    type Item = (String, Vec<E>);
    type IntoIter = btree_map::IntoIter<String, Vec<E>>;

    fn into_iter(self) -> Self::IntoIter {
        self.buckets.into_iter()
    }
}

impl<'a, E> IntoIterator for &'a DayBuckets<E> {
    type Item = (&'a String, &'a Vec<E>);
    type IntoIter = btree_map::Iter<'a, String, Vec<E>>;

    fn into_iter(self) -> Self::IntoIter {
        self.buckets.iter()
    }
}

/// Groups events by the day they start on.
///
/// Every day of `days` gets a bucket, possibly empty. An event starting on a day outside of
/// `days` still gets a bucket of its own, and an event without a start is skipped. Each
/// bucket is ordered by the start marker compared as a string, keeping the input order of
/// events that start at the same instant.
pub fn bucket_events_by_day<E, I, D>(events: I, days: D) -> DayBuckets<E>
where
    E: Event,
    I: IntoIterator<Item = E>,
    D: IntoIterator<Item = NaiveDateTime>,
{
    let mut buckets: BTreeMap<String, Vec<E>> = days
        .into_iter()
        .map(|day| (day_key(day.date()), Vec::new()))
        .collect();

    for event in events {
        let Some(key) = event.start_marker().map(marker_day_key) else {
            tracing::debug!(id = event.id(), "event has no start, skipping");
            continue;
        };
        buckets.entry(key).or_default().push(event);
    }

    for bucket in buckets.values_mut() {
        // sort_by is stable
        bucket.sort_by(|a, b| a.start_marker().cmp(&b.start_marker()));
    }

    DayBuckets { buckets }
}

/// The date component of a marker, a date-only marker is its own key.
fn marker_day_key(marker: &str) -> String {
    marker.get(..10).unwrap_or(marker).to_string()
}
