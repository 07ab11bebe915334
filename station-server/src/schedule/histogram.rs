//! Aggregate arrivals per minute of day.

use std::collections::BTreeMap;

use crate::domain::MinuteOfDay;

/// How many scheduled arrivals, across all lines, fall on each minute.
///
/// Only minutes with at least one arrival have a bucket. Iteration is in
/// ascending minute order, which the next-arrival search relies on.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ArrivalHistogram {
    buckets: BTreeMap<MinuteOfDay, u32>,
}

impl ArrivalHistogram {
    /// Create an empty histogram.
    pub fn new() -> Self {
        Self::default()
    }

    /// Record one arrival at `minute`.
    pub fn add(&mut self, minute: MinuteOfDay) {
        *self.buckets.entry(minute).or_insert(0) += 1;
    }

    /// Record every arrival in `minutes`.
    pub fn add_all(&mut self, minutes: &[MinuteOfDay]) {
        for &minute in minutes {
            self.add(minute);
        }
    }

    /// Remove one arrival at `minute`, dropping the bucket when it empties.
    ///
    /// Returns false if there was nothing to remove.
    pub fn remove(&mut self, minute: MinuteOfDay) -> bool {
        let Some(count) = self.buckets.get_mut(&minute) else {
            return false;
        };
        *count -= 1;
        if *count == 0 {
            self.buckets.remove(&minute);
        }
        true
    }

    /// Remove every arrival in `minutes`.
    pub fn remove_all(&mut self, minutes: &[MinuteOfDay]) {
        for &minute in minutes {
            self.remove(minute);
        }
    }

    /// Number of arrivals at `minute`.
    pub fn count(&self, minute: MinuteOfDay) -> u32 {
        self.buckets.get(&minute).copied().unwrap_or(0)
    }

    /// Iterate over `(minute, count)` in ascending minute order.
    pub fn iter(&self) -> impl Iterator<Item = (MinuteOfDay, u32)> + '_ {
        self.buckets.iter().map(|(&m, &c)| (m, c))
    }

    /// Iterate over buckets strictly after `minute`, ascending.
    pub fn iter_after(&self, minute: MinuteOfDay) -> impl Iterator<Item = (MinuteOfDay, u32)> + '_ {
        use std::ops::Bound::{Excluded, Unbounded};
        self.buckets
            .range((Excluded(minute), Unbounded))
            .map(|(&m, &c)| (m, c))
    }

    /// Minutes with two or more arrivals, ascending.
    pub fn simultaneous_minutes(&self) -> impl Iterator<Item = MinuteOfDay> + '_ {
        self.iter().filter(|&(_, c)| c >= 2).map(|(m, _)| m)
    }

    /// Number of distinct minutes with arrivals.
    pub fn len(&self) -> usize {
        self.buckets.len()
    }

    /// Returns true if no arrivals are recorded.
    pub fn is_empty(&self) -> bool {
        self.buckets.is_empty()
    }

    /// Total arrivals across all minutes.
    pub fn total(&self) -> u64 {
        self.buckets.values().map(|&c| u64::from(c)).sum()
    }
}
