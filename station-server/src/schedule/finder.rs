//! Next simultaneous arrival search.
//!
//! The timeline is a single day that repeats. A search first looks strictly
//! after the query minute for the rest of today, then wraps to the start of
//! the day (tomorrow). Within each pass the earliest minute with two or more
//! arrivals wins.

use tracing::trace;

use super::histogram::ArrivalHistogram;
use crate::domain::MinuteOfDay;

/// Arrivals needed at one minute for it to count as simultaneous.
const SIMULTANEOUS_THRESHOLD: u32 = 2;

/// Find the next minute after `query` at which two or more trains arrive.
///
/// A clash exactly at `query` is not "next" today, but it is found by the
/// wrap-around pass as the same time tomorrow. Returns `None` only when no
/// minute of the day has two or more arrivals.
pub fn next_simultaneous_arrival(
    histogram: &ArrivalHistogram,
    query: MinuteOfDay,
) -> Option<MinuteOfDay> {
    if let Some(minute) = first_clash(histogram.iter_after(query)) {
        trace!(?query, ?minute, "simultaneous arrival later today");
        return Some(minute);
    }

    let wrapped = first_clash(histogram.iter());
    if let Some(minute) = wrapped {
        trace!(?query, ?minute, "simultaneous arrival wraps to tomorrow");
    }
    wrapped
}

/// Earliest bucket with enough arrivals to be simultaneous.
fn first_clash(mut buckets: impl Iterator<Item = (MinuteOfDay, u32)>) -> Option<MinuteOfDay> {
    buckets
        .find(|&(_, count)| count >= SIMULTANEOUS_THRESHOLD)
        .map(|(minute, _)| minute)
}


#[cfg(test)]
mod proptests {
    use super::*;
    use crate::domain::MINUTES_PER_DAY;
    use proptest::prelude::*;

    fn minute() -> impl Strategy<Value = MinuteOfDay> {
        (0..MINUTES_PER_DAY).prop_map(|m| MinuteOfDay::new(m).unwrap())
    }

    /// Walk forward from the query one minute at a time, wrapping once.
    fn brute_force(h: &ArrivalHistogram, query: MinuteOfDay) -> Option<MinuteOfDay> {
        (1..=MINUTES_PER_DAY)
            .map(|offset| (query.get() + offset) % MINUTES_PER_DAY)
            .map(|m| MinuteOfDay::new(m).unwrap())
            .find(|&m| h.count(m) >= SIMULTANEOUS_THRESHOLD)
    }

    proptest! {
        /// Agrees with a minute-by-minute walk around the clock
        #[test]
        fn matches_brute_force(
            arrivals in prop::collection::vec(minute(), 0..40),
            query in minute(),
        ) {
            let mut h = ArrivalHistogram::new();
            h.add_all(&arrivals);
            prop_assert_eq!(
                next_simultaneous_arrival(&h, query),
                brute_force(&h, query)
            );
        }

        /// A result always has at least two arrivals
        #[test]
        fn result_is_a_clash(
            arrivals in prop::collection::vec(minute(), 0..40),
            query in minute(),
        ) {
            let mut h = ArrivalHistogram::new();
            h.add_all(&arrivals);
            if let Some(found) = next_simultaneous_arrival(&h, query) {
                prop_assert!(h.count(found) >= SIMULTANEOUS_THRESHOLD);
            }
        }
    }
}
