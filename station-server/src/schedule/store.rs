//! In-memory schedule store.

use std::collections::{BTreeSet, HashMap};

use tracing::{debug, info};

use super::error::{QueryError, ValidationError};
use super::finder::next_simultaneous_arrival;
use super::histogram::ArrivalHistogram;
use crate::domain::{LineName, MinuteOfDay};

/// A transit line and its arrival schedule.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Line {
    name: LineName,
    arrival_times: Vec<String>,
    minutes: Vec<MinuteOfDay>,
}

impl Line {
    /// The line's name.
    pub fn name(&self) -> &LineName {
        &self.name
    }

    /// Arrival times exactly as they were submitted.
    pub fn arrival_times(&self) -> &[String] {
        &self.arrival_times
    }

    /// Arrival times as minutes of day, in submission order.
    pub fn minutes(&self) -> &[MinuteOfDay] {
        &self.minutes
    }
}

/// What a successful submission did.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Submission {
    /// The line was not known before
    Created,
    /// An existing line's schedule was overwritten
    Replaced { previous_times: Vec<String> },
}

/// All known lines plus the aggregate arrival histogram.
///
/// The histogram always equals the sum of every stored line's arrivals.
/// Re-submitting a line removes its old arrivals before adding the new ones,
/// so nothing is counted twice.
#[derive(Debug, Default)]
pub struct ScheduleStore {
    lines: HashMap<LineName, Line>,
    histogram: ArrivalHistogram,
}

impl ScheduleStore {
    /// Create an empty store.
    pub fn new() -> Self {
        Self::default()
    }

    /// Register or replace a line's schedule.
    ///
    /// The name and every time are validated first. If anything is invalid
    /// the store is left exactly as it was.
    ///
    /// # Examples
    ///
    /// ```
    /// use station_server::schedule::ScheduleStore;
    ///
    /// let mut store = ScheduleStore::new();
    /// store.submit_schedule("A", &["6:00 AM"]).unwrap();
    /// store.submit_schedule("B", &["6:00 AM"]).unwrap();
    ///
    /// let next = store.query_next_simultaneous("5:00 AM").unwrap();
    /// assert_eq!(next.to_string(), "6:00 AM");
    ///
    /// assert!(store.submit_schedule("TOOLONG", &["6:00 AM"]).is_err());
    /// ```
    pub fn submit_schedule<S: AsRef<str>>(
        &mut self,
        line_name: &str,
        times: &[S],
    ) -> Result<Submission, ValidationError> {
        let line = build_line(line_name, times)?;
        let name = line.name.clone();

        let outcome = match self.lines.remove(&name) {
            Some(previous) => {
                self.histogram.remove_all(&previous.minutes);
                Submission::Replaced {
                    previous_times: previous.arrival_times,
                }
            }
            None => Submission::Created,
        };

        self.histogram.add_all(&line.minutes);
        info!(
            line = %name,
            arrivals = line.minutes.len(),
            replaced = matches!(outcome, Submission::Replaced { .. }),
            "schedule stored"
        );
        self.lines.insert(name, line);

        Ok(outcome)
    }

    /// Find the next simultaneous arrival after `current_time`.
    ///
    /// Fails if the time is malformed, if no line is registered, or if no
    /// minute of the day has two or more arrivals.
    pub fn query_next_simultaneous(&self, current_time: &str) -> Result<MinuteOfDay, QueryError> {
        let query = MinuteOfDay::parse_clock(current_time)?;

        if self.lines.is_empty() {
            return Err(QueryError::NoSchedulesAvailable);
        }

        let found = next_simultaneous_arrival(&self.histogram, query);
        debug!(?query, ?found, "next simultaneous arrival");
        found.ok_or(QueryError::NoSimultaneousArrivals)
    }

    /// Names of all known lines, sorted.
    pub fn list_line_names(&self) -> BTreeSet<LineName> {
        self.lines.keys().cloned().collect()
    }

    /// Look up one line by name.
    pub fn line(&self, name: &str) -> Option<&Line> {
        let name = LineName::parse(name).ok()?;
        self.lines.get(&name)
    }

    /// The aggregate arrivals-per-minute histogram.
    pub fn histogram(&self) -> &ArrivalHistogram {
        &self.histogram
    }

    /// Number of known lines.
    pub fn line_count(&self) -> usize {
        self.lines.len()
    }

    /// Returns true if no line has been registered.
    pub fn is_empty(&self) -> bool {
        self.lines.is_empty()
    }
}

/// Validate a submission and convert it into a `Line`, without touching state.
fn build_line<S: AsRef<str>>(line_name: &str, times: &[S]) -> Result<Line, ValidationError> {
    let name = LineName::parse(line_name)?;

    let minutes = times
        .iter()
        .enumerate()
        .map(|(index, time)| {
            MinuteOfDay::parse_clock(time.as_ref()).map_err(|source| {
                ValidationError::ArrivalTime {
                    index,
                    value: time.as_ref().to_owned(),
                    source,
                }
            })
        })
        .collect::<Result<Vec<_>, _>>()?;

    Ok(Line {
        name,
        arrival_times: times.iter().map(|t| t.as_ref().to_owned()).collect(),
        minutes,
    })
}


#[cfg(test)]
mod proptests {
    use super::*;
    use proptest::prelude::*;

    prop_compose! {
        fn clock()(hour in 1u16..=12, minute in 0u16..60, pm in any::<bool>()) -> String {
            format!("{}:{:02} {}", hour, minute, if pm { "PM" } else { "AM" })
        }
    }

    fn submission() -> impl Strategy<Value = (String, Vec<String>)> {
        ("[A-C]", prop::collection::vec(clock(), 0..6))
    }

    proptest! {
        /// After any sequence of submissions the histogram matches the lines
        #[test]
        fn histogram_matches_lines(subs in prop::collection::vec(submission(), 0..12)) {
            let mut store = ScheduleStore::new();
            for (name, times) in &subs {
                store.submit_schedule(name, times).unwrap();
            }

            let mut expected = ArrivalHistogram::new();
            for line in store.lines.values() {
                expected.add_all(line.minutes());
            }
            prop_assert_eq!(store.histogram(), &expected);
        }

        /// A submission with one bad time changes nothing
        #[test]
        fn bad_submission_is_atomic(
            good in prop::collection::vec(submission(), 0..6),
            (name, mut times) in submission(),
            at in 0usize..6,
        ) {
            let mut store = ScheduleStore::new();
            for (n, t) in &good {
                store.submit_schedule(n, t).unwrap();
            }
            let before_hist = store.histogram().clone();
            let before_names = store.list_line_names();

            let at = at.min(times.len());
            times.insert(at, "13:00 AM".to_string());
            prop_assert!(store.submit_schedule(&name, &times).is_err());

            prop_assert_eq!(store.histogram(), &before_hist);
            prop_assert_eq!(store.list_line_names(), before_names);
        }
    }
}
