//! Schedule error types.
//!
//! These are request outcomes, not internal failures: every error is
//! detected before the store is mutated.

use crate::domain::{ClockError, InvalidLineName};

/// A schedule submission was rejected. The store is left untouched.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ValidationError {
    /// The line name is not 1-4 ASCII letters or digits
    #[error(transparent)]
    LineName(#[from] InvalidLineName),

    /// One of the arrival times is not a valid clock string
    #[error("arrival time #{index} ({value:?}): {source}")]
    ArrivalTime {
        index: usize,
        value: String,
        source: ClockError,
    },
}

/// A next-simultaneous-arrival query could not produce a time.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum QueryError {
    /// The query time is not a valid clock string
    #[error("{0}")]
    InvalidFormat(#[from] ClockError),

    /// No line has been registered yet
    #[error("no schedules available")]
    NoSchedulesAvailable,

    /// Schedules exist, but no minute has two or more arrivals
    #[error("no simultaneous arrivals")]
    NoSimultaneousArrivals,
}
