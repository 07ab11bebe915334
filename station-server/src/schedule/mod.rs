//! Arrival schedules and the simultaneous-arrival query.
//!
//! The store keeps one record per line and an aggregate histogram of
//! arrivals per minute. Queries search that histogram for the next minute
//! with two or more arrivals, wrapping past midnight.

mod error;
mod finder;
mod histogram;
mod shared;
mod store;

pub use error::{QueryError, ValidationError};
pub use finder::next_simultaneous_arrival;
pub use histogram::ArrivalHistogram;
pub use shared::SharedSchedule;
pub use store::{Line, ScheduleStore, Submission};
