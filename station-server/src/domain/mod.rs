//! Domain types for the station arrivals server.
//!
//! All types enforce their invariants at construction time, so code that
//! receives a `MinuteOfDay` or `LineName` can trust its validity.

mod clock;
mod line_name;

pub use clock::{ClockError, MINUTES_PER_DAY, MinuteOfDay, is_valid_clock_time};
pub use line_name::{InvalidLineName, LineName, is_valid_line_name};
