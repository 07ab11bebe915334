//! Data transfer objects for web requests and responses.

use serde::{Deserialize, Serialize};

use crate::domain::LineName;
use crate::schedule::Line;

/// Request to register or replace a line's schedule.
#[derive(Debug, Deserialize)]
pub struct ScheduleLineRequest {
    /// Line name (1-4 letters or digits)
    pub line_name: String,

    /// Arrival times in "H:MM AM" format
    pub arrival_times: Vec<String>,
}

/// Query for the next simultaneous arrival.
#[derive(Debug, Deserialize)]
pub struct NextArrivalRequest {
    /// Time to search from, in "H:MM AM" format
    pub current_time: Option<String>,
}

/// Response listing known lines.
#[derive(Debug, Serialize)]
pub struct LinesResponse {
    pub lines: Vec<LineName>,
}

/// A single line's schedule.
#[derive(Debug, Serialize)]
pub struct LineResponse {
    pub line_name: LineName,
    pub arrival_times: Vec<String>,
}

impl LineResponse {
    /// Build from a stored line.
    pub fn from_line(line: &Line) -> Self {
        Self {
            line_name: line.name().clone(),
            arrival_times: line.arrival_times().to_vec(),
        }
    }
}

/// Error response.
#[derive(Debug, Serialize)]
pub struct ErrorResponse {
    pub error: String,
}
