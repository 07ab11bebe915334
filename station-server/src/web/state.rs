//! Application state for the web layer.

use crate::schedule::SharedSchedule;

/// Shared application state.
///
/// Cloned into every handler; clones share the same schedule store.
#[derive(Clone, Default)]
pub struct AppState {
    /// Schedules for every known line
    pub schedule: SharedSchedule,
}

impl AppState {
    /// Create a new app state around an existing store handle.
    pub fn new(schedule: SharedSchedule) -> Self {
        Self { schedule }
    }
}
