//! Process-wide schedule store shared between request handlers.

use std::collections::BTreeSet;
use std::sync::Arc;
use tokio::sync::RwLock;

use super::error::{QueryError, ValidationError};
use super::store::{Line, ScheduleStore, Submission};
use crate::domain::{LineName, MinuteOfDay};

/// Thread-safe handle to the schedule store.
///
/// Submissions hold the write lock for the whole validate-and-apply step, so
/// two submissions never interleave. Queries share the read lock and always
/// see a consistent store.
#[derive(Clone, Default)]
pub struct SharedSchedule {
    inner: Arc<RwLock<ScheduleStore>>,
}

impl SharedSchedule {
    /// Create a handle to a new, empty store.
    pub fn new() -> Self {
        Self::default()
    }

    /// Wrap an existing store.
    pub fn from_store(store: ScheduleStore) -> Self {
        Self {
            inner: Arc::new(RwLock::new(store)),
        }
    }

    /// Register or replace a line's schedule.
    pub async fn submit_schedule(
        &self,
        line_name: &str,
        times: &[String],
    ) -> Result<Submission, ValidationError> {
        let mut guard = self.inner.write().await;
        guard.submit_schedule(line_name, times)
    }

    /// Find the next simultaneous arrival after `current_time`.
    pub async fn query_next_simultaneous(
        &self,
        current_time: &str,
    ) -> Result<MinuteOfDay, QueryError> {
        let guard = self.inner.read().await;
        guard.query_next_simultaneous(current_time)
    }

    /// Names of all known lines, sorted.
    pub async fn list_line_names(&self) -> BTreeSet<LineName> {
        let guard = self.inner.read().await;
        guard.list_line_names()
    }

    /// A copy of one line's record.
    pub async fn line(&self, name: &str) -> Option<Line> {
        let guard = self.inner.read().await;
        guard.line(name).cloned()
    }

    /// Number of known lines.
    pub async fn line_count(&self) -> usize {
        let guard = self.inner.read().await;
        guard.line_count()
    }
}
