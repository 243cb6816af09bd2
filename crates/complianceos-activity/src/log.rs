//! In-memory, append-only activity log.
//!
//! `ActivityLog` keeps every entry in a `Vec` behind a `Mutex`. Appends never
//! fail and never reorder: insertion order is chronological order, and each
//! timestamp is clamped so it is never earlier than the previous one.

use std::sync::{Mutex, MutexGuard};

use chrono::Utc;
use tracing::info;

use complianceos_contracts::{
    activity::{ActivityEntry, ActivityRecord},
    agent::AgentIdentity,
};

/// The append-only record of everything one agent has done.
///
/// # Thread safety
///
/// `append()` takes the internal lock for the duration of a single push, so
/// concurrent writers are ordered by lock acquisition.
pub struct ActivityLog {
    identity: AgentIdentity,
    pub(crate) entries: Mutex<Vec<ActivityEntry>>,
}

impl ActivityLog {
    /// Create an empty log owned by the agent `identity`.
    pub fn new(identity: AgentIdentity) -> Self {
        Self {
            identity,
            entries: Mutex::new(Vec::new()),
        }
    }

    pub fn identity(&self) -> &AgentIdentity {
        &self.identity
    }

    /// Append one entry attributed to `client`.
    ///
    /// A poisoned lock is recovered rather than surfaced: logging is not part
    /// of the error model.
    pub fn append(&self, action: impl Into<String>, client: Option<&str>) -> ActivityEntry {
        let action = action.into();
        let mut entries = self.lock();

        let now = Utc::now();
        let timestamp = match entries.last() {
            Some(last) if last.timestamp > now => last.timestamp,
            _ => now,
        };

        let entry = ActivityEntry::new(
            timestamp,
            &self.identity,
            action,
            client.map(str::to_string),
        );

        info!(
            agent = %self.identity.name,
            role = %self.identity.role,
            client = client.unwrap_or("-"),
            "{}",
            entry.action
        );

        entries.push(entry.clone());
        entry
    }

    /// The most recent `limit` entries in chronological order, or all of them.
    pub fn entries(&self, limit: Option<usize>) -> Vec<ActivityEntry> {
        let entries = self.lock();
        let start = match limit {
            Some(limit) => entries.len().saturating_sub(limit),
            None => 0,
        };
        entries[start..].to_vec()
    }

    /// Same as `entries()`, rendered as external records.
    pub fn records(&self, limit: Option<usize>) -> Vec<ActivityRecord> {
        self.entries(limit)
            .iter()
            .map(ActivityEntry::to_record)
            .collect()
    }

    /// Only the action strings, oldest first.
    pub fn actions(&self) -> Vec<String> {
        self.lock().iter().map(|e| e.action.clone()).collect()
    }

    pub fn len(&self) -> usize {
        self.lock().len()
    }

    pub fn is_empty(&self) -> bool {
        self.lock().is_empty()
    }

    fn lock(&self) -> MutexGuard<'_, Vec<ActivityEntry>> {
        self.entries
            .lock()
            .unwrap_or_else(|poisoned| poisoned.into_inner())
    }
}
