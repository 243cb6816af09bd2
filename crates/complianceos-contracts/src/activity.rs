//! Activity log entry types.
//!
//! `ActivityEntry` is what an agent appends to its log. `ActivityRecord` is
//! the flattened view handed to external consumers (dashboards, the CLI).

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::agent::AgentIdentity;

/// One immutable, timestamped action taken by an agent.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ActivityEntry {
    /// Wall-clock time of the append (UTC). Never decreases within one log.
    pub timestamp: DateTime<Utc>,
    /// Free-form description of the action.
    pub action: String,
    /// Name of the agent that wrote the entry.
    pub agent: String,
    /// Role of the agent that wrote the entry.
    pub role: String,
    /// The client the action was performed for.
    pub client: Option<String>,
}

impl ActivityEntry {
    pub fn new(
        timestamp: DateTime<Utc>,
        identity: &AgentIdentity,
        action: impl Into<String>,
        client: Option<String>,
    ) -> Self {
        Self {
            timestamp,
            action: action.into(),
            agent: identity.name.clone(),
            role: identity.role.clone(),
            client,
        }
    }

    /// Render this entry as an external `ActivityRecord`.
    pub fn to_record(&self) -> ActivityRecord {
        ActivityRecord {
            timestamp: self.timestamp.to_rfc3339(),
            time_display: self.timestamp.format("%H:%M:%S").to_string(),
            date_display: self.timestamp.format("%Y-%m-%d").to_string(),
            action: self.action.clone(),
            agent: self.agent.clone(),
            role: self.role.clone(),
            client: self.client.clone(),
        }
    }
}

/// Serializable view of an `ActivityEntry` for external consumption.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ActivityRecord {
    /// RFC 3339 timestamp.
    pub timestamp: String,
    /// `HH:MM:SS`
    pub time_display: String,
    /// `YYYY-MM-DD`
    pub date_display: String,
    pub action: String,
    pub agent: String,
    pub role: String,
    pub client: Option<String>,
}
