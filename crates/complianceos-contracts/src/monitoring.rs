//! Stream monitoring types: anomalies, tickets and alerts.

use std::fmt;

use serde::{Deserialize, Serialize};
use serde_json::Value;

/// The pattern class that caused an event to be flagged.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum AnomalyPattern {
    /// 13-16 digits with optional separators.
    CardNumber,
    /// Email address in a stream marked `sensitive = true`.
    EmailInSensitiveStream,
}

impl fmt::Display for AnomalyPattern {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            AnomalyPattern::CardNumber => {
                f.write_str("Potential Credit Card Number (PCI Violation)")
            }
            AnomalyPattern::EmailInSensitiveStream => {
                f.write_str("Email leak in restricted stream (PII Violation)")
            }
        }
    }
}

/// A flagged event together with the reason it was flagged.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Anomaly {
    /// Position of the event in the scanned batch.
    pub index: usize,
    pub pattern: AnomalyPattern,
    pub event: Value,
}

/// A ticket opened in the external workflow system.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Ticket {
    /// e.g. `JIRA-4821`
    pub id: String,
    pub system: String,
    pub title: String,
    pub description: String,
}

/// A notification sent to an alert channel.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Alert {
    pub channel: String,
    pub message: String,
}

/// Per-anomaly result of `RiskSentinel::monitor_stream`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SentinelAlert {
    /// Always "Risk Detected".
    pub alert: String,
    /// The ticket id opened for the anomaly.
    pub ticket: String,
    pub pattern: AnomalyPattern,
    pub event_index: usize,
    pub notification: Alert,
}
