//! Findings, risk matrices, and gap-analysis results.

use std::fmt;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Severity of a recorded compliance finding.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Severity {
    Critical,
    High,
    Medium,
    Low,
}

impl From<RiskSeverity> for Severity {
    fn from(value: RiskSeverity) -> Self {
        match value {
            RiskSeverity::Critical => Severity::Critical,
            RiskSeverity::High => Severity::High,
            RiskSeverity::Medium => Severity::Medium,
            RiskSeverity::Low => Severity::Low,
        }
    }
}

impl fmt::Display for Severity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            Severity::Critical => "critical",
            Severity::High => "high",
            Severity::Medium => "medium",
            Severity::Low => "low",
        };
        f.write_str(s)
    }
}

/// Impact axis of the risk matrix.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Impact {
    Low,
    High,
    Critical,
}

/// Likelihood axis of the risk matrix.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Likelihood {
    Low,
    High,
}

/// Severity derived from impact and likelihood.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum RiskSeverity {
    Low,
    Medium,
    High,
    Critical,
}

impl RiskSeverity {
    /// Medium and above are routed through the auto-remediation gate.
    pub fn is_actionable(self) -> bool {
        matches!(
            self,
            RiskSeverity::Medium | RiskSeverity::High | RiskSeverity::Critical
        )
    }
}

impl fmt::Display for RiskSeverity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            RiskSeverity::Low => "Low",
            RiskSeverity::Medium => "Medium",
            RiskSeverity::High => "High",
            RiskSeverity::Critical => "Critical",
        };
        f.write_str(s)
    }
}

impl fmt::Display for Impact {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            Impact::Low => "Low",
            Impact::High => "High",
            Impact::Critical => "Critical",
        };
        f.write_str(s)
    }
}

/// Impact / likelihood / severity triple scored from finding text.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct RiskMatrix {
    pub impact: Impact,
    pub likelihood: Likelihood,
    pub severity: RiskSeverity,
}

/// Where a finding stands after the auto-remediation gate.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum RemediationStatus {
    /// Low severity: nothing to gate.
    Open,
    /// Actionable but auto-remediation is disabled.
    #[serde(rename = "Pending Manual Review")]
    PendingManualReview,
    /// A remediation was generated automatically.
    Remediated,
}

impl fmt::Display for RemediationStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            RemediationStatus::Open => "Open",
            RemediationStatus::PendingManualReview => "Pending Manual Review",
            RemediationStatus::Remediated => "Remediated",
        };
        f.write_str(s)
    }
}

/// Result of one `GapAnalyst::analyze_policy` call.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GapAssessment {
    /// The language model's gap finding, verbatim.
    pub finding: String,
    pub risk_matrix: RiskMatrix,
    pub status: RemediationStatus,
    /// Generated remediation. Present only when status is `Remediated`.
    pub action_taken: Option<String>,
}

impl GapAssessment {
    /// Convert into a `Finding` record suitable for evidence reporting.
    pub fn to_finding(&self) -> Finding {
        Finding {
            id: uuid::Uuid::new_v4().to_string(),
            severity: self.risk_matrix.severity.into(),
            description: self.finding.clone(),
            remediation: self.action_taken.clone().unwrap_or_default(),
            timestamp: Utc::now(),
        }
    }
}

/// A detected compliance gap.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Finding {
    pub id: String,
    pub severity: Severity,
    pub description: String,
    #[serde(default)]
    pub remediation: String,
    #[serde(default = "chrono::Utc::now")]
    pub timestamp: DateTime<Utc>,
}
