//! Evidence package types.

use std::fmt;

use serde::{Deserialize, Serialize};

/// Overall verdict printed on an evidence package.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum ComplianceStatus {
    #[serde(rename = "COMPLIANT")]
    Compliant,
    #[serde(rename = "GAPS DETECTED")]
    GapsDetected,
}

impl fmt::Display for ComplianceStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ComplianceStatus::Compliant => f.write_str("COMPLIANT"),
            ComplianceStatus::GapsDetected => f.write_str("GAPS DETECTED"),
        }
    }
}

/// An opaque rendered report.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ReportArtifact {
    pub filename: String,
    pub content_type: String,
    #[serde(skip)]
    pub bytes: Vec<u8>,
}

/// Result of `EvidenceOfficer::generate_package`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct EvidencePackage {
    /// Download reference, e.g. `/reports/audit_report_20260101_120000.md`.
    pub report_url: String,
    pub filename: String,
    pub client: Option<String>,
    pub score: Option<u32>,
    pub status: ComplianceStatus,
    pub summary: String,
    /// Lowercase hex SHA-256 of the artifact bytes.
    pub sha256: String,
    pub artifact: ReportArtifact,
}
