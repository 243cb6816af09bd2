//! Risk scoring engine.
//!
//! Scores a finding's text into a `RiskMatrix` with fixed keyword rules:
//!
//! | text contains                    | effect               |
//! |----------------------------------|----------------------|
//! | "data retention" or "encryption" | impact = High        |
//! | "pii" or "pan"                   | impact = Critical    |
//! | "missing"                        | likelihood = High    |
//!
//! All terms are plain substring matches on the lowercased text, so plural
//! and compound forms ("PANs", "non-PII") count. Severity then follows the
//! decision table in `severity_for`.

use std::any::Any;

use tracing::debug;

use complianceos_contracts::{
    finding::{Impact, Likelihood, RiskMatrix, RiskSeverity},
    tool::ToolId,
};
use complianceos_core::traits::{Tool, ToolKind};

const HIGH_IMPACT_TERMS: [&str; 2] = ["data retention", "encryption"];
const CRITICAL_IMPACT_TERMS: [&str; 2] = ["pii", "pan"];

#[derive(Debug, Default, Clone, Copy)]
pub struct RiskScorer;

impl RiskScorer {
    pub fn new() -> Self {
        Self
    }

    pub fn score(&self, finding_text: &str) -> RiskMatrix {
        let text = finding_text.to_lowercase();

        let mut impact = Impact::Low;
        if HIGH_IMPACT_TERMS.iter().any(|term| text.contains(term)) {
            impact = Impact::High;
        }
        if CRITICAL_IMPACT_TERMS.iter().any(|term| text.contains(term)) {
            impact = Impact::Critical;
        }

        let likelihood = if text.contains("missing") {
            Likelihood::High
        } else {
            Likelihood::Low
        };

        let severity = severity_for(impact, likelihood);
        debug!(%impact, ?likelihood, %severity, "risk matrix computed");

        RiskMatrix {
            impact,
            likelihood,
            severity,
        }
    }
}

/// Critical impact is always Critical; High impact is High only when also
/// likely, Medium otherwise. Low impact stays Low whatever the likelihood.
pub fn severity_for(impact: Impact, likelihood: Likelihood) -> RiskSeverity {
    match (impact, likelihood) {
        (Impact::Critical, _) => RiskSeverity::Critical,
        (Impact::High, Likelihood::High) => RiskSeverity::High,
        (Impact::High, Likelihood::Low) => RiskSeverity::Medium,
        (Impact::Low, _) => RiskSeverity::Low,
    }
}

impl Tool for RiskScorer {
    fn id(&self) -> ToolId {
        ToolId::RiskScorer
    }

    fn description(&self) -> &'static str {
        "Scores finding text into an impact / likelihood / severity matrix"
    }

    fn as_any(&self) -> &dyn Any {
        self
    }
}

impl ToolKind for RiskScorer {
    const ID: ToolId = ToolId::RiskScorer;
}
