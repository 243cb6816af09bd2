//! Evidence document renderer.
//!
//! Produces a Markdown report: a certificate of compliance when the package
//! is compliant, otherwise a gap analysis with one section per finding.
//! Binary formats are left to downstream tooling; callers treat the result
//! as an opaque artifact.

use std::any::Any;
use std::fmt::Write;

use chrono::{DateTime, Utc};
use tracing::info;

use complianceos_contracts::{
    error::{ComplianceError, ComplianceResult},
    finding::Finding,
    report::{ComplianceStatus, ReportArtifact},
    tool::ToolId,
};
use complianceos_core::traits::{Tool, ToolKind};

/// Everything the renderer needs for one report.
#[derive(Debug, Clone, Copy)]
pub struct ReportRequest<'a> {
    pub findings: &'a [Finding],
    pub client: Option<&'a str>,
    pub score: Option<u32>,
    pub status: ComplianceStatus,
    pub generated_at: DateTime<Utc>,
}

#[derive(Debug, Default, Clone, Copy)]
pub struct ReportGenerator;

impl ReportGenerator {
    pub fn new() -> Self {
        Self
    }

    pub fn render(&self, request: &ReportRequest<'_>) -> ComplianceResult<ReportArtifact> {
        let body = render_markdown(request).map_err(|e| ComplianceError::ReportRender {
            reason: format!("failed to write report body: {}", e),
        })?;

        let filename = format!(
            "audit_report_{}.md",
            request.generated_at.format("%Y%m%d_%H%M%S")
        );
        info!(
            filename = %filename,
            findings = request.findings.len(),
            status = %request.status,
            "evidence report rendered"
        );

        Ok(ReportArtifact {
            filename,
            content_type: "text/markdown".to_string(),
            bytes: body.into_bytes(),
        })
    }
}

fn render_markdown(request: &ReportRequest<'_>) -> Result<String, std::fmt::Error> {
    let mut out = String::new();
    let compliant = request.status == ComplianceStatus::Compliant;

    let title = if compliant {
        "CERTIFICATE OF COMPLIANCE"
    } else {
        "GAP ANALYSIS & REMEDIATION PLAN"
    };
    writeln!(out, "# {}", title)?;
    writeln!(out)?;
    writeln!(
        out,
        "Generated: {}",
        request.generated_at.format("%Y-%m-%d %H:%M:%S")
    )?;
    if let Some(client) = request.client {
        writeln!(out, "Client: {}", client)?;
    }
    if let Some(score) = request.score {
        writeln!(out, "Compliance score: {}", score)?;
    }
    writeln!(out)?;
    writeln!(out, "## Executive Summary")?;
    writeln!(out)?;

    if compliant {
        writeln!(
            out,
            "This document certifies that a comprehensive regulatory scan was performed on the \
             system. No compliance gaps or policy violations were detected at this time. The \
             system is verified as fully compliant with the active frameworks."
        )?;
        writeln!(out)?;
        writeln!(out, "**[ STATUS: VERIFIED ]**")?;
        return Ok(out);
    }

    if request.findings.is_empty() {
        writeln!(
            out,
            "No individual gaps were recorded, but the compliance score is below the \
             certification threshold. A follow-up review is required."
        )?;
        return Ok(out);
    }

    writeln!(
        out,
        "The automated analysis identified {} gap(s) requiring attention. The following \
         sections detail each violation and the recommended remediation.",
        request.findings.len()
    )?;

    for (idx, finding) in request.findings.iter().enumerate() {
        writeln!(out)?;
        writeln!(out, "### Finding #{} ({})", idx + 1, finding.id)?;
        writeln!(out)?;
        writeln!(out, "Details: {}", finding.description)?;
        writeln!(out)?;
        let remediation = if finding.remediation.is_empty() {
            "Pending manual review"
        } else {
            finding.remediation.as_str()
        };
        writeln!(out, "Remediation: {}", remediation)?;
        writeln!(out)?;
        writeln!(out, "_Risk Severity: {} | Status: OPEN_", finding.severity)?;
    }

    Ok(out)
}

impl Tool for ReportGenerator {
    fn id(&self) -> ToolId {
        ToolId::ReportGenerator
    }

    fn description(&self) -> &'static str {
        "Renders audit-ready evidence documents"
    }

    fn as_any(&self) -> &dyn Any {
        self
    }
}

impl ToolKind for ReportGenerator {
    const ID: ToolId = ToolId::ReportGenerator;
}

#[cfg(test)]
mod tests {
    use chrono::TimeZone;

    use complianceos_contracts::finding::Severity;

    use super::*;

    fn finding(desc: &str, severity: Severity) -> Finding {
        Finding {
            id: "f-1".to_string(),
            severity,
            description: desc.to_string(),
            remediation: String::new(),
            timestamp: Utc::now(),
        }
    }

    fn at() -> DateTime<Utc> {
        Utc.with_ymd_and_hms(2026, 5, 1, 8, 30, 0).unwrap()
    }

    #[test]
    fn compliant_report_is_a_certificate() {
        let artifact = ReportGenerator::new()
            .render(&ReportRequest {
                findings: &[],
                client: Some("Acme Bank"),
                score: Some(95),
                status: ComplianceStatus::Compliant,
                generated_at: at(),
            })
            .unwrap();

        let text = String::from_utf8(artifact.bytes).unwrap();
        assert!(text.starts_with("# CERTIFICATE OF COMPLIANCE"));
        assert!(text.contains("Client: Acme Bank"));
        assert!(text.contains("STATUS: VERIFIED"));
        assert_eq!(artifact.filename, "audit_report_20260501_083000.md");
        assert_eq!(artifact.content_type, "text/markdown");
    }

    #[test]
    fn gap_report_lists_every_finding() {
        let findings = vec![
            finding("Missing data retention schedule", Severity::High),
            finding("PII in debug logs", Severity::Critical),
        ];
        let artifact = ReportGenerator::new()
            .render(&ReportRequest {
                findings: &findings,
                client: None,
                score: None,
                status: ComplianceStatus::GapsDetected,
                generated_at: at(),
            })
            .unwrap();

        let text = String::from_utf8(artifact.bytes).unwrap();
        assert!(text.starts_with("# GAP ANALYSIS & REMEDIATION PLAN"));
        assert!(text.contains("Finding #1"));
        assert!(text.contains("Finding #2"));
        assert!(text.contains("Risk Severity: critical"));
        assert!(!text.contains("Client:"));
    }
}
