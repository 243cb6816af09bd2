//! EvidenceOfficer: turns findings into a tamper-evident evidence package.

use async_trait::async_trait;
use chrono::Utc;
use sha2::{Digest, Sha256};
use tracing::info;

use complianceos_config::OfficerSettings;
use complianceos_contracts::{
    agent::{AgentIdentity, RequestContext},
    error::ComplianceResult,
    finding::Finding,
    report::{ComplianceStatus, EvidencePackage},
};
use complianceos_core::{traits::Agent, AgentCore, ToolRegistry};
use complianceos_tools::{ReportGenerator, ReportRequest};

/// Input to the officer's `think`.
#[derive(Debug, Clone)]
pub struct EvidenceBrief {
    pub findings: Vec<Finding>,
    pub score: Option<u32>,
}

/// Output of the officer's `think`.
#[derive(Debug, Clone)]
pub struct EvidencePlan {
    pub brief: EvidenceBrief,
    pub status: ComplianceStatus,
    pub summary: String,
}

pub struct EvidenceOfficer {
    core: AgentCore,
    settings: OfficerSettings,
}

impl EvidenceOfficer {
    pub fn new(settings: OfficerSettings) -> Self {
        Self::with_tools(settings, ToolRegistry::new().with(ReportGenerator::new()))
    }

    pub fn with_tools(settings: OfficerSettings, tools: ToolRegistry) -> Self {
        Self {
            core: AgentCore::new(AgentIdentity::new("Officer", "Audit & Reporting"), tools),
            settings,
        }
    }

    /// Classify, render and fingerprint the evidence for `ctx`'s client.
    pub async fn generate_package(
        &self,
        ctx: &RequestContext,
        findings: Vec<Finding>,
        score: Option<u32>,
    ) -> ComplianceResult<EvidencePackage> {
        let _guard = self.core.begin(ctx).await;
        self.think_then_act(ctx, &EvidenceBrief { findings, score })
            .await
    }

    /// COMPLIANT needs zero findings and, when a score is given, a score at
    /// or above the threshold.
    pub fn classify(&self, findings: &[Finding], score: Option<u32>) -> ComplianceStatus {
        let score_ok = score.map_or(true, |s| s >= self.settings.compliant_score_threshold);
        if findings.is_empty() && score_ok {
            ComplianceStatus::Compliant
        } else {
            ComplianceStatus::GapsDetected
        }
    }
}

#[async_trait]
impl Agent for EvidenceOfficer {
    type Context = EvidenceBrief;
    type Plan = EvidencePlan;
    type Outcome = EvidencePackage;

    fn core(&self) -> &AgentCore {
        &self.core
    }

    async fn think(&self, ctx: &RequestContext, brief: &EvidenceBrief) -> ComplianceResult<EvidencePlan> {
        self.core.log_activity(ctx, "Compiling evidence package...");
        let status = self.classify(&brief.findings, brief.score);
        let summary = format!(
            "Audit Report Generated. Total Findings: {}. Status: {}.",
            brief.findings.len(),
            status
        );
        Ok(EvidencePlan {
            brief: brief.clone(),
            status,
            summary,
        })
    }

    async fn act(&self, ctx: &RequestContext, plan: EvidencePlan) -> ComplianceResult<EvidencePackage> {
        self.core.log_activity(ctx, "Finalizing evidence report...");

        let artifact = self.core.use_tool::<ReportGenerator>(ctx)?.render(&ReportRequest {
            findings: &plan.brief.findings,
            client: ctx.client(),
            score: plan.brief.score,
            status: plan.status,
            generated_at: Utc::now(),
        })?;
        let sha256 = hex::encode(Sha256::digest(&artifact.bytes));
        let report_url = format!(
            "{}/{}",
            self.settings.reports_base_url.trim_end_matches('/'),
            artifact.filename
        );

        info!(
            request_id = %ctx.request_id,
            filename = %artifact.filename,
            status = %plan.status,
            sha256 = %sha256,
            "evidence package ready"
        );

        Ok(EvidencePackage {
            report_url,
            filename: artifact.filename.clone(),
            client: ctx.client.clone(),
            score: plan.brief.score,
            status: plan.status,
            summary: plan.summary,
            sha256,
            artifact,
        })
    }
}
