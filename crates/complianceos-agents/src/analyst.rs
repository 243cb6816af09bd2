//! GapAnalyst: compares a policy against indexed regulations.
//!
//! `think` asks the model for the gap; `act` scores it and applies the
//! auto-remediation gate exactly once:
//!
//! | severity              | gate on                | gate off                |
//! |-----------------------|------------------------|-------------------------|
//! | Medium/High/Critical  | Remediated + action    | Pending Manual Review   |
//! | Low                   | Open                   | Open                    |

use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;

use async_trait::async_trait;
use tracing::info;

use complianceos_config::AnalystSettings;
use complianceos_contracts::{
    agent::{AgentIdentity, RequestContext},
    error::ComplianceResult,
    finding::{GapAssessment, RemediationStatus},
    knowledge::KnowledgeEntry,
};
use complianceos_core::{
    traits::{Agent, KnowledgeStore, LanguageModel},
    AgentCore, ToolRegistry,
};
use complianceos_tools::{RiskScorer, TaskPlanner};

const NO_REGULATIONS: &str = "No regulations indexed yet.";

/// Input to the analyst's `think`.
#[derive(Debug, Clone)]
pub struct PolicyReview {
    pub policy_text: String,
    pub regulations: Vec<KnowledgeEntry>,
}

pub struct GapAnalyst {
    core: AgentCore,
    llm: Arc<dyn LanguageModel>,
    store: Arc<dyn KnowledgeStore>,
    settings: AnalystSettings,
    auto_remediation: AtomicBool,
}

impl GapAnalyst {
    pub fn new(
        llm: Arc<dyn LanguageModel>,
        store: Arc<dyn KnowledgeStore>,
        settings: AnalystSettings,
    ) -> Self {
        let tools = ToolRegistry::new()
            .with(RiskScorer::new())
            .with(TaskPlanner::new());
        Self::with_tools(llm, store, settings, tools)
    }

    pub fn with_tools(
        llm: Arc<dyn LanguageModel>,
        store: Arc<dyn KnowledgeStore>,
        settings: AnalystSettings,
        tools: ToolRegistry,
    ) -> Self {
        let auto_remediation = AtomicBool::new(settings.auto_remediation);
        Self {
            core: AgentCore::new(AgentIdentity::new("Analyst", "Compliance Analysis"), tools),
            llm,
            store,
            settings,
            auto_remediation,
        }
    }

    /// Flip the auto-remediation gate. Takes effect for findings scored after
    /// the call returns.
    pub fn set_auto_remediation(&self, enabled: bool) {
        self.auto_remediation.store(enabled, Ordering::SeqCst);
        info!(enabled, "auto-remediation gate updated");
    }

    pub fn auto_remediation_enabled(&self) -> bool {
        self.auto_remediation.load(Ordering::SeqCst)
    }

    /// Retrieve related regulations, detect the gap, score it and gate it.
    pub async fn analyze_policy(
        &self,
        ctx: &RequestContext,
        policy_text: &str,
    ) -> ComplianceResult<GapAssessment> {
        let _guard = self.core.begin(ctx).await;
        self.core.log_activity(ctx, "Received policy for analysis.");

        let regulations = self
            .store
            .query(policy_text, self.settings.retrieval_k)
            .await?;
        self.core.log_activity(
            ctx,
            format!(
                "Cross-referencing policy against {} regulations...",
                regulations.len()
            ),
        );

        let review = PolicyReview {
            policy_text: policy_text.to_string(),
            regulations,
        };
        let assessment = self.think_then_act(ctx, &review).await?;
        info!(
            request_id = %ctx.request_id,
            severity = %assessment.risk_matrix.severity,
            status = %assessment.status,
            "policy analysed"
        );
        Ok(assessment)
    }

    /// Break a compliance goal into ordered steps.
    pub async fn plan(&self, ctx: &RequestContext, goal: &str) -> ComplianceResult<Vec<String>> {
        let _guard = self.core.begin(ctx).await;
        self.core.log_activity(ctx, format!("Planning goal: {}", goal));
        let steps = self.core.use_tool::<TaskPlanner>(ctx)?.create_plan(goal);
        self.core
            .log_activity(ctx, format!("Plan created with {} steps.", steps.len()));
        Ok(steps)
    }

    fn build_prompt(&self, review: &PolicyReview) -> String {
        let regulations = if review.regulations.is_empty() {
            NO_REGULATIONS.to_string()
        } else {
            review
                .regulations
                .iter()
                .take(self.settings.max_regulations)
                .enumerate()
                .map(|(i, entry)| {
                    format!(
                        "[{}] {}",
                        i + 1,
                        excerpt(&entry.content, self.settings.regulation_excerpt_chars)
                    )
                })
                .collect::<Vec<_>>()
                .join("\n")
        };

        format!(
            "Analyze the following corporate policy for compliance gaps.\n\n\
             POLICY:\n{}\n\n\
             RELEVANT REGULATIONS:\n{}\n\n\
             State the most significant gap in one or two sentences.",
            excerpt(&review.policy_text, self.settings.policy_excerpt_chars),
            regulations
        )
    }
}

/// The first `max_chars` characters of `text`.
fn excerpt(text: &str, max_chars: usize) -> String {
    text.chars().take(max_chars).collect()
}

#[async_trait]
impl Agent for GapAnalyst {
    type Context = PolicyReview;
    type Plan = String;
    type Outcome = GapAssessment;

    fn core(&self) -> &AgentCore {
        &self.core
    }

    /// The model's answer, verbatim.
    async fn think(&self, _ctx: &RequestContext, review: &PolicyReview) -> ComplianceResult<String> {
        self.llm.complete(&self.build_prompt(review)).await
    }

    async fn act(&self, ctx: &RequestContext, finding: String) -> ComplianceResult<GapAssessment> {
        self.core.log_activity(
            ctx,
            format!("Gap Detection Complete. Finding: {}...", excerpt(&finding, 100)),
        );

        let risk_matrix = self.core.use_tool::<RiskScorer>(ctx)?.score(&finding);
        self.core.log_activity(
            ctx,
            format!(
                "Risk Scored: {} (Impact: {})",
                risk_matrix.severity, risk_matrix.impact
            ),
        );

        // Read once so the decision cannot change mid-finding.
        let gate_open = self.auto_remediation_enabled();

        let (status, action_taken) = if !risk_matrix.severity.is_actionable() {
            (RemediationStatus::Open, None)
        } else if gate_open {
            self.core
                .log_activity(ctx, "Auto-Remediation ENABLED. Generating fix...");
            let prompt = format!(
                "Based on this compliance finding, write a specific policy remediation.\n\n\
                 FINDING: {}\n\n\
                 Reply with the concrete policy change that closes the gap.",
                finding
            );
            let fix = self.llm.complete(&prompt).await?;
            self.core
                .log_activity(ctx, format!("Generated Fix: {}...", excerpt(&fix, 100)));
            self.core.log_activity(
                ctx,
                "Remediation Successful. Status updated to REMEDIATED.",
            );
            (RemediationStatus::Remediated, Some(fix))
        } else {
            self.core.log_activity(
                ctx,
                "Auto-Remediation DISABLED. Finding requires manual review.",
            );
            (RemediationStatus::PendingManualReview, None)
        };

        Ok(GapAssessment {
            finding,
            risk_matrix,
            status,
            action_taken,
        })
    }
}
