//! Orchestrator: the request-level entry points.
//!
//! Owns one instance of each agent plus the shared collaborators. Each entry
//! point takes the caller's `RequestContext` and threads it through every
//! agent it touches, so attribution never depends on shared mutable state.

use std::sync::Arc;

use serde::{Deserialize, Serialize};
use serde_json::Value;
use tracing::{info, warn};

use complianceos_config::{LlmFailurePolicy, Settings};
use complianceos_contracts::{
    activity::ActivityRecord,
    agent::RequestContext,
    error::ComplianceResult,
    finding::{Finding, GapAssessment},
    knowledge::StoreStats,
    monitoring::SentinelAlert,
    regulation::IndexedRegulation,
    report::EvidencePackage,
};
use complianceos_core::traits::{Agent, KnowledgeStore, LanguageModel};
use complianceos_services::FallbackLanguageModel;
use complianceos_tools::RegulatorySearch;

use crate::{
    analyst::GapAnalyst, officer::EvidenceOfficer, scout::RegulatoryScout,
    sentinel::RiskSentinel,
};

// ── Request / response shapes ────────────────────────────────────────────────

#[derive(Debug, Clone, Serialize)]
pub struct ScanReport {
    pub indexed: Vec<IndexedRegulation>,
    pub analysis: GapAssessment,
    pub scout_log: Vec<ActivityRecord>,
}

#[derive(Debug, Clone, Serialize)]
pub struct MonitoringReport {
    pub alerts: Vec<SentinelAlert>,
    pub sentinel_log: Vec<ActivityRecord>,
}

/// One uploaded document.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DocumentUpload {
    pub filename: String,
    #[serde(skip)]
    pub bytes: Vec<u8>,
}

/// The result of ingesting one document; failures stay with their item.
#[derive(Debug, Clone, Serialize)]
#[serde(tag = "status", rename_all = "snake_case")]
pub enum IngestOutcome {
    Indexed {
        filename: String,
        regulation: IndexedRegulation,
    },
    Failed {
        filename: String,
        error: String,
    },
}

impl IngestOutcome {
    pub fn filename(&self) -> &str {
        match self {
            IngestOutcome::Indexed { filename, .. } | IngestOutcome::Failed { filename, .. } => {
                filename
            }
        }
    }

    pub fn is_indexed(&self) -> bool {
        matches!(self, IngestOutcome::Indexed { .. })
    }
}

/// One agent's log, keyed by its display name.
#[derive(Debug, Clone, Serialize)]
pub struct AgentActivity {
    pub agent: String,
    pub entries: Vec<ActivityRecord>,
}

// ── Orchestrator ─────────────────────────────────────────────────────────────

pub struct Orchestrator {
    settings: Settings,
    store: Arc<dyn KnowledgeStore>,
    scout: RegulatoryScout,
    analyst: GapAnalyst,
    sentinel: RiskSentinel,
    officer: EvidenceOfficer,
}

impl Orchestrator {
    pub fn new(
        settings: Settings,
        llm: Arc<dyn LanguageModel>,
        store: Arc<dyn KnowledgeStore>,
    ) -> Self {
        Self::with_search(settings, llm, store, RegulatorySearch::default())
    }

    /// Build with a specific regulatory feed.
    pub fn with_search(
        settings: Settings,
        llm: Arc<dyn LanguageModel>,
        store: Arc<dyn KnowledgeStore>,
        search: RegulatorySearch,
    ) -> Self {
        let llm: Arc<dyn LanguageModel> = match settings.llm.failure_policy {
            LlmFailurePolicy::Propagate => llm,
            LlmFailurePolicy::Fallback => {
                warn!(
                    model = %llm.model_name(),
                    "language model failures will be masked with canned responses"
                );
                Arc::new(FallbackLanguageModel::new(llm))
            }
        };

        let scout = RegulatoryScout::new(
            Arc::clone(&llm),
            Arc::clone(&store),
            search,
            settings.scout.search_query.clone(),
        );
        let analyst = GapAnalyst::new(
            Arc::clone(&llm),
            Arc::clone(&store),
            settings.analyst.clone(),
        );
        let sentinel = RiskSentinel::new(&settings.sentinel);
        let officer = EvidenceOfficer::new(settings.officer.clone());

        Self {
            settings,
            store,
            scout,
            analyst,
            sentinel,
            officer,
        }
    }

    pub fn settings(&self) -> &Settings {
        &self.settings
    }

    pub fn scout(&self) -> &RegulatoryScout {
        &self.scout
    }

    pub fn analyst(&self) -> &GapAnalyst {
        &self.analyst
    }

    pub fn sentinel(&self) -> &RiskSentinel {
        &self.sentinel
    }

    pub fn officer(&self) -> &EvidenceOfficer {
        &self.officer
    }

    /// Scout the feed, then run gap analysis on `policy`.
    ///
    /// Falls back to the configured feed and sample policy when either is
    /// omitted.
    pub async fn regulatory_scan(
        &self,
        ctx: &RequestContext,
        source: Option<&str>,
        policy: Option<&str>,
    ) -> ComplianceResult<ScanReport> {
        let source = source.unwrap_or(&self.settings.scout.default_feed);
        let policy = policy.unwrap_or(&self.settings.scout.sample_policy);

        let indexed = self.scout.scan_feed(ctx, source).await?;
        let analysis = self.analyst.analyze_policy(ctx, policy).await?;

        info!(
            request_id = %ctx.request_id,
            indexed = indexed.len(),
            status = %analysis.status,
            "regulatory scan complete"
        );
        Ok(ScanReport {
            indexed,
            analysis,
            scout_log: self.scout.get_activity_log(None),
        })
    }

    pub async fn analyze_policy(
        &self,
        ctx: &RequestContext,
        policy: &str,
    ) -> ComplianceResult<GapAssessment> {
        self.analyst.analyze_policy(ctx, policy).await
    }

    pub async fn monitoring_batch(
        &self,
        ctx: &RequestContext,
        events: &[Value],
    ) -> ComplianceResult<MonitoringReport> {
        let alerts = self.sentinel.monitor_stream(ctx, events).await?;
        Ok(MonitoringReport {
            alerts,
            sentinel_log: self.sentinel.get_activity_log(None),
        })
    }

    pub async fn evidence_report(
        &self,
        ctx: &RequestContext,
        findings: Vec<Finding>,
        score: Option<u32>,
    ) -> ComplianceResult<EvidencePackage> {
        self.officer.generate_package(ctx, findings, score).await
    }

    /// Index each document independently. Never fails as a whole: each
    /// input yields exactly one outcome, in input order.
    pub async fn ingest_documents(
        &self,
        ctx: &RequestContext,
        documents: &[DocumentUpload],
    ) -> Vec<IngestOutcome> {
        let mut outcomes = Vec::with_capacity(documents.len());
        for doc in documents {
            let outcome = match self
                .scout
                .ingest_document(ctx, &doc.filename, &doc.bytes)
                .await
            {
                Ok(regulation) => IngestOutcome::Indexed {
                    filename: doc.filename.clone(),
                    regulation,
                },
                Err(e) => {
                    warn!(
                        request_id = %ctx.request_id,
                        filename = %doc.filename,
                        error = %e,
                        "document rejected"
                    );
                    IngestOutcome::Failed {
                        filename: doc.filename.clone(),
                        error: e.to_string(),
                    }
                }
            };
            outcomes.push(outcome);
        }
        outcomes
    }

    pub async fn plan(&self, ctx: &RequestContext, goal: &str) -> ComplianceResult<Vec<String>> {
        self.analyst.plan(ctx, goal).await
    }

    /// Every agent's log, most recent `limit` entries each.
    pub fn activity(&self, limit: Option<usize>) -> Vec<AgentActivity> {
        vec![
            AgentActivity {
                agent: "Regulatory Scout".to_string(),
                entries: self.scout.get_activity_log(limit),
            },
            AgentActivity {
                agent: "Gap Analyst".to_string(),
                entries: self.analyst.get_activity_log(limit),
            },
            AgentActivity {
                agent: "Risk Sentinel".to_string(),
                entries: self.sentinel.get_activity_log(limit),
            },
            AgentActivity {
                agent: "Evidence Officer".to_string(),
                entries: self.officer.get_activity_log(limit),
            },
        ]
    }

    pub async fn knowledge_stats(&self) -> ComplianceResult<StoreStats> {
        self.store.stats().await
    }

    pub fn set_auto_remediation(&self, enabled: bool) {
        self.analyst.set_auto_remediation(enabled);
    }

    /// Apply `client` as the default on every agent.
    pub fn set_current_client(&self, client: Option<String>) {
        self.scout.set_current_client(client.clone());
        self.analyst.set_current_client(client.clone());
        self.sentinel.set_current_client(client.clone());
        self.officer.set_current_client(client);
    }
}
