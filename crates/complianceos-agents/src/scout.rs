//! RegulatoryScout: discovers regulation updates and indexes them.
//!
//! ```text
//! scan_feed(source)
//!   → RegulatorySearch                       one call, whole feed
//!   → process_regulation(summary, title)     per item, in feed order
//!        ObligationExtractor → think (LLM summary) → act (store.add)
//! ```

use std::sync::Arc;

use async_trait::async_trait;
use serde_json::{json, Map};
use tracing::info;

use complianceos_contracts::{
    agent::{AgentIdentity, RequestContext},
    error::ComplianceResult,
    regulation::IndexedRegulation,
};
use complianceos_core::{
    traits::{Agent, KnowledgeStore, LanguageModel},
    AgentCore, ToolRegistry,
};
use complianceos_tools::{DocumentReader, ObligationExtractor, RegulatorySearch};

/// Input to the scout's `think`: one regulation and its extracted obligations.
#[derive(Debug, Clone)]
pub struct RegulationDraft {
    pub title: String,
    pub text: String,
    pub obligations: Vec<String>,
}

/// Output of the scout's `think`: the draft plus the model's summary.
#[derive(Debug, Clone)]
pub struct RegulationDigest {
    pub draft: RegulationDraft,
    pub summary: String,
}

pub struct RegulatoryScout {
    core: AgentCore,
    llm: Arc<dyn LanguageModel>,
    store: Arc<dyn KnowledgeStore>,
    search_query: String,
}

impl RegulatoryScout {
    pub fn new(
        llm: Arc<dyn LanguageModel>,
        store: Arc<dyn KnowledgeStore>,
        search: RegulatorySearch,
        search_query: impl Into<String>,
    ) -> Self {
        let tools = ToolRegistry::new()
            .with(search)
            .with(ObligationExtractor::new())
            .with(DocumentReader::new());
        Self::with_tools(llm, store, tools, search_query)
    }

    /// A scout with an explicit tool set.
    pub fn with_tools(
        llm: Arc<dyn LanguageModel>,
        store: Arc<dyn KnowledgeStore>,
        tools: ToolRegistry,
        search_query: impl Into<String>,
    ) -> Self {
        Self {
            core: AgentCore::new(AgentIdentity::new("Scout", "Regulatory Discovery"), tools),
            llm,
            store,
            search_query: search_query.into(),
        }
    }

    /// Search `source` and index every item it returns, one after another.
    ///
    /// Stops at the first item that fails; items indexed before it stay
    /// indexed.
    pub async fn scan_feed(
        &self,
        ctx: &RequestContext,
        source: &str,
    ) -> ComplianceResult<Vec<IndexedRegulation>> {
        let _guard = self.core.begin(ctx).await;
        self.core
            .log_activity(ctx, format!("Scanning regulatory feed: {}", source));

        let updates = self
            .core
            .use_tool::<RegulatorySearch>(ctx)?
            .search(&self.search_query);

        let mut indexed = Vec::with_capacity(updates.len());
        for update in &updates {
            indexed.push(self.index(ctx, &update.summary, &update.title).await?);
        }
        info!(
            source,
            request_id = %ctx.request_id,
            indexed = indexed.len(),
            "regulatory feed scanned"
        );
        Ok(indexed)
    }

    /// Extract, summarize and index a single regulation.
    pub async fn process_regulation(
        &self,
        ctx: &RequestContext,
        text: &str,
        title: &str,
    ) -> ComplianceResult<IndexedRegulation> {
        let _guard = self.core.begin(ctx).await;
        self.index(ctx, text, title).await
    }

    /// Decode an uploaded document and index it under its filename.
    pub async fn ingest_document(
        &self,
        ctx: &RequestContext,
        filename: &str,
        bytes: &[u8],
    ) -> ComplianceResult<IndexedRegulation> {
        let _guard = self.core.begin(ctx).await;
        self.core
            .log_activity(ctx, format!("Reading document: {}", filename));
        let text = self
            .core
            .use_tool::<DocumentReader>(ctx)?
            .read_bytes(bytes, filename)?;
        self.index(ctx, &text, filename).await
    }

    async fn index(
        &self,
        ctx: &RequestContext,
        text: &str,
        title: &str,
    ) -> ComplianceResult<IndexedRegulation> {
        self.core
            .log_activity(ctx, format!("Reading regulation: {}", title));
        let obligations = self.core.use_tool::<ObligationExtractor>(ctx)?.extract(text);
        self.core
            .log_activity(ctx, format!("Extracted {} obligations.", obligations.len()));

        let draft = RegulationDraft {
            title: title.to_string(),
            text: text.to_string(),
            obligations,
        };
        self.think_then_act(ctx, &draft).await
    }
}

#[async_trait]
impl Agent for RegulatoryScout {
    type Context = RegulationDraft;
    type Plan = RegulationDigest;
    type Outcome = IndexedRegulation;

    fn core(&self) -> &AgentCore {
        &self.core
    }

    async fn think(
        &self,
        ctx: &RequestContext,
        draft: &RegulationDraft,
    ) -> ComplianceResult<RegulationDigest> {
        self.core.log_activity(
            ctx,
            format!("Interpreting {} derived obligations...", draft.obligations.len()),
        );
        let prompt = format!(
            "Summarize obligations: {}",
            serde_json::to_string(&draft.obligations).unwrap_or_default()
        );
        let summary = self.llm.complete(&prompt).await?;
        Ok(RegulationDigest {
            draft: draft.clone(),
            summary,
        })
    }

    async fn act(
        &self,
        ctx: &RequestContext,
        digest: RegulationDigest,
    ) -> ComplianceResult<IndexedRegulation> {
        self.core.log_activity(ctx, "Indexing knowledge into Vector DB...");

        let mut metadata = Map::new();
        metadata.insert("type".to_string(), json!("regulation"));
        metadata.insert("title".to_string(), json!(digest.draft.title));
        let content = format!("{} | RAW: {}", digest.summary, digest.draft.text);
        self.store.add(&content, metadata).await?;

        Ok(IndexedRegulation {
            status: "indexed".to_string(),
            title: digest.draft.title,
            summary: digest.summary,
            obligations: digest.draft.obligations,
        })
    }
}
