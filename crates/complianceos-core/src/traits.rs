//! Core trait definitions for the ComplianceOS agent runtime.
//!
//! - `Agent`          — a role following the think → act lifecycle
//! - `Tool`           — a stateless capability held by an agent
//! - `LanguageModel`  — external `complete(prompt) -> text` collaborator
//! - `KnowledgeStore` — external retrieval collaborator
//!
//! The two collaborators are the only suspension points inside an agent
//! operation. Tools are synchronous and pure.

use std::any::Any;

use async_trait::async_trait;
use serde_json::{Map, Value};

use complianceos_contracts::{
    activity::ActivityRecord,
    agent::{AgentIdentity, RequestContext},
    error::ComplianceResult,
    knowledge::{KnowledgeEntry, StoreStats},
    tool::ToolId,
};

use crate::agent::AgentCore;

/// The language-model backend.
///
/// Implementations report failures as `ComplianceError::LanguageModel`.
/// Whether a failure is masked is decided by the caller's wiring, never
/// silently inside an agent.
#[async_trait]
pub trait LanguageModel: Send + Sync {
    async fn complete(&self, prompt: &str) -> ComplianceResult<String>;

    fn model_name(&self) -> &str;
}

/// The document-retrieval backend, shared by every agent.
///
/// Implementations own their internal synchronization.
#[async_trait]
pub trait KnowledgeStore: Send + Sync {
    /// Index one document. Indexed documents are never modified.
    async fn add(&self, content: &str, metadata: Map<String, Value>) -> ComplianceResult<()>;

    /// Up to `k` documents relevant to `text`, best match first.
    async fn query(&self, text: &str, k: usize) -> ComplianceResult<Vec<KnowledgeEntry>>;

    async fn stats(&self) -> ComplianceResult<StoreStats>;
}

/// A stateless capability unit held by an agent.
///
/// Tools hold configuration only; no call may leave state behind for the next.
pub trait Tool: Any + Send + Sync {
    fn id(&self) -> ToolId;

    /// One-line description for operator tooling.
    fn description(&self) -> &'static str;

    fn as_any(&self) -> &dyn Any;
}

/// Static binding between a concrete tool type and its registry key.
///
/// Lets callers resolve a tool by type: `core.use_tool::<RiskScorer>(ctx)`.
pub trait ToolKind: Tool + Sized {
    const ID: ToolId;
}

/// An agent following the two-phase think → act lifecycle.
///
/// `think` produces an assessment or plan and has no side effects other than
/// logging. `act` executes side effects (tool calls, store writes) and
/// returns a structured outcome. Every call receives the request context so
/// that activity entries are attributed to the right client.
#[async_trait]
pub trait Agent: Send + Sync {
    /// Input to `think`.
    type Context: Send + Sync;
    /// Output of `think`, input to `act`.
    type Plan: Send;
    /// Output of `act`.
    type Outcome: Send;

    /// Shared identity, tools and log.
    fn core(&self) -> &AgentCore;

    async fn think(&self, ctx: &RequestContext, context: &Self::Context)
        -> ComplianceResult<Self::Plan>;

    async fn act(&self, ctx: &RequestContext, plan: Self::Plan) -> ComplianceResult<Self::Outcome>;

    /// Run `think` then `act`, strictly in that order.
    async fn think_then_act(
        &self,
        ctx: &RequestContext,
        context: &Self::Context,
    ) -> ComplianceResult<Self::Outcome> {
        let plan = self.think(ctx, context).await?;
        self.act(ctx, plan).await
    }

    fn identity(&self) -> &AgentIdentity {
        self.core().identity()
    }

    fn log_activity(&self, ctx: &RequestContext, action: &str) {
        self.core().log_activity(ctx, action);
    }

    fn set_current_client(&self, client: Option<String>) {
        self.core().set_current_client(client);
    }

    fn get_activity_log(&self, limit: Option<usize>) -> Vec<ActivityRecord> {
        self.core().get_activity_log(limit)
    }
}
