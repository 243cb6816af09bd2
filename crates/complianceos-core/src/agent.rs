//! `AgentCore`: the state every ComplianceOS agent shares.
//!
//! Each concrete agent embeds one `AgentCore`, which owns:
//!
//!   identity → tools (fixed at construction) → activity log (append-only)
//!
//! plus the optional default client and the per-agent operation lock. Top
//! level operations hold the lock for their full duration, so two requests
//! against the same agent instance never interleave their log entries.

use std::sync::RwLock;

use tokio::sync::{Mutex, MutexGuard};
use tracing::{debug, warn};

use complianceos_activity::ActivityLog;
use complianceos_contracts::{
    activity::ActivityRecord,
    agent::{AgentIdentity, RequestContext},
    error::{ComplianceError, ComplianceResult},
    tool::ToolId,
};

use crate::{registry::ToolRegistry, traits::ToolKind};

/// Held while a top-level agent operation runs.
pub type OperationGuard<'a> = MutexGuard<'a, ()>;

pub struct AgentCore {
    identity: AgentIdentity,
    tools: ToolRegistry,
    log: ActivityLog,
    current_client: RwLock<Option<String>>,
    operation: Mutex<()>,
}

impl AgentCore {
    pub fn new(identity: AgentIdentity, tools: ToolRegistry) -> Self {
        let log = ActivityLog::new(identity.clone());
        Self {
            identity,
            tools,
            log,
            current_client: RwLock::new(None),
            operation: Mutex::new(()),
        }
    }

    pub fn identity(&self) -> &AgentIdentity {
        &self.identity
    }

    /// Wait for exclusive use of this agent.
    ///
    /// Must be acquired once per top-level operation and never re-acquired by
    /// the same task; nested steps call the unlocked variants.
    pub async fn begin(&self, ctx: &RequestContext) -> OperationGuard<'_> {
        let guard = self.operation.lock().await;
        debug!(
            agent = %self.identity.name,
            request_id = %ctx.request_id,
            client = ctx.client().unwrap_or("-"),
            "agent operation starting"
        );
        guard
    }

    /// Append an entry attributed to the context's client. Never fails.
    pub fn log_activity(&self, ctx: &RequestContext, action: impl Into<String>) {
        self.log.append(action, ctx.client());
    }

    /// Resolve a registered tool by type.
    ///
    /// The lookup is logged whether or not it succeeds. A miss returns
    /// `ComplianceError::ToolNotFound`.
    pub fn use_tool<T: ToolKind>(&self, ctx: &RequestContext) -> ComplianceResult<&T> {
        self.log_activity(ctx, format!("Using Tool: {}", T::ID));
        match self.tools.get::<T>() {
            Some(tool) => Ok(tool),
            None => {
                warn!(
                    agent = %self.identity.name,
                    tool = %T::ID,
                    request_id = %ctx.request_id,
                    "tool lookup failed"
                );
                Err(ComplianceError::ToolNotFound {
                    tool: T::ID.to_string(),
                    agent: self.identity.name.clone(),
                })
            }
        }
    }

    pub fn has_tool(&self, id: ToolId) -> bool {
        self.tools.contains(id)
    }

    pub fn tool_ids(&self) -> Vec<ToolId> {
        self.tools.ids()
    }

    /// Set the client used by `current_context()`.
    pub fn set_current_client(&self, client: Option<String>) {
        let mut current = self
            .current_client
            .write()
            .unwrap_or_else(|poisoned| poisoned.into_inner());
        *current = client;
    }

    pub fn current_client(&self) -> Option<String> {
        self.current_client
            .read()
            .unwrap_or_else(|poisoned| poisoned.into_inner())
            .clone()
    }

    /// A fresh request context for the current client.
    ///
    /// The client is copied into the context, so later calls to
    /// `set_current_client` do not affect operations already started.
    pub fn current_context(&self) -> RequestContext {
        RequestContext::new(self.current_client())
    }

    /// The most recent `limit` entries (all when `None`), oldest first.
    pub fn get_activity_log(&self, limit: Option<usize>) -> Vec<ActivityRecord> {
        self.log.records(limit)
    }

    pub fn activity(&self) -> &ActivityLog {
        &self.log
    }
}

// ── Tests ────────────────────────────────────────────────────────────────────

#[cfg(test)]
mod tests {
    use std::any::Any;
    use std::sync::Arc;
    use std::time::Duration;

    use async_trait::async_trait;

    use complianceos_contracts::{
        agent::{AgentIdentity, RequestContext},
        error::{ComplianceError, ComplianceResult},
        tool::ToolId,
    };

    use crate::{
        registry::ToolRegistry,
        traits::{Agent, Tool, ToolKind},
    };

    use super::AgentCore;

    // ── Mock helpers ─────────────────────────────────────────────────────────

    /// A tool that upper-cases its input.
    struct Shouter;

    impl Tool for Shouter {
        fn id(&self) -> ToolId {
            ToolId::TaskPlanner
        }
        fn description(&self) -> &'static str {
            "upper-cases text"
        }
        fn as_any(&self) -> &dyn Any {
            self
        }
    }

    impl ToolKind for Shouter {
        const ID: ToolId = ToolId::TaskPlanner;
    }

    impl Shouter {
        fn shout(&self, s: &str) -> String {
            s.to_uppercase()
        }
    }

    /// A tool that is never registered in these tests.
    struct Absent;

    impl Tool for Absent {
        fn id(&self) -> ToolId {
            ToolId::RiskScorer
        }
        fn description(&self) -> &'static str {
            "never registered"
        }
        fn as_any(&self) -> &dyn Any {
            self
        }
    }

    impl ToolKind for Absent {
        const ID: ToolId = ToolId::RiskScorer;
    }

    /// An agent whose think and act both log and whose act uses `Shouter`.
    struct EchoAgent {
        core: AgentCore,
    }

    impl EchoAgent {
        fn new() -> Self {
            Self {
                core: AgentCore::new(
                    AgentIdentity::new("Echo", "Testing"),
                    ToolRegistry::new().with(Shouter),
                ),
            }
        }

        async fn run(&self, ctx: &RequestContext, text: &str) -> ComplianceResult<String> {
            let _guard = self.core.begin(ctx).await;
            self.think_then_act(ctx, &text.to_string()).await
        }
    }

    #[async_trait]
    impl Agent for EchoAgent {
        type Context = String;
        type Plan = String;
        type Outcome = String;

        fn core(&self) -> &AgentCore {
            &self.core
        }

        async fn think(&self, ctx: &RequestContext, context: &String) -> ComplianceResult<String> {
            self.log_activity(ctx, "thinking");
            tokio::time::sleep(Duration::from_millis(5)).await;
            Ok(format!("plan:{context}"))
        }

        async fn act(&self, ctx: &RequestContext, plan: String) -> ComplianceResult<String> {
            self.log_activity(ctx, "acting");
            let tool = self.core.use_tool::<Shouter>(ctx)?;
            Ok(tool.shout(&plan))
        }
    }

    // ── Test cases ────────────────────────────────────────────────────────────

    #[tokio::test]
    async fn test_think_precedes_act() {
        let agent = EchoAgent::new();
        let ctx = RequestContext::for_client("Acme");

        let out = agent.run(&ctx, "hello").await.unwrap();
        assert_eq!(out, "PLAN:HELLO");

        let actions = agent.core.activity().actions();
        assert_eq!(actions, vec!["thinking", "acting", "Using Tool: TaskPlanner"]);
    }

    /// A registry miss is a distinguishable error, and the lookup is still logged.
    #[test]
    fn test_use_tool_miss_is_tool_not_found() {
        let agent = EchoAgent::new();
        let ctx = RequestContext::anonymous();

        match agent.core.use_tool::<Absent>(&ctx) {
            Err(ComplianceError::ToolNotFound { tool, agent }) => {
                assert_eq!(tool, "RiskScorer");
                assert_eq!(agent, "Echo");
            }
            Err(other) => panic!("expected ToolNotFound, got {:?}", other),
            Ok(_) => panic!("expected ToolNotFound, got a tool"),
        }
        assert_eq!(agent.core.activity().actions(), vec!["Using Tool: RiskScorer"]);
    }

    #[test]
    fn test_current_client_feeds_current_context() {
        let agent = EchoAgent::new();
        assert_eq!(agent.core.current_context().client, None);

        agent.set_current_client(Some("Globex".to_string()));
        let ctx = agent.core.current_context();
        assert_eq!(ctx.client(), Some("Globex"));

        // Changing the default later does not rewrite an existing context.
        agent.set_current_client(Some("Initech".to_string()));
        assert_eq!(ctx.client(), Some("Globex"));
        assert_eq!(agent.core.current_client().as_deref(), Some("Initech"));
    }

    #[test]
    fn test_activity_log_view_is_limited() {
        let agent = EchoAgent::new();
        let ctx = RequestContext::for_client("Acme");
        for i in 0..4 {
            agent.log_activity(&ctx, &format!("step {i}"));
        }

        let records = agent.get_activity_log(Some(2));
        assert_eq!(records.len(), 2);
        assert_eq!(records[0].action, "step 2");
        assert_eq!(records[1].action, "step 3");
        assert_eq!(records[1].client.as_deref(), Some("Acme"));
        assert_eq!(agent.get_activity_log(None).len(), 4);
    }

    /// Two concurrent operations on one agent run one after the other, and
    /// each entry keeps its own client.
    #[tokio::test]
    async fn test_concurrent_operations_are_serialized() {
        let agent = Arc::new(EchoAgent::new());

        let a = {
            let agent = Arc::clone(&agent);
            tokio::spawn(async move { agent.run(&RequestContext::for_client("A"), "a").await })
        };
        let b = {
            let agent = Arc::clone(&agent);
            tokio::spawn(async move { agent.run(&RequestContext::for_client("B"), "b").await })
        };
        a.await.unwrap().unwrap();
        b.await.unwrap().unwrap();

        let entries = agent.core.activity().entries(None);
        assert_eq!(entries.len(), 6);

        // Each consecutive block of three entries belongs to one client.
        for block in entries.chunks(3) {
            let client = block[0].client.clone();
            assert!(block.iter().all(|e| e.client == client));
            assert_eq!(block[0].action, "thinking");
        }
        assert_ne!(entries[0].client, entries[3].client);
    }

    #[test]
    fn test_registry_reports_ids() {
        let agent = EchoAgent::new();
        assert!(agent.core.has_tool(ToolId::TaskPlanner));
        assert!(!agent.core.has_tool(ToolId::RiskScorer));
        assert_eq!(agent.core.tool_ids(), vec![ToolId::TaskPlanner]);
    }
}
