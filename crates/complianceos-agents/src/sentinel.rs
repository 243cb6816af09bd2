//! RiskSentinel: scans event batches for PCI/PII leaks and escalates them.
//!
//! ```text
//! monitor_stream(events)
//!   → LogMonitor                 one scan over the whole batch
//!   → think → act                per anomaly, in detection order
//!        ticket + alert
//! ```

use async_trait::async_trait;
use serde_json::Value;
use tracing::warn;

use complianceos_config::SentinelSettings;
use complianceos_contracts::{
    agent::{AgentIdentity, RequestContext},
    error::{ComplianceError, ComplianceResult},
    monitoring::{Anomaly, SentinelAlert},
};
use complianceos_core::{traits::Agent, AgentCore, ToolRegistry};
use complianceos_tools::{LogMonitor, WorkflowAutomation};

/// Value of `SentinelAlert::alert` for every escalated anomaly.
pub const RISK_DETECTED: &str = "Risk Detected";

pub struct RiskSentinel {
    core: AgentCore,
}

impl RiskSentinel {
    pub fn new(settings: &SentinelSettings) -> Self {
        let tools = ToolRegistry::new().with(LogMonitor::new()).with(
            WorkflowAutomation::new(&settings.ticket_system, &settings.alert_channel),
        );
        Self::with_tools(tools)
    }

    pub fn with_tools(tools: ToolRegistry) -> Self {
        Self {
            core: AgentCore::new(AgentIdentity::new("Sentinel", "Risk Monitoring"), tools),
        }
    }

    /// Scan `events` as one batch, then ticket and alert each anomaly in
    /// detection order.
    pub async fn monitor_stream(
        &self,
        ctx: &RequestContext,
        events: &[Value],
    ) -> ComplianceResult<Vec<SentinelAlert>> {
        let _guard = self.core.begin(ctx).await;
        self.core
            .log_activity(ctx, format!("Monitoring {} events...", events.len()));
        if let Some(index) = events.iter().position(|e| !e.is_object()) {
            return Err(ComplianceError::InvalidInput {
                reason: format!("event {} is not a JSON object", index),
            });
        }

        let anomalies = self.core.use_tool::<LogMonitor>(ctx)?.scan(events);

        let mut alerts = Vec::with_capacity(anomalies.len());
        for anomaly in &anomalies {
            alerts.push(self.think_then_act(ctx, anomaly).await?);
        }
        Ok(alerts)
    }
}

#[async_trait]
impl Agent for RiskSentinel {
    type Context = Anomaly;
    type Plan = Anomaly;
    type Outcome = SentinelAlert;

    fn core(&self) -> &AgentCore {
        &self.core
    }

    async fn think(&self, ctx: &RequestContext, anomaly: &Anomaly) -> ComplianceResult<Anomaly> {
        self.core
            .log_activity(ctx, format!("Anomaly Detected: {}", anomaly.pattern));
        Ok(anomaly.clone())
    }

    async fn act(&self, ctx: &RequestContext, anomaly: Anomaly) -> ComplianceResult<SentinelAlert> {
        let workflow = self.core.use_tool::<WorkflowAutomation>(ctx)?;
        let ticket = workflow.create_ticket(
            "Security Incident",
            &format!("Anomaly detected in logs: {}", anomaly.pattern),
        );
        let message = format!("Critical Risk! {} Ticket: {}", workflow.system(), ticket.id);
        let notification = workflow.send_alert(&message);

        self.core
            .log_activity(ctx, format!("ALERT TRIGGERED: {}", message));
        warn!(
            request_id = %ctx.request_id,
            ticket = %ticket.id,
            pattern = %anomaly.pattern,
            event_index = anomaly.index,
            "anomaly escalated"
        );

        Ok(SentinelAlert {
            alert: RISK_DETECTED.to_string(),
            ticket: ticket.id,
            pattern: anomaly.pattern,
            event_index: anomaly.index,
            notification,
        })
    }
}
