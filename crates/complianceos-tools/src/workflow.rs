//! Ticketing and alerting.
//!
//! Stands in for Jira / ServiceNow and Slack integrations. Ticket ids are
//! `<SYSTEM>-<4 digits>`.

use std::any::Any;

use tracing::info;

use complianceos_contracts::{
    monitoring::{Alert, Ticket},
    tool::ToolId,
};
use complianceos_core::traits::{Tool, ToolKind};

#[derive(Debug, Clone)]
pub struct WorkflowAutomation {
    system: String,
    channel: String,
}

impl WorkflowAutomation {
    pub fn new(system: impl Into<String>, channel: impl Into<String>) -> Self {
        Self {
            system: system.into(),
            channel: channel.into(),
        }
    }

    pub fn system(&self) -> &str {
        &self.system
    }

    pub fn create_ticket(&self, title: &str, description: &str) -> Ticket {
        let number = 1000 + (uuid::Uuid::new_v4().as_u128() % 9000);
        let id = format!("{}-{}", self.system.to_uppercase(), number);
        info!(ticket = %id, system = %self.system, title, "ticket created");
        Ticket {
            id,
            system: self.system.clone(),
            title: title.to_string(),
            description: description.to_string(),
        }
    }

    pub fn send_alert(&self, message: &str) -> Alert {
        info!(channel = %self.channel, message, "alert sent");
        Alert {
            channel: self.channel.clone(),
            message: message.to_string(),
        }
    }
}

impl Default for WorkflowAutomation {
    fn default() -> Self {
        Self::new("Jira", "Slack")
    }
}

impl Tool for WorkflowAutomation {
    fn id(&self) -> ToolId {
        ToolId::WorkflowAutomation
    }

    fn description(&self) -> &'static str {
        "Creates remediation tickets and sends alerts"
    }

    fn as_any(&self) -> &dyn Any {
        self
    }
}

impl ToolKind for WorkflowAutomation {
    const ID: ToolId = ToolId::WorkflowAutomation;
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn ticket_id_has_system_prefix_and_four_digits() {
        let wf = WorkflowAutomation::default();
        for _ in 0..50 {
            let ticket = wf.create_ticket("Security Incident", "card number in logs");
            let (prefix, number) = ticket.id.split_once('-').unwrap();
            assert_eq!(prefix, "JIRA");
            assert_eq!(number.len(), 4);
            let n: u32 = number.parse().unwrap();
            assert!((1000..=9999).contains(&n));
        }
    }

    #[test]
    fn alert_uses_configured_channel() {
        let wf = WorkflowAutomation::new("ServiceNow", "Teams");
        let alert = wf.send_alert("Critical Risk!");
        assert_eq!(alert.channel, "Teams");
        assert_eq!(alert.message, "Critical Risk!");
        assert!(wf.create_ticket("t", "d").id.starts_with("SERVICENOW-"));
    }
}
