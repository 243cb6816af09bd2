//! Regulatory feed search.
//!
//! Stands in for an RSS / Eur-Lex / GovInfo client: it returns the feed items
//! it was configured with, in order. The default feed holds two sample items.

use std::any::Any;

use tracing::info;

use complianceos_contracts::{regulation::RegulationUpdate, tool::ToolId};
use complianceos_core::traits::{Tool, ToolKind};

#[derive(Debug, Clone)]
pub struct RegulatorySearch {
    updates: Vec<RegulationUpdate>,
}

impl RegulatorySearch {
    /// A search tool that answers every query with `updates`.
    pub fn with_updates(updates: Vec<RegulationUpdate>) -> Self {
        Self { updates }
    }

    pub fn search(&self, query: &str) -> Vec<RegulationUpdate> {
        info!(query, results = self.updates.len(), "searching regulatory feeds");
        self.updates.clone()
    }
}

impl Default for RegulatorySearch {
    fn default() -> Self {
        Self::with_updates(vec![
            RegulationUpdate {
                title: "PCI DSS v4.0.1 Update".to_string(),
                summary: "Clarification on retention of sensitive authentication data."
                    .to_string(),
                source: "Council Feed".to_string(),
                url: Some("https://pcisecuritystandards.org/updates/v4-0-1".to_string()),
            },
            RegulationUpdate {
                title: "EU AI Act Compliance Guide".to_string(),
                summary: "New obligations for high-risk AI systems regarding data governance. \
                          Providers must keep technical documentation up to date."
                    .to_string(),
                source: "Europa.eu".to_string(),
                url: Some("https://artificialintelligenceact.eu/".to_string()),
            },
        ])
    }
}

impl Tool for RegulatorySearch {
    fn id(&self) -> ToolId {
        ToolId::RegulatorySearch
    }

    fn description(&self) -> &'static str {
        "Searches regulatory feeds for recent updates"
    }

    fn as_any(&self) -> &dyn Any {
        self
    }
}

impl ToolKind for RegulatorySearch {
    const ID: ToolId = ToolId::RegulatorySearch;
}
