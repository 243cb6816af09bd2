//! Stable tool identifiers.

use std::fmt;

use serde::{Deserialize, Serialize};

/// Every tool kind an agent may hold. Used as the registry key.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum ToolId {
    RiskScorer,
    LogMonitor,
    ObligationExtractor,
    RegulatorySearch,
    WorkflowAutomation,
    ReportGenerator,
    TaskPlanner,
    DocumentReader,
}

impl ToolId {
    pub fn as_str(self) -> &'static str {
        match self {
            ToolId::RiskScorer => "RiskScorer",
            ToolId::LogMonitor => "LogMonitor",
            ToolId::ObligationExtractor => "ObligationExtractor",
            ToolId::RegulatorySearch => "RegulatorySearch",
            ToolId::WorkflowAutomation => "WorkflowAutomation",
            ToolId::ReportGenerator => "ReportGenerator",
            ToolId::TaskPlanner => "TaskPlanner",
            ToolId::DocumentReader => "DocumentReader",
        }
    }
}

impl fmt::Display for ToolId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
