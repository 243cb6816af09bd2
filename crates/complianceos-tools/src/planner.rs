//! Goal decomposition into workflow steps.

use std::any::Any;

use complianceos_contracts::tool::ToolId;
use complianceos_core::traits::{Tool, ToolKind};

#[derive(Debug, Default, Clone, Copy)]
pub struct TaskPlanner;

impl TaskPlanner {
    pub fn new() -> Self {
        Self
    }

    /// Break a high-level goal into ordered steps.
    pub fn create_plan(&self, goal: &str) -> Vec<String> {
        let goal = goal.to_lowercase();
        let steps: &[&str] = if goal.contains("compliance") {
            &[
                "1. Regulatory Discovery: Scan for specific regulations related to goal.",
                "2. Gap Analysis: Compare current internal policies against found regulations.",
                "3. Risk Assessment: Score identified gaps based on impact.",
                "4. Remediation: Generate task tickets for fix.",
                "5. Verification: Generate evidence package.",
            ]
        } else if goal.contains("audit") {
            &[
                "1. Data Collection: Gather logs and policy documents.",
                "2. Evidence Compilation: Map evidence to controls.",
                "3. Report Generation: Create report artifact.",
            ]
        } else {
            &["1. Analyze Request", "2. Execute Agent", "3. Report Results"]
        };
        steps.iter().map(|s| s.to_string()).collect()
    }
}

impl Tool for TaskPlanner {
    fn id(&self) -> ToolId {
        ToolId::TaskPlanner
    }

    fn description(&self) -> &'static str {
        "Decomposes compliance goals into executable steps"
    }

    fn as_any(&self) -> &dyn Any {
        self
    }
}

impl ToolKind for TaskPlanner {
    const ID: ToolId = ToolId::TaskPlanner;
}
