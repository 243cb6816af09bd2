//! Typed tool registry.
//!
//! Tools are registered once, when the agent is constructed, and resolved by
//! their `ToolKind` type. A miss is a value (`None`) here and becomes
//! `ComplianceError::ToolNotFound` in `AgentCore::use_tool`.

use std::collections::BTreeMap;

use complianceos_contracts::tool::ToolId;

use crate::traits::{Tool, ToolKind};

/// The fixed set of tools an agent owns.
#[derive(Default)]
pub struct ToolRegistry {
    tools: BTreeMap<ToolId, Box<dyn Tool>>,
}

impl ToolRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    /// Add `tool`, replacing any tool registered under the same id.
    pub fn with(mut self, tool: impl Tool) -> Self {
        self.tools.insert(tool.id(), Box::new(tool));
        self
    }

    /// Resolve the tool registered for `T::ID`.
    pub fn get<T: ToolKind>(&self) -> Option<&T> {
        self.tools
            .get(&T::ID)
            .and_then(|tool| tool.as_any().downcast_ref::<T>())
    }

    pub fn contains(&self, id: ToolId) -> bool {
        self.tools.contains_key(&id)
    }

    /// Registered ids in a stable order.
    pub fn ids(&self) -> Vec<ToolId> {
        self.tools.keys().copied().collect()
    }

    pub fn len(&self) -> usize {
        self.tools.len()
    }

    pub fn is_empty(&self) -> bool {
        self.tools.is_empty()
    }
}
