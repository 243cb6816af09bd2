//! Agent identity and per-request context.
//!
//! An agent is identified by a display name and a role. The request context
//! travels with every operation so that activity entries are attributed to
//! the client that triggered them, without any shared mutable pointer.

use serde::{Deserialize, Serialize};

/// Name and role of an agent, e.g. `("Scout", "Regulatory Discovery")`.
///
/// Copied into every activity entry the agent writes.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct AgentIdentity {
    /// Short agent name used in log lines.
    pub name: String,
    /// Human-readable responsibility of the agent.
    pub role: String,
}

impl AgentIdentity {
    pub fn new(name: impl Into<String>, role: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            role: role.into(),
        }
    }
}

/// Unique identifier for one externally triggered operation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct RequestId(pub uuid::Uuid);

impl RequestId {
    /// Create a new, unique request ID.
    pub fn new() -> Self {
        Self(uuid::Uuid::new_v4())
    }
}

impl Default for RequestId {
    fn default() -> Self {
        Self::new()
    }
}

impl std::fmt::Display for RequestId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        self.0.fmt(f)
    }
}

/// Context threaded through a single top-level operation.
///
/// Agents never store this; they receive it by reference on every call.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RequestContext {
    /// Identifies the operation in tracing output.
    pub request_id: RequestId,
    /// The client the operation is performed for, if any.
    pub client: Option<String>,
}

impl RequestContext {
    /// Context for an operation performed on behalf of `client`.
    pub fn for_client(client: impl Into<String>) -> Self {
        Self {
            request_id: RequestId::new(),
            client: Some(client.into()),
        }
    }

    /// Context with no client attribution.
    pub fn anonymous() -> Self {
        Self {
            request_id: RequestId::new(),
            client: None,
        }
    }

    /// Build a context from an optional client name.
    pub fn new(client: Option<String>) -> Self {
        Self {
            request_id: RequestId::new(),
            client,
        }
    }

    pub fn client(&self) -> Option<&str> {
        self.client.as_deref()
    }
}
