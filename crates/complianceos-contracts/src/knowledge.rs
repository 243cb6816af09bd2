//! Knowledge-store document and statistics types.

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

/// A document held by the knowledge store. Immutable once indexed.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct KnowledgeEntry {
    pub content: String,
    pub metadata: Map<String, Value>,
}

impl KnowledgeEntry {
    pub fn new(content: impl Into<String>, metadata: Map<String, Value>) -> Self {
        Self {
            content: content.into(),
            metadata,
        }
    }

    /// The `type` metadata tag, if present (e.g. "regulation").
    pub fn kind(&self) -> Option<&str> {
        self.metadata.get("type").and_then(Value::as_str)
    }
}

/// Summary reported by `KnowledgeStore::stats()`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct StoreStats {
    #[serde(rename = "type")]
    pub store_type: String,
    pub document_count: usize,
    pub embedding_model: String,
}
