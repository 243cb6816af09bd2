//! In-memory knowledge store.
//!
//! Ranks documents by how many distinct query terms (three or more
//! characters, lowercased) they share with the query. Ties keep insertion
//! order. Every stored document is a candidate, so a non-empty store always
//! returns `min(k, len)` results.

use std::collections::HashSet;

use async_trait::async_trait;
use serde_json::{Map, Value};
use tokio::sync::RwLock;
use tracing::debug;

use complianceos_contracts::{
    error::ComplianceResult,
    knowledge::{KnowledgeEntry, StoreStats},
};
use complianceos_core::traits::KnowledgeStore;

pub struct InMemoryKnowledgeStore {
    entries: RwLock<Vec<KnowledgeEntry>>,
    embedding_model: String,
}

impl InMemoryKnowledgeStore {
    pub fn new() -> Self {
        Self::with_embedding_model("term-overlap")
    }

    pub fn with_embedding_model(name: impl Into<String>) -> Self {
        Self {
            entries: RwLock::new(Vec::new()),
            embedding_model: name.into(),
        }
    }

    /// Snapshot of all documents in insertion order.
    pub async fn documents(&self) -> Vec<KnowledgeEntry> {
        self.entries.read().await.clone()
    }
}

impl Default for InMemoryKnowledgeStore {
    fn default() -> Self {
        Self::new()
    }
}

fn terms(text: &str) -> HashSet<String> {
    text.split(|c: char| !c.is_alphanumeric())
        .filter(|t| t.chars().count() >= 3)
        .map(str::to_lowercase)
        .collect()
}

#[async_trait]
impl KnowledgeStore for InMemoryKnowledgeStore {
    async fn add(&self, content: &str, metadata: Map<String, Value>) -> ComplianceResult<()> {
        let mut entries = self.entries.write().await;
        entries.push(KnowledgeEntry::new(content, metadata));
        debug!(documents = entries.len(), "document indexed");
        Ok(())
    }

    async fn query(&self, text: &str, k: usize) -> ComplianceResult<Vec<KnowledgeEntry>> {
        let query_terms = terms(text);
        let entries = self.entries.read().await;

        let mut scored: Vec<(usize, &KnowledgeEntry)> = entries
            .iter()
            .map(|entry| {
                let overlap = terms(&entry.content).intersection(&query_terms).count();
                (overlap, entry)
            })
            .collect();
        // Stable sort keeps insertion order among equal scores.
        scored.sort_by(|a, b| b.0.cmp(&a.0));

        let results: Vec<KnowledgeEntry> = scored
            .into_iter()
            .take(k)
            .map(|(_, entry)| entry.clone())
            .collect();
        debug!(k, returned = results.len(), "knowledge query answered");
        Ok(results)
    }

    async fn stats(&self) -> ComplianceResult<StoreStats> {
        Ok(StoreStats {
            store_type: "in-memory".to_string(),
            document_count: self.entries.read().await.len(),
            embedding_model: self.embedding_model.clone(),
        })
    }
}

#[cfg(test)]
mod tests {
    use serde_json::json;

    use super::*;

    fn meta(kind: &str) -> Map<String, Value> {
        let mut m = Map::new();
        m.insert("type".to_string(), json!(kind));
        m
    }

    #[tokio::test]
    async fn empty_store_returns_nothing() {
        let store = InMemoryKnowledgeStore::new();
        assert!(store.query("retention", 3).await.unwrap().is_empty());
        assert_eq!(store.stats().await.unwrap().document_count, 0);
    }

    #[tokio::test]
    async fn best_overlap_first_and_bounded_by_k() {
        let store = InMemoryKnowledgeStore::new();
        store.add("Access control on admin consoles", meta("regulation")).await.unwrap();
        store.add("User data retention must not exceed 12 months", meta("regulation")).await.unwrap();
        store.add("Incident response within 72 hours", meta("regulation")).await.unwrap();
        store.add("Cardholder data encryption", meta("regulation")).await.unwrap();

        let results = store.query("We retain user data for 5 years", 2).await.unwrap();
        assert_eq!(results.len(), 2);
        assert!(results[0].content.starts_with("User data retention"));
        assert!(results[1].content.starts_with("Cardholder data"));
        assert_eq!(results[0].kind(), Some("regulation"));
    }

    #[tokio::test]
    async fn ties_keep_insertion_order() {
        let store = InMemoryKnowledgeStore::new();
        for i in 0..4 {
            store.add(&format!("doc {i}"), Map::new()).await.unwrap();
        }
        let results = store.query("unrelated", 3).await.unwrap();
        let contents: Vec<_> = results.iter().map(|e| e.content.as_str()).collect();
        assert_eq!(contents, vec!["doc 0", "doc 1", "doc 2"]);
    }

    #[tokio::test]
    async fn stats_report_type_and_model() {
        let store = InMemoryKnowledgeStore::with_embedding_model("all-MiniLM-L6-v2");
        store.add("x", Map::new()).await.unwrap();
        let stats = store.stats().await.unwrap();
        assert_eq!(stats.store_type, "in-memory");
        assert_eq!(stats.document_count, 1);
        assert_eq!(stats.embedding_model, "all-MiniLM-L6-v2");
    }
}
