//! Regulatory feed items and indexing results.

use serde::{Deserialize, Serialize};

/// One item returned by a regulatory search.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RegulationUpdate {
    pub title: String,
    pub summary: String,
    #[serde(default)]
    pub source: String,
    #[serde(default)]
    pub url: Option<String>,
}

/// Outcome of `RegulatoryScout::process_regulation`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct IndexedRegulation {
    /// Always "indexed" on success.
    pub status: String,
    pub title: String,
    /// Language-model summary of the extracted obligations.
    pub summary: String,
    pub obligations: Vec<String>,
}
