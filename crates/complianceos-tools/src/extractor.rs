//! Obligation extraction.
//!
//! Splits text into sentences on `.`, `!` and `?` and keeps those containing
//! an obligation keyword. The output is never empty: text without any
//! obligation yields a single placeholder asking for manual review.

use std::any::Any;

use tracing::debug;

use complianceos_contracts::tool::ToolId;
use complianceos_core::traits::{Tool, ToolKind};

pub const OBLIGATION_KEYWORDS: [&str; 4] = ["must", "shall", "required", "mandatory"];

pub const MANUAL_REVIEW_PLACEHOLDER: &str =
    "No explicit obligations found, but manual review recommended.";

#[derive(Debug, Default, Clone, Copy)]
pub struct ObligationExtractor;

impl ObligationExtractor {
    pub fn new() -> Self {
        Self
    }

    pub fn extract(&self, text: &str) -> Vec<String> {
        let mut obligations: Vec<String> = text
            .split(['.', '!', '?'])
            .map(str::trim)
            .filter(|sentence| {
                let lower = sentence.to_lowercase();
                OBLIGATION_KEYWORDS.iter().any(|k| lower.contains(k))
            })
            .map(str::to_string)
            .collect();

        debug!(found = obligations.len(), "obligation extraction finished");

        if obligations.is_empty() {
            obligations.push(MANUAL_REVIEW_PLACEHOLDER.to_string());
        }
        obligations
    }
}

impl Tool for ObligationExtractor {
    fn id(&self) -> ToolId {
        ToolId::ObligationExtractor
    }

    fn description(&self) -> &'static str {
        "Extracts must / shall / required / mandatory sentences from regulatory text"
    }

    fn as_any(&self) -> &dyn Any {
        self
    }
}

impl ToolKind for ObligationExtractor {
    const ID: ToolId = ToolId::ObligationExtractor;
}
