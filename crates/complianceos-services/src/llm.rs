//! Language-model collaborators.
//!
//! `CannedLanguageModel` answers deterministically from the prompt's wording
//! and is what the demo runs against. `FallbackLanguageModel` wraps any other
//! model and substitutes the canned answer when it fails; it is only wired in
//! when the settings ask for `failure_policy = "fallback"`.

use std::sync::Arc;

use async_trait::async_trait;
use tracing::{debug, warn};

use complianceos_contracts::error::ComplianceResult;
use complianceos_core::traits::LanguageModel;

/// The canned answer for `prompt`.
pub fn canned_response(prompt: &str) -> &'static str {
    let p = prompt.to_lowercase();
    if p.contains("remediation") {
        return "Adopt a documented data retention schedule: delete customer records 12 months \
                after account closure, encrypt archived records, and review the schedule annually.";
    }
    if p.contains("analyze") && p.contains("policy") {
        return "Based on the provided regulation (GDPR Art. 30), the policy is missing a clear \
                data retention schedule. RISK: HIGH.";
    }
    if p.contains("summarize") {
        return "The document outlines strict requirements for cardholder data encryption and \
                access control (PCI-DSS 4.0).";
    }
    if p.contains("gap") {
        return "GAP DETECTED: Current policy retains data for 5 years, but GDPR requires deletion \
                upon request. Severity: Critical.";
    }
    "Analysis complete. No immediate compliance issues detected."
}

/// Deterministic offline model.
#[derive(Debug, Default, Clone, Copy)]
pub struct CannedLanguageModel;

impl CannedLanguageModel {
    pub fn new() -> Self {
        Self
    }
}

#[async_trait]
impl LanguageModel for CannedLanguageModel {
    async fn complete(&self, prompt: &str) -> ComplianceResult<String> {
        debug!(prompt_chars = prompt.len(), "canned completion");
        Ok(canned_response(prompt).to_string())
    }

    fn model_name(&self) -> &str {
        "canned"
    }
}

/// Masks failures of `inner` with the canned answer, loudly.
pub struct FallbackLanguageModel {
    inner: Arc<dyn LanguageModel>,
}

impl FallbackLanguageModel {
    pub fn new(inner: Arc<dyn LanguageModel>) -> Self {
        Self { inner }
    }
}

#[async_trait]
impl LanguageModel for FallbackLanguageModel {
    async fn complete(&self, prompt: &str) -> ComplianceResult<String> {
        match self.inner.complete(prompt).await {
            Ok(text) => Ok(text),
            Err(e) => {
                warn!(
                    model = %self.inner.model_name(),
                    error = %e,
                    "language model failed; substituting canned response"
                );
                Ok(canned_response(prompt).to_string())
            }
        }
    }

    fn model_name(&self) -> &str {
        self.inner.model_name()
    }
}
