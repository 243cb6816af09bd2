//! Settings schema and loader.
//!
//! `Settings` is deserialized from TOML. Every section and field has a
//! default, so an empty document is a valid configuration.
//!
//! Example:
//! ```toml
//! [analyst]
//! auto_remediation = true
//!
//! [llm]
//! failure_policy = "fallback"
//! ```

use std::path::Path;

use serde::{Deserialize, Serialize};
use tracing::debug;

use complianceos_contracts::error::{ComplianceError, ComplianceResult};

/// What to do when the language model fails.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum LlmFailurePolicy {
    /// Fail the agent operation with `ComplianceError::LanguageModel`.
    #[default]
    Propagate,
    /// Log a warning and substitute a canned response.
    Fallback,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct AnalystSettings {
    /// Initial value of the auto-remediation gate.
    pub auto_remediation: bool,
    /// Number of documents requested from the knowledge store.
    pub retrieval_k: usize,
    /// Number of retrieved documents placed into the gap prompt.
    pub max_regulations: usize,
    pub policy_excerpt_chars: usize,
    pub regulation_excerpt_chars: usize,
}

impl Default for AnalystSettings {
    fn default() -> Self {
        Self {
            auto_remediation: false,
            retrieval_k: 3,
            max_regulations: 3,
            policy_excerpt_chars: 500,
            regulation_excerpt_chars: 500,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ScoutSettings {
    pub search_query: String,
    pub default_feed: String,
    /// Policy analysed after a scan when the caller supplies none.
    pub sample_policy: String,
}

impl Default for ScoutSettings {
    fn default() -> Self {
        Self {
            search_query: "latest compliance updates".to_string(),
            default_feed: "https://europa.eu/ai-act/feed".to_string(),
            sample_policy: "We retain user data for 5 years.".to_string(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct SentinelSettings {
    pub ticket_system: String,
    pub alert_channel: String,
}

impl Default for SentinelSettings {
    fn default() -> Self {
        Self {
            ticket_system: "Jira".to_string(),
            alert_channel: "Slack".to_string(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct OfficerSettings {
    /// Minimum score for a finding-free package to be marked COMPLIANT.
    pub compliant_score_threshold: u32,
    pub reports_base_url: String,
}

impl Default for OfficerSettings {
    fn default() -> Self {
        Self {
            compliant_score_threshold: 90,
            reports_base_url: "/reports".to_string(),
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct LlmSettings {
    pub failure_policy: LlmFailurePolicy,
}

/// The top-level structure deserialized from a settings file.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Settings {
    pub analyst: AnalystSettings,
    pub scout: ScoutSettings,
    pub sentinel: SentinelSettings,
    pub officer: OfficerSettings,
    pub llm: LlmSettings,
}

impl Settings {
    /// Parse `s` as TOML settings.
    ///
    /// Returns `ComplianceError::ConfigError` if the TOML is malformed or a
    /// field has the wrong type.
    pub fn from_toml_str(s: &str) -> ComplianceResult<Self> {
        let settings: Settings = toml::from_str(s).map_err(|e| ComplianceError::ConfigError {
            reason: format!("failed to parse settings TOML: {}", e),
        })?;
        settings.validate()?;
        debug!(
            auto_remediation = settings.analyst.auto_remediation,
            failure_policy = ?settings.llm.failure_policy,
            "settings loaded"
        );
        Ok(settings)
    }

    /// Read the file at `path` and parse it as TOML settings.
    pub fn from_file(path: &Path) -> ComplianceResult<Self> {
        let contents = std::fs::read_to_string(path).map_err(|e| ComplianceError::ConfigError {
            reason: format!("failed to read settings file '{}': {}", path.display(), e),
        })?;
        Self::from_toml_str(&contents)
    }

    fn validate(&self) -> ComplianceResult<()> {
        if self.analyst.retrieval_k == 0 {
            return Err(ComplianceError::ConfigError {
                reason: "analyst.retrieval_k must be at least 1".to_string(),
            });
        }
        if self.sentinel.ticket_system.trim().is_empty() {
            return Err(ComplianceError::ConfigError {
                reason: "sentinel.ticket_system must not be empty".to_string(),
            });
        }
        Ok(())
    }
}
