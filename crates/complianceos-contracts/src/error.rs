//! Error types for ComplianceOS agent operations.
//!
//! Every failure is scoped to the single operation that produced it; none of
//! these variants is fatal to the process. Gate outcomes such as "Pending
//! Manual Review" are results, not errors.

use thiserror::Error;

/// The unified error type for ComplianceOS.
#[derive(Debug, Error)]
pub enum ComplianceError {
    /// An agent asked for a tool it does not hold.
    #[error("tool '{tool}' is not registered with agent '{agent}'")]
    ToolNotFound { tool: String, agent: String },

    /// The language-model collaborator failed or was unreachable.
    #[error("language model call failed: {reason}")]
    LanguageModel { reason: String },

    /// The knowledge-store collaborator failed.
    #[error("knowledge store operation failed: {reason}")]
    KnowledgeStore { reason: String },

    /// Ticket creation or alert delivery failed.
    #[error("workflow automation failed: {reason}")]
    Workflow { reason: String },

    /// The report tool could not render an evidence document.
    #[error("report rendering failed: {reason}")]
    ReportRender { reason: String },

    /// A submitted document has a type that cannot be ingested.
    #[error("unsupported document format: '{filename}'")]
    UnsupportedFormat { filename: String },

    /// The settings file is missing or invalid.
    #[error("configuration error: {reason}")]
    ConfigError { reason: String },

    /// Caller-supplied input could not be processed.
    #[error("invalid input: {reason}")]
    InvalidInput { reason: String },
}

/// Convenience alias used throughout the ComplianceOS crates.
pub type ComplianceResult<T> = Result<T, ComplianceError>;
