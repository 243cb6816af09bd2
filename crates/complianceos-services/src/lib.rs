//! # complianceos-services
//!
//! Reference implementations of the ComplianceOS collaborators: an
//! in-memory knowledge store and offline language models. Production
//! deployments swap these for adapters over real services.

pub mod knowledge;
pub mod llm;

pub use knowledge::InMemoryKnowledgeStore;
pub use llm::{canned_response, CannedLanguageModel, FallbackLanguageModel};
