//! # complianceos-core
//!
//! The agent coordination runtime for ComplianceOS.
//!
//! This crate provides:
//! - The `Agent` think → act trait and the collaborator traits
//!   (`LanguageModel`, `KnowledgeStore`)
//! - The `Tool` trait and the typed `ToolRegistry`
//! - `AgentCore`, the identity / tools / activity-log bundle every agent embeds
//!
//! ## Usage
//!
//! ```rust,ignore
//! use complianceos_core::{AgentCore, ToolRegistry, traits::{Agent, LanguageModel}};
//! ```

pub mod agent;
pub mod registry;
pub mod traits;

pub use agent::{AgentCore, OperationGuard};
pub use registry::ToolRegistry;
