//! # complianceos-agents
//!
//! The four ComplianceOS roles, each an `Agent` over a shared `AgentCore`:
//!
//! - `RegulatoryScout` — discovers regulations and indexes them
//! - `GapAnalyst`      — detects policy gaps behind the auto-remediation gate
//! - `RiskSentinel`    — scans event batches and escalates leaks
//! - `EvidenceOfficer` — produces fingerprinted evidence packages
//!
//! `Orchestrator` wires them to one language model and one knowledge store
//! and exposes the request-level entry points.

pub mod analyst;
pub mod officer;
pub mod orchestrator;
pub mod scout;
pub mod sentinel;

pub use analyst::GapAnalyst;
pub use officer::EvidenceOfficer;
pub use orchestrator::{
    AgentActivity, DocumentUpload, IngestOutcome, MonitoringReport, Orchestrator, ScanReport,
};
pub use scout::RegulatoryScout;
pub use sentinel::RiskSentinel;
