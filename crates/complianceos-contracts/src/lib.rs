//! # complianceos-contracts
//!
//! Shared types and contracts for the ComplianceOS agent runtime.
//!
//! All crates in the workspace import from here. No business logic lives in
//! this crate: it holds data definitions, display helpers and the error type.

pub mod activity;
pub mod agent;
pub mod error;
pub mod finding;
pub mod knowledge;
pub mod monitoring;
pub mod regulation;
pub mod report;
pub mod tool;
