//! # complianceos-activity
//!
//! Append-only, timestamped activity log owned by each ComplianceOS agent.
//!
//! ## Usage
//!
//! ```rust,ignore
//! use complianceos_activity::ActivityLog;
//!
//! let log = ActivityLog::new(AgentIdentity::new("Scout", "Regulatory Discovery"));
//! log.append("Scanning regulatory feed", Some("Acme"));
//! let recent = log.records(Some(10));
//! ```

pub mod log;

pub use log::ActivityLog;

// ── Tests ─────────────────────────────────────────────────────────────────────
