//! # complianceos-tools
//!
//! Stateless tools held by ComplianceOS agents. The heuristic tools
//! (`RiskScorer`, `LogMonitor`, `ObligationExtractor`) are fixed business
//! rules and fully deterministic.

pub mod extractor;
pub mod monitor;
pub mod planner;
pub mod reader;
pub mod report;
pub mod scorer;
pub mod search;
pub mod workflow;

pub use extractor::ObligationExtractor;
pub use monitor::LogMonitor;
pub use planner::TaskPlanner;
pub use reader::{DocumentReader, DocumentType};
pub use report::{ReportGenerator, ReportRequest};
pub use scorer::RiskScorer;
pub use search::RegulatorySearch;
pub use workflow::WorkflowAutomation;
