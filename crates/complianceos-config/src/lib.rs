//! # complianceos-config
//!
//! TOML-driven settings for the ComplianceOS agent runtime.
//!
//! ## Usage
//!
//! ```rust,ignore
//! use complianceos_config::Settings;
//!
//! let settings = Settings::from_file(Path::new("complianceos.toml"))?;
//! ```

pub mod settings;

pub use settings::{
    AnalystSettings, LlmFailurePolicy, LlmSettings, OfficerSettings, ScoutSettings,
    SentinelSettings, Settings,
};
