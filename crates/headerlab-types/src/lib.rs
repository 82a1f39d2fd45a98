//! Stable DTOs and IDs used across the headerlab workspace.
//!
//! This crate is intentionally boring:
//! - the header configuration model fed to the evaluator
//! - the verdict returned by the evaluator and the simulated console lines
//! - stable string IDs for scenarios and header names
//! - the report envelope and the explain registry

#![forbid(unsafe_code)]

#[macro_use]
mod token;

pub mod config;
pub mod console;
pub mod explain;
pub mod headers;
pub mod ids;
pub mod report;
pub mod verdict;

pub use config::{
    ContentTypeOptions, CorsConfig, CrossOriginEmbedderPolicy, CrossOriginOpenerPolicy,
    CrossOriginResourcePolicy, CspConfig, HeaderConfig, HstsConfig, PermissionsPolicyConfig,
    ReferrerPolicy, XFrameOptions, present,
};
pub use console::{ConsoleLevel, ConsoleLine};
pub use explain::{ExamplePair, Explanation, lookup_explanation};
pub use headers::{GeneratedHeaders, HeaderEntry};
pub use report::{HeaderlabReport, ReportSummary, SCHEMA_CONFIG_V1, SCHEMA_REPORT_V1, ToolMeta};
pub use token::UnknownToken;
pub use verdict::{
    ClickjackingOutcome, CorsOutcome, InlineScriptOutcome, IsolationOutcome, IsolationStatus,
    MimeRisk, MimeSniffingOutcome, ReferrerLeakageOutcome, SimulationResult,
};
