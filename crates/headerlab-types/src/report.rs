use crate::{
    ConsoleLine, GeneratedHeaders, HeaderConfig, IsolationStatus, MimeRisk, SimulationResult,
};
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};
use time::OffsetDateTime;

/// Stable schema identifiers.
pub const SCHEMA_REPORT_V1: &str = "headerlab.report.v1";
pub const SCHEMA_CONFIG_V1: &str = "headerlab.config.v1";

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
pub struct ToolMeta {
    pub name: String,
    pub version: String,
}

/// Roll-up of the verdict for quick display.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
pub struct ReportSummary {
    /// Blocking scenarios (clickjacking, inline script, CORS) the attacker lost.
    pub attacks_blocked: u32,
    /// Blocking scenarios the attacker won.
    pub attacks_allowed: u32,
    pub mime_risk: MimeRisk,
    pub isolation: IsolationStatus,
}

/// One simulation run: the input snapshot, what a server would send, and what the browser did.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize, JsonSchema)]
pub struct HeaderlabReport {
    /// Versioned schema identifier for the envelope shape.
    pub schema: String,
    pub tool: ToolMeta,
    #[schemars(with = "String")]
    #[serde(with = "time::serde::rfc3339")]
    pub generated_at: OffsetDateTime,
    /// Preset the configuration started from, if any.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub preset: Option<String>,
    /// SHA-256 over the canonical configuration fields.
    pub config_digest: String,
    pub config: HeaderConfig,
    pub headers: GeneratedHeaders,
    pub verdict: SimulationResult,
    /// What the simulated browser logs while loading the target.
    #[serde(default)]
    pub console: Vec<ConsoleLine>,
    pub summary: ReportSummary,
}
