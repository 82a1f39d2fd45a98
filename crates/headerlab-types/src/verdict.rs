//! The simulated-browser verdict: one independent judgment per attack scenario.

use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "lowercase")]
pub enum MimeRisk {
    Low,
    High,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "lowercase")]
pub enum IsolationStatus {
    None,
    Partial,
    Isolated,
}

impl MimeRisk {
    pub fn as_str(self) -> &'static str {
        match self {
            MimeRisk::Low => "low",
            MimeRisk::High => "high",
        }
    }
}

impl IsolationStatus {
    pub fn as_str(self) -> &'static str {
        match self {
            IsolationStatus::None => "none",
            IsolationStatus::Partial => "partial",
            IsolationStatus::Isolated => "isolated",
        }
    }
}

/// Can an attacker page embed the target in an iframe?
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
pub struct ClickjackingOutcome {
    pub allowed: bool,
    pub reason: String,
}

/// Does an injected inline `<script>` run?
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
pub struct InlineScriptOutcome {
    pub allowed: bool,
    pub reason: String,
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
pub struct MimeSniffingOutcome {
    pub risk: MimeRisk,
    pub reason: String,
}

/// Informational only; never blocks.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "camelCase")]
pub struct ReferrerLeakageOutcome {
    pub explanation: String,
    pub example_header: String,
}

/// Can `https://attacker.com` read the response of a cross-origin fetch?
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "camelCase")]
pub struct CorsOutcome {
    pub fetch_allowed: bool,
    pub reason: String,
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
pub struct IsolationOutcome {
    pub status: IsolationStatus,
    pub reason: String,
}

/// Verdict snapshot produced fresh by every evaluation.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "camelCase")]
pub struct SimulationResult {
    pub clickjacking: ClickjackingOutcome,
    pub inline_script: InlineScriptOutcome,
    pub mime_sniffing: MimeSniffingOutcome,
    pub referrer_leakage: ReferrerLeakageOutcome,
    pub cors: CorsOutcome,
    pub isolation: IsolationOutcome,
}
