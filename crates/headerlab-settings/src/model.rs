use schemars::JsonSchema;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// `headerlab.toml` schema v1.
///
/// This is a *user-facing* config model: every key is optional and header values are plain
/// strings, validated during resolution. An empty string clears whatever the preset set.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize, JsonSchema)]
pub struct HeaderlabConfigV1 {
    /// Optional schema string for tooling (`headerlab.config.v1`).
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub schema: Option<String>,

    /// Preset to start from: `minimal`, `strict`, or `api`.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub preset: Option<String>,

    /// `DENY` or `SAMEORIGIN`.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub x_frame_options: Option<String>,

    /// `nosniff`.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub x_content_type_options: Option<String>,

    /// One of the eight standard referrer-policy tokens.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub referrer_policy: Option<String>,

    /// `unsafe-none`, `same-origin-allow-popups`, or `same-origin`.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub coop: Option<String>,

    /// `unsafe-none`, `require-corp`, or `credentialless`.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub coep: Option<String>,

    /// `same-site`, `same-origin`, or `cross-origin`.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub corp: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub csp: Option<CspSection>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub hsts: Option<HstsSection>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub cors: Option<CorsSection>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub permissions_policy: Option<PermissionsPolicySection>,
}

#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize, JsonSchema)]
pub struct CspSection {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub enabled: Option<bool>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub frame_ancestors: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub script_src: Option<String>,
}

#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize, JsonSchema)]
pub struct HstsSection {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub enabled: Option<bool>,
    /// Seconds.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub max_age: Option<u64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub include_sub_domains: Option<bool>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub preload: Option<bool>,
}

#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize, JsonSchema)]
pub struct CorsSection {
    /// `*` or a concrete origin.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub allow_origin: Option<String>,
}

#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize, JsonSchema)]
pub struct PermissionsPolicySection {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub enabled: Option<bool>,
    /// Feature name -> allow-list, e.g. `camera = ["self"]`. Replaces the preset's map.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub features: Option<BTreeMap<String, Vec<String>>>,
}
