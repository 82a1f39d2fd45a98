//! The header configuration snapshot consumed by the evaluator and the header generator.
//!
//! Absence is always explicit: an optional header is `None` when it is not sent, and a section
//! with an `enabled` switch is ignored entirely while the switch is off.

use schemars::JsonSchema;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

token_enum! {
    /// `X-Frame-Options` values.
    pub enum XFrameOptions: "X-Frame-Options" {
        Deny => "DENY",
        SameOrigin => "SAMEORIGIN",
    }
}

token_enum! {
    /// `X-Content-Type-Options` values.
    pub enum ContentTypeOptions: "X-Content-Type-Options" {
        NoSniff => "nosniff",
    }
}

token_enum! {
    /// The eight standard `Referrer-Policy` tokens.
    pub enum ReferrerPolicy: "Referrer-Policy" {
        NoReferrer => "no-referrer",
        NoReferrerWhenDowngrade => "no-referrer-when-downgrade",
        Origin => "origin",
        OriginWhenCrossOrigin => "origin-when-cross-origin",
        SameOrigin => "same-origin",
        StrictOrigin => "strict-origin",
        StrictOriginWhenCrossOrigin => "strict-origin-when-cross-origin",
        UnsafeUrl => "unsafe-url",
    }
}

token_enum! {
    /// `Cross-Origin-Opener-Policy` values.
    pub enum CrossOriginOpenerPolicy: "Cross-Origin-Opener-Policy" {
        UnsafeNone => "unsafe-none",
        SameOriginAllowPopups => "same-origin-allow-popups",
        SameOrigin => "same-origin",
    }
}

token_enum! {
    /// `Cross-Origin-Embedder-Policy` values.
    pub enum CrossOriginEmbedderPolicy: "Cross-Origin-Embedder-Policy" {
        UnsafeNone => "unsafe-none",
        RequireCorp => "require-corp",
        Credentialless => "credentialless",
    }
}

token_enum! {
    /// `Cross-Origin-Resource-Policy` values.
    pub enum CrossOriginResourcePolicy: "Cross-Origin-Resource-Policy" {
        SameSite => "same-site",
        SameOrigin => "same-origin",
        CrossOrigin => "cross-origin",
    }
}

/// Complete, immutable-per-evaluation header configuration.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "camelCase")]
pub struct HeaderConfig {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub x_frame_options: Option<XFrameOptions>,

    #[serde(default)]
    pub csp: CspConfig,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub x_content_type_options: Option<ContentTypeOptions>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub referrer_policy: Option<ReferrerPolicy>,

    #[serde(default)]
    pub hsts: HstsConfig,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub coop: Option<CrossOriginOpenerPolicy>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub coep: Option<CrossOriginEmbedderPolicy>,

    /// Carried for forward compatibility; no current rule consults it.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub corp: Option<CrossOriginResourcePolicy>,

    #[serde(default)]
    pub cors: CorsConfig,

    /// Carried for forward compatibility; no current rule consults it.
    #[serde(default)]
    pub permissions_policy: PermissionsPolicyConfig,
}

/// `Content-Security-Policy` section. Directive values are free-form strings.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "camelCase")]
pub struct CspConfig {
    #[serde(default)]
    pub enabled: bool,

    /// e.g. `'none'`, `'self'`, `https://partner.example`.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub frame_ancestors: Option<String>,

    /// e.g. `'self'`, `'self' 'unsafe-inline'`.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub script_src: Option<String>,
}

impl CspConfig {
    /// The `frame-ancestors` value in force: CSP enabled and a non-empty directive set.
    pub fn effective_frame_ancestors(&self) -> Option<&str> {
        if self.enabled {
            present(&self.frame_ancestors)
        } else {
            None
        }
    }

    /// The `script-src` value in force: CSP enabled and a non-empty directive set.
    pub fn effective_script_src(&self) -> Option<&str> {
        if self.enabled {
            present(&self.script_src)
        } else {
            None
        }
    }
}

/// `Strict-Transport-Security` section.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "camelCase")]
pub struct HstsConfig {
    #[serde(default)]
    pub enabled: bool,
    /// Seconds.
    #[serde(default)]
    pub max_age: u64,
    #[serde(default)]
    pub include_sub_domains: bool,
    #[serde(default)]
    pub preload: bool,
}

/// CORS response section.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "camelCase")]
pub struct CorsConfig {
    /// `*`, a concrete origin, or absent.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub allow_origin: Option<String>,
}

/// `Permissions-Policy` section.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "camelCase")]
pub struct PermissionsPolicyConfig {
    #[serde(default)]
    pub enabled: bool,
    /// Feature name -> ordered allow-list tokens (e.g. `camera = ["self"]`).
    #[serde(default)]
    pub features: BTreeMap<String, Vec<String>>,
}

/// A free-form value counts as present only when it is set and non-empty.
pub fn present(value: &Option<String>) -> Option<&str> {
    value.as_deref().filter(|v| !v.is_empty())
}
