//! Edit scripts: a TOML list of edits and undo/redo steps replayed against a configuration.
//!
//! ```toml
//! [[step]]
//! preset = "strict"
//!
//! [[step]]
//! cors = { allow_origin = "https://friendly.com" }
//!
//! [[step]]
//! action = "undo"
//! ```
//!
//! Each step performs exactly one thing: an `action`, a `preset` swap, one top-level header, one
//! section table, or an isolation change (`coop`, `coep`, `corp` together).

use crate::error::SettingsError;
use crate::model::{CorsSection, CspSection, HstsSection, PermissionsPolicySection};
use crate::patch::{
    ConfigEdit, CorsPatch, CspPatch, HstsPatch, IsolationPatch, PermissionsPolicyPatch,
};
use crate::presets;
use crate::resolve::{free_form, parse_token};
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize, JsonSchema)]
pub struct EditScriptV1 {
    #[serde(default)]
    pub step: Vec<EditStepV1>,
}

/// One step as written in the script. Header values use the same spelling as `headerlab.toml`.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize, JsonSchema)]
pub struct EditStepV1 {
    /// `undo` or `redo`.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub action: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub preset: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub x_frame_options: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub x_content_type_options: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub referrer_policy: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub coop: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub coep: Option<String>,
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

/// A validated step, ready to drive a [`crate::ConfigHistory`].
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum ScriptStep {
    Edit { label: String, edit: ConfigEdit },
    Undo,
    Redo,
}

impl ScriptStep {
    pub fn label(&self) -> &str {
        match self {
            ScriptStep::Edit { label, .. } => label,
            ScriptStep::Undo => "undo",
            ScriptStep::Redo => "redo",
        }
    }
}

/// Parse and validate an edit script. Step numbers in errors are 1-based.
pub fn parse_edit_script(input: &str) -> Result<Vec<ScriptStep>, SettingsError> {
    let script: EditScriptV1 = toml::from_str(input)?;
    script
        .step
        .into_iter()
        .enumerate()
        .map(|(i, step)| compile_step(i + 1, step))
        .collect()
}

fn compile_step(index: usize, step: EditStepV1) -> Result<ScriptStep, SettingsError> {
    let mut compiled = Vec::new();

    if let Some(action) = step.action.as_deref() {
        compiled.push(match action {
            "undo" => ScriptStep::Undo,
            "redo" => ScriptStep::Redo,
            other => {
                return Err(SettingsError::InvalidStep {
                    index,
                    reason: format!("unknown action `{other}` (expected undo|redo)"),
                });
            }
        });
    }

    if let Some(name) = step.preset {
        let cfg = presets::preset(&name).ok_or_else(|| SettingsError::UnknownPreset {
            name: name.clone(),
            expected: presets::preset_names().join("|"),
        })?;
        compiled.push(edit(format!("preset {name}"), ConfigEdit::Replace(cfg)));
    }

    if let Some(v) = step.x_frame_options.as_deref() {
        let value = parse_token("x_frame_options", v)?;
        compiled.push(edit("x_frame_options", ConfigEdit::XFrameOptions(value)));
    }
    if let Some(v) = step.x_content_type_options.as_deref() {
        let value = parse_token("x_content_type_options", v)?;
        compiled.push(edit(
            "x_content_type_options",
            ConfigEdit::ContentTypeOptions(value),
        ));
    }
    if let Some(v) = step.referrer_policy.as_deref() {
        let value = parse_token("referrer_policy", v)?;
        compiled.push(edit("referrer_policy", ConfigEdit::ReferrerPolicy(value)));
    }

    if step.coop.is_some() || step.coep.is_some() || step.corp.is_some() {
        let patch = IsolationPatch {
            coop: step.coop.as_deref().map(|v| parse_token("coop", v)).transpose()?,
            coep: step.coep.as_deref().map(|v| parse_token("coep", v)).transpose()?,
            corp: step.corp.as_deref().map(|v| parse_token("corp", v)).transpose()?,
        };
        compiled.push(edit("isolation", ConfigEdit::Isolation(patch)));
    }

    if let Some(csp) = step.csp {
        let patch = CspPatch {
            enabled: csp.enabled,
            frame_ancestors: csp
                .frame_ancestors
                .map(|v| free_form("csp.frame_ancestors", v))
                .transpose()?,
            script_src: csp
                .script_src
                .map(|v| free_form("csp.script_src", v))
                .transpose()?,
        };
        compiled.push(edit("csp", ConfigEdit::Csp(patch)));
    }

    if let Some(hsts) = step.hsts {
        let patch = HstsPatch {
            enabled: hsts.enabled,
            max_age: hsts.max_age,
            include_sub_domains: hsts.include_sub_domains,
            preload: hsts.preload,
        };
        compiled.push(edit("hsts", ConfigEdit::Hsts(patch)));
    }

    if let Some(cors) = step.cors {
        let patch = CorsPatch {
            allow_origin: cors
                .allow_origin
                .map(|v| free_form("cors.allow_origin", v))
                .transpose()?,
        };
        compiled.push(edit("cors", ConfigEdit::Cors(patch)));
    }

    if let Some(pp) = step.permissions_policy {
        let patch = PermissionsPolicyPatch {
            enabled: pp.enabled,
            features: pp.features,
        };
        compiled.push(edit("permissions_policy", ConfigEdit::PermissionsPolicy(patch)));
    }

    if compiled.len() != 1 {
        return Err(SettingsError::InvalidStep {
            index,
            reason: format!("expected exactly one edit or action, found {}", compiled.len()),
        });
    }
    Ok(compiled.remove(0))
}

fn edit(label: impl Into<String>, edit: ConfigEdit) -> ScriptStep {
    ScriptStep::Edit {
        label: label.into(),
        edit,
    }
}
