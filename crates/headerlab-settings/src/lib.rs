//! Config parsing, preset resolution, and the editable configuration store.
//!
//! This crate is intentionally IO-free: it parses and resolves configuration provided as strings,
//! and keeps edit history in memory.

#![forbid(unsafe_code)]

mod error;
mod history;
mod model;
mod patch;
mod presets;
mod resolve;
mod script;

pub use error::SettingsError;
pub use history::ConfigHistory;
pub use model::{
    CorsSection, CspSection, HeaderlabConfigV1, HstsSection, PermissionsPolicySection,
};
pub use patch::{
    ConfigEdit, CorsPatch, CspPatch, HstsPatch, IsolationPatch, PermissionsPolicyPatch,
};
pub use presets::{initial_config, preset, preset_names};
pub use resolve::{Overrides, ResolvedConfig};
pub use script::{EditScriptV1, EditStepV1, ScriptStep, parse_edit_script};

/// Parse `headerlab.toml` (or equivalent) into a typed model.
pub fn parse_config_toml(input: &str) -> Result<HeaderlabConfigV1, SettingsError> {
    let cfg: HeaderlabConfigV1 = toml::from_str(input)?;
    Ok(cfg)
}

/// Resolve the header configuration handed to the evaluator (preset + file + overrides).
pub fn resolve_config(
    cfg: HeaderlabConfigV1,
    overrides: Overrides,
) -> Result<ResolvedConfig, SettingsError> {
    resolve::resolve_config(cfg, overrides)
}
