use crate::error::SettingsError;
use crate::model::HeaderlabConfigV1;
use crate::presets;
use headerlab_types::{HeaderConfig, SCHEMA_CONFIG_V1, UnknownToken};
use std::str::FromStr;

#[derive(Clone, Debug, Default)]
pub struct Overrides {
    pub preset: Option<String>,
    pub allow_origin: Option<String>,
}

#[derive(Clone, Debug, PartialEq)]
pub struct ResolvedConfig {
    /// Preset the configuration started from, if any.
    pub preset: Option<String>,
    pub config: HeaderConfig,
}

pub fn resolve_config(
    cfg: HeaderlabConfigV1,
    overrides: Overrides,
) -> Result<ResolvedConfig, SettingsError> {
    if let Some(schema) = cfg.schema.as_deref()
        && schema != SCHEMA_CONFIG_V1
    {
        return Err(SettingsError::UnsupportedSchema(schema.to_string()));
    }

    let preset_name = overrides
        .preset
        .clone()
        .or(cfg.preset.clone())
        .filter(|name| !name.is_empty());

    let mut effective = match preset_name.as_deref() {
        Some(name) => presets::preset(name).ok_or_else(|| SettingsError::UnknownPreset {
            name: name.to_string(),
            expected: presets::preset_names().join("|"),
        })?,
        None => presets::initial_config(),
    };

    // Top-level header tokens
    if let Some(v) = cfg.x_frame_options.as_deref() {
        effective.x_frame_options = parse_token("x_frame_options", v)?;
    }
    if let Some(v) = cfg.x_content_type_options.as_deref() {
        effective.x_content_type_options = parse_token("x_content_type_options", v)?;
    }
    if let Some(v) = cfg.referrer_policy.as_deref() {
        effective.referrer_policy = parse_token("referrer_policy", v)?;
    }
    if let Some(v) = cfg.coop.as_deref() {
        effective.coop = parse_token("coop", v)?;
    }
    if let Some(v) = cfg.coep.as_deref() {
        effective.coep = parse_token("coep", v)?;
    }
    if let Some(v) = cfg.corp.as_deref() {
        effective.corp = parse_token("corp", v)?;
    }

    if let Some(csp) = cfg.csp {
        if let Some(enabled) = csp.enabled {
            effective.csp.enabled = enabled;
        }
        if let Some(v) = csp.frame_ancestors {
            effective.csp.frame_ancestors = free_form("csp.frame_ancestors", v)?;
        }
        if let Some(v) = csp.script_src {
            effective.csp.script_src = free_form("csp.script_src", v)?;
        }
    }

    if let Some(hsts) = cfg.hsts {
        if let Some(enabled) = hsts.enabled {
            effective.hsts.enabled = enabled;
        }
        if let Some(max_age) = hsts.max_age {
            effective.hsts.max_age = max_age;
        }
        if let Some(sub) = hsts.include_sub_domains {
            effective.hsts.include_sub_domains = sub;
        }
        if let Some(preload) = hsts.preload {
            effective.hsts.preload = preload;
        }
    }

    if let Some(origin) = cfg.cors.and_then(|c| c.allow_origin) {
        effective.cors.allow_origin = free_form("cors.allow_origin", origin)?;
    }

    if let Some(pp) = cfg.permissions_policy {
        if let Some(enabled) = pp.enabled {
            effective.permissions_policy.enabled = enabled;
        }
        if let Some(features) = pp.features {
            effective.permissions_policy.features = features;
        }
    }

    // CLI overrides win over the file.
    if let Some(origin) = overrides.allow_origin {
        effective.cors.allow_origin = free_form("allow_origin", origin)?;
    }

    tracing::debug!(
        preset = preset_name.as_deref().unwrap_or("none"),
        csp = effective.csp.enabled,
        hsts = effective.hsts.enabled,
        "resolved header config"
    );

    Ok(ResolvedConfig {
        preset: preset_name,
        config: effective,
    })
}

/// Empty string clears; anything else must be a known token.
pub(crate) fn parse_token<T>(
    field: &'static str,
    value: &str,
) -> Result<Option<T>, SettingsError>
where
    T: FromStr<Err = UnknownToken>,
{
    if value.is_empty() {
        return Ok(None);
    }
    value
        .parse()
        .map(Some)
        .map_err(|source| SettingsError::InvalidValue { field, source })
}

/// Empty string clears. Values end up verbatim in header lines, so CR and LF are refused.
pub(crate) fn free_form(
    field: &'static str,
    value: String,
) -> Result<Option<String>, SettingsError> {
    if value.contains(['\r', '\n']) {
        return Err(SettingsError::LineBreak { field });
    }
    Ok(if value.is_empty() { None } else { Some(value) })
}
