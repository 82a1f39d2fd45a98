//! The `simulate` use case: resolve config, evaluate it, and produce a report.

use anyhow::Context;
use headerlab_settings::{HeaderlabConfigV1, Overrides, ResolvedConfig};
use headerlab_types::{HeaderlabReport, SCHEMA_REPORT_V1, ToolMeta};
use time::OffsetDateTime;

/// Input for the simulate use case.
#[derive(Clone, Debug, Default)]
pub struct SimulateInput<'a> {
    /// Config file contents (empty string if none was given).
    pub config_text: &'a str,
    /// CLI overrides.
    pub overrides: Overrides,
}

/// Output from the simulate use case.
#[derive(Clone, Debug)]
pub struct SimulateOutput {
    pub report: HeaderlabReport,
    /// The resolved configuration used.
    pub resolved_config: ResolvedConfig,
}

/// Parse and resolve a config file. Empty text yields the initial configuration.
pub fn load_config(input: &SimulateInput<'_>) -> anyhow::Result<ResolvedConfig> {
    let cfg = if input.config_text.trim().is_empty() {
        HeaderlabConfigV1::default()
    } else {
        headerlab_settings::parse_config_toml(input.config_text).context("parse config")?
    };

    headerlab_settings::resolve_config(cfg, input.overrides.clone()).context("resolve config")
}

/// Run the simulate use case: resolve config, evaluate policy, generate headers, build the report.
pub fn run_simulate(input: SimulateInput<'_>) -> anyhow::Result<SimulateOutput> {
    let resolved = load_config(&input)?;
    let config = &resolved.config;

    let verdict = headerlab_domain::evaluate(config);
    let headers = headerlab_domain::generate_headers(config);
    let console = headerlab_domain::console::messages(config);
    let summary = headerlab_domain::report::summarize(&verdict);
    let config_digest = headerlab_domain::fingerprint::config_digest(config);

    tracing::info!(
        preset = resolved.preset.as_deref().unwrap_or("none"),
        blocked = summary.attacks_blocked,
        allowed = summary.attacks_allowed,
        headers = headers.len(),
        "simulation complete"
    );

    let report = HeaderlabReport {
        schema: SCHEMA_REPORT_V1.to_string(),
        tool: ToolMeta {
            name: "headerlab".to_string(),
            version: env!("CARGO_PKG_VERSION").to_string(),
        },
        generated_at: OffsetDateTime::now_utc(),
        preset: resolved.preset.clone(),
        config_digest,
        config: config.clone(),
        headers,
        verdict,
        console,
        summary,
    };

    Ok(SimulateOutput {
        report,
        resolved_config: resolved,
    })
}
