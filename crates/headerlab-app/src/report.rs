use anyhow::Context;
use headerlab_render::{
    RenderableConsoleLine, RenderableHeader, RenderableOutcome, RenderableReport,
    RenderableStatus, RenderableSummary,
};
use headerlab_types::{
    ConsoleLevel, GeneratedHeaders, HeaderlabReport, MimeRisk, SCHEMA_REPORT_V1,
    explain::lookup_explanation, ids,
};

pub fn parse_report_json(text: &str) -> anyhow::Result<HeaderlabReport> {
    let value: serde_json::Value = serde_json::from_str(text).context("parse report json")?;

    let schema = value
        .get("schema")
        .and_then(|v| v.as_str())
        .unwrap_or_default()
        .to_string();
    if schema != SCHEMA_REPORT_V1 {
        anyhow::bail!("unknown report schema: {schema}");
    }

    serde_json::from_value(value).context("parse headerlab report")
}

pub fn serialize_report(report: &HeaderlabReport) -> anyhow::Result<Vec<u8>> {
    serde_json::to_vec_pretty(report).context("serialize report")
}

pub fn to_renderable(report: &HeaderlabReport) -> RenderableReport {
    let v = &report.verdict;

    let outcomes = vec![
        outcome(
            ids::SCENARIO_CLICKJACKING,
            blocking(v.clickjacking.allowed),
            v.clickjacking.reason.clone(),
        ),
        outcome(
            ids::SCENARIO_INLINE_SCRIPT,
            blocking(v.inline_script.allowed),
            v.inline_script.reason.clone(),
        ),
        outcome(
            ids::SCENARIO_MIME_SNIFFING,
            blocking(v.mime_sniffing.risk == MimeRisk::High),
            format!("risk {}. {}", v.mime_sniffing.risk.as_str(), v.mime_sniffing.reason),
        ),
        outcome(
            ids::SCENARIO_REFERRER_LEAKAGE,
            RenderableStatus::Info,
            format!(
                "{} Example: `{}`",
                v.referrer_leakage.explanation, v.referrer_leakage.example_header
            ),
        ),
        outcome(
            ids::SCENARIO_CORS,
            blocking(v.cors.fetch_allowed),
            v.cors.reason.clone(),
        ),
        outcome(
            ids::SCENARIO_ISOLATION,
            RenderableStatus::Info,
            format!("{}. {}", v.isolation.status.as_str(), v.isolation.reason),
        ),
    ];

    RenderableReport {
        preset: report.preset.clone(),
        config_digest: report.config_digest.clone(),
        summary: RenderableSummary {
            attacks_blocked: report.summary.attacks_blocked,
            attacks_allowed: report.summary.attacks_allowed,
            mime_risk: report.summary.mime_risk.as_str().to_string(),
            isolation: report.summary.isolation.as_str().to_string(),
        },
        outcomes,
        console: report
            .console
            .iter()
            .map(|line| RenderableConsoleLine {
                is_error: line.level == ConsoleLevel::Error,
                message: line.message.clone(),
            })
            .collect(),
        headers: renderable_headers(&report.headers),
    }
}

pub(crate) fn renderable_headers(headers: &GeneratedHeaders) -> Vec<RenderableHeader> {
    headers
        .iter()
        .map(|(name, value)| RenderableHeader {
            name: name.to_string(),
            value: value.to_string(),
        })
        .collect()
}

fn blocking(attacker_won: bool) -> RenderableStatus {
    if attacker_won {
        RenderableStatus::Allowed
    } else {
        RenderableStatus::Blocked
    }
}

fn outcome(scenario: &str, status: RenderableStatus, detail: String) -> RenderableOutcome {
    let title = lookup_explanation(scenario)
        .map(|e| e.title.to_string())
        .unwrap_or_else(|| scenario.to_string());
    RenderableOutcome {
        scenario: scenario.to_string(),
        title,
        status,
        detail,
    }
}
