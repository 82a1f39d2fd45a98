use crate::{EMPTY_HEADERS_NOTICE, RenderableReport, RenderableStatus};

pub fn render_markdown(report: &RenderableReport) -> String {
    let mut out = String::new();

    out.push_str("# Headerlab report\n\n");
    if let Some(preset) = &report.preset {
        out.push_str(&format!("- Preset: `{}`\n", preset));
    }
    let s = &report.summary;
    out.push_str(&format!(
        "- Attacks: {} blocked / {} allowed\n- MIME sniffing risk: **{}**\n\
         - Isolation: **{}**\n- Config digest: `{}`\n\n",
        s.attacks_blocked, s.attacks_allowed, s.mime_risk, s.isolation, report.config_digest
    ));

    out.push_str("## Scenarios\n\n");
    for o in &report.outcomes {
        let status = match o.status {
            RenderableStatus::Blocked => "BLOCKED",
            RenderableStatus::Allowed => "ALLOWED",
            RenderableStatus::Info => "INFO",
        };
        out.push_str(&format!(
            "- [{}] {} (`{}`): {}\n",
            status, o.title, o.scenario, o.detail
        ));
    }
    out.push('\n');

    if !report.console.is_empty() {
        out.push_str("## Browser console\n\n```text\n");
        for line in &report.console {
            let level = if line.is_error { "ERROR" } else { "INFO " };
            out.push_str(&format!("{} {}\n", level, line.message));
        }
        out.push_str("```\n\n");
    }

    out.push_str("## Response headers\n\n");
    if report.headers.is_empty() {
        out.push_str(EMPTY_HEADERS_NOTICE);
        out.push('\n');
        return out;
    }

    out.push_str("```http\n");
    for h in &report.headers {
        out.push_str(&format!("{}: {}\n", h.name, h.value));
    }
    out.push_str("```\n");

    out
}
