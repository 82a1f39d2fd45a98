//! The `presets` use case: list each preset with what it sends and how it fares.

use headerlab_types::{GeneratedHeaders, ReportSummary};

#[derive(Clone, Debug)]
pub struct PresetOverview {
    pub name: &'static str,
    pub headers: GeneratedHeaders,
    pub summary: ReportSummary,
}

pub fn run_presets() -> Vec<PresetOverview> {
    headerlab_settings::preset_names()
        .iter()
        .filter_map(|&name| {
            let cfg = headerlab_settings::preset(name)?;
            let verdict = headerlab_domain::evaluate(&cfg);
            Some(PresetOverview {
                name,
                headers: headerlab_domain::generate_headers(&cfg),
                summary: headerlab_domain::report::summarize(&verdict),
            })
        })
        .collect()
}

/// Format the preset catalog for terminal display.
pub fn format_presets(presets: &[PresetOverview]) -> String {
    let mut out = String::new();

    for (i, p) in presets.iter().enumerate() {
        if i > 0 {
            out.push('\n');
        }
        out.push_str(&format!(
            "{} (blocked {}, allowed {}, mime risk {}, isolation {})\n",
            p.name,
            p.summary.attacks_blocked,
            p.summary.attacks_allowed,
            p.summary.mime_risk.as_str(),
            p.summary.isolation.as_str()
        ));
        for (name, value) in p.headers.iter() {
            out.push_str(&format!("  {}: {}\n", name, value));
        }
    }

    out
}
