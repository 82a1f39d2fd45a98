use headerlab_types::{ReportSummary, SimulationResult};

/// Roll the verdict up into counts of blocking scenarios won and lost by the attacker.
pub fn summarize(result: &SimulationResult) -> ReportSummary {
    let outcomes = [
        result.clickjacking.allowed,
        result.inline_script.allowed,
        result.cors.fetch_allowed,
    ];
    let allowed = outcomes.iter().filter(|a| **a).count() as u32;

    ReportSummary {
        attacks_blocked: outcomes.len() as u32 - allowed,
        attacks_allowed: allowed,
        mime_risk: result.mime_sniffing.risk,
        isolation: result.isolation.status,
    }
}
