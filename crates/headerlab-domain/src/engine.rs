use crate::rules;
use headerlab_types::{HeaderConfig, SimulationResult};

/// Simulate the canonical attacks against a site serving `cfg`.
///
/// Rules are independent of one another; each reads only the fields it needs.
pub fn evaluate(cfg: &HeaderConfig) -> SimulationResult {
    SimulationResult {
        clickjacking: rules::clickjacking::run(cfg),
        inline_script: rules::inline_script::run(cfg),
        mime_sniffing: rules::mime_sniffing::run(cfg),
        referrer_leakage: rules::referrer::run(cfg),
        cors: rules::cors::run(cfg),
        isolation: rules::isolation::run(cfg),
    }
}
