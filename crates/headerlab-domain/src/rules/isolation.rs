use headerlab_types::{
    CrossOriginEmbedderPolicy, CrossOriginOpenerPolicy, HeaderConfig, IsolationOutcome,
    IsolationStatus,
};

/// COOP + COEP lattice. `corp` does not participate.
pub fn run(cfg: &HeaderConfig) -> IsolationOutcome {
    match (cfg.coop, cfg.coep) {
        (
            Some(CrossOriginOpenerPolicy::SameOrigin),
            Some(CrossOriginEmbedderPolicy::RequireCorp),
        ) => IsolationOutcome {
            status: IsolationStatus::Isolated,
            reason: "High security: Cross-Origin Isolated.".to_string(),
        },
        (None, None) => IsolationOutcome {
            status: IsolationStatus::None,
            reason: "No Cross-Origin isolation headers.".to_string(),
        },
        // Any present value counts, `unsafe-none` included.
        _ => IsolationOutcome {
            status: IsolationStatus::Partial,
            reason: "Partial isolation headers present.".to_string(),
        },
    }
}
