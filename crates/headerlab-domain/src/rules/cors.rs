use headerlab_types::{CorsOutcome, HeaderConfig, ids, present};

/// Script on the attacker origin fetches the target's API and reads the response.
pub fn run(cfg: &HeaderConfig) -> CorsOutcome {
    match present(&cfg.cors.allow_origin) {
        Some("*") => CorsOutcome {
            fetch_allowed: true,
            reason: "Allowed by Access-Control-Allow-Origin: *.".to_string(),
        },
        Some(ids::ATTACKER_ORIGIN) => CorsOutcome {
            fetch_allowed: true,
            reason: "Allowed by specific Access-Control-Allow-Origin.".to_string(),
        },
        Some(other) => CorsOutcome {
            fetch_allowed: false,
            reason: format!("Blocked. Allow-Origin '{other}' does not match attacker."),
        },
        None => CorsOutcome {
            fetch_allowed: false,
            reason: "No Access-Control-Allow-Origin header.".to_string(),
        },
    }
}
