use headerlab_types::{HeaderConfig, ReferrerLeakageOutcome, ReferrerPolicy};

/// Informational: describes the outgoing `Referer` header, never blocks.
pub fn run(cfg: &HeaderConfig) -> ReferrerLeakageOutcome {
    match cfg.referrer_policy {
        Some(policy) => ReferrerLeakageOutcome {
            explanation: format!("Policy is {policy}."),
            example_header: if policy == ReferrerPolicy::NoReferrer {
                "(no header)".to_string()
            } else {
                "Referer: ...".to_string()
            },
        },
        None => ReferrerLeakageOutcome {
            explanation: "Default browser behavior (usually strict-origin-when-cross-origin)."
                .to_string(),
            example_header: "Referer: https://example.com/page".to_string(),
        },
    }
}
