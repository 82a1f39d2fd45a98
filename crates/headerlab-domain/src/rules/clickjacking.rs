use headerlab_types::{ClickjackingOutcome, HeaderConfig, XFrameOptions, ids};

/// The attacker page frames the target from a cross-origin document.
pub fn run(cfg: &HeaderConfig) -> ClickjackingOutcome {
    // A present frame-ancestors directive overrides X-Frame-Options entirely.
    if let Some(ancestors) = cfg.csp.effective_frame_ancestors() {
        return match ancestors {
            ids::CSP_NONE => blocked("Blocked by CSP frame-ancestors 'none'."),
            ids::CSP_SELF => {
                blocked("Blocked by CSP frame-ancestors 'self' (attacker is cross-origin).")
            }
            // Allow-list membership is not checked: any other source list permits framing.
            other => ClickjackingOutcome {
                allowed: true,
                reason: format!("Allowed by CSP frame-ancestors {other}."),
            },
        };
    }

    match cfg.x_frame_options {
        Some(XFrameOptions::Deny) => blocked("Blocked by X-Frame-Options: DENY."),
        Some(XFrameOptions::SameOrigin) => {
            blocked("Blocked by X-Frame-Options: SAMEORIGIN (attacker is cross-origin).")
        }
        None => ClickjackingOutcome {
            allowed: true,
            reason: "No protection configured.".to_string(),
        },
    }
}

fn blocked(reason: &str) -> ClickjackingOutcome {
    ClickjackingOutcome {
        allowed: false,
        reason: reason.to_string(),
    }
}
