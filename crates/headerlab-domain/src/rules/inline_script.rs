use headerlab_types::{HeaderConfig, InlineScriptOutcome, ids};

/// An injected inline `<script>` tag.
///
/// Token detection is plain substring containment; the directive is never tokenized.
pub fn run(cfg: &HeaderConfig) -> InlineScriptOutcome {
    let Some(script_src) = cfg.csp.effective_script_src() else {
        return InlineScriptOutcome {
            allowed: true,
            reason: "No CSP script-src protection.".to_string(),
        };
    };

    if script_src.contains(ids::CSP_UNSAFE_INLINE) {
        InlineScriptOutcome {
            allowed: true,
            reason: "Allowed because CSP script-src includes 'unsafe-inline'.".to_string(),
        }
    } else {
        InlineScriptOutcome {
            allowed: false,
            reason: "Blocked by CSP script-src (missing 'unsafe-inline').".to_string(),
        }
    }
}
