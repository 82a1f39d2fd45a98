use headerlab_types::HeaderConfig;
use sha2::{Digest, Sha256};

/// Compute a stable SHA-256 fingerprint of a configuration.
///
/// Identity fields, in order, as `key=value` joined by `|`:
/// every header token, both CSP directives, the HSTS section, the CORS origin, and the
/// permissions-policy features (already sorted by name). Absent values render as empty.
pub fn config_digest(cfg: &HeaderConfig) -> String {
    fn opt<T: ToString>(v: &Option<T>) -> String {
        v.as_ref().map(ToString::to_string).unwrap_or_default()
    }

    let mut parts = vec![
        format!("xfo={}", opt(&cfg.x_frame_options)),
        format!("csp.enabled={}", cfg.csp.enabled),
        format!("csp.frame_ancestors={}", opt(&cfg.csp.frame_ancestors)),
        format!("csp.script_src={}", opt(&cfg.csp.script_src)),
        format!("xcto={}", opt(&cfg.x_content_type_options)),
        format!("referrer={}", opt(&cfg.referrer_policy)),
        format!("hsts.enabled={}", cfg.hsts.enabled),
        format!("hsts.max_age={}", cfg.hsts.max_age),
        format!("hsts.include_sub_domains={}", cfg.hsts.include_sub_domains),
        format!("hsts.preload={}", cfg.hsts.preload),
        format!("coop={}", opt(&cfg.coop)),
        format!("coep={}", opt(&cfg.coep)),
        format!("corp={}", opt(&cfg.corp)),
        format!("cors.allow_origin={}", opt(&cfg.cors.allow_origin)),
        format!("pp.enabled={}", cfg.permissions_policy.enabled),
    ];
    for (feature, allow) in &cfg.permissions_policy.features {
        parts.push(format!("pp.{}={}", feature, allow.join(" ")));
    }
    let canonical = parts.join("|");

    let mut hasher = Sha256::new();
    hasher.update(canonical.as_bytes());
    let digest = hasher.finalize();
    hex::encode(digest)
}
