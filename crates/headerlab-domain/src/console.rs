//! Simulated browser console.
//!
//! Lines are derived from the configuration, not from the verdict: an `X-Frame-Options: DENY`
//! refusal is logged even when CSP `frame-ancestors` decides the clickjacking outcome.

use headerlab_types::{ConsoleLine, HeaderConfig, XFrameOptions, ids, present};

/// Logged when no framing, CSP, or CORS header is configured.
pub const IDLE_MESSAGE: &str = "Navigate to logical simulation...";

/// Console output for one page load of the target, in display order.
pub fn messages(cfg: &HeaderConfig) -> Vec<ConsoleLine> {
    let mut lines = Vec::new();

    if cfg.x_frame_options == Some(XFrameOptions::Deny) {
        lines.push(ConsoleLine::error(format!(
            "Refused to display '{}' in a frame because it set 'X-Frame-Options' to 'deny'.",
            ids::TARGET_PAGE_URL
        )));
    }

    if cfg.csp.effective_frame_ancestors() == Some(ids::CSP_NONE) {
        lines.push(ConsoleLine::error(format!(
            "Refused to frame '{}' because an ancestor violates the following Content Security \
             Policy directive: \"frame-ancestors 'none'\".",
            ids::TARGET_PAGE_URL
        )));
    }

    if let Some(src) = cfg.csp.effective_script_src()
        && !src.contains(ids::CSP_UNSAFE_INLINE)
    {
        lines.push(ConsoleLine::error(format!(
            "Refused to execute inline script because it violates the following Content \
             Security Policy directive: \"script-src {src}\"."
        )));
    }

    let allow_origin = present(&cfg.cors.allow_origin);
    if let Some(origin) = allow_origin
        && origin != "*"
        && origin != ids::ATTACKER_ORIGIN
    {
        lines.push(ConsoleLine::error(format!(
            "Access to fetch at '{}' from origin '{}' has been blocked by CORS policy: The \
             'Access-Control-Allow-Origin' header has a value '{origin}' that is not equal to \
             the supplied origin.",
            ids::TARGET_API_URL,
            ids::ATTACKER_ORIGIN
        )));
    }

    if cfg.x_frame_options.is_none() && !cfg.csp.enabled && allow_origin.is_none() {
        lines.push(ConsoleLine::info(IDLE_MESSAGE));
    }

    lines
}
