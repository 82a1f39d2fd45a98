use headerlab_types::{GeneratedHeaders, HeaderConfig, ids, present};

/// Build the response headers a server configured with `cfg` would send.
///
/// Only `X-Frame-Options`, `Content-Security-Policy`, `X-Content-Type-Options`,
/// `Strict-Transport-Security` and `Access-Control-Allow-Origin` are emitted. COOP, COEP, CORP,
/// `Referrer-Policy` and `Permissions-Policy` are part of the model but are not rendered here,
/// even though the evaluator reads COOP, COEP and the referrer policy.
pub fn generate_headers(cfg: &HeaderConfig) -> GeneratedHeaders {
    let mut headers = GeneratedHeaders::new();

    if let Some(xfo) = cfg.x_frame_options {
        headers.insert(ids::HEADER_X_FRAME_OPTIONS, xfo.as_str());
    }

    if cfg.csp.enabled {
        headers.insert(ids::HEADER_CONTENT_SECURITY_POLICY, csp_value(cfg));
    }

    if let Some(xcto) = cfg.x_content_type_options {
        headers.insert(ids::HEADER_X_CONTENT_TYPE_OPTIONS, xcto.as_str());
    }

    if cfg.hsts.enabled {
        let mut value = format!("max-age={}", cfg.hsts.max_age);
        if cfg.hsts.include_sub_domains {
            value.push_str("; includeSubDomains");
        }
        if cfg.hsts.preload {
            value.push_str("; preload");
        }
        headers.insert(ids::HEADER_STRICT_TRANSPORT_SECURITY, value);
    }

    if let Some(origin) = present(&cfg.cors.allow_origin) {
        headers.insert(ids::HEADER_ACCESS_CONTROL_ALLOW_ORIGIN, origin);
    }

    headers
}

fn csp_value(cfg: &HeaderConfig) -> String {
    let mut directives = Vec::with_capacity(2);
    if let Some(ancestors) = present(&cfg.csp.frame_ancestors) {
        directives.push(format!("{} {}", ids::CSP_FRAME_ANCESTORS, ancestors));
    }
    match present(&cfg.csp.script_src) {
        Some(src) => directives.push(format!("{} {}", ids::CSP_SCRIPT_SRC, src)),
        // Never emit an empty policy.
        None => directives.push(format!("{} {}", ids::CSP_DEFAULT_SRC, ids::CSP_SELF)),
    }
    directives.join("; ")
}
