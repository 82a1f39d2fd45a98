//! Explain registry for scenarios and headers.
//!
//! Maps scenario IDs and header names to short lessons with a before/after header example.

use crate::ids;

/// Explanation entry for a scenario or header.
#[derive(Debug, Clone)]
pub struct Explanation {
    /// Short title.
    pub title: &'static str,
    /// What the attack or header is and how the simulator models it.
    pub description: &'static str,
    /// How to configure the response to defend against it.
    pub remediation: &'static str,
    /// Before/after response header examples.
    pub examples: ExamplePair,
}

/// Before and after header examples.
#[derive(Debug, Clone)]
pub struct ExamplePair {
    /// Headers of an unprotected response.
    pub before: &'static str,
    /// Headers of a protected response.
    pub after: &'static str,
}

/// Look up an explanation by scenario ID or header name.
///
/// Header names match case-insensitively; scenario IDs are exact.
pub fn lookup_explanation(identifier: &str) -> Option<Explanation> {
    match identifier {
        ids::SCENARIO_CLICKJACKING => return Some(explain_clickjacking()),
        ids::SCENARIO_INLINE_SCRIPT => return Some(explain_inline_script()),
        ids::SCENARIO_MIME_SNIFFING => return Some(explain_mime_sniffing()),
        ids::SCENARIO_REFERRER_LEAKAGE => return Some(explain_referrer_leakage()),
        ids::SCENARIO_CORS => return Some(explain_cors()),
        ids::SCENARIO_ISOLATION => return Some(explain_isolation()),
        _ => {}
    }

    let header = all_header_names()
        .iter()
        .find(|name| name.eq_ignore_ascii_case(identifier))?;
    match *header {
        ids::HEADER_X_FRAME_OPTIONS => Some(explain_x_frame_options()),
        ids::HEADER_CONTENT_SECURITY_POLICY => Some(explain_csp()),
        ids::HEADER_X_CONTENT_TYPE_OPTIONS => Some(explain_x_content_type_options()),
        ids::HEADER_STRICT_TRANSPORT_SECURITY => Some(explain_hsts()),
        ids::HEADER_ACCESS_CONTROL_ALLOW_ORIGIN => Some(explain_allow_origin()),
        ids::HEADER_REFERRER_POLICY => Some(explain_referrer_policy()),
        _ => None,
    }
}

/// List all known scenario IDs, in verdict order.
pub fn all_scenario_ids() -> &'static [&'static str] {
    &[
        ids::SCENARIO_CLICKJACKING,
        ids::SCENARIO_INLINE_SCRIPT,
        ids::SCENARIO_MIME_SNIFFING,
        ids::SCENARIO_REFERRER_LEAKAGE,
        ids::SCENARIO_CORS,
        ids::SCENARIO_ISOLATION,
    ]
}

/// List all headers with an explanation.
pub fn all_header_names() -> &'static [&'static str] {
    &[
        ids::HEADER_X_FRAME_OPTIONS,
        ids::HEADER_CONTENT_SECURITY_POLICY,
        ids::HEADER_X_CONTENT_TYPE_OPTIONS,
        ids::HEADER_STRICT_TRANSPORT_SECURITY,
        ids::HEADER_ACCESS_CONTROL_ALLOW_ORIGIN,
        ids::HEADER_REFERRER_POLICY,
    ]
}

// --- Scenario explanations ---

fn explain_clickjacking() -> Explanation {
    Explanation {
        title: "Clickjacking",
        description: "\
An attacker page loads the target inside an invisible or disguised iframe and tricks the
user into clicking buttons they cannot see.

The simulator frames the target from https://attacker.com, which is always cross-origin.
CSP `frame-ancestors` wins over `X-Frame-Options` whenever CSP is enabled and the
directive is set, even if X-Frame-Options would have been stricter.",
        remediation: "\
Send `Content-Security-Policy: frame-ancestors 'none'` (or `'self'` if the site frames
itself). Keep `X-Frame-Options: DENY` for browsers that predate frame-ancestors.",
        examples: ExamplePair {
            before: "Content-Security-Policy: frame-ancestors https://attacker.com",
            after: "X-Frame-Options: DENY\nContent-Security-Policy: frame-ancestors 'none'",
        },
    }
}

fn explain_inline_script() -> Explanation {
    Explanation {
        title: "Inline Script Injection",
        description: "\
A reflected or stored XSS payload injects an inline `<script>` tag into the page.

With CSP enabled and a `script-src` directive set, inline scripts run only if the
directive contains the `'unsafe-inline'` token anywhere in its value.",
        remediation: "\
Set `script-src` to the origins you trust and leave out `'unsafe-inline'`. Move inline
code into external files, or allow individual blocks with nonces or hashes.",
        examples: ExamplePair {
            before: "Content-Security-Policy: script-src 'self' 'unsafe-inline'",
            after: "Content-Security-Policy: script-src 'self'",
        },
    }
}

fn explain_mime_sniffing() -> Explanation {
    Explanation {
        title: "MIME Type Sniffing",
        description: "\
Browsers may ignore the declared Content-Type and guess a resource's type from its bytes.
An uploaded \"image\" can then be executed as a script or rendered as HTML.",
        remediation: "Send `X-Content-Type-Options: nosniff` on every response.",
        examples: ExamplePair {
            before: "Content-Type: image/png",
            after: "Content-Type: image/png\nX-Content-Type-Options: nosniff",
        },
    }
}

fn explain_referrer_leakage() -> Explanation {
    Explanation {
        title: "Referrer Leakage",
        description: "\
Following a link sends the `Referer` request header, which can expose full URLs
(including tokens in query strings) to third parties.

This scenario is informational: the simulator reports which policy applies and what the
outgoing header would look like, and never blocks anything.",
        remediation: "\
Prefer `strict-origin-when-cross-origin` or `no-referrer`. Avoid `unsafe-url`.",
        examples: ExamplePair {
            before: "Referrer-Policy: unsafe-url",
            after: "Referrer-Policy: no-referrer",
        },
    }
}

fn explain_cors() -> Explanation {
    Explanation {
        title: "Cross-Origin Fetch (CORS)",
        description: "\
Script on https://attacker.com calls `fetch()` against the target's API and tries to read
the response.

The read is allowed when `Access-Control-Allow-Origin` is `*` or exactly
`https://attacker.com`. Any other value blocks it; so does a missing header.",
        remediation: "\
Only reflect origins you trust. Never combine `*` with endpoints that return private data.",
        examples: ExamplePair {
            before: "Access-Control-Allow-Origin: *",
            after: "Access-Control-Allow-Origin: https://app.example.com",
        },
    }
}

fn explain_isolation() -> Explanation {
    Explanation {
        title: "Cross-Origin Isolation",
        description: "\
A document is cross-origin isolated when it sends both
`Cross-Origin-Opener-Policy: same-origin` and `Cross-Origin-Embedder-Policy: require-corp`.
Isolation unlocks powerful APIs such as SharedArrayBuffer and protects against Spectre-style
side channels.

Any other combination where at least one of the two headers is present counts as partial.",
        remediation: "\
Send COOP `same-origin` and COEP `require-corp`, and mark embeddable resources with
`Cross-Origin-Resource-Policy`.",
        examples: ExamplePair {
            before: "Cross-Origin-Opener-Policy: same-origin-allow-popups",
            after: "Cross-Origin-Opener-Policy: same-origin\n\
                    Cross-Origin-Embedder-Policy: require-corp",
        },
    }
}

// --- Header explanations ---

fn explain_x_frame_options() -> Explanation {
    Explanation {
        title: "X-Frame-Options",
        description: "\
Indicates whether a browser may render the page in a `<frame>`, `<iframe>`, `<embed>` or
`<object>`. Used to avoid clickjacking attacks. Superseded by CSP frame-ancestors when both
are present.",
        remediation: "Send `X-Frame-Options: DENY`, or `SAMEORIGIN` if the site frames itself.",
        examples: ExamplePair {
            before: "",
            after: "X-Frame-Options: DENY",
        },
    }
}

fn explain_csp() -> Explanation {
    Explanation {
        title: "Content-Security-Policy",
        description: "\
Controls which resources the user agent may load for a page. Helps prevent cross-site
scripting and data injection attacks.

The simulator models two directives: `frame-ancestors` and `script-src`. An enabled policy
without either falls back to `default-src 'self'`.",
        remediation: "\
Start from `default-src 'self'`, add `frame-ancestors 'none'`, and tighten `script-src`
until no `'unsafe-inline'` remains.",
        examples: ExamplePair {
            before: "",
            after: "Content-Security-Policy: frame-ancestors 'none'; script-src 'self'",
        },
    }
}

fn explain_x_content_type_options() -> Explanation {
    Explanation {
        title: "X-Content-Type-Options",
        description: "\
Prevents the browser from MIME type sniffing, forcing it to stick to the declared
Content-Type. Stops non-executable files (like images) from being treated as scripts.",
        remediation: "Send `X-Content-Type-Options: nosniff`.",
        examples: ExamplePair {
            before: "",
            after: "X-Content-Type-Options: nosniff",
        },
    }
}

fn explain_hsts() -> Explanation {
    Explanation {
        title: "Strict-Transport-Security",
        description: "\
Tells browsers to talk to the site over HTTPS only, for `max-age` seconds.
`includeSubDomains` extends the rule to every subdomain and `preload` opts into browser
preload lists.",
        remediation: "\
Send `max-age=63072000; includeSubDomains; preload` once every subdomain serves HTTPS.",
        examples: ExamplePair {
            before: "",
            after: "Strict-Transport-Security: max-age=63072000; includeSubDomains; preload",
        },
    }
}

fn explain_allow_origin() -> Explanation {
    Explanation {
        title: "Access-Control-Allow-Origin",
        description: "\
Names the origin allowed to read a cross-origin response. `*` allows every origin to read
non-credentialed responses.",
        remediation: "Return a specific trusted origin instead of `*` for private data.",
        examples: ExamplePair {
            before: "Access-Control-Allow-Origin: *",
            after: "Access-Control-Allow-Origin: https://app.example.com",
        },
    }
}

fn explain_referrer_policy() -> Explanation {
    Explanation {
        title: "Referrer-Policy",
        description: "\
Controls how much of the current URL is sent in the `Referer` header of outgoing requests.
Without it, browsers default to `strict-origin-when-cross-origin`.

Note: the simulator reads this setting but does not emit the header in generated output.",
        remediation: "Send `Referrer-Policy: strict-origin-when-cross-origin` or stricter.",
        examples: ExamplePair {
            before: "Referrer-Policy: unsafe-url",
            after: "Referrer-Policy: strict-origin-when-cross-origin",
        },
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn lookup_by_scenario_id() {
        assert!(lookup_explanation(ids::SCENARIO_CLICKJACKING).is_some());
        assert!(lookup_explanation(ids::SCENARIO_INLINE_SCRIPT).is_some());
        assert!(lookup_explanation(ids::SCENARIO_MIME_SNIFFING).is_some());
        assert!(lookup_explanation(ids::SCENARIO_REFERRER_LEAKAGE).is_some());
        assert!(lookup_explanation(ids::SCENARIO_CORS).is_some());
        assert!(lookup_explanation(ids::SCENARIO_ISOLATION).is_some());
    }

    #[test]
    fn lookup_header_ignores_case() {
        let exp = lookup_explanation("x-frame-options").expect("known header");
        assert_eq!(exp.title, "X-Frame-Options");
        assert!(lookup_explanation("STRICT-TRANSPORT-SECURITY").is_some());
    }

    #[test]
    fn lookup_unknown_returns_none() {
        assert!(lookup_explanation("csrf").is_none());
        assert!(lookup_explanation("X-XSS-Protection").is_none());
        assert!(lookup_explanation("").is_none());
    }

    #[test]
    fn every_listed_identifier_resolves() {
        for id in all_scenario_ids().iter().chain(all_header_names()) {
            let exp = lookup_explanation(id)
                .unwrap_or_else(|| panic!("{id} should be in registry"));
            assert!(!exp.title.is_empty());
            assert!(!exp.description.is_empty());
            assert!(!exp.remediation.is_empty());
        }
    }
}
