//! Stable identifiers for simulated scenarios and the header names they involve.

// Scenarios
pub const SCENARIO_CLICKJACKING: &str = "clickjacking";
pub const SCENARIO_INLINE_SCRIPT: &str = "inline_script";
pub const SCENARIO_MIME_SNIFFING: &str = "mime_sniffing";
pub const SCENARIO_REFERRER_LEAKAGE: &str = "referrer_leakage";
pub const SCENARIO_CORS: &str = "cors";
pub const SCENARIO_ISOLATION: &str = "isolation";

// Header names
pub const HEADER_X_FRAME_OPTIONS: &str = "X-Frame-Options";
pub const HEADER_CONTENT_SECURITY_POLICY: &str = "Content-Security-Policy";
pub const HEADER_X_CONTENT_TYPE_OPTIONS: &str = "X-Content-Type-Options";
pub const HEADER_STRICT_TRANSPORT_SECURITY: &str = "Strict-Transport-Security";
pub const HEADER_ACCESS_CONTROL_ALLOW_ORIGIN: &str = "Access-Control-Allow-Origin";
pub const HEADER_REFERRER_POLICY: &str = "Referrer-Policy";
pub const HEADER_CROSS_ORIGIN_OPENER_POLICY: &str = "Cross-Origin-Opener-Policy";
pub const HEADER_CROSS_ORIGIN_EMBEDDER_POLICY: &str = "Cross-Origin-Embedder-Policy";
pub const HEADER_CROSS_ORIGIN_RESOURCE_POLICY: &str = "Cross-Origin-Resource-Policy";
pub const HEADER_PERMISSIONS_POLICY: &str = "Permissions-Policy";

// CSP directives and source keywords
pub const CSP_FRAME_ANCESTORS: &str = "frame-ancestors";
pub const CSP_SCRIPT_SRC: &str = "script-src";
pub const CSP_DEFAULT_SRC: &str = "default-src";
pub const CSP_NONE: &str = "'none'";
pub const CSP_SELF: &str = "'self'";
pub const CSP_UNSAFE_INLINE: &str = "'unsafe-inline'";

/// The origin every simulated attack is launched from.
pub const ATTACKER_ORIGIN: &str = "https://attacker.com";

/// The page and API the simulated browser is loading.
pub const TARGET_PAGE_URL: &str = "https://target-app.com/";
pub const TARGET_API_URL: &str = "https://target-app.com/api";
