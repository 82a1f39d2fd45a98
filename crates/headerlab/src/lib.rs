//! Simulate which browser-security behaviors a set of HTTP response headers allows or blocks.
//!
//! ```
//! use headerlab::{HeaderConfig, XFrameOptions, evaluate_policy, generate_headers};
//!
//! let cfg = HeaderConfig {
//!     x_frame_options: Some(XFrameOptions::Deny),
//!     ..HeaderConfig::default()
//! };
//! assert!(!evaluate_policy(&cfg).clickjacking.allowed);
//! assert_eq!(generate_headers(&cfg).get("X-Frame-Options"), Some("DENY"));
//! ```

#![forbid(unsafe_code)]

pub use headerlab_domain::{
    console::messages as console_messages, evaluate as evaluate_policy, generate_headers,
};
pub use headerlab_types::{
    ClickjackingOutcome, ConsoleLevel, ConsoleLine, ContentTypeOptions, CorsConfig, CorsOutcome,
    CrossOriginEmbedderPolicy, CrossOriginOpenerPolicy, CrossOriginResourcePolicy, CspConfig,
    GeneratedHeaders, HeaderConfig, HstsConfig, InlineScriptOutcome, IsolationOutcome,
    IsolationStatus, MimeRisk, MimeSniffingOutcome, PermissionsPolicyConfig,
    ReferrerLeakageOutcome, ReferrerPolicy, SimulationResult, XFrameOptions, ids,
};
