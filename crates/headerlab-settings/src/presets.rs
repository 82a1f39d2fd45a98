use headerlab_types::{
    ContentTypeOptions, CorsConfig, CrossOriginEmbedderPolicy, CrossOriginOpenerPolicy,
    CrossOriginResourcePolicy, CspConfig, HeaderConfig, HstsConfig, PermissionsPolicyConfig,
    ReferrerPolicy, XFrameOptions,
};

/// Preset names in catalog order.
pub fn preset_names() -> &'static [&'static str] {
    &["minimal", "strict", "api"]
}

/// Preset configurations are opinionated starting points.
///
/// Keep these small and readable. Anything bespoke belongs in a config file.
pub fn preset(name: &str) -> Option<HeaderConfig> {
    match name {
        "minimal" => Some(minimal_preset()),
        "strict" => Some(strict_preset()),
        "api" => Some(api_preset()),
        _ => None,
    }
}

/// The store's starting point: nothing sent, HSTS pre-filled with a one-year max-age.
pub fn initial_config() -> HeaderConfig {
    HeaderConfig {
        hsts: HstsConfig {
            enabled: false,
            max_age: 31_536_000,
            include_sub_domains: false,
            preload: false,
        },
        ..HeaderConfig::default()
    }
}

fn minimal_preset() -> HeaderConfig {
    HeaderConfig {
        x_frame_options: Some(XFrameOptions::SameOrigin),
        csp: CspConfig {
            enabled: true,
            frame_ancestors: Some("'self'".to_string()),
            script_src: Some("'self' 'unsafe-inline'".to_string()),
        },
        x_content_type_options: Some(ContentTypeOptions::NoSniff),
        referrer_policy: Some(ReferrerPolicy::StrictOriginWhenCrossOrigin),
        hsts: HstsConfig::default(),
        coop: None,
        coep: None,
        corp: None,
        cors: CorsConfig::default(),
        permissions_policy: PermissionsPolicyConfig::default(),
    }
}

fn strict_preset() -> HeaderConfig {
    HeaderConfig {
        x_frame_options: Some(XFrameOptions::Deny),
        csp: CspConfig {
            enabled: true,
            frame_ancestors: Some("'none'".to_string()),
            script_src: Some("'self'".to_string()),
        },
        x_content_type_options: Some(ContentTypeOptions::NoSniff),
        referrer_policy: Some(ReferrerPolicy::NoReferrer),
        hsts: HstsConfig {
            enabled: true,
            max_age: 63_072_000,
            include_sub_domains: true,
            preload: true,
        },
        coop: Some(CrossOriginOpenerPolicy::SameOrigin),
        coep: Some(CrossOriginEmbedderPolicy::RequireCorp),
        corp: Some(CrossOriginResourcePolicy::SameOrigin),
        cors: CorsConfig::default(),
        permissions_policy: PermissionsPolicyConfig {
            enabled: true,
            features: Default::default(),
        },
    }
}

fn api_preset() -> HeaderConfig {
    // APIs are never framed and never run inline script; they are read cross-origin.
    HeaderConfig {
        x_frame_options: Some(XFrameOptions::Deny),
        csp: CspConfig {
            enabled: true,
            frame_ancestors: Some("'none'".to_string()),
            script_src: Some("'none'".to_string()),
        },
        x_content_type_options: Some(ContentTypeOptions::NoSniff),
        referrer_policy: Some(ReferrerPolicy::NoReferrer),
        hsts: HstsConfig {
            enabled: true,
            max_age: 31_536_000,
            include_sub_domains: true,
            preload: false,
        },
        coop: None,
        coep: None,
        corp: None,
        cors: CorsConfig {
            allow_origin: Some("*".to_string()),
        },
        permissions_policy: PermissionsPolicyConfig::default(),
    }
}
