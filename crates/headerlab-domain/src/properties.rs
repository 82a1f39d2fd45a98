//! Property-based tests for the domain crate.
//!
//! These tests use proptest to verify invariants around:
//! - determinism and totality of evaluation over arbitrary configurations
//! - per-rule precedence and matching semantics
//! - which fields the header generator emits

use crate::{evaluate, generate_headers};
use headerlab_types::{
    ContentTypeOptions, CorsConfig, CrossOriginEmbedderPolicy, CrossOriginOpenerPolicy,
    CrossOriginResourcePolicy, CspConfig, HeaderConfig, HstsConfig, IsolationStatus, MimeRisk,
    PermissionsPolicyConfig, ReferrerPolicy, XFrameOptions, ids,
};
use proptest::prelude::*;
use std::collections::BTreeMap;

// ============================================================================
// Strategies for generating arbitrary values
// ============================================================================

fn arb_token<T: Copy + std::fmt::Debug + 'static>(
    all: &'static [T],
) -> impl Strategy<Value = Option<T>> {
    proptest::option::of(proptest::sample::select(all))
}

/// Directive values: the recognized literals plus arbitrary source lists.
fn arb_directive() -> impl Strategy<Value = Option<String>> {
    proptest::option::of(prop_oneof![
        Just(String::new()),
        Just("'none'".to_string()),
        Just("'self'".to_string()),
        Just("'self' 'unsafe-inline'".to_string()),
        Just("https://attacker.com".to_string()),
        prop::string::string_regex("('[a-z-]{1,16}' ?){0,3}(https://[a-z]{1,10}\\.com)?")
            .unwrap(),
    ])
}

/// Non-empty `frame-ancestors` values, so an enabled CSP always decides framing.
fn arb_active_frame_ancestors() -> impl Strategy<Value = String> {
    prop_oneof![
        Just("'none'".to_string()),
        Just("'self'".to_string()),
        Just("https://attacker.com".to_string()),
        prop::string::string_regex("('[a-z-]{1,16}' ?){1,3}").unwrap(),
        prop::string::string_regex("https://[a-z]{1,10}\\.com").unwrap(),
    ]
}

fn arb_origin() -> impl Strategy<Value = Option<String>> {
    proptest::option::of(prop_oneof![
        Just("*".to_string()),
        Just(ids::ATTACKER_ORIGIN.to_string()),
        Just(String::new()),
        prop::string::string_regex("https?://[a-z]{1,12}\\.(com|org|example)").unwrap(),
    ])
}

fn arb_features() -> impl Strategy<Value = BTreeMap<String, Vec<String>>> {
    prop::collection::btree_map(
        prop::string::string_regex("[a-z-]{1,12}").unwrap(),
        prop::collection::vec(
            prop_oneof![Just("'self'".to_string()), Just("*".to_string())],
            0..3,
        ),
        0..4,
    )
}

fn arb_config() -> impl Strategy<Value = HeaderConfig> {
    let headers = (
        arb_token(XFrameOptions::ALL),
        arb_token(ContentTypeOptions::ALL),
        arb_token(ReferrerPolicy::ALL),
        arb_token(CrossOriginOpenerPolicy::ALL),
        arb_token(CrossOriginEmbedderPolicy::ALL),
        arb_token(CrossOriginResourcePolicy::ALL),
    );
    let csp = (any::<bool>(), arb_directive(), arb_directive()).prop_map(
        |(enabled, frame_ancestors, script_src)| CspConfig {
            enabled,
            frame_ancestors,
            script_src,
        },
    );
    let hsts = (any::<bool>(), any::<u64>(), any::<bool>(), any::<bool>()).prop_map(
        |(enabled, max_age, include_sub_domains, preload)| HstsConfig {
            enabled,
            max_age,
            include_sub_domains,
            preload,
        },
    );
    let pp = (any::<bool>(), arb_features())
        .prop_map(|(enabled, features)| PermissionsPolicyConfig { enabled, features });

    (headers, csp, hsts, arb_origin(), pp).prop_map(
        |((xfo, xcto, referrer, coop, coep, corp), csp, hsts, allow_origin, pp)| HeaderConfig {
            x_frame_options: xfo,
            csp,
            x_content_type_options: xcto,
            referrer_policy: referrer,
            hsts,
            coop,
            coep,
            corp,
            cors: CorsConfig { allow_origin },
            permissions_policy: pp,
        },
    )
}

// ============================================================================
// Evaluation invariants
// ============================================================================

proptest! {
    #[test]
    fn evaluation_is_deterministic_and_leaves_input_untouched(cfg in arb_config()) {
        let snapshot = cfg.clone();
        let first = evaluate(&cfg);
        let second = evaluate(&cfg);
        prop_assert_eq!(&first, &second);
        prop_assert_eq!(&cfg, &snapshot);
        prop_assert_eq!(generate_headers(&cfg), generate_headers(&snapshot));
    }

    #[test]
    fn every_reason_is_non_empty(cfg in arb_config()) {
        let r = evaluate(&cfg);
        prop_assert!(!r.clickjacking.reason.is_empty());
        prop_assert!(!r.inline_script.reason.is_empty());
        prop_assert!(!r.mime_sniffing.reason.is_empty());
        prop_assert!(!r.referrer_leakage.explanation.is_empty());
        prop_assert!(!r.referrer_leakage.example_header.is_empty());
        prop_assert!(!r.cors.reason.is_empty());
        prop_assert!(!r.isolation.reason.is_empty());
    }

    #[test]
    fn active_frame_ancestors_decides_clickjacking_regardless_of_xfo(
        cfg in (arb_config(), arb_active_frame_ancestors()).prop_map(|(mut cfg, fa)| {
            cfg.csp.enabled = true;
            cfg.csp.frame_ancestors = Some(fa);
            cfg
        }),
        xfo in arb_token(XFrameOptions::ALL),
    ) {
        prop_assert!(cfg.csp.effective_frame_ancestors().is_some());
        let mut other = cfg.clone();
        other.x_frame_options = xfo;
        prop_assert_eq!(evaluate(&cfg).clickjacking, evaluate(&other).clickjacking);
    }

    #[test]
    fn any_xfo_blocks_when_csp_frame_ancestors_is_inactive(
        cfg in (arb_config(), any::<bool>()).prop_map(|(mut cfg, disable_csp)| {
            if disable_csp {
                cfg.csp.enabled = false;
            } else {
                cfg.csp.frame_ancestors = None;
            }
            cfg
        }),
        xfo in proptest::sample::select(XFrameOptions::ALL),
    ) {
        prop_assert!(cfg.csp.effective_frame_ancestors().is_none());
        let mut cfg = cfg;
        cfg.x_frame_options = Some(xfo);
        prop_assert!(!evaluate(&cfg).clickjacking.allowed);
    }

    #[test]
    fn inline_script_blocked_iff_active_script_src_lacks_token(cfg in arb_config()) {
        let expected_allowed = match cfg.csp.effective_script_src() {
            Some(src) => src.contains("'unsafe-inline'"),
            None => true,
        };
        prop_assert_eq!(evaluate(&cfg).inline_script.allowed, expected_allowed);
    }

    #[test]
    fn mime_risk_tracks_nosniff_only(cfg in arb_config()) {
        let expected = if cfg.x_content_type_options.is_some() {
            MimeRisk::Low
        } else {
            MimeRisk::High
        };
        prop_assert_eq!(evaluate(&cfg).mime_sniffing.risk, expected);
    }

    #[test]
    fn cors_allows_only_wildcard_or_attacker(cfg in arb_config()) {
        let origin = cfg.cors.allow_origin.as_deref();
        let expected = matches!(origin, Some("*") | Some(ids::ATTACKER_ORIGIN));
        prop_assert_eq!(evaluate(&cfg).cors.fetch_allowed, expected);
    }

    #[test]
    fn isolation_lattice(cfg in arb_config()) {
        let status = evaluate(&cfg).isolation.status;
        let expected = match (cfg.coop, cfg.coep) {
            (
                Some(CrossOriginOpenerPolicy::SameOrigin),
                Some(CrossOriginEmbedderPolicy::RequireCorp),
            ) => IsolationStatus::Isolated,
            (None, None) => IsolationStatus::None,
            _ => IsolationStatus::Partial,
        };
        prop_assert_eq!(status, expected);
    }

    #[test]
    fn corp_and_permissions_policy_never_affect_the_verdict(
        cfg in arb_config(),
        corp in arb_token(CrossOriginResourcePolicy::ALL),
        features in arb_features(),
    ) {
        let mut other = cfg.clone();
        other.corp = corp;
        other.permissions_policy.enabled = !cfg.permissions_policy.enabled;
        other.permissions_policy.features = features;
        prop_assert_eq!(evaluate(&cfg), evaluate(&other));
    }
}

// ============================================================================
// Generator invariants
// ============================================================================

proptest! {
    #[test]
    fn generator_emits_exactly_the_enabled_headers(cfg in arb_config()) {
        let headers = generate_headers(&cfg);
        prop_assert_eq!(
            headers.contains(ids::HEADER_X_FRAME_OPTIONS),
            cfg.x_frame_options.is_some()
        );
        prop_assert_eq!(headers.contains(ids::HEADER_CONTENT_SECURITY_POLICY), cfg.csp.enabled);
        prop_assert_eq!(
            headers.contains(ids::HEADER_X_CONTENT_TYPE_OPTIONS),
            cfg.x_content_type_options.is_some()
        );
        prop_assert_eq!(headers.contains(ids::HEADER_STRICT_TRANSPORT_SECURITY), cfg.hsts.enabled);
        prop_assert_eq!(
            headers.contains(ids::HEADER_ACCESS_CONTROL_ALLOW_ORIGIN),
            cfg.cors.allow_origin.as_deref().is_some_and(|o| !o.is_empty())
        );
        prop_assert!(!headers.contains(ids::HEADER_REFERRER_POLICY));
        prop_assert!(!headers.contains(ids::HEADER_CROSS_ORIGIN_OPENER_POLICY));
        prop_assert!(!headers.contains(ids::HEADER_CROSS_ORIGIN_EMBEDDER_POLICY));
        prop_assert!(!headers.contains(ids::HEADER_CROSS_ORIGIN_RESOURCE_POLICY));
        prop_assert!(!headers.contains(ids::HEADER_PERMISSIONS_POLICY));
    }

    #[test]
    fn csp_value_is_never_empty_and_always_has_a_source_directive(
        cfg in arb_config().prop_map(|mut cfg| {
            cfg.csp.enabled = true;
            cfg
        }),
    ) {
        let headers = generate_headers(&cfg);
        let value = headers.get(ids::HEADER_CONTENT_SECURITY_POLICY).unwrap();
        prop_assert!(value.contains("script-src ") || value.contains("default-src 'self'"));
    }

    #[test]
    fn hsts_value_starts_with_max_age(
        cfg in arb_config().prop_map(|mut cfg| {
            cfg.hsts.enabled = true;
            cfg
        }),
    ) {
        let headers = generate_headers(&cfg);
        let value = headers.get(ids::HEADER_STRICT_TRANSPORT_SECURITY).unwrap();
        let expected_prefix = format!("max-age={}", cfg.hsts.max_age);
        prop_assert!(value.starts_with(&expected_prefix));
        prop_assert_eq!(value.ends_with("; preload"), cfg.hsts.preload);
        prop_assert_eq!(value.contains("; includeSubDomains"), cfg.hsts.include_sub_domains);
    }
}
