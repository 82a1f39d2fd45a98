//! Fuzz target for evaluation and header generation over arbitrary configurations.
//!
//! Goal: evaluation, header generation, and the simulated console are total and deterministic.
//!
//! Run with:
//! ```bash
//! cargo +nightly fuzz run fuzz_evaluate
//! ```

#![no_main]

use arbitrary::Arbitrary;
use headerlab_types::{
    ContentTypeOptions, CorsConfig, CrossOriginEmbedderPolicy, CrossOriginOpenerPolicy,
    CrossOriginResourcePolicy, CspConfig, HeaderConfig, HstsConfig, PermissionsPolicyConfig,
    ReferrerPolicy, XFrameOptions,
};
use libfuzzer_sys::fuzz_target;
use std::collections::BTreeMap;

#[derive(Debug, Arbitrary)]
struct Input {
    xfo: Option<u8>,
    xcto: bool,
    referrer: Option<u8>,
    coop: Option<u8>,
    coep: Option<u8>,
    corp: Option<u8>,
    csp_enabled: bool,
    frame_ancestors: Option<String>,
    script_src: Option<String>,
    hsts: (bool, u64, bool, bool),
    allow_origin: Option<String>,
    pp_enabled: bool,
    features: BTreeMap<String, Vec<String>>,
}

fn pick<T: Copy>(all: &[T], index: Option<u8>) -> Option<T> {
    index.map(|i| all[i as usize % all.len()])
}

fuzz_target!(|input: Input| {
    let (enabled, max_age, include_sub_domains, preload) = input.hsts;
    let cfg = HeaderConfig {
        x_frame_options: pick(XFrameOptions::ALL, input.xfo),
        csp: CspConfig {
            enabled: input.csp_enabled,
            frame_ancestors: input.frame_ancestors,
            script_src: input.script_src,
        },
        x_content_type_options: input.xcto.then_some(ContentTypeOptions::NoSniff),
        referrer_policy: pick(ReferrerPolicy::ALL, input.referrer),
        hsts: HstsConfig {
            enabled,
            max_age,
            include_sub_domains,
            preload,
        },
        coop: pick(CrossOriginOpenerPolicy::ALL, input.coop),
        coep: pick(CrossOriginEmbedderPolicy::ALL, input.coep),
        corp: pick(CrossOriginResourcePolicy::ALL, input.corp),
        cors: CorsConfig {
            allow_origin: input.allow_origin,
        },
        permissions_policy: PermissionsPolicyConfig {
            enabled: input.pp_enabled,
            features: input.features,
        },
    };

    let first = headerlab_domain::evaluate(&cfg);
    assert_eq!(first, headerlab_domain::evaluate(&cfg));
    assert_eq!(
        headerlab_domain::generate_headers(&cfg),
        headerlab_domain::generate_headers(&cfg)
    );
    assert_eq!(
        headerlab_domain::console::messages(&cfg),
        headerlab_domain::console::messages(&cfg)
    );
});
