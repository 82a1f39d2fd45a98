use headerlab_types::{CspConfig, HeaderConfig, HstsConfig};

/// Start from the all-absent configuration and apply `edit`.
pub fn config(edit: impl FnOnce(&mut HeaderConfig)) -> HeaderConfig {
    let mut cfg = HeaderConfig::default();
    edit(&mut cfg);
    cfg
}

/// An enabled CSP section with the given directives.
pub fn csp(frame_ancestors: Option<&str>, script_src: Option<&str>) -> CspConfig {
    CspConfig {
        enabled: true,
        frame_ancestors: frame_ancestors.map(str::to_string),
        script_src: script_src.map(str::to_string),
    }
}

/// An enabled HSTS section.
pub fn hsts(max_age: u64, include_sub_domains: bool, preload: bool) -> HstsConfig {
    HstsConfig {
        enabled: true,
        max_age,
        include_sub_domains,
        preload,
    }
}
