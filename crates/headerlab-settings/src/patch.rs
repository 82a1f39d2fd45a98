//! Typed partial updates to a [`HeaderConfig`].
//!
//! Each patch touches one section. A field left as `None` keeps the current value; for
//! clearable fields `Some(None)` removes the value, and so does `Some(Some(""))`.

use headerlab_types::{
    ContentTypeOptions, CrossOriginEmbedderPolicy, CrossOriginOpenerPolicy,
    CrossOriginResourcePolicy, HeaderConfig, ReferrerPolicy, XFrameOptions,
};
use std::collections::BTreeMap;

#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct CspPatch {
    pub enabled: Option<bool>,
    pub frame_ancestors: Option<Option<String>>,
    pub script_src: Option<Option<String>>,
}

#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct HstsPatch {
    pub enabled: Option<bool>,
    pub max_age: Option<u64>,
    pub include_sub_domains: Option<bool>,
    pub preload: Option<bool>,
}

#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct CorsPatch {
    pub allow_origin: Option<Option<String>>,
}

#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct IsolationPatch {
    pub coop: Option<Option<CrossOriginOpenerPolicy>>,
    pub coep: Option<Option<CrossOriginEmbedderPolicy>>,
    pub corp: Option<Option<CrossOriginResourcePolicy>>,
}

#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct PermissionsPolicyPatch {
    pub enabled: Option<bool>,
    /// Replaces the whole feature map.
    pub features: Option<BTreeMap<String, Vec<String>>>,
}

/// One user edit. Applying an edit never mutates its input.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum ConfigEdit {
    XFrameOptions(Option<XFrameOptions>),
    ContentTypeOptions(Option<ContentTypeOptions>),
    ReferrerPolicy(Option<ReferrerPolicy>),
    Csp(CspPatch),
    Hsts(HstsPatch),
    Cors(CorsPatch),
    Isolation(IsolationPatch),
    PermissionsPolicy(PermissionsPolicyPatch),
    /// Swap in a whole configuration, e.g. a preset.
    Replace(HeaderConfig),
}

impl ConfigEdit {
    pub fn apply(&self, current: &HeaderConfig) -> HeaderConfig {
        let mut next = current.clone();
        match self {
            ConfigEdit::XFrameOptions(v) => next.x_frame_options = *v,
            ConfigEdit::ContentTypeOptions(v) => next.x_content_type_options = *v,
            ConfigEdit::ReferrerPolicy(v) => next.referrer_policy = *v,
            ConfigEdit::Csp(p) => {
                if let Some(enabled) = p.enabled {
                    next.csp.enabled = enabled;
                }
                if let Some(v) = &p.frame_ancestors {
                    next.csp.frame_ancestors = normalized(v);
                }
                if let Some(v) = &p.script_src {
                    next.csp.script_src = normalized(v);
                }
            }
            ConfigEdit::Hsts(p) => {
                if let Some(enabled) = p.enabled {
                    next.hsts.enabled = enabled;
                }
                if let Some(max_age) = p.max_age {
                    next.hsts.max_age = max_age;
                }
                if let Some(sub) = p.include_sub_domains {
                    next.hsts.include_sub_domains = sub;
                }
                if let Some(preload) = p.preload {
                    next.hsts.preload = preload;
                }
            }
            ConfigEdit::Cors(p) => {
                if let Some(v) = &p.allow_origin {
                    next.cors.allow_origin = normalized(v);
                }
            }
            ConfigEdit::Isolation(p) => {
                if let Some(v) = p.coop {
                    next.coop = v;
                }
                if let Some(v) = p.coep {
                    next.coep = v;
                }
                if let Some(v) = p.corp {
                    next.corp = v;
                }
            }
            ConfigEdit::PermissionsPolicy(p) => {
                if let Some(enabled) = p.enabled {
                    next.permissions_policy.enabled = enabled;
                }
                if let Some(features) = &p.features {
                    next.permissions_policy.features = features.clone();
                }
            }
            ConfigEdit::Replace(cfg) => next = cfg.clone(),
        }
        next
    }
}

fn normalized(value: &Option<String>) -> Option<String> {
    value.as_ref().filter(|v| !v.is_empty()).cloned()
}
