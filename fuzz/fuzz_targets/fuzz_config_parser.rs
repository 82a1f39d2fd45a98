//! Fuzz target for config and edit-script parsing.
//!
//! Goal: parsing and resolving **never panic** on any input. Errors are fine; whatever resolves
//! must evaluate and render.
//!
//! Run with:
//! ```bash
//! cargo +nightly fuzz run fuzz_config_parser
//! ```

#![no_main]

use headerlab_settings::{Overrides, parse_config_toml, parse_edit_script, resolve_config};
use libfuzzer_sys::fuzz_target;

fuzz_target!(|data: &[u8]| {
    if let Ok(text) = std::str::from_utf8(data)
        && let Ok(cfg) = parse_config_toml(text)
        && let Ok(resolved) = resolve_config(cfg, Overrides::default())
    {
        let _ = headerlab_domain::evaluate(&resolved.config);
        let _ = headerlab_domain::generate_headers(&resolved.config);
    }
    if let Ok(text) = std::str::from_utf8(data) {
        let _ = parse_edit_script(text);
    }
});
