//! The `headers` use case: only the response headers a config would produce.

use crate::simulate::{SimulateInput, load_config};
use headerlab_types::GeneratedHeaders;

pub fn run_headers(input: SimulateInput<'_>) -> anyhow::Result<GeneratedHeaders> {
    let resolved = load_config(&input)?;
    Ok(headerlab_domain::generate_headers(&resolved.config))
}
