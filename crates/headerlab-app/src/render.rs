//! Render use cases: Markdown reports and raw header blocks.

use crate::report::{renderable_headers, to_renderable};
use headerlab_types::{GeneratedHeaders, HeaderlabReport};

pub fn render_markdown(report: &HeaderlabReport) -> String {
    headerlab_render::render_markdown(&to_renderable(report))
}

pub fn render_headers(headers: &GeneratedHeaders) -> String {
    headerlab_render::render_header_block(&renderable_headers(headers))
}
