//! Rendering utilities for human-facing surfaces (Markdown report, raw header block).

#![forbid(unsafe_code)]

mod headers;
mod markdown;
mod model;

pub use headers::{EMPTY_HEADERS_NOTICE, render_header_block};
pub use markdown::render_markdown;
pub use model::{
    RenderableConsoleLine, RenderableHeader, RenderableOutcome, RenderableReport,
    RenderableStatus, RenderableSummary,
};
