//! Use case orchestration for headerlab.
//!
//! This crate provides the application layer: use cases that coordinate the settings, domain,
//! and render layers. It is intentionally thin and delegates heavy lifting to those layers.
//!
//! The CLI crate depends on this; it only handles argument parsing and I/O.

#![forbid(unsafe_code)]

mod explain;
mod headers;
mod presets;
mod render;
mod replay;
mod report;
mod simulate;

pub use explain::{ExplainOutput, format_explanation, format_not_found, run_explain};
pub use headers::run_headers;
pub use presets::{PresetOverview, format_presets, run_presets};
pub use render::{render_headers, render_markdown};
pub use replay::{ReplayFrame, ReplayInput, ReplayOutput, format_replay, run_replay};
pub use report::{parse_report_json, serialize_report, to_renderable};
pub use simulate::{SimulateInput, SimulateOutput, load_config, run_simulate};
