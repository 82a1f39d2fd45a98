//! The `replay` use case: walk an edit script through the undo/redo history and evaluate
//! every intermediate configuration.

use crate::simulate::{SimulateInput, load_config};
use anyhow::Context;
use headerlab_settings::{ConfigHistory, ScriptStep};
use headerlab_types::{GeneratedHeaders, HeaderConfig, ReportSummary};

/// Input for the replay use case.
#[derive(Clone, Debug, Default)]
pub struct ReplayInput<'a> {
    /// Starting configuration.
    pub base: SimulateInput<'a>,
    /// Edit script contents.
    pub script_text: &'a str,
}

/// State after one step.
#[derive(Clone, Debug, PartialEq)]
pub struct ReplayFrame {
    pub label: String,
    /// `false` when an undo or redo had nothing to move to.
    pub moved: bool,
    pub summary: ReportSummary,
}

#[derive(Clone, Debug)]
pub struct ReplayOutput {
    pub start: ReportSummary,
    pub frames: Vec<ReplayFrame>,
    pub history: ConfigHistory,
}

impl ReplayOutput {
    pub fn final_config(&self) -> &HeaderConfig {
        self.history.current()
    }

    pub fn final_headers(&self) -> GeneratedHeaders {
        headerlab_domain::generate_headers(self.final_config())
    }
}

pub fn run_replay(input: ReplayInput<'_>) -> anyhow::Result<ReplayOutput> {
    let resolved = load_config(&input.base)?;
    let steps =
        headerlab_settings::parse_edit_script(input.script_text).context("parse edit script")?;

    let mut history = ConfigHistory::new(resolved.config);
    let start = summarize(history.current());
    let mut frames = Vec::with_capacity(steps.len());

    for step in &steps {
        let moved = match step {
            ScriptStep::Edit { edit, .. } => {
                history.apply(edit);
                true
            }
            ScriptStep::Undo => history.undo(),
            ScriptStep::Redo => history.redo(),
        };
        frames.push(ReplayFrame {
            label: step.label().to_string(),
            moved,
            summary: summarize(history.current()),
        });
    }

    tracing::info!(steps = frames.len(), history = history.len(), "replay complete");

    Ok(ReplayOutput {
        start,
        frames,
        history,
    })
}

fn summarize(cfg: &HeaderConfig) -> ReportSummary {
    headerlab_domain::report::summarize(&headerlab_domain::evaluate(cfg))
}

/// One line per step, then the headers of the final configuration.
pub fn format_replay(output: &ReplayOutput) -> String {
    let mut out = String::new();
    out.push_str(&format!("   start: {}\n", format_summary(&output.start)));

    for (i, frame) in output.frames.iter().enumerate() {
        let note = if frame.moved { "" } else { " (no-op)" };
        out.push_str(&format!(
            "{:>4}. {}{}: {}\n",
            i + 1,
            frame.label,
            note,
            format_summary(&frame.summary)
        ));
    }

    out.push_str("\nFinal headers:\n");
    out.push_str(&crate::render_headers(&output.final_headers()));
    out
}

fn format_summary(s: &ReportSummary) -> String {
    format!(
        "blocked {}, allowed {}, mime risk {}, isolation {}",
        s.attacks_blocked,
        s.attacks_allowed,
        s.mime_risk.as_str(),
        s.isolation.as_str()
    )
}
