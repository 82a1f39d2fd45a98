//! CLI entry point for headerlab.
//!
//! This module is intentionally thin: it handles argument parsing, I/O, and exit codes.
//! All business logic lives in the `headerlab-app` crate.

use anyhow::Context;
use camino::{Utf8Path, Utf8PathBuf};
use clap::{Parser, Subcommand, ValueEnum};
use headerlab_app::{
    ExplainOutput, ReplayInput, SimulateInput, format_explanation, format_not_found,
    format_presets, format_replay, parse_report_json, render_headers, render_markdown,
    run_explain, run_headers, run_presets, run_replay, run_simulate, serialize_report,
};
use headerlab_settings::Overrides;
use std::process::ExitCode;

#[derive(Parser, Debug)]
#[command(
    name = "headerlab",
    version,
    about = "Simulate what a browser allows or blocks under a set of security response headers"
)]
struct Cli {
    /// Path to headerlab config TOML. A missing file means defaults.
    #[arg(long, global = true, default_value = "headerlab.toml")]
    config: Utf8PathBuf,

    /// Start from a preset (minimal|strict|api), overriding the config file's `preset`.
    #[arg(long, global = true)]
    preset: Option<String>,

    /// Override `Access-Control-Allow-Origin` (empty string clears it).
    #[arg(long, global = true)]
    allow_origin: Option<String>,

    /// Log filter (e.g. `debug`, `headerlab_settings=trace`). Defaults to `RUST_LOG`, then `warn`.
    #[arg(long, global = true)]
    log_level: Option<String>,

    #[command(subcommand)]
    cmd: Commands,
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// Evaluate the configuration and emit a report.
    Simulate {
        /// Output format.
        #[arg(long, value_enum, default_value_t = Format::Json)]
        format: Format,

        /// Where to write the report (prints to stdout if not specified).
        #[arg(long, short)]
        out: Option<Utf8PathBuf>,
    },

    /// Print only the response headers the configuration would send.
    Headers,

    /// List the built-in presets.
    Presets,

    /// Explain a scenario (e.g. "clickjacking") or a header (e.g. "X-Frame-Options").
    Explain {
        identifier: String,
    },

    /// Replay a TOML edit script (edits, undo, redo) on top of the configuration.
    Replay {
        /// Path to the edit script.
        script: Utf8PathBuf,
    },

    /// Render markdown from an existing JSON report.
    Md {
        /// Path to the JSON report file.
        #[arg(long)]
        report: Utf8PathBuf,

        /// Where to write the Markdown output (prints to stdout if not specified).
        #[arg(long, short)]
        output: Option<Utf8PathBuf>,
    },
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, ValueEnum)]
enum Format {
    Json,
    Md,
}

fn main() -> ExitCode {
    let cli = Cli::parse();
    init_tracing(cli.log_level.as_deref());

    let result = match &cli.cmd {
        Commands::Simulate { format, out } => cmd_simulate(&cli, *format, out.as_deref()),
        Commands::Headers => cmd_headers(&cli),
        Commands::Presets => {
            print!("{}", format_presets(&run_presets()));
            Ok(ExitCode::SUCCESS)
        }
        Commands::Explain { identifier } => Ok(cmd_explain(identifier)),
        Commands::Replay { script } => cmd_replay(&cli, script),
        Commands::Md { report, output } => cmd_md(report, output.as_deref()),
    };

    match result {
        Ok(code) => code,
        Err(err) => {
            eprintln!("headerlab error: {err:#}");
            ExitCode::FAILURE
        }
    }
}

fn init_tracing(level: Option<&str>) {
    let filter = match level {
        Some(level) => tracing_subscriber::EnvFilter::new(level),
        None => tracing_subscriber::EnvFilter::try_from_default_env()
            .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("warn")),
    };

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(true)
        .init();
}

/// Read the config file if it exists; a missing file yields an empty config.
fn read_config(path: &Utf8Path) -> anyhow::Result<String> {
    if !path.exists() {
        tracing::debug!(path = %path, "config file not found; using defaults");
        return Ok(String::new());
    }
    std::fs::read_to_string(path).with_context(|| format!("read config: {}", path))
}

fn overrides(cli: &Cli) -> Overrides {
    Overrides {
        preset: cli.preset.clone(),
        allow_origin: cli.allow_origin.clone(),
    }
}

fn cmd_simulate(cli: &Cli, format: Format, out: Option<&Utf8Path>) -> anyhow::Result<ExitCode> {
    let config_text = read_config(&cli.config)?;
    let output = run_simulate(SimulateInput {
        config_text: &config_text,
        overrides: overrides(cli),
    })?;

    let text = match format {
        Format::Json => {
            let bytes = serialize_report(&output.report)?;
            let mut text = String::from_utf8(bytes).context("report is not utf-8")?;
            text.push('\n');
            text
        }
        Format::Md => render_markdown(&output.report),
    };

    match out {
        Some(path) => write_text_file(path, &text).context("write report")?,
        None => print!("{}", text),
    }
    Ok(ExitCode::SUCCESS)
}

fn cmd_headers(cli: &Cli) -> anyhow::Result<ExitCode> {
    let config_text = read_config(&cli.config)?;
    let headers = run_headers(SimulateInput {
        config_text: &config_text,
        overrides: overrides(cli),
    })?;
    print!("{}", render_headers(&headers));
    Ok(ExitCode::SUCCESS)
}

fn cmd_replay(cli: &Cli, script_path: &Utf8Path) -> anyhow::Result<ExitCode> {
    let config_text = read_config(&cli.config)?;
    let script_text = std::fs::read_to_string(script_path)
        .with_context(|| format!("read edit script: {}", script_path))?;
    let output = run_replay(ReplayInput {
        base: SimulateInput {
            config_text: &config_text,
            overrides: overrides(cli),
        },
        script_text: &script_text,
    })?;
    print!("{}", format_replay(&output));
    Ok(ExitCode::SUCCESS)
}

fn cmd_md(report_path: &Utf8Path, output: Option<&Utf8Path>) -> anyhow::Result<ExitCode> {
    let report_text = std::fs::read_to_string(report_path)
        .with_context(|| format!("read report: {}", report_path))?;
    let report = parse_report_json(&report_text)?;
    let md = render_markdown(&report);

    match output {
        Some(out_path) => write_text_file(out_path, &md).context("write markdown output")?,
        None => print!("{}", md),
    }
    Ok(ExitCode::SUCCESS)
}

fn cmd_explain(identifier: &str) -> ExitCode {
    match run_explain(identifier) {
        ExplainOutput::Found(exp) => {
            print!("{}", format_explanation(&exp));
            ExitCode::SUCCESS
        }
        ExplainOutput::NotFound {
            identifier,
            available_scenarios,
            available_headers,
        } => {
            eprint!(
                "{}",
                format_not_found(&identifier, available_scenarios, available_headers)
            );
            ExitCode::FAILURE
        }
    }
}

fn write_text_file(path: &Utf8Path, text: &str) -> anyhow::Result<()> {
    if let Some(parent) = path.parent()
        && !parent.as_str().is_empty()
    {
        std::fs::create_dir_all(parent).with_context(|| format!("create directory: {}", parent))?;
    }
    std::fs::write(path, text).with_context(|| format!("write text: {}", path))?;
    Ok(())
}
