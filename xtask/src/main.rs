//! Developer tasks (schema generation, fixture conformance, explain coverage).
//!
//! Keeping this separate avoids bloating the end-user CLI.

use anyhow::{Context, bail};
use headerlab_test_util::{fixtures_dir, normalize_nondeterministic};
use schemars::schema_for;
use std::fs;
use std::path::{Path, PathBuf};

/// The workspace root (parent of the xtask directory).
fn project_root() -> PathBuf {
    Path::new(env!("CARGO_MANIFEST_DIR")).join("..")
}

fn schemas_dir() -> PathBuf {
    project_root().join("schemas")
}

/// Schema definition with its target filename.
struct SchemaSpec {
    filename: &'static str,
    generate: fn() -> schemars::Schema,
}

fn generate_report_schema() -> schemars::Schema {
    schema_for!(headerlab_types::HeaderlabReport)
}

fn generate_config_schema() -> schemars::Schema {
    schema_for!(headerlab_settings::HeaderlabConfigV1)
}

fn schema_specs() -> Vec<SchemaSpec> {
    vec![
        SchemaSpec {
            filename: "headerlab.report.v1.json",
            generate: generate_report_schema,
        },
        SchemaSpec {
            filename: "headerlab.config.v1.json",
            generate: generate_config_schema,
        },
    ]
}

/// Serialize a schema to pretty-printed JSON with trailing newline.
fn serialize_schema(schema: &schemars::Schema) -> anyhow::Result<String> {
    let mut json = serde_json::to_string_pretty(schema).context("Failed to serialize schema")?;
    json.push('\n');
    Ok(json)
}

fn emit_schemas() -> anyhow::Result<()> {
    let dir = schemas_dir();
    fs::create_dir_all(&dir).context("Failed to create schemas directory")?;

    for spec in schema_specs() {
        let json = serialize_schema(&(spec.generate)())?;
        let path = dir.join(spec.filename);
        fs::write(&path, &json)
            .with_context(|| format!("Failed to write schema to {}", path.display()))?;
        println!("Wrote {}", path.display());
    }

    println!("\nSchemas emitted successfully.");
    Ok(())
}

/// Check that schemas/ matches what would be generated.
fn validate_schemas() -> anyhow::Result<()> {
    let dir = schemas_dir();
    let mut missing = Vec::new();
    let mut mismatched = Vec::new();

    for spec in schema_specs() {
        let path = dir.join(spec.filename);
        if !path.exists() {
            missing.push(spec.filename);
            continue;
        }

        let expected = serialize_schema(&(spec.generate)())?;
        let actual = fs::read_to_string(&path)
            .with_context(|| format!("Failed to read {}", path.display()))?;
        if expected != actual {
            mismatched.push(spec.filename);
        }
    }

    if missing.is_empty() && mismatched.is_empty() {
        println!("All schemas are up to date.");
        return Ok(());
    }

    if !missing.is_empty() {
        eprintln!("Missing schemas:");
        for name in &missing {
            eprintln!("  - {}", name);
        }
    }
    if !mismatched.is_empty() {
        eprintln!("Schemas out of date:");
        for name in &mismatched {
            eprintln!("  - {}", name);
        }
    }
    eprintln!("\nRun `cargo xtask emit-schemas` to regenerate.");
    bail!("Schema validation failed")
}

fn print_help() {
    eprintln!("xtask commands:");
    eprintln!("  help              Show this message");
    eprintln!("  emit-schemas      Generate JSON schemas from Rust types to schemas/");
    eprintln!("  validate-schemas  Check if schemas/ matches generated output (for CI)");
    eprintln!("  print-schema-ids  Print known schema IDs");
    eprintln!("  conform           Validate fixture configs and headerlab output against schemas");
    eprintln!("  explain-coverage  Validate all scenarios and headers have explanations");
}

fn compile(schema: schemars::Schema) -> anyhow::Result<jsonschema::Validator> {
    let value = serde_json::to_value(schema).context("Failed to convert schema to JSON")?;
    jsonschema::validator_for(&value)
        .map_err(|e| anyhow::anyhow!("Failed to compile schema: {}", e))
}

/// Fixtures whose name starts with one of these are expected to be rejected by the CLI.
const REJECTED_PREFIXES: [&str; 2] = ["invalid_", "unknown_"];

/// Validate every `tests/fixtures/*.toml` against the config schema, run the headerlab binary on
/// it, validate the report against the report schema, and check two runs agree once normalized.
fn conform() -> anyhow::Result<()> {
    let config_schema = compile(generate_config_schema())?;
    let report_schema = compile(generate_report_schema())?;

    let headerlab_bin = project_root().join("target").join("debug").join("headerlab");
    #[cfg(target_os = "windows")]
    let headerlab_bin = headerlab_bin.with_extension("exe");

    if !headerlab_bin.exists() {
        bail!(
            "headerlab binary not found at {}.\n\
            Run `cargo build -p headerlab-cli` first.",
            headerlab_bin.display()
        );
    }

    let mut entries: Vec<PathBuf> = fs::read_dir(fixtures_dir())
        .context("Failed to read tests/fixtures/")?
        .filter_map(|e| e.ok().map(|e| e.path()))
        .filter(|p| p.extension().is_some_and(|ext| ext == "toml"))
        .collect();
    entries.sort();

    let mut errors = Vec::new();
    let mut checked = 0;

    for path in &entries {
        let name = path
            .file_name()
            .map(|n| n.to_string_lossy().to_string())
            .unwrap_or_default();
        checked += 1;

        let text = fs::read_to_string(path)
            .with_context(|| format!("Failed to read fixture '{}'", name))?;
        let as_json: serde_json::Value = toml::from_str(&text)
            .with_context(|| format!("Failed to parse fixture '{}' as TOML", name))?;
        for err in config_schema.iter_errors(&as_json) {
            errors.push(format!("fixture '{}': config schema: {}", name, err));
        }

        let run = || -> anyhow::Result<std::process::Output> {
            std::process::Command::new(&headerlab_bin)
                .arg("--config")
                .arg(path)
                .arg("simulate")
                .output()
                .with_context(|| format!("Failed to run headerlab on fixture '{}'", name))
        };

        let first = run()?;
        let expect_rejection = REJECTED_PREFIXES.iter().any(|p| name.starts_with(p));
        match (first.status.success(), expect_rejection) {
            (true, true) => {
                errors.push(format!("fixture '{}': expected rejection, got success", name));
                continue;
            }
            (false, true) => continue,
            (false, false) => {
                errors.push(format!(
                    "fixture '{}': headerlab exited with {:?}: {}",
                    name,
                    first.status.code(),
                    String::from_utf8_lossy(&first.stderr)
                ));
                continue;
            }
            (true, false) => {}
        }

        let report: serde_json::Value = serde_json::from_slice(&first.stdout)
            .with_context(|| format!("Failed to parse report for fixture '{}'", name))?;
        for err in report_schema.iter_errors(&report) {
            errors.push(format!("fixture '{}': report schema: {}", name, err));
        }

        let second: serde_json::Value = serde_json::from_slice(&run()?.stdout)
            .with_context(|| format!("Failed to parse second report for fixture '{}'", name))?;
        if normalize_nondeterministic(report) != normalize_nondeterministic(second) {
            errors.push(format!("fixture '{}': output differs between runs", name));
        }
    }

    if errors.is_empty() {
        println!("✓ {} fixtures conform", checked);
        Ok(())
    } else {
        for error in &errors {
            eprintln!("  - {}", error);
        }
        bail!("Conformance failed with {} errors", errors.len())
    }
}

/// Validate that all scenario IDs and header names have explanations.
fn explain_coverage() -> anyhow::Result<()> {
    use headerlab_types::explain;

    let scenarios = explain::all_scenario_ids();
    let headers = explain::all_header_names();
    let mut errors = Vec::new();

    for (kind, ids) in [("Scenario", scenarios), ("Header", headers)] {
        for id in ids {
            match explain::lookup_explanation(id) {
                Some(exp) => {
                    if exp.title.is_empty() {
                        errors.push(format!("{} '{}' has empty title", kind, id));
                    }
                    if exp.description.is_empty() {
                        errors.push(format!("{} '{}' has empty description", kind, id));
                    }
                    if exp.remediation.is_empty() {
                        errors.push(format!("{} '{}' has empty remediation", kind, id));
                    }
                }
                None => errors.push(format!("{} '{}' has no explanation", kind, id)),
            }
        }
    }

    if errors.is_empty() {
        println!("✓ {} scenarios have explanations", scenarios.len());
        println!("✓ {} headers have explanations", headers.len());
        println!("\n✓ All explain coverage checks passed!");
        Ok(())
    } else {
        for error in &errors {
            eprintln!("  - {}", error);
        }
        bail!(
            "Explain coverage validation failed with {} errors",
            errors.len()
        )
    }
}

fn main() -> anyhow::Result<()> {
    let args: Vec<String> = std::env::args().collect();
    let cmd = args.get(1).map(|s| s.as_str()).unwrap_or("help");

    match cmd {
        "help" | "--help" | "-h" => {
            print_help();
            Ok(())
        }
        "emit-schemas" => emit_schemas(),
        "validate-schemas" => validate_schemas(),
        "conform" => conform(),
        "explain-coverage" => explain_coverage(),
        "print-schema-ids" => {
            for spec in schema_specs() {
                println!("{}", spec.filename.trim_end_matches(".json"));
            }
            Ok(())
        }
        other => bail!("unknown xtask command: {other}\n\nRun `cargo xtask help` for usage."),
    }
    .context("xtask failed")
}
