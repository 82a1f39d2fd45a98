//! End-to-end CLI tests against the config fixtures in `tests/fixtures/`.

use assert_cmd::Command;
use headerlab_test_util::{fixtures_dir, normalize_nondeterministic};
use predicates::prelude::*;
use serde_json::Value;
use std::path::PathBuf;
use tempfile::TempDir;

#[allow(deprecated)]
fn headerlab_cmd() -> Command {
    Command::cargo_bin("headerlab").expect("headerlab binary not found - run `cargo build` first")
}

fn fixture(name: &str) -> PathBuf {
    fixtures_dir().join(name)
}

fn simulate_json(args: &[&str]) -> Value {
    let output = headerlab_cmd()
        .args(args)
        .arg("simulate")
        .output()
        .expect("run headerlab");
    assert!(
        output.status.success(),
        "stderr: {}",
        String::from_utf8_lossy(&output.stderr)
    );
    serde_json::from_slice(&output.stdout).expect("stdout is JSON")
}

#[test]
fn missing_config_file_uses_defaults() {
    let tmp = TempDir::new().expect("temp dir");
    let report = simulate_json(&[
        "--config",
        tmp.path().join("absent.toml").to_str().expect("utf-8 path"),
    ]);
    assert_eq!(report["schema"], "headerlab.report.v1");
    assert_eq!(report["verdict"]["clickjacking"]["allowed"], true);
    assert_eq!(report["verdict"]["mimeSniffing"]["risk"], "high");
    assert_eq!(report["headers"], Value::Array(Vec::new()));
    assert!(report.get("preset").is_none());
}

#[test]
fn strict_fixture_blocks_all_attacks() {
    let report = simulate_json(&["--config", fixture("strict.toml").to_str().expect("utf-8")]);
    assert_eq!(report["preset"], "strict");
    assert_eq!(report["summary"]["attacks_blocked"], 3);
    assert_eq!(report["summary"]["attacks_allowed"], 0);
    assert_eq!(report["verdict"]["isolation"]["status"], "isolated");
    assert_eq!(
        report["verdict"]["referrerLeakage"]["exampleHeader"],
        "(no header)"
    );
}

#[test]
fn csp_frame_ancestors_beats_xfo_end_to_end() {
    let report = simulate_json(&[
        "--config",
        fixture("clickjacking_precedence.toml").to_str().expect("utf-8"),
    ]);
    assert_eq!(report["verdict"]["clickjacking"]["allowed"], true);
    assert_eq!(
        report["verdict"]["clickjacking"]["reason"],
        "Allowed by CSP frame-ancestors https://partner.example."
    );
    assert_eq!(report["verdict"]["inlineScript"]["allowed"], false);

    let console = report["console"].as_array().expect("console array");
    assert_eq!(console.len(), 2);
    assert_eq!(console[0]["level"], "error");
    assert!(
        console[0]["message"]
            .as_str()
            .expect("message")
            .contains("'X-Frame-Options' to 'deny'")
    );
    assert!(
        console[1]["message"]
            .as_str()
            .expect("message")
            .contains("\"script-src 'self'\"")
    );
}

#[test]
fn allow_origin_flag_overrides_fixture() {
    let path = fixture("cors_friendly.toml");
    let path = path.to_str().expect("utf-8");

    let report = simulate_json(&["--config", path]);
    assert_eq!(report["verdict"]["cors"]["fetchAllowed"], false);
    assert_eq!(report["verdict"]["mimeSniffing"]["risk"], "high");

    let report = simulate_json(&["--config", path, "--allow-origin", "https://attacker.com"]);
    assert_eq!(report["verdict"]["cors"]["fetchAllowed"], true);
}

#[test]
fn runs_are_identical_after_normalization() {
    let args = ["--config", "/nonexistent/headerlab.toml", "--preset", "api"];
    let a = normalize_nondeterministic(simulate_json(&args));
    let b = normalize_nondeterministic(simulate_json(&args));
    assert_eq!(a, b);
    assert_eq!(a["generated_at"], "__TIMESTAMP__");
    assert_eq!(a["tool"]["version"], "__VERSION__");
}

#[test]
fn headers_command_prints_header_block() {
    headerlab_cmd()
        .args(["--config", fixture("cors_friendly.toml").to_str().expect("utf-8")])
        .arg("headers")
        .assert()
        .success()
        .stdout(predicate::str::contains("X-Frame-Options: SAMEORIGIN\n"))
        .stdout(predicate::str::contains(
            "Strict-Transport-Security: max-age=0; includeSubDomains\n",
        ))
        .stdout(predicate::str::contains(
            "Access-Control-Allow-Origin: https://friendly.com\n",
        ))
        .stdout(predicate::str::contains("X-Content-Type-Options").not());
}

#[test]
fn headers_command_with_nothing_set() {
    headerlab_cmd()
        .args(["--config", "/nonexistent/headerlab.toml", "headers"])
        .assert()
        .success()
        .stdout("No security headers set.\n");
}

#[test]
fn invalid_token_fails_with_field_name() {
    headerlab_cmd()
        .args(["--config", fixture("invalid_token.toml").to_str().expect("utf-8")])
        .arg("simulate")
        .assert()
        .code(1)
        .stderr(predicate::str::contains("x_frame_options"))
        .stderr(predicate::str::contains("DENY|SAMEORIGIN"));
}

#[test]
fn line_break_in_allow_origin_fails_before_rendering_headers() {
    headerlab_cmd()
        .args(["--config", "/nonexistent/headerlab.toml"])
        .args(["--allow-origin", "https://a.example\nX-Evil: 1"])
        .arg("headers")
        .assert()
        .code(1)
        .stdout(predicate::str::contains("X-Evil").not())
        .stderr(predicate::str::contains("must not contain CR or LF"));
}

#[test]
fn replay_walks_edit_script() {
    let script = fixture("scripts/harden.toml");
    headerlab_cmd()
        .args(["--config", "/nonexistent/headerlab.toml"])
        .arg("replay")
        .arg(script.to_str().expect("utf-8"))
        .assert()
        .success()
        .stdout(predicate::str::contains(
            "   1. preset minimal: blocked 2, allowed 1",
        ))
        .stdout(predicate::str::contains("   2. csp: blocked 3, allowed 0"))
        .stdout(predicate::str::contains("   3. cors: blocked 2, allowed 1"))
        .stdout(predicate::str::contains("   4. undo: blocked 3, allowed 0"))
        .stdout(predicate::str::contains("isolation isolated"))
        .stdout(predicate::str::contains("Access-Control-Allow-Origin").not());
}

#[test]
fn replay_rejects_bad_step() {
    let dir = TempDir::new().expect("tempdir");
    let script = dir.path().join("bad.toml");
    std::fs::write(&script, "[[step]]\naction = \"rewind\"\n").expect("write script");
    headerlab_cmd()
        .args(["--config", "/nonexistent/headerlab.toml"])
        .arg("replay")
        .arg(&script)
        .assert()
        .code(1)
        .stderr(predicate::str::contains("edit script step 1"));
}

#[test]
fn unknown_preset_fails() {
    headerlab_cmd()
        .args(["--config", fixture("unknown_preset.toml").to_str().expect("utf-8")])
        .arg("headers")
        .assert()
        .code(1)
        .stderr(predicate::str::contains("unknown preset: paranoid"));
}

#[test]
fn simulate_writes_json_then_md_renders_it() {
    let tmp = TempDir::new().expect("temp dir");
    let report_path = tmp.path().join("out").join("report.json");
    let md_path = tmp.path().join("comment.md");

    headerlab_cmd()
        .args(["--config", fixture("isolation_partial.toml").to_str().expect("utf-8")])
        .args(["simulate", "--out", report_path.to_str().expect("utf-8")])
        .assert()
        .success()
        .stdout("");
    assert!(report_path.exists());

    headerlab_cmd()
        .args([
            "md",
            "--report",
            report_path.to_str().expect("utf-8"),
            "--output",
            md_path.to_str().expect("utf-8"),
        ])
        .assert()
        .success();

    let md = std::fs::read_to_string(&md_path).expect("read markdown");
    assert!(md.contains("# Headerlab report"));
    assert!(md.contains("Isolation: **partial**"));
    assert!(md.contains("Policy is unsafe-url."));
    assert!(md.contains("No security headers set."));
}

#[test]
fn simulate_markdown_to_stdout() {
    headerlab_cmd()
        .args(["--config", "/nonexistent/headerlab.toml", "--preset", "minimal"])
        .args(["simulate", "--format", "md"])
        .assert()
        .success()
        .stdout(predicate::str::contains("- Preset: `minimal`"))
        .stdout(predicate::str::contains("[ALLOWED] Inline Script Injection"))
        .stdout(predicate::str::contains("```http\nX-Frame-Options: SAMEORIGIN\n"));
}

#[test]
fn md_rejects_foreign_report() {
    let tmp = TempDir::new().expect("temp dir");
    let path = tmp.path().join("report.json");
    std::fs::write(&path, r#"{"schema":"other.report.v2"}"#).expect("write");

    headerlab_cmd()
        .args(["md", "--report", path.to_str().expect("utf-8")])
        .assert()
        .code(1)
        .stderr(predicate::str::contains("unknown report schema"));
}

#[test]
fn presets_command_lists_catalog() {
    headerlab_cmd()
        .arg("presets")
        .assert()
        .success()
        .stdout(predicate::str::starts_with("minimal ("))
        .stdout(predicate::str::contains("\nstrict ("))
        .stdout(predicate::str::contains("\napi ("));
}

#[test]
fn explain_known_and_unknown() {
    headerlab_cmd()
        .args(["explain", "clickjacking"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Clickjacking\n============"))
        .stdout(predicate::str::contains("Remediation"));

    headerlab_cmd()
        .args(["explain", "x-content-type-options"])
        .assert()
        .success()
        .stdout(predicate::str::contains("nosniff"));

    headerlab_cmd()
        .args(["explain", "csrf"])
        .assert()
        .code(1)
        .stderr(predicate::str::contains("Unknown scenario or header: csrf"))
        .stderr(predicate::str::contains("  - referrer_leakage"));
}
