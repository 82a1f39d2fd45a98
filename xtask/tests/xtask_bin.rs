use std::process::Command;

fn xtask(arg: &str) -> std::process::Output {
    Command::new(env!("CARGO_BIN_EXE_xtask"))
        .arg(arg)
        .output()
        .expect("run xtask")
}

#[test]
fn xtask_help_runs() {
    let output = xtask("help");
    assert!(output.status.success());
    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(stderr.contains("xtask commands"));
    assert!(stderr.contains("explain-coverage"));
}

#[test]
fn explain_coverage_passes() {
    let output = xtask("explain-coverage");
    assert!(output.status.success());
    assert!(String::from_utf8_lossy(&output.stdout).contains("6 scenarios have explanations"));
}

#[test]
fn print_schema_ids_lists_both_schemas() {
    let output = xtask("print-schema-ids");
    let stdout = String::from_utf8_lossy(&output.stdout);
    assert!(stdout.contains("headerlab.report.v1"));
    assert!(stdout.contains("headerlab.config.v1"));
}

#[test]
fn unknown_command_fails() {
    assert!(!xtask("frobnicate").status.success());
}
