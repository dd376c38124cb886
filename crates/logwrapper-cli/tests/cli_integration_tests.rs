//! CLI integration tests
//!
//! These tests drive the built binary and check what lands in the file sink.

use std::fs;
use std::process::Command;
use tempfile::TempDir;

fn cli() -> Command {
    Command::new(env!("CARGO_BIN_EXE_logwrapper-cli"))
}

fn read_records(path: &std::path::Path) -> Vec<serde_json::Value> {
    fs::read_to_string(path)
        .unwrap()
        .lines()
        .map(|line| serde_json::from_str(line).unwrap())
        .collect()
}

#[test]
fn test_emit_to_file_sink() {
    let temp_dir = TempDir::new().unwrap();

    let output = cli()
        .args([
            "emit",
            "--file-name",
            "app.log",
            "--file-path",
            temp_dir.path().to_str().unwrap(),
            "--at",
            "warn",
            "disk almost full",
        ])
        .output()
        .expect("Failed to execute CLI");

    assert!(
        output.status.success(),
        "stderr: {}",
        String::from_utf8_lossy(&output.stderr)
    );

    let records = read_records(&temp_dir.path().join("app.log"));
    assert_eq!(records.len(), 1);
    assert_eq!(records[0]["level"], "warn");
    assert_eq!(records[0]["message"], "disk almost full");
    assert!(records[0]["@timestamp"].is_string());
    assert!(records[0].get("caller").is_none());
}

#[test]
fn test_emit_with_toml_config() {
    let temp_dir = TempDir::new().unwrap();
    let config_path = temp_dir.path().join("logwrapper.toml");
    fs::write(
        &config_path,
        format!(
            "level = \"error\"\nfile = true\nfileName = \"from-config.log\"\nfilePath = \"{}\"\ntimeFieldFormat = \"%Y\"\n",
            temp_dir.path().display()
        ),
    )
    .unwrap();
    let log_path = temp_dir.path().join("from-config.log");

    let below = cli()
        .args(["emit", "--config", config_path.to_str().unwrap(), "quiet"])
        .output()
        .unwrap();
    assert!(below.status.success());

    let at = cli()
        .args([
            "emit",
            "--config",
            config_path.to_str().unwrap(),
            "--at",
            "error",
            "loud",
        ])
        .output()
        .unwrap();
    assert!(at.status.success());

    let records = read_records(&log_path);
    assert_eq!(records.len(), 1);
    assert_eq!(records[0]["message"], "loud");
    assert_eq!(records[0]["@timestamp"].as_str().unwrap().len(), 4);
    assert!(records[0]["caller"]
        .as_str()
        .unwrap()
        .contains("commands/emit.rs:"));
}

#[test]
fn test_emit_json_message() {
    let temp_dir = TempDir::new().unwrap();

    let output = cli()
        .args([
            "emit",
            "--file-name",
            "json.log",
            "--file-path",
            temp_dir.path().to_str().unwrap(),
            "--json",
            r#"{"name":"value","key":"value"}"#,
        ])
        .output()
        .unwrap();
    assert!(output.status.success());

    let records = read_records(&temp_dir.path().join("json.log"));
    assert_eq!(records[0]["message"], r#"{"key":"value","name":"value"}"#);
}

#[test]
fn test_fatal_exits_with_status_one_after_writing() {
    let temp_dir = TempDir::new().unwrap();

    let output = cli()
        .args([
            "emit",
            "--file-name",
            "fatal.log",
            "--file-path",
            temp_dir.path().to_str().unwrap(),
            "--at",
            "fatal",
            "going down",
        ])
        .output()
        .unwrap();

    assert_eq!(output.status.code(), Some(1));
    let records = read_records(&temp_dir.path().join("fatal.log"));
    assert_eq!(records.len(), 1);
    assert_eq!(records[0]["level"], "fatal");
}

#[test]
fn test_open_error_reported() {
    let temp_dir = TempDir::new().unwrap();
    let missing = temp_dir.path().join("no/such/dir");

    let output = cli()
        .args([
            "emit",
            "--file-name",
            "app.log",
            "--file-path",
            missing.to_str().unwrap(),
            "hello",
        ])
        .output()
        .unwrap();

    assert_eq!(output.status.code(), Some(1));
    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(
        stderr.contains("Error: failed to open log file"),
        "stderr: {}",
        stderr
    );
}

#[test]
fn test_console_sink_renders_human_line() {
    let output = cli()
        .args(["emit", "--console", "--at", "info", "hello console"])
        .output()
        .unwrap();

    assert!(output.status.success());
    let stdout = String::from_utf8_lossy(&output.stdout);
    assert!(stdout.contains("INF"), "stdout: {}", stdout);
    assert!(stdout.contains("hello console"));
}

#[test]
fn test_levels_table() {
    let output = cli().args(["levels"]).output().unwrap();

    assert!(output.status.success());
    let stdout = String::from_utf8_lossy(&output.stdout);
    assert!(stdout.contains("OFF"));
    assert!(stdout.contains("disabled"));
    assert!(stdout.contains("Lvl(16)"));
}

#[test]
fn test_levels_json() {
    let output = cli().args(["levels", "--json"]).output().unwrap();

    assert!(output.status.success());
    let rows: Vec<serde_json::Value> = serde_json::from_slice(&output.stdout).unwrap();
    assert_eq!(rows.len(), 8);
    assert_eq!(rows[7]["back"], "INFO");
}
