//! End-to-end tests for the `dircsv` binary.

use std::fs;
use std::path::Path;
use std::process::{Command, Output};
use tempfile::tempdir;

/// Run the binary with its config directory pinned to `config_dir`.
fn dircsv(config_dir: &Path, args: &[&str]) -> Output {
    Command::new(env!("CARGO_BIN_EXE_dircsv"))
        .args(args)
        .env("DIRCSV_CONFIG_DIR", config_dir)
        .env_remove("RUST_LOG")
        .output()
        .unwrap()
}

fn stdout(output: &Output) -> String {
    String::from_utf8_lossy(&output.stdout).into_owned()
}

fn stderr(output: &Output) -> String {
    String::from_utf8_lossy(&output.stderr).into_owned()
}

#[test]
fn test_scan_remember_and_rerun() {
    let temp_dir = tempdir().unwrap();
    let config_dir = temp_dir.path().join("config");
    let root = temp_dir.path().join("proj");
    fs::create_dir(&root).unwrap();
    fs::write(root.join("a.txt"), "hello").unwrap();
    let csv = temp_dir.path().join("out.csv");

    let output = dircsv(
        &config_dir,
        &["scan", root.to_str().unwrap(), "-o", csv.to_str().unwrap(), "--remember"],
    );
    assert!(output.status.success(), "{}", stderr(&output));
    assert!(stdout(&output).contains("Exported 1 files"));
    assert!(csv.exists());
    assert!(config_dir.join("scanner_config.json").exists());

    fs::remove_file(&csv).unwrap();
    let output = dircsv(&config_dir, &["scan"]);
    assert!(output.status.success(), "{}", stderr(&output));
    assert!(csv.exists());
}

#[test]
fn test_legacy_remembered_inputs() {
    let temp_dir = tempdir().unwrap();
    let config_dir = temp_dir.path().join("config");
    fs::create_dir(&config_dir).unwrap();
    let root = temp_dir.path().join("proj");
    fs::create_dir(&root).unwrap();
    fs::write(root.join("notes.md"), "# Notes").unwrap();
    let csv = temp_dir.path().join("legacy.csv");

    let prefs = serde_json::json!({
        "ordner": root.to_str().unwrap(),
        "csv_datei": csv.to_str().unwrap(),
    });
    fs::write(config_dir.join("scanner_config.json"), prefs.to_string()).unwrap();

    let output = dircsv(&config_dir, &["scan"]);
    assert!(output.status.success(), "{}", stderr(&output));
    assert!(csv.exists());
}

#[test]
fn test_missing_folder_fails() {
    let temp_dir = tempdir().unwrap();
    let output = dircsv(temp_dir.path(), &["scan"]);
    assert!(!output.status.success());
    assert!(stderr(&output).contains("Missing input"));
}

#[test]
fn test_json_summary() {
    let temp_dir = tempdir().unwrap();
    let root = temp_dir.path().join("proj");
    fs::create_dir_all(root.join("sub")).unwrap();
    fs::write(root.join("a.txt"), "a").unwrap();
    fs::write(root.join("sub").join("b.cs"), "class B {}").unwrap();
    let csv = temp_dir.path().join("out.csv");

    let output = dircsv(
        temp_dir.path(),
        &[
            "--format",
            "json",
            "scan",
            root.to_str().unwrap(),
            "-o",
            csv.to_str().unwrap(),
            "--sort",
            "path",
        ],
    );
    assert!(output.status.success(), "{}", stderr(&output));

    let summary: serde_json::Value = serde_json::from_str(&stdout(&output)).unwrap();
    assert_eq!(summary["rows"], 2);
    assert_eq!(summary["cancelled"], false);
    assert_eq!(summary["errors"], 0);
}

#[test]
fn test_empty_folder_writes_nothing() {
    let temp_dir = tempdir().unwrap();
    let root = temp_dir.path().join("empty");
    fs::create_dir(&root).unwrap();
    let csv = temp_dir.path().join("out.csv");

    let output = dircsv(
        temp_dir.path(),
        &["scan", root.to_str().unwrap(), "-o", csv.to_str().unwrap()],
    );
    assert!(output.status.success(), "{}", stderr(&output));
    assert!(stdout(&output).contains("No files found"));
    assert!(!csv.exists());
}

#[test]
fn test_config_commands() {
    let temp_dir = tempdir().unwrap();

    let output = dircsv(temp_dir.path(), &["config", "path"]);
    assert!(output.status.success());
    assert_eq!(
        stdout(&output).trim(),
        temp_dir.path().join("config.toml").display().to_string()
    );

    let output = dircsv(temp_dir.path(), &["config", "init"]);
    assert!(stdout(&output).contains("[scan]"));

    fs::write(
        temp_dir.path().join("config.toml"),
        "[output]\ndefault_file = \"inventory.csv\"\n",
    )
    .unwrap();
    let output = dircsv(temp_dir.path(), &["--format", "json", "config", "show"]);
    let shown: serde_json::Value = serde_json::from_str(&stdout(&output)).unwrap();
    assert_eq!(shown["output"]["default_file"], "inventory.csv");
    assert_eq!(shown["scan"]["follow_links"], true);
}

#[test]
fn test_malformed_config_is_an_error() {
    let temp_dir = tempdir().unwrap();
    fs::write(temp_dir.path().join("config.toml"), "[scan\n").unwrap();

    let output = dircsv(temp_dir.path(), &["config", "show"]);
    assert!(!output.status.success());
}
