use std::fs;
use std::path::Path;
use std::process::{Command, Output};

use tempfile::TempDir;

fn bacteriaguard(config: &Path, args: &[&str]) -> Output {
    Command::new(env!("CARGO_BIN_EXE_bacteriaguard"))
        .arg("--config")
        .arg(config)
        .args(args)
        .env_remove("RUST_LOG")
        .output()
        .expect("should run bacteriaguard")
}

fn corrupt_config(dir: &TempDir) -> std::path::PathBuf {
    let config_path = dir.path().join("cfg.json");
    fs::write(&config_path, "{not json").expect("should write bad config");
    config_path
}

#[test]
fn init_force_rewrites_a_corrupt_config() {
    let temp_dir = TempDir::new().expect("should create temp dir");
    let config_path = corrupt_config(&temp_dir);

    let out = bacteriaguard(&config_path, &["config", "init", "--force"]);
    assert!(
        out.status.success(),
        "stderr: {}",
        String::from_utf8_lossy(&out.stderr)
    );

    let text = fs::read_to_string(&config_path).expect("should read config");
    let v: serde_json::Value = serde_json::from_str(&text).expect("config should be JSON again");
    assert_eq!(v["log_level"], "warn");
    assert_eq!(v["scan"]["connecting_ms"], 2000);

    let show = bacteriaguard(&config_path, &["config", "show"]);
    assert!(show.status.success());
    assert!(String::from_utf8_lossy(&show.stdout).contains("total:        11000 ms"));
}

#[test]
fn init_without_force_keeps_an_existing_file() {
    let temp_dir = TempDir::new().expect("should create temp dir");
    let config_path = corrupt_config(&temp_dir);

    let out = bacteriaguard(&config_path, &["config", "init"]);
    assert!(!out.status.success());
    assert!(String::from_utf8_lossy(&out.stderr).contains("already exists"));
    assert_eq!(fs::read_to_string(&config_path).unwrap(), "{not json");
}

#[test]
fn other_commands_report_a_corrupt_config() {
    let temp_dir = TempDir::new().expect("should create temp dir");
    let config_path = corrupt_config(&temp_dir);

    let out = bacteriaguard(&config_path, &["config", "show"]);
    assert!(!out.status.success());
    assert!(String::from_utf8_lossy(&out.stderr).contains("is not a valid config"));
}

#[test]
fn show_survives_oversized_delays() {
    let temp_dir = TempDir::new().expect("should create temp dir");
    let config_path = temp_dir.path().join("cfg.json");
    fs::write(
        &config_path,
        r#"{"scan":{"connecting_ms":18446744073709551615,"waiting_scan_ms":1,
            "scanning_ms":1,"sending_data_ms":1,"processing_ms":1}}"#,
    )
    .expect("should write config");

    let out = bacteriaguard(&config_path, &["config", "show"]);
    assert!(
        out.status.success(),
        "stderr: {}",
        String::from_utf8_lossy(&out.stderr)
    );
}
