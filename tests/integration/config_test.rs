//! Integration tests for config loading through the CLI

use std::fs;
use std::path::Path;
use std::process::Command;

use tempfile::TempDir;

use crate::helpers::fixture;

/// Run threadreplay against an explicit config file path
fn run_with_config(config: &Path, args: &[&str]) -> (String, String, i32) {
    let output = Command::new(env!("CARGO_BIN_EXE_threadreplay"))
        .args(args)
        .env("THREADREPLAY_CONFIG", config)
        .env_remove("RUST_LOG")
        .output()
        .expect("Failed to execute threadreplay");

    (
        String::from_utf8_lossy(&output.stdout).to_string(),
        String::from_utf8_lossy(&output.stderr).to_string(),
        output.status.code().unwrap_or(-1),
    )
}

fn write_config(content: &str) -> (TempDir, std::path::PathBuf) {
    let temp_dir = TempDir::new().expect("Failed to create temp dir");
    let path = temp_dir.path().join("config.toml");
    fs::write(&path, content).expect("Failed to write config");
    (temp_dir, path)
}

#[test]
fn config_path_honours_environment() {
    let (_temp_dir, path) = write_config("");
    let (stdout, _stderr, exit_code) = run_with_config(&path, &["config", "path"]);

    assert_eq!(exit_code, 0);
    assert_eq!(stdout.trim(), path.display().to_string());
}

#[test]
fn config_show_prints_defaults_when_missing() {
    let temp_dir = TempDir::new().unwrap();
    let path = temp_dir.path().join("missing.toml");
    let (stdout, _stderr, exit_code) = run_with_config(&path, &["config", "show"]);

    assert_eq!(exit_code, 0);
    assert!(stdout.contains("[replay]"));
    assert!(stdout.contains("min_exposure = 5"));
    assert!(stdout.contains("[display]"));
    assert!(stdout.contains("show_author = true"));
    assert!(!stdout.contains("window_minutes"));
    assert!(!path.exists());
}

#[test]
fn config_window_applies_to_frames() {
    let (_temp_dir, path) = write_config("[replay]\nwindow_minutes = 5\n");
    let thread = fixture("siblings.json");
    let (stdout, _stderr, exit_code) =
        run_with_config(&path, &["frames", thread.to_str().unwrap()]);

    assert_eq!(exit_code, 0);
    assert!(stdout.contains("--- frame 12 / 12 @"));
}

#[test]
fn window_flag_overrides_config() {
    let (_temp_dir, path) = write_config("[replay]\nwindow_minutes = 5\n");
    let thread = fixture("siblings.json");
    let (stdout, _stderr, exit_code) = run_with_config(
        &path,
        &["frames", thread.to_str().unwrap(), "--window", "30"],
    );

    assert_eq!(exit_code, 0);
    assert!(stdout.contains("--- frame 8 / 8 @"));
}

#[test]
fn config_can_hide_author_column() {
    let (_temp_dir, path) = write_config("[display]\nshow_author = false\n");
    let thread = fixture("siblings.json");
    let (stdout, _stderr, exit_code) =
        run_with_config(&path, &["tree", thread.to_str().unwrap()]);

    assert_eq!(exit_code, 0);
    assert!(stdout.contains("[   10m]* Show: a thing"));
    assert!(!stdout.contains("alice"));
}

#[test]
fn invalid_config_is_reported() {
    let (_temp_dir, path) = write_config("[replay]\nmin_exposure = \"many\"\n");
    let thread = fixture("siblings.json");
    let (_stdout, stderr, exit_code) =
        run_with_config(&path, &["frames", thread.to_str().unwrap()]);

    assert_eq!(exit_code, 1);
    assert!(stderr.contains("Invalid config file"));
}

#[test]
fn config_exposure_sets_repeat_count() {
    let (_temp_dir, path) = write_config("[replay]\nmin_exposure = 3\n");
    let thread = fixture("siblings.json");
    let (stdout, _stderr, exit_code) = run_with_config(
        &path,
        &["frames", thread.to_str().unwrap(), "--window", "5"],
    );

    assert_eq!(exit_code, 0);
    assert!(stdout.contains("--- frame 8 / 8 @ 1970-01-01 00:16 UTC ---"));
    assert_eq!(stdout.matches("bob").count(), 3);
    assert_eq!(stdout.matches("carol").count(), 3);
}

#[test]
fn config_exposure_above_window_is_rejected() {
    let (_temp_dir, path) = write_config("[replay]\nmin_exposure = 2000\n");
    let thread = fixture("siblings.json");
    let (stdout, stderr, exit_code) =
        run_with_config(&path, &["frames", thread.to_str().unwrap()]);

    assert_eq!(exit_code, 1);
    assert!(stdout.is_empty());
    assert!(stderr.contains("replay.min_exposure = 2000 exceeds the 30-minute window"));
}

#[test]
fn config_window_outside_choices_is_rejected() {
    let (_temp_dir, path) = write_config("[replay]\nwindow_minutes = 7\n");
    let thread = fixture("siblings.json");
    let (_stdout, stderr, exit_code) =
        run_with_config(&path, &["tree", thread.to_str().unwrap()]);

    assert_eq!(exit_code, 1);
    assert!(stderr.contains("Invalid config file"));
    assert!(stderr.contains("window_minutes = 7 is not one of"));
}
