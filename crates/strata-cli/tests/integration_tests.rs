//! End-to-end tests for the `strata` binary.

use std::fs;

use assert_cmd::Command;
use predicates::prelude::*;
use tempfile::TempDir;

fn strata() -> Command {
    let mut cmd = Command::cargo_bin("strata").expect("binary builds");
    // Keep the ambient environment from steering discovery.
    cmd.env_remove("STRATA_STYLES_DIR").env_remove("RUST_LOG");
    cmd
}

// ── list ──────────────────────────────────────────────────────────────────────

#[test]
fn list_shows_bundled_styles() {
    strata()
        .arg("list")
        .assert()
        .success()
        .stdout(predicate::str::contains("default"))
        .stdout(predicate::str::contains("contours"))
        .stdout(predicate::str::contains("arrows"))
        .stdout(predicate::str::contains("vector"));
}

#[test]
fn list_names_prints_one_per_line() {
    let output = strata()
        .args(["list", "--format", "names"])
        .assert()
        .success()
        .get_output()
        .stdout
        .clone();

    let names: Vec<&str> = std::str::from_utf8(&output)
        .unwrap()
        .lines()
        .collect();
    assert_eq!(names, vec!["arrows", "contours", "default", "vector"]);
}

#[test]
fn list_json_is_parseable() {
    let output = strata()
        .args(["list", "--format", "json"])
        .assert()
        .success()
        .get_output()
        .stdout
        .clone();

    let parsed: serde_json::Value = serde_json::from_slice(&output).unwrap();
    let styles = parsed.as_array().unwrap();
    assert_eq!(styles.len(), 4);
    assert!(styles.iter().any(|s| s["name"] == "vector"));
}

#[test]
fn list_honours_styles_dir_override() {
    let temp = TempDir::new().unwrap();
    fs::write(temp.path().join("isolines.xml"), "$layerName").unwrap();

    strata()
        .args(["list", "--format", "names"])
        .arg("--styles-dir")
        .arg(temp.path())
        .assert()
        .success()
        .stdout(predicate::str::contains("isolines"));
}

#[test]
fn list_reads_styles_dir_from_env() {
    let temp = TempDir::new().unwrap();
    fs::write(temp.path().join("envstyle.xml"), "$layerName").unwrap();

    let mut cmd = Command::cargo_bin("strata").unwrap();
    cmd.env_remove("RUST_LOG")
        .env("STRATA_STYLES_DIR", temp.path())
        .args(["list", "--format", "names"])
        .assert()
        .success()
        .stdout(predicate::str::contains("envstyle"));
}

// ── scan ──────────────────────────────────────────────────────────────────────

#[test]
fn scan_reports_descriptor_fields() {
    let temp = TempDir::new().unwrap();
    let file = temp.path().join("composite.xml");
    fs::write(&file, "$paletteName $layerName-mag $layerName-dir").unwrap();

    strata()
        .arg("scan")
        .arg(&file)
        .assert()
        .success()
        .stdout(predicate::str::contains("style:        composite"))
        .stdout(predicate::str::contains("palette:      true"))
        .stdout(predicate::str::contains("named layer:  false"))
        .stdout(predicate::str::contains("dir, mag"));
}

#[test]
fn scan_json_round_trips_roles() {
    let temp = TempDir::new().unwrap();
    let file = temp.path().join("masked.xml");
    fs::write(&file, "$layerName $layerName-mask").unwrap();

    let output = strata()
        .args(["scan", "--format", "json"])
        .arg(&file)
        .assert()
        .success()
        .get_output()
        .stdout
        .clone();

    let parsed: serde_json::Value = serde_json::from_slice(&output).unwrap();
    assert_eq!(parsed["name"], "masked");
    assert_eq!(parsed["needs_named_layer"], true);
    assert_eq!(parsed["required_child_roles"][0], "mask");
}

#[test]
fn scan_missing_file_exits_not_found() {
    strata()
        .args(["scan", "/definitely/not/here.xml"])
        .assert()
        .failure()
        .code(3)
        .stderr(predicate::str::contains("Cannot read template file"));
}

// ── completions ───────────────────────────────────────────────────────────────

#[test]
fn completions_bash_mentions_binary() {
    strata()
        .args(["completions", "bash"])
        .assert()
        .success()
        .stdout(predicate::str::contains("strata"));
}

// ── argument handling ─────────────────────────────────────────────────────────

#[test]
fn no_arguments_is_a_usage_error() {
    strata().assert().failure().code(2);
}

#[test]
fn quiet_and_verbose_conflict() {
    strata()
        .args(["--quiet", "--verbose", "list"])
        .assert()
        .failure()
        .code(2);
}
