//! End-to-end CLI tests against the supplier tables in `tests/fixtures/`.
//!
//! Each fixture directory holds:
//! - `suppliers.csv`: the input table
//! - `expected_exceptions.csv`: the exact exception table
//! - `expected.report.json`: the JSON report with run-dependent fields normalized

use assert_cmd::Command;
use esgaudit_test_util::normalize_nondeterministic;
use predicates::prelude::*;
use serde_json::Value;
use std::path::{Path, PathBuf};
use tempfile::TempDir;

#[allow(deprecated)]
fn esgaudit_cmd() -> Command {
    Command::cargo_bin("esgaudit").expect("esgaudit binary not found - run `cargo build` first")
}

fn fixtures_dir() -> PathBuf {
    PathBuf::from(env!("CARGO_MANIFEST_DIR"))
        .parent()
        .expect("esgaudit-cli crate should have a parent directory")
        .parent()
        .expect("crates directory should have a parent (repo root)")
        .join("tests")
        .join("fixtures")
}

struct Run {
    code: i32,
    stdout: String,
    exceptions_csv: String,
    report: Value,
}

/// Audit a fixture from inside an empty temp dir so no stray `esgaudit.toml` applies.
fn audit_fixture(name: &str, extra: &[&str]) -> Run {
    let input = fixtures_dir().join(name).join("suppliers.csv");
    let tmp = TempDir::new().expect("temp dir");
    let output = tmp.path().join("out").join("audit_exceptions.csv");
    let report = tmp.path().join("report.json");

    let out = esgaudit_cmd()
        .current_dir(tmp.path())
        .env_remove("RUST_LOG")
        .arg("audit")
        .arg("--input")
        .arg(&input)
        .arg("--output")
        .arg(&output)
        .arg("--report-out")
        .arg(&report)
        .args(extra)
        .output()
        .expect("run esgaudit");

    let report_text = std::fs::read_to_string(&report).expect("read report");
    Run {
        code: out.status.code().unwrap_or(-1),
        stdout: String::from_utf8_lossy(&out.stdout).into_owned(),
        exceptions_csv: std::fs::read_to_string(&output).expect("read exception table"),
        report: serde_json::from_str(&report_text).expect("parse report json"),
    }
}

fn read_expected_json(path: &Path) -> Value {
    let text = std::fs::read_to_string(path).expect("read expected report");
    serde_json::from_str(&text).expect("parse expected report")
}

fn check_fixture(name: &str, expected_code: i32) {
    let dir = fixtures_dir().join(name);
    let run = audit_fixture(name, &[]);

    assert_eq!(run.code, expected_code, "{name}: exit code");

    let expected_csv =
        std::fs::read_to_string(dir.join("expected_exceptions.csv")).expect("read expected csv");
    assert_eq!(run.exceptions_csv, expected_csv, "{name}: exception table");

    let total = expected_csv.lines().count() - 1;
    assert!(
        run.stdout
            .contains(&format!("Audit complete. Found {total} exceptions.")),
        "{name}: stdout was {:?}",
        run.stdout
    );

    let actual = normalize_nondeterministic(run.report);
    let expected = read_expected_json(&dir.join("expected.report.json"));
    assert_eq!(
        actual,
        expected,
        "{name}: report mismatch\nactual:\n{}",
        serde_json::to_string_pretty(&actual).unwrap_or_default()
    );
}

#[test]
fn fixture_scenario() {
    check_fixture("scenario", 0);
}

#[test]
fn fixture_clean() {
    check_fixture("clean", 0);
}

#[test]
fn fixture_mixed() {
    check_fixture("mixed", 0);
}

#[test]
fn reruns_are_byte_identical() {
    let a = audit_fixture("mixed", &[]);
    let b = audit_fixture("mixed", &[]);
    assert_eq!(a.exceptions_csv, b.exceptions_csv);
    assert_eq!(
        normalize_nondeterministic(a.report),
        normalize_nondeterministic(b.report)
    );
}

#[test]
fn strict_profile_exits_two_on_high_risk() {
    let run = audit_fixture("scenario", &["--profile", "strict"]);
    assert_eq!(run.code, 2);
    assert_eq!(run.report["verdict"], "fail");
    assert_eq!(run.report["data"]["profile"], "strict");
    // The exception table is still written on a failing verdict.
    assert_eq!(run.exceptions_csv.lines().count(), 3);
}

#[test]
fn fail_on_flag_overrides_profile() {
    let run = audit_fixture("mixed", &["--fail-on", "medium"]);
    assert_eq!(run.code, 2);

    let run = audit_fixture("scenario", &["--profile", "strict", "--fail-on", "never"]);
    assert_eq!(run.code, 0);
    assert_eq!(run.report["verdict"], "warn");
}

#[test]
fn clean_fixture_passes_even_when_strict() {
    let run = audit_fixture("clean", &["--profile", "strict"]);
    assert_eq!(run.code, 0);
    assert_eq!(run.report["verdict"], "pass");
    assert_eq!(run.exceptions_csv, "supplier_id,issue,details,risk_level\n");
}

#[test]
fn group_baseline_misses_the_small_industry_spike() {
    let tmp = TempDir::new().expect("temp dir");
    let config = tmp.path().join("esgaudit.toml");
    std::fs::write(
        &config,
        "[checks.\"carbon.outlier\"]\nbaseline = \"group\"\n",
    )
    .expect("write config");

    let run = audit_fixture(
        "scenario",
        &["--config", config.to_str().expect("utf8 config path")],
    );
    assert_eq!(run.code, 0);
    let checks: Vec<&str> = run.report["exceptions"]
        .as_array()
        .expect("exceptions array")
        .iter()
        .filter_map(|e| e["check_id"].as_str())
        .collect();
    assert_eq!(checks, vec!["logic.zero_water"]);
}

#[test]
fn missing_input_fails_without_output() {
    let tmp = TempDir::new().expect("temp dir");
    let output = tmp.path().join("audit_exceptions.csv");

    esgaudit_cmd()
        .current_dir(tmp.path())
        .arg("audit")
        .arg("--input")
        .arg(tmp.path().join("absent.csv"))
        .arg("--output")
        .arg(&output)
        .assert()
        .failure()
        .code(1)
        .stderr(predicate::str::contains("esgaudit error:"))
        .stderr(predicate::str::contains("input table not found"));

    assert!(!output.exists());
}

#[test]
fn missing_column_fails_without_output() {
    let tmp = TempDir::new().expect("temp dir");
    let input = tmp.path().join("suppliers.csv");
    std::fs::write(&input, "supplier_id,industry\nS1,Energy\n").expect("write input");
    let output = tmp.path().join("audit_exceptions.csv");

    esgaudit_cmd()
        .current_dir(tmp.path())
        .arg("audit")
        .arg("--input")
        .arg(&input)
        .arg("--output")
        .arg(&output)
        .assert()
        .code(1)
        .stderr(predicate::str::contains("region"));

    assert!(!output.exists());
}

#[test]
fn explicit_missing_config_is_an_error() {
    let tmp = TempDir::new().expect("temp dir");
    let input = fixtures_dir().join("scenario").join("suppliers.csv");

    esgaudit_cmd()
        .current_dir(tmp.path())
        .arg("--config")
        .arg(tmp.path().join("nope.toml"))
        .arg("audit")
        .arg("--input")
        .arg(&input)
        .arg("--output")
        .arg(tmp.path().join("out.csv"))
        .assert()
        .code(1)
        .stderr(predicate::str::contains("read config"));
}

#[test]
fn default_paths_are_relative_to_the_working_directory() {
    let tmp = TempDir::new().expect("temp dir");
    std::fs::create_dir_all(tmp.path().join("data")).expect("mkdir data");
    std::fs::copy(
        fixtures_dir().join("scenario").join("suppliers.csv"),
        tmp.path().join("data").join("suppliers_raw.csv"),
    )
    .expect("copy fixture");

    esgaudit_cmd()
        .current_dir(tmp.path())
        .args(["audit", "--write-markdown"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Audit complete. Found 2 exceptions."))
        .stdout(predicate::str::contains(
            "Exceptions written to data/audit_exceptions.csv",
        ));

    let expected = std::fs::read_to_string(
        fixtures_dir()
            .join("scenario")
            .join("expected_exceptions.csv"),
    )
    .expect("read expected");
    let written = std::fs::read_to_string(tmp.path().join("data").join("audit_exceptions.csv"))
        .expect("read output");
    assert_eq!(written, expected);

    let md = std::fs::read_to_string(tmp.path().join("artifacts/esgaudit/comment.md"))
        .expect("read markdown");
    assert!(md.starts_with("# ESG audit report"));
    assert!(md.contains("`S3` Carbon Outlier"));
}
