//! Developer tasks (schema generation, golden fixture refresh, explain coverage).
//!
//! Keeping this separate avoids bloating the end-user CLI.

use anyhow::{Context, bail};
use camino::{Utf8Path, Utf8PathBuf};
use esgaudit_app::{AuditInput, run_audit, serialize_report};
use esgaudit_settings::Overrides;
use esgaudit_test_util::normalize_nondeterministic;
use schemars::schema_for;
use std::fs;

/// Project root (parent of the xtask directory).
fn project_root() -> Utf8PathBuf {
    let manifest_dir = Utf8PathBuf::from(env!("CARGO_MANIFEST_DIR"));
    match manifest_dir.parent() {
        Some(parent) if manifest_dir.ends_with("xtask") => parent.to_path_buf(),
        _ => manifest_dir,
    }
}

fn schemas_dir() -> Utf8PathBuf {
    project_root().join("schemas")
}

fn fixtures_dir() -> Utf8PathBuf {
    project_root().join("tests").join("fixtures")
}

/// Schema definition with its target filename.
struct SchemaSpec {
    filename: &'static str,
    generate: fn() -> schemars::Schema,
}

fn schema_specs() -> Vec<SchemaSpec> {
    vec![
        SchemaSpec {
            filename: "esgaudit.report.v1.json",
            generate: || schema_for!(esgaudit_types::AuditReport),
        },
        SchemaSpec {
            filename: "esgaudit.config.v1.json",
            generate: || schema_for!(esgaudit_settings::EsgauditConfigV1),
        },
    ]
}

/// Pretty JSON with a trailing newline.
fn serialize_schema(schema: &schemars::Schema) -> anyhow::Result<String> {
    let mut json = serde_json::to_string_pretty(schema).context("serialize schema")?;
    json.push('\n');
    Ok(json)
}

fn emit_schemas() -> anyhow::Result<()> {
    let dir = schemas_dir();
    fs::create_dir_all(&dir).with_context(|| format!("create {dir}"))?;

    for spec in schema_specs() {
        let json = serialize_schema(&(spec.generate)())?;
        let path = dir.join(spec.filename);
        fs::write(&path, &json).with_context(|| format!("write schema {path}"))?;
        println!("Wrote {path}");
    }
    Ok(())
}

/// Fail when a committed schema differs from what the types generate.
fn validate_schemas() -> anyhow::Result<()> {
    let dir = schemas_dir();
    let mut stale = Vec::new();

    for spec in schema_specs() {
        let path = dir.join(spec.filename);
        let expected = serialize_schema(&(spec.generate)())?;
        match fs::read_to_string(&path) {
            Ok(actual) if actual == expected => {}
            Ok(_) => stale.push(format!("{} (out of date)", spec.filename)),
            Err(_) => stale.push(format!("{} (missing)", spec.filename)),
        }
    }

    if stale.is_empty() {
        println!("All schemas are up to date.");
        return Ok(());
    }
    for name in &stale {
        eprintln!("  - {name}");
    }
    eprintln!("\nRun `cargo xtask emit-schemas` to regenerate.");
    bail!("schema validation failed")
}

/// Fixture directories under `tests/fixtures/`, sorted by name.
fn fixture_dirs() -> anyhow::Result<Vec<Utf8PathBuf>> {
    let root = fixtures_dir();
    let mut dirs = Vec::new();
    for entry in root
        .read_dir_utf8()
        .with_context(|| format!("read {root}"))?
    {
        let entry = entry?;
        if entry.path().join("suppliers.csv").is_file() {
            dirs.push(entry.path().to_path_buf());
        }
    }
    dirs.sort();
    Ok(dirs)
}

/// Audit one fixture with the default profile and return (report json, exception csv).
fn audit_fixture(dir: &Utf8Path) -> anyhow::Result<(String, String)> {
    let input = dir.join("suppliers.csv");
    let audit = run_audit(AuditInput {
        input: &input,
        config_text: "",
        overrides: Overrides::default(),
    })?;

    let raw: serde_json::Value = serde_json::from_slice(&serialize_report(&audit.report)?)?;
    let mut json = serde_json::to_string_pretty(&normalize_nondeterministic(raw))?;
    json.push('\n');

    let csv = esgaudit_app::exceptions_csv_string(&audit.report)?;
    Ok((json, csv))
}

/// Rewrite every fixture's golden files from the current rules.
fn update_fixtures() -> anyhow::Result<()> {
    for dir in fixture_dirs()? {
        let (json, csv) = audit_fixture(&dir).with_context(|| format!("audit fixture {dir}"))?;
        fs::write(dir.join("expected.report.json"), json)?;
        fs::write(dir.join("expected_exceptions.csv"), csv)?;
        println!("Updated {dir}");
    }
    Ok(())
}

/// Fail when a fixture's golden files no longer match the rules.
fn check_fixtures() -> anyhow::Result<()> {
    let mut drift = Vec::new();
    for dir in fixture_dirs()? {
        let (json, csv) = audit_fixture(&dir).with_context(|| format!("audit fixture {dir}"))?;

        let expected_json: serde_json::Value =
            serde_json::from_str(&fs::read_to_string(dir.join("expected.report.json"))?)?;
        let actual_json: serde_json::Value = serde_json::from_str(&json)?;
        if expected_json != actual_json {
            drift.push(format!("{dir}/expected.report.json"));
        }
        if fs::read_to_string(dir.join("expected_exceptions.csv"))? != csv {
            drift.push(format!("{dir}/expected_exceptions.csv"));
        }
    }

    if drift.is_empty() {
        println!("All fixtures are up to date.");
        return Ok(());
    }
    for path in &drift {
        eprintln!("  - {path}");
    }
    eprintln!("\nRun `cargo xtask update-fixtures` to regenerate.");
    bail!("fixture check failed")
}

/// Every check id and code must have a complete explanation.
fn explain_coverage() -> anyhow::Result<()> {
    use esgaudit_types::explain::{all_check_ids, all_codes, lookup_explanation};

    let mut errors = Vec::new();
    for (kind, key) in all_check_ids()
        .iter()
        .map(|id| ("Check ID", *id))
        .chain(all_codes().iter().map(|code| ("Code", *code)))
    {
        let Some(exp) = lookup_explanation(key) else {
            errors.push(format!("{kind} '{key}' has no explanation"));
            continue;
        };
        for (field, text) in [
            ("title", exp.title),
            ("description", exp.description),
            ("remediation", exp.remediation),
        ] {
            if text.is_empty() {
                errors.push(format!("{kind} '{key}' has empty {field}"));
            }
        }
        if exp.examples.before.is_empty() || exp.examples.after.is_empty() {
            errors.push(format!("{kind} '{key}' is missing a before/after example"));
        }
    }

    if errors.is_empty() {
        println!("{} check IDs have explanations", all_check_ids().len());
        println!("{} codes have explanations", all_codes().len());
        return Ok(());
    }
    for error in &errors {
        eprintln!("  - {error}");
    }
    bail!("explain coverage failed with {} errors", errors.len())
}

fn print_help() {
    eprintln!("xtask commands:");
    eprintln!("  help              Show this message");
    eprintln!("  emit-schemas      Generate JSON schemas from Rust types to schemas/");
    eprintln!("  validate-schemas  Check if schemas/ matches generated output (for CI)");
    eprintln!("  print-schema-ids  Print known schema IDs");
    eprintln!("  update-fixtures   Regenerate golden files in tests/fixtures/");
    eprintln!("  check-fixtures    Check golden files in tests/fixtures/ (for CI)");
    eprintln!("  explain-coverage  Validate all check IDs and codes have explanations");
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
        "update-fixtures" => update_fixtures(),
        "check-fixtures" => check_fixtures(),
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
