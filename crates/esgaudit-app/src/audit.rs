//! The `audit` use case: load the supplier table, evaluate the rules, produce a report.

use anyhow::Context;
use camino::Utf8Path;
use esgaudit_domain::report::DomainReport;
use esgaudit_settings::{EsgauditConfigV1, Overrides, ResolvedConfig};
use esgaudit_types::{AuditReport, SCHEMA_REPORT_V1, ToolMeta, Verdict};
use std::collections::BTreeMap;
use time::OffsetDateTime;

/// Input for the audit use case.
#[derive(Clone, Debug)]
pub struct AuditInput<'a> {
    /// Supplier table to audit.
    pub input: &'a Utf8Path,
    /// Config file contents (empty string if not found).
    pub config_text: &'a str,
    /// CLI overrides.
    pub overrides: Overrides,
}

/// Output from the audit use case.
#[derive(Clone, Debug)]
pub struct AuditOutput {
    pub report: AuditReport,
    /// The resolved configuration used.
    pub resolved_config: ResolvedConfig,
}

/// Run the audit: resolve config, load the table, evaluate every enabled rule.
///
/// Config and table errors abort before any rule runs.
pub fn run_audit(input: AuditInput<'_>) -> anyhow::Result<AuditOutput> {
    let started_at = OffsetDateTime::now_utc();

    // Parse config (empty is allowed, defaults apply).
    let cfg = if input.config_text.trim().is_empty() {
        EsgauditConfigV1::default()
    } else {
        esgaudit_settings::parse_config_toml(input.config_text).context("parse config")?
    };
    let resolved = esgaudit_settings::resolve_config(cfg, input.overrides.clone())
        .context("resolve config")?;
    tracing::debug!(
        profile = %resolved.effective.profile,
        sigma = resolved.effective.outlier.sigma,
        baseline = resolved.effective.outlier.baseline.as_str(),
        "resolved config"
    );

    let table = esgaudit_data::load_supplier_table(input.input)
        .with_context(|| format!("load supplier table {}", input.input))?;
    tracing::info!(
        input = %input.input,
        suppliers = table.len(),
        industries = table.industries().len(),
        "loaded supplier table"
    );

    let DomainReport {
        verdict,
        exceptions,
        mut data,
        counts: _,
    } = esgaudit_domain::evaluate(&table, &resolved.effective);
    data.input = Some(input.input.to_string());

    let mut per_check: BTreeMap<&str, usize> = BTreeMap::new();
    for e in &exceptions {
        *per_check.entry(e.check_id.as_str()).or_default() += 1;
    }
    for (check_id, count) in &per_check {
        tracing::debug!(check_id, count, "rule finished");
    }
    tracing::info!(
        exceptions = exceptions.len(),
        verdict = ?verdict,
        "audit evaluated"
    );

    let report = AuditReport {
        schema: SCHEMA_REPORT_V1.to_string(),
        tool: ToolMeta {
            name: "esgaudit".to_string(),
            version: env!("CARGO_PKG_VERSION").to_string(),
        },
        started_at,
        finished_at: OffsetDateTime::now_utc(),
        verdict,
        exceptions,
        data,
    };

    Ok(AuditOutput {
        report,
        resolved_config: resolved,
    })
}

/// Map verdict to exit code: 0 = pass/warn, 2 = fail.
pub fn verdict_exit_code(verdict: Verdict) -> i32 {
    match verdict {
        Verdict::Pass => 0,
        Verdict::Warn => 0,
        Verdict::Fail => 2,
    }
}
