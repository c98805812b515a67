use anyhow::Context;
use camino::Utf8Path;
use esgaudit_render::{
    RenderableCounts, RenderableData, RenderableException, RenderableLocation, RenderableReport,
    RenderableRisk, RenderableVerdictStatus,
};
use esgaudit_types::{AuditException, AuditReport, RiskLevel, SCHEMA_REPORT_V1, Verdict, explain};

pub fn parse_report_json(text: &str) -> anyhow::Result<AuditReport> {
    let value: serde_json::Value = serde_json::from_str(text).context("parse report json")?;

    let schema = value
        .get("schema")
        .and_then(|v| v.as_str())
        .unwrap_or_default()
        .to_string();
    if schema != SCHEMA_REPORT_V1 {
        anyhow::bail!("unknown report schema: {schema} (expected {SCHEMA_REPORT_V1})");
    }

    serde_json::from_value(value).context("parse esgaudit v1 report")
}

pub fn serialize_report(report: &AuditReport) -> anyhow::Result<Vec<u8>> {
    serde_json::to_vec_pretty(report).context("serialize report")
}

pub fn to_renderable(report: &AuditReport) -> RenderableReport {
    let input = report.data.input.as_deref();
    RenderableReport {
        verdict: match report.verdict {
            Verdict::Pass => RenderableVerdictStatus::Pass,
            Verdict::Warn => RenderableVerdictStatus::Warn,
            Verdict::Fail => RenderableVerdictStatus::Fail,
        },
        exceptions: report
            .exceptions
            .iter()
            .map(|e| renderable_exception(e, input))
            .collect(),
        data: RenderableData {
            profile: report.data.profile.clone(),
            suppliers_scanned: report.data.suppliers_scanned,
            exceptions_total: report.data.exceptions_total,
            counts: RenderableCounts {
                high: report.data.counts.high,
                medium: report.data.counts.medium,
                low: report.data.counts.low,
            },
        },
    }
}

fn renderable_exception(e: &AuditException, input: Option<&str>) -> RenderableException {
    RenderableException {
        risk: match e.risk_level {
            RiskLevel::Low => RenderableRisk::Low,
            RiskLevel::Medium => RenderableRisk::Medium,
            RiskLevel::High => RenderableRisk::High,
        },
        supplier_id: e.supplier_id.clone(),
        issue: e.issue.label().to_string(),
        check_id: e.check_id.clone(),
        code: e.code.clone(),
        message: e.details.clone(),
        // Data row N sits on file line N + 1, below the header.
        location: input.map(|path| RenderableLocation {
            path: path.to_string(),
            line: e.row.map(|row| row.saturating_add(1)),
        }),
        help: explain::lookup_explanation(&e.check_id)
            .map(|_| format!("see `esgaudit explain {}`", e.check_id)),
    }
}

/// Encode the exception table (`supplier_id,issue,details,risk_level`).
pub fn exceptions_csv_string(report: &AuditReport) -> anyhow::Result<String> {
    esgaudit_data::exceptions_csv_string(&report.exceptions).context("encode exception table")
}

/// Write the exception table.
pub fn write_exceptions(path: &Utf8Path, report: &AuditReport) -> anyhow::Result<()> {
    esgaudit_data::write_exceptions_csv(path, &report.exceptions)
        .with_context(|| format!("write exception table {path}"))?;
    tracing::info!(path = %path, rows = report.exceptions.len(), "wrote exception table");
    Ok(())
}

pub fn write_report(path: &Utf8Path, report: &AuditReport) -> anyhow::Result<()> {
    let bytes = serialize_report(report)?;
    write_bytes(path, &bytes)
}

pub fn write_text(path: &Utf8Path, text: &str) -> anyhow::Result<()> {
    write_bytes(path, text.as_bytes())
}

fn write_bytes(path: &Utf8Path, bytes: &[u8]) -> anyhow::Result<()> {
    if let Some(parent) = path.parent().filter(|p| !p.as_str().is_empty()) {
        std::fs::create_dir_all(parent).with_context(|| format!("create {parent}"))?;
    }
    std::fs::write(path, bytes).with_context(|| format!("write {path}"))?;
    tracing::debug!(path = %path, bytes = bytes.len(), "wrote file");
    Ok(())
}
