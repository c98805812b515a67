use crate::error::WriteError;
use crate::read::COLUMNS;
use camino::Utf8Path;
use esgaudit_domain::model::SupplierRecord;
use esgaudit_types::AuditException;
use time::macros::format_description;

/// Columns of the exception table, in order.
pub const EXCEPTION_COLUMNS: [&str; 4] = ["supplier_id", "issue", "details", "risk_level"];

/// Encode exceptions as CSV text. The header is always present.
pub fn exceptions_csv_string(exceptions: &[AuditException]) -> Result<String, WriteError> {
    let mut writer = csv::Writer::from_writer(Vec::new());
    writer.write_record(EXCEPTION_COLUMNS)?;
    for e in exceptions {
        writer.write_record([
            e.supplier_id.as_str(),
            e.issue.label(),
            e.details.as_str(),
            e.risk_level.as_str(),
        ])?;
    }
    finish(writer)
}

/// Encode supplier records with the canonical column names.
pub fn supplier_csv_string(records: &[SupplierRecord]) -> Result<String, WriteError> {
    let mut writer = csv::Writer::from_writer(Vec::new());
    writer.write_record(COLUMNS.iter().map(|c| c.name))?;
    for r in records {
        let audited = match r.last_audit_date {
            Some(d) => d
                .format(format_description!("[year]-[month]-[day]"))
                .unwrap_or_default(),
            None => String::new(),
        };
        writer.write_record([
            r.supplier_id.clone(),
            r.industry.clone(),
            r.region.clone(),
            optional(r.carbon_emissions),
            optional(r.water_usage),
            optional(r.diversity_score),
            optional(r.safety_violations),
            audited,
            r.compliance_status.clone(),
        ])?;
    }
    finish(writer)
}

/// Write the exception table to `path`, creating parent directories.
pub fn write_exceptions_csv(path: &Utf8Path, exceptions: &[AuditException]) -> Result<(), WriteError> {
    let text = exceptions_csv_string(exceptions)?;
    write_text(path, &text)?;
    tracing::debug!(path = %path, rows = exceptions.len(), "wrote exception table");
    Ok(())
}

/// Write a supplier table to `path`, creating parent directories.
pub fn write_supplier_csv(path: &Utf8Path, records: &[SupplierRecord]) -> Result<(), WriteError> {
    let text = supplier_csv_string(records)?;
    write_text(path, &text)?;
    tracing::debug!(path = %path, rows = records.len(), "wrote supplier table");
    Ok(())
}

fn optional<T: ToString>(value: Option<T>) -> String {
    value.map(|v| v.to_string()).unwrap_or_default()
}

fn finish(writer: csv::Writer<Vec<u8>>) -> Result<String, WriteError> {
    let bytes = writer
        .into_inner()
        .map_err(|e| WriteError::Csv(csv::Error::from(e.into_error())))?;
    // Every field written above is a `&str`/`String`, so the buffer is UTF-8.
    Ok(String::from_utf8_lossy(&bytes).into_owned())
}

/// Whole-file write: the table is encoded in memory first so a failed encode
/// never leaves a partial file behind.
fn write_text(path: &Utf8Path, text: &str) -> Result<(), WriteError> {
    let io = |source| WriteError::Io {
        path: path.to_path_buf(),
        source,
    };
    if let Some(parent) = path.parent().filter(|p| !p.as_str().is_empty()) {
        std::fs::create_dir_all(parent).map_err(io)?;
    }
    std::fs::write(path, text).map_err(io)
}
