use crate::fingerprint::fingerprint_for_supplier;
use crate::model::SupplierRecord;
use crate::policy::CheckPolicy;
use esgaudit_types::{AuditException, Issue};
use globset::{Glob, GlobSet, GlobSetBuilder};
use serde_json::Value;

/// Compile the allowlist of a check. Patterns are validated by the settings layer;
/// anything that still fails to compile is ignored here.
pub fn build_allowlist(allow: &[String]) -> Option<GlobSet> {
    if allow.is_empty() {
        return None;
    }

    let mut builder = GlobSetBuilder::new();
    for pattern in allow {
        // Allowlist entries are case-sensitive globs over supplier_id.
        if let Ok(glob) = Glob::new(pattern) {
            builder.add(glob);
        }
    }
    builder.build().ok()
}

pub fn is_allowed(allow: Option<&GlobSet>, supplier_id: &str) -> bool {
    allow.map(|set| set.is_match(supplier_id)).unwrap_or(false)
}

pub struct ExceptionKind {
    pub check_id: &'static str,
    pub code: &'static str,
    pub issue: Issue,
}

pub fn exception(
    kind: &ExceptionKind,
    policy: &CheckPolicy,
    record: &SupplierRecord,
    details: String,
    data: Value,
) -> AuditException {
    AuditException {
        supplier_id: record.supplier_id.clone(),
        issue: kind.issue,
        details,
        risk_level: policy.risk,
        check_id: kind.check_id.to_string(),
        code: kind.code.to_string(),
        row: Some(record.row),
        fingerprint: Some(fingerprint_for_supplier(
            kind.check_id,
            kind.code,
            &record.supplier_id,
        )),
        data,
    }
}
