use crate::checks::utils::{ExceptionKind, build_allowlist, exception, is_allowed};
use crate::model::SupplierTable;
use crate::policy::EffectiveConfig;
use esgaudit_types::{AuditException, Issue, ids};
use serde_json::json;

const KIND: ExceptionKind = ExceptionKind {
    check_id: ids::CHECK_LOGIC_ZERO_WATER,
    code: ids::CODE_ZERO_WATER_USAGE,
    issue: Issue::LogicalAnomaly,
};

pub fn run(table: &SupplierTable, cfg: &EffectiveConfig) -> Vec<AuditException> {
    let Some(policy) = cfg.check_policy(ids::CHECK_LOGIC_ZERO_WATER) else {
        return Vec::new();
    };
    let allow = build_allowlist(&policy.allow);

    let mut out = Vec::new();
    for record in table.records() {
        if !cfg.zero_water_industries.contains(&record.industry) {
            continue;
        }
        // Exact zero only: blanks are a reporting gap, not a paradox.
        if record.water_usage != Some(0.0) {
            continue;
        }
        if is_allowed(allow.as_ref(), &record.supplier_id) {
            continue;
        }
        out.push(exception(
            &KIND,
            policy,
            record,
            format!(
                "{} reported 0 water usage (Potential Greenwashing).",
                record.industry
            ),
            json!({ "industry": record.industry, "water_usage": 0.0 }),
        ));
    }
    out
}
