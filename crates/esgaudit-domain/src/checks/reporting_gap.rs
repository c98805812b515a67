use crate::checks::utils::{ExceptionKind, build_allowlist, exception, is_allowed};
use crate::model::SupplierTable;
use crate::policy::EffectiveConfig;
use esgaudit_types::{AuditException, Issue, ids};
use serde_json::json;

const KIND: ExceptionKind = ExceptionKind {
    check_id: ids::CHECK_REPORTING_DIVERSITY_GAP,
    code: ids::CODE_DIVERSITY_SCORE_MISSING,
    issue: Issue::ReportingGap,
};

pub fn run(table: &SupplierTable, cfg: &EffectiveConfig) -> Vec<AuditException> {
    let Some(policy) = cfg.check_policy(ids::CHECK_REPORTING_DIVERSITY_GAP) else {
        return Vec::new();
    };
    let allow = build_allowlist(&policy.allow);

    table
        .records()
        .iter()
        .filter(|r| r.diversity_score.is_none())
        .filter(|r| !is_allowed(allow.as_ref(), &r.supplier_id))
        .map(|r| {
            exception(
                &KIND,
                policy,
                r,
                "Diversity score missing or null.".to_string(),
                json!({ "industry": r.industry, "field": "diversity_score" }),
            )
        })
        .collect()
}
