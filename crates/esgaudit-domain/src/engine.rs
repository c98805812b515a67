use crate::checks;
use crate::model::SupplierTable;
use crate::policy::{EffectiveConfig, FailOn};
use crate::report::DomainReport;
use esgaudit_types::{AuditData, AuditException, RiskCounts, Verdict};

pub fn evaluate(table: &SupplierTable, cfg: &EffectiveConfig) -> DomainReport {
    // Rule order, then row order within each rule. No re-sorting, no dedup.
    let exceptions = checks::run_all(table, cfg);

    let verdict = compute_verdict(&exceptions, cfg.fail_on);
    let counts = RiskCounts::from_exceptions(&exceptions);

    let data = AuditData {
        profile: cfg.profile.clone(),
        input: None,
        suppliers_scanned: table.len() as u32,
        industries_scanned: table.industries().len() as u32,
        checks_run: checks::REGISTRY
            .iter()
            .filter(|c| cfg.check_policy(c.id).is_some())
            .map(|c| c.id.to_string())
            .collect(),
        exceptions_total: exceptions.len() as u32,
        counts: counts.clone(),
    };

    DomainReport {
        verdict,
        exceptions,
        data,
        counts,
    }
}

fn compute_verdict(exceptions: &[AuditException], fail_on: FailOn) -> Verdict {
    if exceptions.is_empty() {
        return Verdict::Pass;
    }

    let fails = fail_on
        .threshold()
        .is_some_and(|min| exceptions.iter().any(|e| e.risk_level >= min));
    if fails { Verdict::Fail } else { Verdict::Warn }
}
