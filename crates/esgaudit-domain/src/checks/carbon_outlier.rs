use crate::checks::stats::{LeaveOneOut, round2};
use crate::checks::utils::{ExceptionKind, build_allowlist, exception, is_allowed};
use crate::model::SupplierTable;
use crate::policy::{Baseline, EffectiveConfig};
use esgaudit_types::{AuditException, Issue, ids};
use serde_json::json;

const KIND: ExceptionKind = ExceptionKind {
    check_id: ids::CHECK_CARBON_OUTLIER,
    code: ids::CODE_EMISSIONS_ABOVE_THRESHOLD,
    issue: Issue::CarbonOutlier,
};

pub fn run(table: &SupplierTable, cfg: &EffectiveConfig) -> Vec<AuditException> {
    let Some(policy) = cfg.check_policy(ids::CHECK_CARBON_OUTLIER) else {
        return Vec::new();
    };
    let allow = build_allowlist(&policy.allow);
    let params = cfg.outlier;

    let mut out = Vec::new();
    for (industry, members) in table.by_industry() {
        // Statistics cover reported emissions only.
        let values: Vec<f64> = members.iter().filter_map(|r| r.carbon_emissions).collect();
        let stats = LeaveOneOut::new(&values);

        let reported = members
            .iter()
            .filter_map(|r| r.carbon_emissions.map(|v| (*r, v)));
        for (record, value) in reported {
            if is_allowed(allow.as_ref(), &record.supplier_id) {
                continue;
            }

            let baseline = match params.baseline {
                Baseline::Peers => stats.without(value),
                Baseline::Group => stats.group(),
            };
            // Fewer than two baseline values: no deviation, nothing can be an outlier.
            let Some(std_dev) = baseline.sample_std_dev() else {
                continue;
            };
            let threshold = baseline.mean + params.sigma * std_dev;
            if value <= threshold {
                continue;
            }

            let mean = round2(baseline.mean);
            out.push(exception(
                &KIND,
                policy,
                record,
                format!("Emissions ({value}) far exceed industry avg ({mean})"),
                json!({
                    "industry": industry,
                    "carbon_emissions": value,
                    "baseline": params.baseline.as_str(),
                    "baseline_size": baseline.count,
                    "baseline_mean": mean,
                    "baseline_std_dev": round2(std_dev),
                    "sigma": params.sigma,
                    "threshold": round2(threshold),
                }),
            ));
        }
    }

    // Industries are visited alphabetically; report in input order.
    out.sort_by_key(|e| e.row);
    out
}
