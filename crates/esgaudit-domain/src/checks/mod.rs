use crate::model::SupplierTable;
use crate::policy::EffectiveConfig;
use esgaudit_types::{AuditException, ids};
use rayon::prelude::*;

mod carbon_outlier;
mod reporting_gap;
pub mod stats;
mod utils;
mod zero_water;


/// A rule: a pure function from the whole table to its own exception list.
pub type CheckFn = fn(&SupplierTable, &EffectiveConfig) -> Vec<AuditException>;

pub struct RegisteredCheck {
    pub id: &'static str,
    pub run: CheckFn,
}

/// Rules in evaluation order. Output order follows this list.
pub const REGISTRY: &[RegisteredCheck] = &[
    RegisteredCheck {
        id: ids::CHECK_CARBON_OUTLIER,
        run: carbon_outlier::run,
    },
    RegisteredCheck {
        id: ids::CHECK_REPORTING_DIVERSITY_GAP,
        run: reporting_gap::run,
    },
    RegisteredCheck {
        id: ids::CHECK_LOGIC_ZERO_WATER,
        run: zero_water::run,
    },
];

/// Run every registered rule and concatenate the results in registry order.
///
/// Rules only read the table, so they are evaluated in parallel.
pub fn run_all(table: &SupplierTable, cfg: &EffectiveConfig) -> Vec<AuditException> {
    let per_check: Vec<Vec<AuditException>> = REGISTRY
        .par_iter()
        .map(|check| (check.run)(table, cfg))
        .collect();
    per_check.into_iter().flatten().collect()
}
