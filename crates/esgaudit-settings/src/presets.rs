use esgaudit_domain::policy::{CheckPolicy, EffectiveConfig, FailOn, OutlierParams};
use esgaudit_types::{RiskLevel, ids};
use std::collections::BTreeMap;

/// Names accepted by `profile`.
pub const PROFILES: &[&str] = &["standard", "strict"];

pub fn preset(profile: &str) -> Option<EffectiveConfig> {
    match profile {
        "standard" => Some(standard_profile()),
        "strict" => Some(strict_profile()),
        _ => None,
    }
}

fn standard_profile() -> EffectiveConfig {
    EffectiveConfig {
        profile: "standard".to_string(),
        fail_on: FailOn::Never,
        checks: default_checks(),
        outlier: OutlierParams::default(),
        zero_water_industries: vec![ids::INDUSTRY_MANUFACTURING.to_string()],
    }
}

fn strict_profile() -> EffectiveConfig {
    EffectiveConfig {
        profile: "strict".to_string(),
        fail_on: FailOn::High,
        ..standard_profile()
    }
}

fn default_checks() -> BTreeMap<String, CheckPolicy> {
    let mut m = BTreeMap::new();
    m.insert(
        ids::CHECK_CARBON_OUTLIER.to_string(),
        CheckPolicy::enabled(RiskLevel::High),
    );
    m.insert(
        ids::CHECK_REPORTING_DIVERSITY_GAP.to_string(),
        CheckPolicy::enabled(RiskLevel::Medium),
    );
    m.insert(
        ids::CHECK_LOGIC_ZERO_WATER.to_string(),
        CheckPolicy::enabled(RiskLevel::High),
    );
    m
}
