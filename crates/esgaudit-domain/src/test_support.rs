use crate::model::{SupplierRecord, SupplierTable};
use crate::policy::{CheckPolicy, EffectiveConfig, FailOn, OutlierParams};
use esgaudit_types::{AuditException, Issue, RiskLevel, ids};
use std::collections::BTreeMap;

pub fn supplier(id: &str, industry: &str) -> SupplierRecord {
    SupplierRecord {
        row: 0,
        supplier_id: id.to_string(),
        industry: industry.to_string(),
        region: "EMEA".to_string(),
        carbon_emissions: Some(1_000.0),
        water_usage: Some(1_000.0),
        diversity_score: Some(25.0),
        safety_violations: Some(1),
        last_audit_date: None,
        compliance_status: "Certified".to_string(),
    }
}

pub fn record(
    id: &str,
    industry: &str,
    carbon: Option<f64>,
    water: Option<f64>,
    diversity: Option<f64>,
) -> SupplierRecord {
    SupplierRecord {
        carbon_emissions: carbon,
        water_usage: water,
        diversity_score: diversity,
        ..supplier(id, industry)
    }
}

/// Build a table, numbering rows from 1 in the given order.
pub fn table(records: Vec<SupplierRecord>) -> SupplierTable {
    let records = records
        .into_iter()
        .enumerate()
        .map(|(i, mut r)| {
            r.row = i as u32 + 1;
            r
        })
        .collect();
    SupplierTable::new(records).expect("test tables use unique supplier ids")
}

pub fn default_config() -> EffectiveConfig {
    let mut checks = BTreeMap::new();
    checks.insert(
        ids::CHECK_CARBON_OUTLIER.to_string(),
        CheckPolicy::enabled(RiskLevel::High),
    );
    checks.insert(
        ids::CHECK_REPORTING_DIVERSITY_GAP.to_string(),
        CheckPolicy::enabled(RiskLevel::Medium),
    );
    checks.insert(
        ids::CHECK_LOGIC_ZERO_WATER.to_string(),
        CheckPolicy::enabled(RiskLevel::High),
    );
    EffectiveConfig {
        profile: "test".to_string(),
        fail_on: FailOn::Never,
        checks,
        outlier: OutlierParams::default(),
        zero_water_industries: vec![ids::INDUSTRY_MANUFACTURING.to_string()],
    }
}

pub fn config_with_check(check_id: &str, risk: RiskLevel) -> EffectiveConfig {
    let mut checks = BTreeMap::new();
    checks.insert(check_id.to_string(), CheckPolicy::enabled(risk));
    EffectiveConfig {
        checks,
        ..default_config()
    }
}

pub fn config_with_check_allow(check_id: &str, risk: RiskLevel, allow: Vec<&str>) -> EffectiveConfig {
    let mut policy = CheckPolicy::enabled(risk);
    policy.allow = allow.into_iter().map(|s| s.to_string()).collect();

    let mut checks = BTreeMap::new();
    checks.insert(check_id.to_string(), policy);
    EffectiveConfig {
        checks,
        ..default_config()
    }
}

pub fn exception_with_risk(risk: RiskLevel) -> AuditException {
    AuditException {
        supplier_id: "SUP-0".to_string(),
        issue: Issue::CarbonOutlier,
        details: String::new(),
        risk_level: risk,
        check_id: ids::CHECK_CARBON_OUTLIER.to_string(),
        code: ids::CODE_EMISSIONS_ABOVE_THRESHOLD.to_string(),
        row: None,
        fingerprint: None,
        data: serde_json::Value::Null,
    }
}
