use schemars::JsonSchema;
use serde::{Deserialize, Serialize};
use serde_json::Value as JsonValue;
use std::fmt;
use time::OffsetDateTime;

/// Stable schema identifier for esgaudit reports.
pub const SCHEMA_REPORT_V1: &str = "esgaudit.report.v1";

/// Ordinal severity of an exception. Ordering is `Low < Medium < High`.
#[derive(
    Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize, JsonSchema,
)]
pub enum RiskLevel {
    Low,
    Medium,
    High,
}

impl RiskLevel {
    pub fn as_str(self) -> &'static str {
        match self {
            RiskLevel::Low => "Low",
            RiskLevel::Medium => "Medium",
            RiskLevel::High => "High",
        }
    }
}

impl fmt::Display for RiskLevel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Kind of issue an exception reports. Serialized with the human labels used in the
/// exception table.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize, JsonSchema)]
pub enum Issue {
    #[serde(rename = "Carbon Outlier")]
    CarbonOutlier,
    #[serde(rename = "Reporting Gap")]
    ReportingGap,
    #[serde(rename = "Logical Anomaly")]
    LogicalAnomaly,
}

impl Issue {
    pub fn label(self) -> &'static str {
        match self {
            Issue::CarbonOutlier => "Carbon Outlier",
            Issue::ReportingGap => "Reporting Gap",
            Issue::LogicalAnomaly => "Logical Anomaly",
        }
    }
}

impl fmt::Display for Issue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// One detected exception against a single supplier.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize, JsonSchema)]
pub struct AuditException {
    /// Back-reference to the supplier row; not an ownership relation.
    pub supplier_id: String,
    pub issue: Issue,
    pub details: String,
    pub risk_level: RiskLevel,

    pub check_id: String,
    pub code: String,

    /// 1-based data row (header excluded) of the supplier in the input table.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub row: Option<u32>,

    /// Stable identifier intended for dedup and trending:
    /// a hash of `check_id + code + supplier_id`.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub fingerprint: Option<String>,

    /// Check-specific structured payload (kept open-ended for forward compatibility).
    #[serde(default, skip_serializing_if = "serde_json::Value::is_null")]
    pub data: JsonValue,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "lowercase")]
pub enum Verdict {
    Pass,
    Warn,
    Fail,
}

#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
pub struct RiskCounts {
    pub low: u32,
    pub medium: u32,
    pub high: u32,
}

impl RiskCounts {
    pub fn from_exceptions(exceptions: &[AuditException]) -> Self {
        let mut counts = RiskCounts::default();
        for e in exceptions {
            match e.risk_level {
                RiskLevel::Low => counts.low += 1,
                RiskLevel::Medium => counts.medium += 1,
                RiskLevel::High => counts.high += 1,
            }
        }
        counts
    }
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
pub struct ToolMeta {
    pub name: String,
    pub version: String,
}

/// esgaudit-specific summary payload for the report.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize, JsonSchema, Default)]
pub struct AuditData {
    pub profile: String,

    /// Input table as given on the command line.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub input: Option<String>,

    pub suppliers_scanned: u32,
    pub industries_scanned: u32,

    /// Check IDs that were enabled for this run, in evaluation order.
    pub checks_run: Vec<String>,

    pub exceptions_total: u32,
    pub counts: RiskCounts,
}

/// A generic report envelope.
///
/// Keeping this generic allows tool-specific data while still enforcing a stable outer shape.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize, JsonSchema)]
pub struct ReportEnvelope<TData = AuditData> {
    /// Versioned schema identifier for the envelope shape.
    pub schema: String,
    pub tool: ToolMeta,
    #[schemars(with = "String")]
    #[serde(with = "time::serde::rfc3339")]
    pub started_at: OffsetDateTime,
    #[schemars(with = "String")]
    #[serde(with = "time::serde::rfc3339")]
    pub finished_at: OffsetDateTime,
    pub verdict: Verdict,
    pub exceptions: Vec<AuditException>,
    pub data: TData,
}

pub type AuditReport = ReportEnvelope<AuditData>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn risk_levels_are_ordered() {
        assert!(RiskLevel::Low < RiskLevel::Medium);
        assert!(RiskLevel::Medium < RiskLevel::High);
    }

    #[test]
    fn issue_serializes_with_table_labels() {
        let json = serde_json::to_string(&Issue::CarbonOutlier).expect("serialize");
        assert_eq!(json, "\"Carbon Outlier\"");
        let back: Issue = serde_json::from_str("\"Logical Anomaly\"").expect("deserialize");
        assert_eq!(back, Issue::LogicalAnomaly);
    }

    #[test]
    fn exception_omits_empty_optionals() {
        let e = AuditException {
            supplier_id: "SUP-1".to_string(),
            issue: Issue::ReportingGap,
            details: "missing".to_string(),
            risk_level: RiskLevel::Medium,
            check_id: "reporting.diversity_gap".to_string(),
            code: "diversity_score_missing".to_string(),
            row: None,
            fingerprint: None,
            data: JsonValue::Null,
        };
        let value = serde_json::to_value(&e).expect("serialize");
        let obj = value.as_object().expect("object");
        assert!(!obj.contains_key("row"));
        assert!(!obj.contains_key("fingerprint"));
        assert!(!obj.contains_key("data"));
        assert_eq!(obj["risk_level"], "Medium");
    }

    #[test]
    fn counts_tally_by_risk() {
        let mk = |risk| AuditException {
            supplier_id: "S".to_string(),
            issue: Issue::CarbonOutlier,
            details: String::new(),
            risk_level: risk,
            check_id: String::new(),
            code: String::new(),
            row: None,
            fingerprint: None,
            data: JsonValue::Null,
        };
        let counts = RiskCounts::from_exceptions(&[
            mk(RiskLevel::High),
            mk(RiskLevel::High),
            mk(RiskLevel::Medium),
        ]);
        assert_eq!(
            counts,
            RiskCounts {
                low: 0,
                medium: 1,
                high: 2
            }
        );
    }
}
