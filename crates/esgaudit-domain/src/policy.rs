use esgaudit_types::RiskLevel;
use std::collections::BTreeMap;

/// Lowest risk level that turns the verdict into a failure.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum FailOn {
    Never,
    Low,
    Medium,
    High,
}

impl FailOn {
    pub fn threshold(self) -> Option<RiskLevel> {
        match self {
            FailOn::Never => None,
            FailOn::Low => Some(RiskLevel::Low),
            FailOn::Medium => Some(RiskLevel::Medium),
            FailOn::High => Some(RiskLevel::High),
        }
    }
}

/// Which suppliers form the statistical baseline a supplier is compared against.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Baseline {
    /// The other members of the supplier's industry (leave-one-out).
    Peers,
    /// Every member of the supplier's industry, the supplier included.
    Group,
}

impl Baseline {
    pub fn as_str(self) -> &'static str {
        match self {
            Baseline::Peers => "peers",
            Baseline::Group => "group",
        }
    }
}

#[derive(Clone, Debug)]
pub struct CheckPolicy {
    pub enabled: bool,
    pub risk: RiskLevel,
    /// Supplier id globs skipped by the check.
    pub allow: Vec<String>,
}

impl CheckPolicy {
    pub fn enabled(risk: RiskLevel) -> Self {
        Self {
            enabled: true,
            risk,
            allow: Vec::new(),
        }
    }

    pub fn disabled() -> Self {
        Self {
            enabled: false,
            risk: RiskLevel::Low,
            allow: Vec::new(),
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct OutlierParams {
    /// Number of standard deviations above the mean that still counts as normal.
    pub sigma: f64,
    pub baseline: Baseline,
}

impl Default for OutlierParams {
    fn default() -> Self {
        Self {
            sigma: 3.0,
            baseline: Baseline::Peers,
        }
    }
}

#[derive(Clone, Debug)]
pub struct EffectiveConfig {
    pub profile: String,
    pub fail_on: FailOn,
    pub checks: BTreeMap<String, CheckPolicy>,
    pub outlier: OutlierParams,
    /// Industries where an exact zero water usage is implausible.
    pub zero_water_industries: Vec<String>,
}

impl EffectiveConfig {
    pub fn check_policy(&self, check_id: &str) -> Option<&CheckPolicy> {
        self.checks.get(check_id).filter(|p| p.enabled)
    }
}
