//! Seeded synthetic supplier dataset.
//!
//! Each industry draws its metrics from its own uniform ranges, then a small share
//! of rows gets one of the anomalies the audit rules look for. The same seed and
//! reference date always produce the same table.

#![forbid(unsafe_code)]

use esgaudit_domain::checks::stats::round2;
use esgaudit_domain::model::SupplierRecord;
use esgaudit_types::ids;
use rand::prelude::*;
use rand_distr::{Distribution, Poisson};
use time::{Date, Duration};

/// Uniform metric ranges for one industry.
#[derive(Clone, Copy, Debug)]
pub struct IndustryProfile {
    pub name: &'static str,
    /// Metric tons.
    pub carbon: (f64, f64),
    /// Cubic meters.
    pub water: (f64, f64),
    /// Percent.
    pub diversity: (f64, f64),
}

pub const INDUSTRIES: [IndustryProfile; 5] = [
    IndustryProfile {
        name: ids::INDUSTRY_MANUFACTURING,
        carbon: (5_000.0, 15_000.0),
        water: (2_000.0, 8_000.0),
        diversity: (10.0, 25.0),
    },
    IndustryProfile {
        name: "IT Services",
        carbon: (100.0, 500.0),
        water: (50.0, 200.0),
        diversity: (35.0, 50.0),
    },
    IndustryProfile {
        name: "Energy",
        carbon: (40_000.0, 100_000.0),
        water: (5_000.0, 20_000.0),
        diversity: (5.0, 15.0),
    },
    IndustryProfile {
        name: "Consumer Goods",
        carbon: (1_000.0, 5_000.0),
        water: (1_000.0, 4_000.0),
        diversity: (20.0, 40.0),
    },
    IndustryProfile {
        name: "Healthcare",
        carbon: (500.0, 2_000.0),
        water: (500.0, 1_500.0),
        diversity: (30.0, 45.0),
    },
];

pub const REGIONS: [&str; 4] = ["APAC", "EMEA", "NA", "LATAM"];

/// Days before the reference date the last audit may lie.
pub const MAX_AUDIT_AGE_DAYS: i64 = 365;

/// Share of rows receiving each injected anomaly.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct AnomalyRates {
    /// Probability that a row's emissions are multiplied by `carbon_multiplier`.
    pub carbon_spike: f64,
    pub carbon_multiplier: f64,
    /// Probability that a row's diversity score is left out.
    pub diversity_gap: f64,
    /// Probability that a Manufacturing row reports zero water usage.
    pub zero_water: f64,
}

impl Default for AnomalyRates {
    fn default() -> Self {
        Self {
            carbon_spike: 0.05,
            carbon_multiplier: 10.0,
            diversity_gap: 0.08,
            zero_water: 0.03,
        }
    }
}

#[derive(Clone, Debug, PartialEq)]
pub struct SynthConfig {
    pub count: usize,
    pub seed: u64,
    /// Reference date that audit dates count back from.
    pub as_of: Date,
    /// Mean of the Poisson-distributed safety violation count.
    pub safety_mean: f64,
    pub anomalies: AnomalyRates,
}

impl SynthConfig {
    pub const DEFAULT_COUNT: usize = 1000;
    pub const DEFAULT_SEED: u64 = 42;

    pub fn new(as_of: Date) -> Self {
        Self {
            count: Self::DEFAULT_COUNT,
            seed: Self::DEFAULT_SEED,
            as_of,
            safety_mean: 1.2,
            anomalies: AnomalyRates::default(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum SynthError {
    #[error("{name} must be a probability in [0, 1], got {value}")]
    InvalidProbability { name: &'static str, value: f64 },

    #[error("{name} must be a finite number > 0, got {value}")]
    InvalidParameter { name: &'static str, value: f64 },

    #[error("supplier count must be at least 1")]
    EmptyTable,
}

/// How many rows received each anomaly.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct InjectedCounts {
    pub carbon_spikes: usize,
    pub diversity_gaps: usize,
    pub zero_water: usize,
}

#[derive(Clone, Debug)]
pub struct Synthesized {
    pub records: Vec<SupplierRecord>,
    pub injected: InjectedCounts,
}

/// Generate `cfg.count` supplier rows.
pub fn generate(cfg: &SynthConfig) -> Result<Synthesized, SynthError> {
    validate(cfg)?;
    let safety = Poisson::new(cfg.safety_mean).map_err(|_| SynthError::InvalidParameter {
        name: "safety_mean",
        value: cfg.safety_mean,
    })?;

    let mut rng = StdRng::seed_from_u64(cfg.seed);
    let mut injected = InjectedCounts::default();
    let mut records = Vec::with_capacity(cfg.count);

    for i in 0..cfg.count {
        let profile = INDUSTRIES[rng.random_range(0..INDUSTRIES.len())];

        let mut carbon = rng.random_range(profile.carbon.0..profile.carbon.1);
        let mut water = rng.random_range(profile.water.0..profile.water.1);
        let mut diversity = Some(rng.random_range(profile.diversity.0..profile.diversity.1));
        let safety_violations = safety.sample(&mut rng) as u32;

        if rng.random_bool(cfg.anomalies.carbon_spike) {
            carbon *= cfg.anomalies.carbon_multiplier;
            injected.carbon_spikes += 1;
        }
        if rng.random_bool(cfg.anomalies.diversity_gap) {
            diversity = None;
            injected.diversity_gaps += 1;
        }
        if profile.name == ids::INDUSTRY_MANUFACTURING && rng.random_bool(cfg.anomalies.zero_water)
        {
            water = 0.0;
            injected.zero_water += 1;
        }

        let region = REGIONS[rng.random_range(0..REGIONS.len())];
        let age = rng.random_range(0..=MAX_AUDIT_AGE_DAYS);

        records.push(SupplierRecord {
            row: u32::try_from(i + 1).unwrap_or(u32::MAX),
            supplier_id: format!("SUP-{}", 1000 + i),
            industry: profile.name.to_string(),
            region: region.to_string(),
            carbon_emissions: Some(round2(carbon)),
            water_usage: Some(round2(water)),
            diversity_score: diversity.map(round2),
            safety_violations: Some(safety_violations),
            last_audit_date: Some(cfg.as_of.saturating_sub(Duration::days(age))),
            compliance_status: "Certified".to_string(),
        });
    }

    Ok(Synthesized { records, injected })
}

fn validate(cfg: &SynthConfig) -> Result<(), SynthError> {
    if cfg.count == 0 {
        return Err(SynthError::EmptyTable);
    }
    let rates = &cfg.anomalies;
    for (name, value) in [
        ("carbon_spike", rates.carbon_spike),
        ("diversity_gap", rates.diversity_gap),
        ("zero_water", rates.zero_water),
    ] {
        if !(0.0..=1.0).contains(&value) {
            return Err(SynthError::InvalidProbability { name, value });
        }
    }
    for (name, value) in [
        ("carbon_multiplier", rates.carbon_multiplier),
        ("safety_mean", cfg.safety_mean),
    ] {
        if !value.is_finite() || value <= 0.0 {
            return Err(SynthError::InvalidParameter { name, value });
        }
    }
    Ok(())
}
