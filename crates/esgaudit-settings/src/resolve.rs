use crate::model::{CheckConfig, EsgauditConfigV1};
use crate::presets;
use anyhow::Context;
use esgaudit_domain::policy::{Baseline, EffectiveConfig, FailOn};
use esgaudit_types::{RiskLevel, ids};
use globset::Glob;

/// Command-line values that win over the config file.
#[derive(Clone, Debug, Default)]
pub struct Overrides {
    pub profile: Option<String>,
    pub fail_on: Option<String>,
}

#[derive(Clone, Debug)]
pub struct ResolvedConfig {
    pub effective: EffectiveConfig,
}

pub fn resolve_config(
    cfg: EsgauditConfigV1,
    overrides: Overrides,
) -> anyhow::Result<ResolvedConfig> {
    let profile = overrides
        .profile
        .clone()
        .or(cfg.profile.clone())
        .unwrap_or_else(|| "standard".to_string());

    let mut effective = presets::preset(&profile).with_context(|| {
        format!(
            "unknown profile: {profile} (expected {})",
            presets::PROFILES.join("|")
        )
    })?;

    // per-check overrides
    for (check_id, cc) in cfg.checks.iter() {
        validate_keys(check_id, cc)?;

        let entry = effective
            .checks
            .get_mut(check_id)
            .with_context(|| format!("unknown check id in config: {check_id}"))?;

        if let Some(enabled) = cc.enabled {
            entry.enabled = enabled;
        }
        if let Some(risk) = cc.risk.as_deref() {
            entry.risk = parse_risk(risk).with_context(|| format!("invalid risk for {check_id}"))?;
        }
        if !cc.allow.is_empty() {
            validate_allowlist(check_id, &cc.allow)?;
            entry.allow = cc.allow.clone();
        }

        if let Some(sigma) = cc.sigma {
            effective.outlier.sigma = parse_sigma(sigma)?;
        }
        if let Some(baseline) = cc.baseline.as_deref() {
            effective.outlier.baseline = parse_baseline(baseline)?;
        }
        if let Some(industries) = &cc.industries {
            effective.zero_water_industries = industries.clone();
        }
    }

    // fail_on: the command line beats the config file, which beats the preset.
    if let Some(fail_on) = overrides.fail_on.as_deref().or(cfg.fail_on.as_deref()) {
        effective.fail_on = parse_fail_on(fail_on)?;
    }

    Ok(ResolvedConfig { effective })
}

/// Reject check-specific keys set on a check that does not read them.
fn validate_keys(check_id: &str, cc: &CheckConfig) -> anyhow::Result<()> {
    let mut misplaced = Vec::new();
    if check_id != ids::CHECK_CARBON_OUTLIER {
        if cc.sigma.is_some() {
            misplaced.push("sigma");
        }
        if cc.baseline.is_some() {
            misplaced.push("baseline");
        }
    }
    if check_id != ids::CHECK_LOGIC_ZERO_WATER && cc.industries.is_some() {
        misplaced.push("industries");
    }
    if !misplaced.is_empty() {
        anyhow::bail!(
            "{} not supported by {check_id}",
            misplaced.join(", ")
        );
    }
    Ok(())
}

fn validate_allowlist(check_id: &str, patterns: &[String]) -> anyhow::Result<()> {
    for pattern in patterns {
        Glob::new(pattern)
            .with_context(|| format!("invalid allow glob for {check_id}: {pattern}"))?;
    }
    Ok(())
}

fn parse_risk(v: &str) -> anyhow::Result<RiskLevel> {
    match v.to_ascii_lowercase().as_str() {
        "low" => Ok(RiskLevel::Low),
        "medium" => Ok(RiskLevel::Medium),
        "high" => Ok(RiskLevel::High),
        _ => anyhow::bail!("unknown risk: {v} (expected low|medium|high)"),
    }
}

fn parse_fail_on(v: &str) -> anyhow::Result<FailOn> {
    match v.to_ascii_lowercase().as_str() {
        "never" => Ok(FailOn::Never),
        "low" => Ok(FailOn::Low),
        "medium" => Ok(FailOn::Medium),
        "high" => Ok(FailOn::High),
        _ => anyhow::bail!("unknown fail_on: {v} (expected never|low|medium|high)"),
    }
}

fn parse_baseline(v: &str) -> anyhow::Result<Baseline> {
    match v {
        "peers" => Ok(Baseline::Peers),
        "group" => Ok(Baseline::Group),
        other => anyhow::bail!("unknown baseline: {other} (expected peers|group)"),
    }
}

fn parse_sigma(v: f64) -> anyhow::Result<f64> {
    if !v.is_finite() || v <= 0.0 {
        anyhow::bail!("invalid sigma: {v} (expected a finite number > 0)");
    }
    Ok(v)
}
