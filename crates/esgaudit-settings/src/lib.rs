//! Config parsing and profile/preset resolution.
//!
//! This crate is IO-free: it parses and resolves configuration provided as strings.

#![forbid(unsafe_code)]

mod model;
mod presets;
mod resolve;

pub use model::{CheckConfig, EsgauditConfigV1};
pub use presets::PROFILES;
pub use resolve::{Overrides, ResolvedConfig};

/// Parse `esgaudit.toml` (or equivalent) into a typed model.
pub fn parse_config_toml(input: &str) -> anyhow::Result<EsgauditConfigV1> {
    let cfg: EsgauditConfigV1 = toml::from_str(input)?;
    Ok(cfg)
}

/// Resolve the effective config used by the engine (preset + config file + overrides).
pub fn resolve_config(
    cfg: EsgauditConfigV1,
    overrides: Overrides,
) -> anyhow::Result<ResolvedConfig> {
    resolve::resolve_config(cfg, overrides)
}
