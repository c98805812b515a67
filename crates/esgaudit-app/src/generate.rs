//! The `generate` use case: synthesize a supplier table and write it out.

use anyhow::Context;
use camino::Utf8Path;
use esgaudit_synth::{InjectedCounts, SynthConfig};
use time::{Date, OffsetDateTime};

#[derive(Clone, Debug)]
pub struct GenerateInput<'a> {
    pub output: &'a Utf8Path,
    /// Defaults to 1000.
    pub count: Option<usize>,
    /// Defaults to 42.
    pub seed: Option<u64>,
    /// Reference date for audit dates; defaults to today (UTC).
    pub as_of: Option<Date>,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct GenerateOutput {
    pub rows: usize,
    pub injected: InjectedCounts,
}

pub fn run_generate(input: GenerateInput<'_>) -> anyhow::Result<GenerateOutput> {
    let as_of = input
        .as_of
        .unwrap_or_else(|| OffsetDateTime::now_utc().date());
    let mut cfg = SynthConfig::new(as_of);
    if let Some(count) = input.count {
        cfg.count = count;
    }
    if let Some(seed) = input.seed {
        cfg.seed = seed;
    }

    let synthesized = esgaudit_synth::generate(&cfg).context("synthesize supplier table")?;
    esgaudit_data::write_supplier_csv(input.output, &synthesized.records)
        .with_context(|| format!("write supplier table {}", input.output))?;

    let injected = synthesized.injected;
    tracing::info!(
        path = %input.output,
        rows = synthesized.records.len(),
        seed = cfg.seed,
        carbon_spikes = injected.carbon_spikes,
        diversity_gaps = injected.diversity_gaps,
        zero_water = injected.zero_water,
        "generated supplier table"
    );

    Ok(GenerateOutput {
        rows: synthesized.records.len(),
        injected,
    })
}
