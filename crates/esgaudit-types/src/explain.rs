//! Explain registry for checks and codes.
//!
//! Maps check IDs and codes to human-readable explanations with remediation guidance.

use crate::ids;

/// Explanation entry for a check or code.
#[derive(Debug, Clone)]
pub struct Explanation {
    /// Short description of the check/code.
    pub title: &'static str,
    /// What the check does and why it exists.
    pub description: &'static str,
    /// How to resolve exceptions.
    pub remediation: &'static str,
    /// Before/after supplier rows.
    pub examples: ExamplePair,
}

/// Before and after CSV examples.
#[derive(Debug, Clone)]
pub struct ExamplePair {
    /// Rows that would raise an exception.
    pub before: &'static str,
    /// Rows that pass the check.
    pub after: &'static str,
}

/// Look up an explanation by check_id or code.
///
/// Returns `None` if the identifier is not recognized.
pub fn lookup_explanation(identifier: &str) -> Option<Explanation> {
    match identifier {
        ids::CHECK_CARBON_OUTLIER | ids::CODE_EMISSIONS_ABOVE_THRESHOLD => {
            Some(explain_carbon_outlier())
        }
        ids::CHECK_REPORTING_DIVERSITY_GAP | ids::CODE_DIVERSITY_SCORE_MISSING => {
            Some(explain_diversity_gap())
        }
        ids::CHECK_LOGIC_ZERO_WATER | ids::CODE_ZERO_WATER_USAGE => Some(explain_zero_water()),
        _ => None,
    }
}

/// List all known check IDs, in evaluation order.
pub fn all_check_ids() -> &'static [&'static str] {
    &[
        ids::CHECK_CARBON_OUTLIER,
        ids::CHECK_REPORTING_DIVERSITY_GAP,
        ids::CHECK_LOGIC_ZERO_WATER,
    ]
}

/// List all known codes.
pub fn all_codes() -> &'static [&'static str] {
    &[
        ids::CODE_EMISSIONS_ABOVE_THRESHOLD,
        ids::CODE_DIVERSITY_SCORE_MISSING,
        ids::CODE_ZERO_WATER_USAGE,
    ]
}

fn explain_carbon_outlier() -> Explanation {
    Explanation {
        title: "Carbon Emission Outlier",
        description: "\
Flags suppliers whose reported carbon emissions sit far above their own industry.

Suppliers are only ever compared with peers in the same industry: baselines differ
by an order of magnitude between, say, IT Services and Energy, so a cross-industry
comparison would flag every energy supplier and none of the real spikes.

A supplier is flagged when its emissions strictly exceed `mean + 3 * stddev` of
its industry baseline (sample standard deviation). By default the baseline is the
supplier's peers, i.e. the other members of its industry; at least two peers with
reported emissions are needed before anything can be flagged. Suppliers with no
reported emissions are skipped.",
        remediation: "\
Confirm the figure with the supplier:
- Check for unit mistakes (kg vs metric tons) or an extra digit
- Check whether the reporting boundary changed (new plants, acquisitions)
- If the figure is genuine, record the justification and add the supplier id to
  the check's `allow` list in esgaudit.toml",
        examples: ExamplePair {
            before: "\
supplier_id,industry,carbon_emissions
SUP-1001,Manufacturing,10000
SUP-1002,Manufacturing,10000
SUP-1003,Manufacturing,1000000",
            after: "\
supplier_id,industry,carbon_emissions
SUP-1001,Manufacturing,10000
SUP-1002,Manufacturing,10000
SUP-1003,Manufacturing,10000",
        },
    }
}

fn explain_diversity_gap() -> Explanation {
    Explanation {
        title: "Diversity Reporting Gap",
        description: "\
Flags suppliers that did not report a social diversity score.

A blank or null diversity score is a disclosure gap, not a score of zero. A
reported score of 0 is a (poor) disclosure and is not flagged here.",
        remediation: "\
Request the missing disclosure from the supplier and re-run the audit once the
`diversity_score` column is filled in.",
        examples: ExamplePair {
            before: "\
supplier_id,industry,diversity_score
SUP-1004,Healthcare,",
            after: "\
supplier_id,industry,diversity_score
SUP-1004,Healthcare,38.5",
        },
    }
}

fn explain_zero_water() -> Explanation {
    Explanation {
        title: "Sustainability Paradox: Zero Water Usage",
        description: "\
Flags manufacturing suppliers that report exactly zero water usage.

Industrial manufacturing does not run without water. A zero points at
non-reporting or misreporting (potential greenwashing) rather than true zero
consumption. Only an exact zero is flagged; small positive figures and blank
values are left alone.",
        remediation: "\
Ask the supplier for metered water consumption and the reporting boundary. If the
site genuinely uses no process water (e.g. a pure assembly line on a shared
campus), document it and allowlist the supplier.",
        examples: ExamplePair {
            before: "\
supplier_id,industry,water_usage
SUP-1005,Manufacturing,0",
            after: "\
supplier_id,industry,water_usage
SUP-1005,Manufacturing,4210.75",
        },
    }
}
