//! Property-based tests for the domain crate.
//!
//! These tests use proptest to verify invariants around:
//! - Referential integrity of exceptions
//! - Determinism and ordering of the exception list
//! - Per-rule flagging semantics against brute-force references

use crate::engine::evaluate;
use crate::model::{SupplierRecord, SupplierTable};
use crate::policy::Baseline;
use crate::test_support::{default_config, record, table};
use esgaudit_types::{Issue, ids};
use proptest::prelude::*;

// ============================================================================
// Strategies for generating arbitrary values
// ============================================================================

const INDUSTRIES: &[&str] = &[
    "Manufacturing",
    "IT Services",
    "Energy",
    "Consumer Goods",
    "Healthcare",
];

fn arb_industry() -> impl Strategy<Value = String> {
    prop::sample::select(INDUSTRIES).prop_map(|s| s.to_string())
}

fn arb_carbon() -> impl Strategy<Value = Option<f64>> {
    prop_oneof![
        1 => Just(None),
        6 => (0.0f64..20_000.0).prop_map(Some),
        1 => (100_000.0f64..1_000_000.0).prop_map(Some),
    ]
}

/// Water usage biased towards the interesting boundary values.
fn arb_water() -> impl Strategy<Value = Option<f64>> {
    prop_oneof![
        Just(None),
        Just(Some(0.0)),
        Just(Some(0.0001)),
        (0.0f64..10_000.0).prop_map(Some),
    ]
}

fn arb_diversity() -> impl Strategy<Value = Option<f64>> {
    prop_oneof![Just(None), Just(Some(0.0)), (0.0f64..=100.0).prop_map(Some)]
}

fn arb_record() -> impl Strategy<Value = (String, Option<f64>, Option<f64>, Option<f64>)> {
    (arb_industry(), arb_carbon(), arb_water(), arb_diversity())
}

fn arb_table() -> impl Strategy<Value = SupplierTable> {
    prop::collection::vec(arb_record(), 1..60).prop_map(|rows| {
        table(
            rows.into_iter()
                .enumerate()
                .map(|(i, (industry, carbon, water, diversity))| {
                    record(&format!("SUP-{}", 1000 + i), &industry, carbon, water, diversity)
                })
                .collect(),
        )
    })
}

/// Brute-force leave-one-out check for a single supplier.
fn reference_is_outlier(table: &SupplierTable, target: &SupplierRecord, sigma: f64) -> bool {
    let Some(value) = target.carbon_emissions else {
        return false;
    };
    let peers: Vec<f64> = table
        .records()
        .iter()
        .filter(|r| r.industry == target.industry && r.supplier_id != target.supplier_id)
        .filter_map(|r| r.carbon_emissions)
        .collect();
    if peers.len() < 2 {
        return false;
    }
    let n = peers.len() as f64;
    let mean = peers.iter().fold(0.0, |acc, v| acc + v) / n;
    let m2: f64 = peers.iter().map(|v| (v - mean) * (v - mean)).sum();
    value > mean + sigma * (m2 / (n - 1.0)).sqrt()
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(128))]

    #[test]
    fn exceptions_reference_existing_suppliers(t in arb_table()) {
        let report = evaluate(&t, &default_config());
        let known = t.supplier_ids();
        for e in &report.exceptions {
            prop_assert!(known.contains(e.supplier_id.as_str()));
        }
    }

    #[test]
    fn evaluation_is_deterministic(t in arb_table()) {
        let cfg = default_config();
        let a = evaluate(&t, &cfg);
        let b = evaluate(&t, &cfg);
        prop_assert_eq!(&a.exceptions, &b.exceptions);
        prop_assert_eq!(
            serde_json::to_string(&a.exceptions).expect("serialize"),
            serde_json::to_string(&b.exceptions).expect("serialize")
        );
    }

    #[test]
    fn exceptions_follow_rule_then_row_order(t in arb_table()) {
        let report = evaluate(&t, &default_config());
        let rank = |check_id: &str| match check_id {
            ids::CHECK_CARBON_OUTLIER => 0,
            ids::CHECK_REPORTING_DIVERSITY_GAP => 1,
            _ => 2,
        };
        for pair in report.exceptions.windows(2) {
            let (a, b) = (&pair[0], &pair[1]);
            let key_a = (rank(&a.check_id), a.row);
            let key_b = (rank(&b.check_id), b.row);
            prop_assert!(key_a < key_b, "{:?} must precede {:?}", key_a, key_b);
        }
    }

    #[test]
    fn reporting_gap_matches_missing_scores_exactly(t in arb_table()) {
        let report = evaluate(&t, &default_config());
        for r in t.records() {
            let gaps = report
                .exceptions
                .iter()
                .filter(|e| e.issue == Issue::ReportingGap && e.supplier_id == r.supplier_id)
                .count();
            let expected = usize::from(r.diversity_score.is_none());
            prop_assert_eq!(gaps, expected);
        }
    }

    #[test]
    fn zero_water_matches_exact_zero_in_manufacturing(t in arb_table()) {
        let report = evaluate(&t, &default_config());
        for r in t.records() {
            let flagged = report
                .exceptions
                .iter()
                .any(|e| e.issue == Issue::LogicalAnomaly && e.supplier_id == r.supplier_id);
            let expected = r.industry == "Manufacturing" && r.water_usage == Some(0.0);
            prop_assert_eq!(flagged, expected);
        }
    }

    #[test]
    fn carbon_outliers_match_brute_force_reference(t in arb_table()) {
        let cfg = default_config();
        prop_assume!(cfg.outlier.baseline == Baseline::Peers);
        let report = evaluate(&t, &cfg);
        for r in t.records() {
            let flagged = report
                .exceptions
                .iter()
                .any(|e| e.issue == Issue::CarbonOutlier && e.supplier_id == r.supplier_id);
            prop_assert_eq!(flagged, reference_is_outlier(&t, r, cfg.outlier.sigma));
        }
    }

    #[test]
    fn constant_industries_never_produce_outliers(
        value in 0.0f64..1_000_000.0,
        n in 1usize..40,
    ) {
        let t = table(
            (0..n)
                .map(|i| record(&format!("S{i}"), "Energy", Some(value), Some(1.0), Some(1.0)))
                .collect(),
        );
        let report = evaluate(&t, &default_config());
        prop_assert!(report.exceptions.iter().all(|e| e.issue != Issue::CarbonOutlier));
    }
}
