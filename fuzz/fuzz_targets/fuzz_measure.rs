//! Fuzz target for numeric cell parsing.
//!
//! Whatever the cell holds, a parsed measure is finite and non-negative.

#![no_main]

use libfuzzer_sys::fuzz_target;

fuzz_target!(|raw: &str| {
    if let Some(v) = esgaudit_data::fuzz::parse_measure(raw) {
        assert!(v.is_finite() && v >= 0.0, "{raw:?} parsed as {v}");
    }
});
