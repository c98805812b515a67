//! Fuzz target for supplier table parsing.
//!
//! Goal: the loader should **never panic**. Structural problems come back as
//! `LoadError`; unusable values load as missing.
//!
//! Run with:
//! ```bash
//! cargo +nightly fuzz run fuzz_supplier_csv
//! ```

#![no_main]

use libfuzzer_sys::fuzz_target;

fuzz_target!(|data: &[u8]| {
    if let Ok(text) = std::str::from_utf8(data) {
        if let Ok(rows) = esgaudit_data::fuzz::parse_supplier_table(text) {
            assert!(rows > 0, "a loaded table always has data rows");
        }
    }
});
