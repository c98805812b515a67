//! Fuzz target for `esgaudit.toml` parsing and resolution.
//!
//! Run with:
//! ```bash
//! cargo +nightly fuzz run fuzz_config
//! ```

#![no_main]

use esgaudit_settings::{Overrides, parse_config_toml, resolve_config};
use libfuzzer_sys::fuzz_target;

fuzz_target!(|data: &[u8]| {
    let Ok(text) = std::str::from_utf8(data) else {
        return;
    };
    if let Ok(cfg) = parse_config_toml(text) {
        if let Ok(resolved) = resolve_config(cfg, Overrides::default()) {
            let sigma = resolved.effective.outlier.sigma;
            assert!(sigma.is_finite() && sigma > 0.0);
        }
    }
});
