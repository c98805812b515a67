//! Stable identifiers for checks and exception codes.
//!
//! `check_id` is a dotted namespace. `code` is a short snake_case discriminator.

// Checks
pub const CHECK_CARBON_OUTLIER: &str = "carbon.outlier";
pub const CHECK_REPORTING_DIVERSITY_GAP: &str = "reporting.diversity_gap";
pub const CHECK_LOGIC_ZERO_WATER: &str = "logic.zero_water";

// Codes: carbon.outlier
pub const CODE_EMISSIONS_ABOVE_THRESHOLD: &str = "emissions_above_threshold";

// Codes: reporting.diversity_gap
pub const CODE_DIVERSITY_SCORE_MISSING: &str = "diversity_score_missing";

// Codes: logic.zero_water
pub const CODE_ZERO_WATER_USAGE: &str = "zero_water_usage";

/// Industry label whose processes cannot plausibly run without water.
pub const INDUSTRY_MANUFACTURING: &str = "Manufacturing";
