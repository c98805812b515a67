//! Stable DTOs and IDs used across the esgaudit workspace.
//!
//! This crate is intentionally boring:
//! - data types for the emitted exception records and report
//! - stable string IDs and codes
//! - explain registry for remediation guidance

#![forbid(unsafe_code)]

pub mod explain;
pub mod ids;
pub mod receipt;

pub use explain::{ExamplePair, Explanation, lookup_explanation};
pub use receipt::{
    AuditData, AuditException, AuditReport, Issue, RiskCounts, RiskLevel, SCHEMA_REPORT_V1,
    ToolMeta, Verdict,
};
