//! Use case orchestration for esgaudit.
//!
//! This crate provides the application layer: use cases that coordinate the domain, data,
//! synth and render layers. It stays thin and delegates the real work to those layers.
//!
//! The CLI crate depends on this; it only handles argument parsing, logging and exit codes.

#![forbid(unsafe_code)]

mod audit;
mod explain;
mod generate;
mod render;
mod report;

pub use audit::{AuditInput, AuditOutput, run_audit, verdict_exit_code};
pub use explain::{ExplainOutput, format_explanation, format_not_found, run_explain};
pub use generate::{GenerateInput, GenerateOutput, run_generate};
pub use render::{render_annotations, render_markdown};
pub use report::{
    exceptions_csv_string, parse_report_json, serialize_report, to_renderable, write_exceptions,
    write_report, write_text,
};
