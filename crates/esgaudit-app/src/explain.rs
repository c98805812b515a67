//! The `explain` use case: look up check/code documentation.

use esgaudit_types::explain::{self, Explanation};

/// Output from the explain use case.
#[derive(Clone, Debug)]
pub enum ExplainOutput {
    Found(Explanation),
    /// Unknown identifier; includes available check_ids and codes.
    NotFound {
        identifier: String,
        available_check_ids: &'static [&'static str],
        available_codes: &'static [&'static str],
    },
}

/// Look up an explanation for a check_id or code.
pub fn run_explain(identifier: &str) -> ExplainOutput {
    match explain::lookup_explanation(identifier) {
        Some(exp) => ExplainOutput::Found(exp),
        None => ExplainOutput::NotFound {
            identifier: identifier.to_string(),
            available_check_ids: explain::all_check_ids(),
            available_codes: explain::all_codes(),
        },
    }
}

/// Format an explanation for terminal display.
pub fn format_explanation(exp: &Explanation) -> String {
    let mut out = String::new();

    out.push_str(exp.title);
    out.push('\n');
    out.push_str(&"=".repeat(exp.title.len()));
    out.push_str("\n\n");
    out.push_str(exp.description);
    out.push_str("\n\nRemediation\n-----------\n");
    out.push_str(exp.remediation);
    out.push_str("\n\nExamples\n--------\n\n");
    for (label, rows) in [
        ("Before (exception):", exp.examples.before),
        ("After (clean):", exp.examples.after),
    ] {
        out.push_str(label);
        out.push_str("\n```csv\n");
        out.push_str(rows);
        out.push_str("\n```\n\n");
    }
    out.truncate(out.trim_end().len());
    out.push('\n');

    out
}

/// Format the "not found" error message for terminal display.
pub fn format_not_found(
    identifier: &str,
    check_ids: &[&'static str],
    codes: &[&'static str],
) -> String {
    let mut out = String::new();

    out.push_str(&format!("Unknown check_id or code: {}\n\n", identifier));
    out.push_str("Available check_ids:\n");
    for id in check_ids {
        out.push_str(&format!("  - {}\n", id));
    }
    out.push_str("\nAvailable codes:\n");
    for code in codes {
        out.push_str(&format!("  - {}\n", code));
    }

    out
}

#[cfg(test)]
mod tests {
    use super::*;

    fn found(identifier: &str) -> Explanation {
        match run_explain(identifier) {
            ExplainOutput::Found(exp) => exp,
            ExplainOutput::NotFound { .. } => panic!("expected Found for {identifier}"),
        }
    }

    #[test]
    fn check_id_and_code_resolve_to_the_same_entry() {
        assert_eq!(
            found("carbon.outlier").title,
            found("emissions_above_threshold").title
        );
        assert_eq!(
            found("logic.zero_water").title,
            found("zero_water_usage").title
        );
    }

    #[test]
    fn unknown_identifier_lists_what_exists() {
        match run_explain("water.usage") {
            ExplainOutput::NotFound {
                identifier,
                available_check_ids,
                available_codes,
            } => {
                assert_eq!(identifier, "water.usage");
                assert_eq!(available_check_ids.len(), 3);
                assert_eq!(available_codes.len(), 3);
            }
            ExplainOutput::Found(_) => panic!("expected NotFound"),
        }
    }

    #[test]
    fn format_explanation_output() {
        let formatted = format_explanation(&found("reporting.diversity_gap"));
        assert!(formatted.contains("Remediation\n-----------\n"));
        assert!(formatted.contains("Before (exception):\n```csv\n"));
        assert!(formatted.contains("After (clean):\n```csv\n"));
        assert!(formatted.ends_with("```\n"));
    }

    #[test]
    fn format_not_found_output() {
        let formatted = format_not_found("missing", &["check.one", "check.two"], &["code.one"]);
        assert!(formatted.contains("Unknown check_id or code: missing"));
        assert!(formatted.contains("Available check_ids:\n  - check.one\n  - check.two\n"));
        assert!(formatted.contains("Available codes:\n  - code.one\n"));
    }
}
