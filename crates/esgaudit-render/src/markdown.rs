use crate::{RenderableReport, RenderableRisk, RenderableVerdictStatus};

pub fn render_markdown(report: &RenderableReport) -> String {
    let mut out = String::new();

    out.push_str("# ESG audit report\n\n");
    let verdict = match report.verdict {
        RenderableVerdictStatus::Pass => "PASS",
        RenderableVerdictStatus::Warn => "WARN",
        RenderableVerdictStatus::Fail => "FAIL",
    };
    let counts = &report.data.counts;
    out.push_str(&format!(
        "- Verdict: **{}**\n- Profile: `{}`\n- Suppliers scanned: {}\n- Exceptions: {} (high {}, medium {}, low {})\n\n",
        verdict,
        report.data.profile,
        report.data.suppliers_scanned,
        report.data.exceptions_total,
        counts.high,
        counts.medium,
        counts.low
    ));

    if report.exceptions.is_empty() {
        out.push_str("No exceptions.\n");
        return out;
    }

    out.push_str("## Exceptions\n\n");

    for e in &report.exceptions {
        let risk = match e.risk {
            RenderableRisk::High => "HIGH",
            RenderableRisk::Medium => "MEDIUM",
            RenderableRisk::Low => "LOW",
        };

        out.push_str(&format!(
            "- [{}] `{}` {}: {} (`{}` / `{}`",
            risk, e.supplier_id, e.issue, e.message, e.check_id, e.code
        ));
        if let Some(loc) = &e.location {
            match loc.line {
                Some(line) => out.push_str(&format!(", `{}`:{}", loc.path, line)),
                None => out.push_str(&format!(", `{}`", loc.path)),
            }
        }
        out.push_str(")\n");

        if let Some(help) = &e.help {
            out.push_str(&format!("  - help: {}\n", help));
        }
    }

    out
}
