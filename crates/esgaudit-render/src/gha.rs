use crate::{RenderableReport, RenderableRisk};

/// Render exceptions as GitHub Actions workflow command annotations.
///
/// Format:
/// `::{level} file={path},line={line}::[{check_id}:{code}] {supplier_id}: {message}`
pub fn render_github_annotations(report: &RenderableReport) -> Vec<String> {
    let mut out = Vec::new();

    for e in &report.exceptions {
        let level = match e.risk {
            RenderableRisk::High => "error",
            RenderableRisk::Medium => "warning",
            RenderableRisk::Low => "notice",
        };

        let mut meta = String::new();
        if let Some(loc) = &e.location {
            meta.push_str(&format!("file={}", escape_property(&loc.path)));
            if let Some(line) = loc.line {
                meta.push_str(&format!(",line={}", line));
            }
        }

        let message = escape_data(&format!(
            "[{}:{}] {}: {}",
            e.check_id, e.code, e.supplier_id, e.message
        ));

        if meta.is_empty() {
            out.push(format!("::{}::{}", level, message));
        } else {
            out.push(format!("::{} {}::{}", level, meta, message));
        }
    }

    out
}

fn escape_data(s: &str) -> String {
    s.replace('%', "%25")
        .replace('\r', "%0D")
        .replace('\n', "%0A")
}

fn escape_property(s: &str) -> String {
    escape_data(s).replace(':', "%3A").replace(',', "%2C")
}
