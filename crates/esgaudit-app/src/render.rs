//! Render use cases: markdown and GitHub annotations from in-memory reports.

use esgaudit_render::RenderableReport;

pub fn render_markdown(report: &RenderableReport) -> String {
    esgaudit_render::render_markdown(report)
}

/// At most `max` annotations, in report order.
pub fn render_annotations(report: &RenderableReport, max: usize) -> Vec<String> {
    esgaudit_render::render_github_annotations(report)
        .into_iter()
        .take(max)
        .collect()
}
