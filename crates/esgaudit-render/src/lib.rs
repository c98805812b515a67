//! Rendering utilities for CI surfaces (Markdown, GitHub annotations).
//!
//! Renderers work on a flattened view of the report so they stay free of the
//! report crates and of IO.

#![forbid(unsafe_code)]

mod gha;
mod markdown;
mod model;

pub use gha::render_github_annotations;
pub use markdown::render_markdown;
pub use model::{
    RenderableCounts, RenderableData, RenderableException, RenderableLocation, RenderableReport,
    RenderableRisk, RenderableVerdictStatus,
};
