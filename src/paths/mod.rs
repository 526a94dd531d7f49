// src/paths/mod.rs
// =============================================================================
// Filesystem side of md-links.
//
// Submodules:
// - resolve: absolutize and classify the path the user passed in
// - walk: find every Markdown file below a directory
// =============================================================================

mod resolve;
mod walk;

pub use resolve::{is_markdown, resolve, PathKind};
pub use walk::walk;
