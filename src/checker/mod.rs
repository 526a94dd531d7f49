// src/checker/mod.rs
// =============================================================================
// This module contains all link finding and link checking logic.
//
// Submodules:
// - link: LinkRecord / ValidatedLinkRecord, the data that flows out
// - markdown: Extracts [text](href) links from Markdown text
// - http: Probes URLs and annotates links with the outcome
//
// This file (mod.rs) is the module root - it re-exports the public API so
// callers can write `checker::validate_links()`.
// =============================================================================

mod http;
mod link;
mod markdown;

pub use http::{validate_links, FailureKind, Probe, ProbeError, ReqwestProbe};
pub use link::{LinkRecord, Outcome, ValidatedLinkRecord};
pub use markdown::extract_links;
