// src/lib.rs
// =============================================================================
// md-links as a library: find the links in Markdown files and, optionally,
// check that each one answers over HTTP.
//
// The usual entry point is `Pipeline::run`:
//
//   let pipeline = Pipeline::new(TokioFiles, ReqwestProbe::new(timeout)?);
//   let links = pipeline.run("docs", Options { validate: true }).await?;
//
// Modules:
// - paths: resolve the input path, walk directories
// - checker: extract links, probe them
// - source: where file contents come from
// - pipeline: everything above, in order
// - report: listing / stats rendering for the CLI
// =============================================================================

pub mod checker;
pub mod error;
pub mod paths;
pub mod pipeline;
pub mod report;
pub mod source;

pub use error::{Error, Result};
pub use pipeline::{Links, Options, Pipeline};
