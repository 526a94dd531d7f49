// src/pipeline.rs
// =============================================================================
// Ties everything together: path in, link records out.
//
// What happens here:
// 1. Resolve the input path (file or directory)
// 2. Collect the Markdown files (walk the directory, or the single file)
// 3. Read every file concurrently and extract its links
// 4. Optionally probe every link
//
// Any error in steps 1-3 aborts the run. Unreachable links in step 4 are
// not errors, they are reported in the records.
// =============================================================================

use crate::checker::{extract_links, validate_links, LinkRecord, Probe, ValidatedLinkRecord};
use crate::error::{Error, Result};
use crate::paths::{is_markdown, resolve, walk, PathKind};
use crate::source::FileSource;
use futures::future::try_join_all;
use serde::Serialize;
use std::path::{Path, PathBuf};

/// Knobs for a single run
#[derive(Debug, Clone, Copy, Default)]
pub struct Options {
    /// Probe every link over HTTP
    pub validate: bool,
}

/// The flat result of a run, in file order then link order
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(untagged)]
pub enum Links {
    Extracted(Vec<LinkRecord>),
    Validated(Vec<ValidatedLinkRecord>),
}

impl Links {
    pub fn len(&self) -> usize {
        match self {
            Links::Extracted(links) => links.len(),
            Links::Validated(links) => links.len(),
        }
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

// The link pipeline with its I/O capabilities plugged in
//
// `files` reads Markdown text, `probe` checks URLs. Production code passes
// TokioFiles and ReqwestProbe; tests pass fakes.
pub struct Pipeline<F, P> {
    files: F,
    probe: P,
}

impl<F, P> Pipeline<F, P>
where
    F: FileSource,
    P: Probe,
{
    pub fn new(files: F, probe: P) -> Self {
        Self { files, probe }
    }

    // Runs the whole pipeline on a user-supplied path
    //
    // Errors: NotFound, InvalidPathType, InvalidExtension, Io (see error.rs)
    pub async fn run(&self, input: impl AsRef<Path>, options: Options) -> Result<Links> {
        let files = discover(input)?;
        log::info!("scanning {} markdown file(s)", files.len());

        let links = self.extract(&files).await?;
        log::info!("extracted {} link(s)", links.len());

        if !options.validate {
            return Ok(Links::Extracted(links));
        }

        let validated = validate_links(&self.probe, links).await;
        let failed = validated.iter().filter(|link| link.is_fail()).count();
        log::info!("validated {} link(s), {} unreachable", validated.len(), failed);
        Ok(Links::Validated(validated))
    }

    // Reads all files at once and concatenates their links in file order
    //
    // try_join_all keeps the input order and stops at the first read error,
    // so a file that vanished after discovery fails the run.
    async fn extract(&self, files: &[PathBuf]) -> Result<Vec<LinkRecord>> {
        let reads = files.iter().map(move |file| async move {
            let content = self
                .files
                .read_to_string(file)
                .await
                .map_err(|e| Error::io(file.as_path(), e))?;

            let links = extract_links(&content, file);
            log::debug!("{} link(s) in {}", links.len(), file.display());
            Ok::<_, Error>(links)
        });

        let per_file = try_join_all(reads).await?;
        Ok(per_file.into_iter().flatten().collect())
    }
}

// Turns the input path into the list of Markdown files to scan
//
// A directory yields every .md file below it; a file yields itself, but
// only if it has the .md extension.
pub fn discover(input: impl AsRef<Path>) -> Result<Vec<PathBuf>> {
    match resolve(input)? {
        PathKind::Directory(dir) => walk(&dir),
        PathKind::File(file) if is_markdown(&file) => Ok(vec![file]),
        PathKind::File(file) => Err(Error::InvalidExtension(file)),
    }
}
