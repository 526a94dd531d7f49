// src/source.rs
// =============================================================================
// Where Markdown text comes from.
//
// The pipeline never calls tokio::fs directly; it asks a FileSource. The real
// one reads from disk, tests hand in a fake that serves canned content or
// canned errors.
// =============================================================================

use async_trait::async_trait;
use std::io;
use std::path::Path;

#[async_trait]
pub trait FileSource: Send + Sync {
    /// Reads a whole file as UTF-8 text
    async fn read_to_string(&self, path: &Path) -> io::Result<String>;
}

/// Reads files from disk with tokio's non-blocking fs API
#[derive(Debug, Default, Clone, Copy)]
pub struct TokioFiles;

#[async_trait]
impl FileSource for TokioFiles {
    async fn read_to_string(&self, path: &Path) -> io::Result<String> {
        tokio::fs::read_to_string(path).await
    }
}
