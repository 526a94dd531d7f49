// src/error.rs
// =============================================================================
// Errors that abort a whole md-links run.
//
// These are the "fatal" failures: the input path is missing, is not something
// we can scan, is not a Markdown file, or a file could not be read.
//
// A link that cannot be reached is NOT an error here. That outcome is data
// and lives in ValidatedLinkRecord (see checker/link.rs).
// =============================================================================

use std::io;
use std::path::PathBuf;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum Error {
    /// Nothing exists at the (absolutized) input path
    #[error("path does not exist: {}", .0.display())]
    NotFound(PathBuf),

    /// The entry exists but is neither a regular file nor a directory
    /// (dangling symlink, symlink loop, socket, device, ...)
    #[error("path is neither a file nor a directory: {}", .0.display())]
    InvalidPathType(PathBuf),

    /// A single file was given but it does not end in `.md`
    #[error("not a Markdown file (expected a .md extension): {}", .0.display())]
    InvalidExtension(PathBuf),

    /// Reading an existing file or directory failed
    #[error("could not read {}: {source}", .path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
}

impl Error {
    pub fn io(path: impl Into<PathBuf>, source: io::Error) -> Self {
        Error::Io {
            path: path.into(),
            source,
        }
    }
}

pub type Result<T> = std::result::Result<T, Error>;
