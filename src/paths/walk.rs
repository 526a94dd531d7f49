// src/paths/walk.rs
// =============================================================================
// Finds every Markdown file under a directory, recursively.
//
// We use the `walkdir` crate which handles recursion, symlink loop detection
// and error reporting per entry.
//
// Failure policy: fail fast. The first unreadable entry aborts the walk and
// nothing found so far is returned.
// =============================================================================

use super::resolve::is_markdown;
use crate::error::{Error, Result};
use std::io;
use std::path::{Path, PathBuf};
use walkdir::WalkDir;

// Returns all regular `.md` files below `dir`
//
// Entries are sorted by file name within each directory so repeated runs
// print links in the same order. Callers should not depend on any particular
// order beyond that.
pub fn walk(dir: &Path) -> Result<Vec<PathBuf>> {
    let mut files = Vec::new();

    for entry in WalkDir::new(dir).sort_by_file_name() {
        let entry = entry.map_err(|e| {
            let path = e.path().unwrap_or(dir).to_path_buf();
            Error::io(path, io::Error::from(e))
        })?;

        if entry.file_type().is_file() && is_markdown(entry.path()) {
            files.push(entry.into_path());
        }
    }

    log::debug!("found {} markdown file(s) under {}", files.len(), dir.display());
    Ok(files)
}
