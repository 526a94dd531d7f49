// src/paths/resolve.rs
// =============================================================================
// Turns whatever path the user typed into an absolute, classified path.
//
// Steps:
// 1. Make the path absolute (relative paths are joined onto the current
//    working directory and cleaned of "." and "..")
// 2. Check that something exists there
// 3. Classify it as a file or a directory
//
// Only metadata is queried here, nothing is read or written.
// =============================================================================

use crate::error::{Error, Result};
use std::ffi::OsStr;
use std::fs;
use std::io;
use std::path::{Component, Path, PathBuf};

// What a resolved path points at
//
// Downstream code matches on this instead of asking the filesystem again.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PathKind {
    /// A regular file (possibly reached through a symlink)
    File(PathBuf),
    /// A directory (possibly reached through a symlink)
    Directory(PathBuf),
}

impl PathKind {
    /// The absolute path, whatever its kind
    pub fn path(&self) -> &Path {
        match self {
            PathKind::File(path) | PathKind::Directory(path) => path,
        }
    }
}

// Resolves a user-supplied path into an absolute, existing, classified path
//
// Errors:
//   NotFound        - no filesystem entry at the path
//   InvalidPathType - the entry is not a file or directory (symlink loop,
//                     dangling symlink, socket, ...)
//   Io              - permission denied while looking the path up
//
// Example:
//   resolve("docs")       -> Ok(PathKind::Directory("/home/me/project/docs"))
//   resolve("/tmp/a.md")  -> Ok(PathKind::File("/tmp/a.md"))
//   resolve("missing.md") -> Err(Error::NotFound(...))
pub fn resolve(input: impl AsRef<Path>) -> Result<PathKind> {
    let input = input.as_ref();
    let path = absolutize(input).map_err(|e| Error::io(input, e))?;

    // symlink_metadata tells us whether *anything* is there, even a broken link.
    // ENOENT, ENOTDIR ("a.md/child.md") and the like all mean nothing is
    // there; only a permission problem says the entry may exist.
    match fs::symlink_metadata(&path) {
        Ok(_) => {}
        Err(e) if e.kind() == io::ErrorKind::PermissionDenied => return Err(Error::io(path, e)),
        Err(e) => {
            log::debug!("nothing at {}: {}", path.display(), e);
            return Err(Error::NotFound(path));
        }
    }

    // metadata follows symlinks, so a loop or a dangling target fails here
    let metadata = match fs::metadata(&path) {
        Ok(metadata) => metadata,
        Err(e) => {
            log::debug!("cannot follow {}: {}", path.display(), e);
            return Err(Error::InvalidPathType(path));
        }
    };

    if metadata.is_file() {
        Ok(PathKind::File(path))
    } else if metadata.is_dir() {
        Ok(PathKind::Directory(path))
    } else {
        Err(Error::InvalidPathType(path))
    }
}

// Makes a path absolute
//
// Absolute paths come back unchanged. Relative paths are joined onto the
// current working directory and "." / ".." are folded away, so
// "./docs/../README.md" becomes "<cwd>/README.md".
pub fn absolutize(path: &Path) -> io::Result<PathBuf> {
    if path.is_absolute() {
        return Ok(path.to_path_buf());
    }
    let joined = std::env::current_dir()?.join(path);
    Ok(normalize(&joined))
}

// Whether the file name ends in exactly ".md" (case-sensitive)
//
// A boolean rather than an error: whether a non-Markdown file is a problem
// is up to the caller.
pub fn is_markdown(path: &Path) -> bool {
    path.extension() == Some(OsStr::new("md"))
}

// Lexically folds "." and ".." components without touching the filesystem
fn normalize(path: &Path) -> PathBuf {
    let mut out = PathBuf::new();
    for component in path.components() {
        match component {
            Component::CurDir => {}
            // pop() is a no-op at the root, so "/.." stays "/"
            Component::ParentDir => {
                out.pop();
            }
            other => out.push(other.as_os_str()),
        }
    }
    out
}
