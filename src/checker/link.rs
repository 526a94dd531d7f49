// src/checker/link.rs
// =============================================================================
// The records that flow through md-links.
//
// LinkRecord          - one [text](href) found in a Markdown file
// ValidatedLinkRecord - the same link after we tried to reach it
//
// Both serialize to the flat JSON shape consumers expect:
//   { "href": ..., "text": ..., "file": ... }
//   { "href": ..., "text": ..., "file": ..., "status": 200, "ok": "OK" }
// =============================================================================

use serde::Serialize;
use std::path::PathBuf;

/// A link found in a Markdown file
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct LinkRecord {
    /// Link target exactly as written, even if it is not a valid URL
    pub href: String,
    /// Anchor text between the brackets
    pub text: String,
    /// Absolute path of the Markdown file the link came from
    pub file: PathBuf,
}

impl LinkRecord {
    pub fn new(href: impl Into<String>, text: impl Into<String>, file: impl Into<PathBuf>) -> Self {
        Self {
            href: href.into(),
            text: text.into(),
            file: file.into(),
        }
    }
}

/// Whether any HTTP response came back for a link
///
/// Serialized as the strings "OK" and "fail".
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum Outcome {
    /// Some response was received. The status code may still be 404 or 500.
    #[serde(rename = "OK")]
    Ok,
    /// No response at all (bad URL, DNS, refused connection, timeout, ...)
    #[serde(rename = "fail")]
    Fail,
}

impl Outcome {
    pub fn as_str(&self) -> &'static str {
        match self {
            Outcome::Ok => "OK",
            Outcome::Fail => "fail",
        }
    }
}

/// A link annotated with the result of probing it
///
/// `status` is `Some` exactly when `ok` is `Outcome::Ok`. The fields are
/// private and the two constructors are the only way in, so that pairing
/// always holds.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ValidatedLinkRecord {
    #[serde(flatten)]
    link: LinkRecord,
    status: Option<u16>,
    ok: Outcome,
}

impl ValidatedLinkRecord {
    /// The server answered with `status`
    pub fn reachable(link: LinkRecord, status: u16) -> Self {
        Self {
            link,
            status: Some(status),
            ok: Outcome::Ok,
        }
    }

    /// No response was obtained
    pub fn unreachable(link: LinkRecord) -> Self {
        Self {
            link,
            status: None,
            ok: Outcome::Fail,
        }
    }

    pub fn link(&self) -> &LinkRecord {
        &self.link
    }

    pub fn status(&self) -> Option<u16> {
        self.status
    }

    pub fn outcome(&self) -> Outcome {
        self.ok
    }

    pub fn is_fail(&self) -> bool {
        self.ok == Outcome::Fail
    }
}
