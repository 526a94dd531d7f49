// src/report.rs
// =============================================================================
// Turns the pipeline output into something a person (or a script) can read.
//
// Three shapes:
// - listing: one line per link
// - stats: totals only (links, unique hrefs, files, broken)
// - JSON: either of the above through serde_json
//
// Nothing here touches the filesystem or the network; the pipeline already
// did that. Rendering returns Strings and main.rs decides where they go.
// =============================================================================

use crate::checker::{LinkRecord, ValidatedLinkRecord};
use crate::pipeline::Links;
use serde::Serialize;
use std::collections::HashSet;
use std::fmt::Write as _;

// Anchor text longer than this is cut in the listing
const MAX_TEXT_CHARS: usize = 50;

/// Aggregate numbers over one run
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Stats {
    /// Every link occurrence
    pub total: usize,
    /// Distinct hrefs
    pub unique: usize,
    /// Distinct source files that contained at least one link
    pub files: usize,
    /// Links with no response, only known after validation
    #[serde(skip_serializing_if = "Option::is_none")]
    pub broken: Option<usize>,
}

impl Stats {
    pub fn from_links(links: &Links) -> Self {
        match links {
            Links::Extracted(records) => Self::count(records.iter(), None),
            Links::Validated(records) => {
                let broken = records.iter().filter(|r| r.is_fail()).count();
                Self::count(records.iter().map(ValidatedLinkRecord::link), Some(broken))
            }
        }
    }

    fn count<'a>(records: impl Iterator<Item = &'a LinkRecord>, broken: Option<usize>) -> Self {
        let mut total = 0;
        let mut hrefs = HashSet::new();
        let mut files = HashSet::new();
        for record in records {
            total += 1;
            hrefs.insert(record.href.as_str());
            files.insert(record.file.as_path());
        }
        Stats {
            total,
            unique: hrefs.len(),
            files: files.len(),
            broken,
        }
    }
}

// One line per link
//
//   /docs/a.md https://example.com Example
//   /docs/a.md https://example.com OK 200 Example      (validated)
//   /docs/a.md https//bad. fail - Broken one           (validated)
pub fn render_listing(links: &Links) -> String {
    let mut out = String::new();
    match links {
        Links::Extracted(records) => {
            for record in records {
                let _ = writeln!(
                    out,
                    "{} {} {}",
                    record.file.display(),
                    record.href,
                    truncate(&record.text)
                );
            }
        }
        Links::Validated(records) => {
            for record in records {
                let link = record.link();
                let status = record
                    .status()
                    .map(|code| code.to_string())
                    .unwrap_or_else(|| "-".to_string());
                let _ = writeln!(
                    out,
                    "{} {} {} {} {}",
                    link.file.display(),
                    link.href,
                    record.outcome().as_str(),
                    status,
                    truncate(&link.text)
                );
            }
        }
    }
    out
}

pub fn render_stats(stats: &Stats) -> String {
    let mut out = String::new();
    let _ = writeln!(out, "Total: {}", stats.total);
    let _ = writeln!(out, "Unique: {}", stats.unique);
    let _ = writeln!(out, "Files: {}", stats.files);
    if let Some(broken) = stats.broken {
        let _ = writeln!(out, "Broken: {}", broken);
    }
    out
}

fn truncate(text: &str) -> String {
    if text.chars().count() > MAX_TEXT_CHARS {
        text.chars().take(MAX_TEXT_CHARS).collect()
    } else {
        text.to_string()
    }
}
