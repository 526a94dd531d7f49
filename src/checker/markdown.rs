// src/checker/markdown.rs
// =============================================================================
// This module extracts links from Markdown text.
//
// A link is a bracketed text span immediately followed by a parenthesized
// href span: [text](href). Neither span may contain its own delimiters, so
// "[a [b] c](url)" and "[a](f(x))" are not matched.
//
// Matching is purely textual, so links inside code spans, indented blocks
// and image syntax are reported too, and an href with spaces
// ("my file.md") is kept whole. Reference links ([text][ref]) and
// autolinks (<https://...>) do not have this shape and are ignored.
// The href is kept as written: no scheme filtering, no URL validation.
// =============================================================================

use super::link::LinkRecord;
use regex::Regex;
use std::path::Path;
use std::sync::LazyLock;

// [text](href) with no brackets inside the text and no parens inside the href
static INLINE_LINK_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\[([^\[\]]*)\]\(([^()]*)\)").unwrap());

// Extracts every inline link from Markdown text
//
// Parameters:
//   markdown: the markdown text to scan
//   file: absolute path of the file the text came from
//
// Returns: one LinkRecord per link, in source order, duplicates included
//
// Example input:
//   "[Google](https://www.google.com) [OpenAI](https://openai.com)"
//
// Example output:
//   [LinkRecord { href: "https://www.google.com", text: "Google", file },
//    LinkRecord { href: "https://openai.com", text: "OpenAI", file }]
pub fn extract_links(markdown: &str, file: &Path) -> Vec<LinkRecord> {
    INLINE_LINK_RE
        .captures_iter(markdown)
        .map(|caps| LinkRecord::new(&caps[2], &caps[1], file))
        .collect()
}

// -----------------------------------------------------------------------------
// NOTES:
//
// 1. Why a regex and not a Markdown parser?
//    - A CommonMark parser only reports what renders as a link, so it skips
//      links in code, in 4-space indented lines and hrefs containing spaces
//    - Every [text](href) occurrence counts here, wherever it sits
//
// 2. What is LazyLock?
//    - The regex is compiled once, on first use, and shared afterwards
// -----------------------------------------------------------------------------
