// src/cli.rs
// =============================================================================
// This file defines our command-line interface using the `clap` crate.
//
// We use the "derive" API which lets us define the CLI structure using
// Rust structs and attributes (the #[...] things).
//
// Usage:
//   md-links <path> [--validate] [--stats] [--json] [--timeout SECS] [-v]
// =============================================================================

use clap::Parser;

// This struct represents our entire CLI application
//
// #[derive(Parser)] tells clap to automatically generate parsing code
#[derive(Parser, Debug)]
#[command(
    name = "md-links",
    version,
    about = "Find the links in Markdown files and check whether they are reachable",
    long_about = "md-links reads a Markdown file, or every .md file under a directory, \
                  and lists the [text](href) links it contains. With --validate it also \
                  sends an HTTP request to each link and reports which ones got no response."
)]
pub struct Cli {
    /// Markdown file or directory to scan (relative or absolute)
    pub path: String,

    /// Send an HTTP request to every link and report the outcome
    #[arg(long)]
    pub validate: bool,

    /// Print totals (links, unique links, files, broken) instead of each link
    #[arg(long)]
    pub stats: bool,

    /// Output results in JSON format instead of plain text
    #[arg(long)]
    pub json: bool,

    /// Seconds to wait for each HTTP request before giving up
    #[arg(
        long,
        env = "MD_LINKS_TIMEOUT",
        default_value_t = 10,
        value_parser = clap::value_parser!(u64).range(1..)
    )]
    pub timeout: u64,

    /// Log debug details to stderr (RUST_LOG overrides this)
    #[arg(short, long)]
    pub verbose: bool,
}
