// src/main.rs
// =============================================================================
// This is the entry point of the md-links CLI.
//
// What happens here:
// 1. Parse command-line arguments using clap
// 2. Set up logging (stderr, RUST_LOG aware)
// 3. Run the link pipeline on the given path
// 4. Print the listing or the stats, as text or JSON
// 5. Exit with proper code (0 = success, 1 = unreachable links, 2 = error)
// =============================================================================

mod cli;

use anyhow::{Context, Result};
use clap::Parser;
use cli::Cli;
use md_links::checker::ReqwestProbe;
use md_links::report::{self, Stats};
use md_links::source::TokioFiles;
use md_links::{Links, Options, Pipeline};
use std::time::Duration;

// One thread is enough: all the work is waiting on files and sockets
#[tokio::main(flavor = "current_thread")]
async fn main() {
    let cli = Cli::parse();
    init_logging(cli.verbose);

    let exit_code = match run(cli).await {
        Ok(code) => code,
        Err(e) => {
            log::debug!("run failed: {:?}", e);
            eprintln!("Error: {:#}", e);
            2
        }
    };

    std::process::exit(exit_code);
}

// Logs go to stderr so `--json` output on stdout stays parseable
fn init_logging(verbose: bool) {
    let default_level = if verbose { "debug" } else { "warn" };
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(default_level))
        .format_timestamp(None)
        .init();
}

// Returns:
//   Ok(0) = done, no unreachable links
//   Ok(1) = validation found unreachable links
//   Err   = the pipeline could not run (bad path, unreadable file, ...)
async fn run(cli: Cli) -> Result<i32> {
    let probe = ReqwestProbe::new(Duration::from_secs(cli.timeout))
        .context("failed to create HTTP client")?;
    let pipeline = Pipeline::new(TokioFiles, probe);

    let options = Options {
        validate: cli.validate,
    };
    let links = pipeline.run(&cli.path, options).await?;

    print_results(&links, cli.stats, cli.json)?;

    let broken = match &links {
        Links::Validated(records) => records.iter().filter(|r| r.is_fail()).count(),
        Links::Extracted(_) => 0,
    };

    if broken > 0 {
        log::info!("{} link(s) got no response", broken);
        Ok(1)
    } else {
        Ok(0)
    }
}

// Prints the results either as plain text or JSON
fn print_results(links: &Links, stats: bool, json: bool) -> Result<()> {
    match (stats, json) {
        (true, true) => println!("{}", serde_json::to_string_pretty(&Stats::from_links(links))?),
        (true, false) => print!("{}", report::render_stats(&Stats::from_links(links))),
        (false, true) => println!("{}", serde_json::to_string_pretty(links)?),
        (false, false) => print!("{}", report::render_listing(links)),
    }
    Ok(())
}
