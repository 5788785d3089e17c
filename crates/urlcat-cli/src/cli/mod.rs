//! CLI for the urlcat fetch-and-print utility.

mod commands;

use anyhow::Result;
use clap::Parser;

use commands::run_fetch;

/// Top-level CLI: fetch one URL and print its body line by line.
#[derive(Debug, Parser)]
#[command(name = "urlcat")]
#[command(about = "urlcat: fetch a URL and print its body line by line", long_about = None)]
pub struct Cli {
    /// URL to fetch (e.g. https://example.com/page).
    pub url: String,
}

impl Cli {
    pub fn run_from_args() -> Result<()> {
        let cli = Cli::parse();
        run_fetch(&cli.url)?;
        Ok(())
    }
}

#[cfg(test)]
mod tests;
