//! `urlcat <url>` – fetch the URL and print its body to stdout.

use anyhow::Result;
use std::io;
use urlcat_core::fetch;

/// Fetch `url` and stream its body to stdout, one line at a time.
pub fn run_fetch(url: &str) -> Result<()> {
    let stdout = io::stdout();
    let lines = fetch::fetch_lines(url, stdout.lock())?;
    tracing::debug!("printed {} lines from {}", lines, url);
    Ok(())
}
