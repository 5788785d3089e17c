//! CLI parse tests.

use super::Cli;
use clap::Parser;

#[test]
fn cli_parse_url() {
    let cli = Cli::try_parse_from(["urlcat", "https://example.com/page"]).unwrap();
    assert_eq!(cli.url, "https://example.com/page");
}

#[test]
fn cli_rejects_missing_url() {
    assert!(Cli::try_parse_from(["urlcat"]).is_err());
}

#[test]
fn cli_rejects_extra_arguments() {
    assert!(Cli::try_parse_from(["urlcat", "https://a.example/", "https://b.example/"]).is_err());
}

#[test]
fn cli_takes_the_argument_verbatim() {
    // Validation happens in the fetch engine, not at parse time.
    let cli = Cli::try_parse_from(["urlcat", "not a url"]).unwrap();
    assert_eq!(cli.url, "not a url");
}
