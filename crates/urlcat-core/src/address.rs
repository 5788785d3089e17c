//! Target address validation.
//!
//! Structural checking only (scheme and host syntax); reachability is the
//! transfer's concern.

use crate::fetch::FetchError;
use url::Url;

/// Parses the raw command-line argument into a URL value.
///
/// No normalization beyond what `Url` itself performs. A failure here means
/// no connection is ever attempted.
pub fn parse_target(raw: &str) -> Result<Url, FetchError> {
    Url::parse(raw).map_err(|e| FetchError::Address {
        input: raw.to_string(),
        source: e,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn accepts_http_and_https() {
        assert_eq!(parse_target("http://example.com/").unwrap().scheme(), "http");
        assert_eq!(
            parse_target("https://example.com/a/b?x=1").unwrap().as_str(),
            "https://example.com/a/b?x=1"
        );
    }

    #[test]
    fn rejects_non_urls() {
        assert!(matches!(
            parse_target("not a url"),
            Err(FetchError::Address { .. })
        ));
        assert!(matches!(parse_target(""), Err(FetchError::Address { .. })));
        assert!(matches!(
            parse_target("/just/a/path"),
            Err(FetchError::Address { .. })
        ));
    }

    #[test]
    fn keeps_offending_input_in_error() {
        match parse_target("no scheme here") {
            Err(FetchError::Address { input, .. }) => assert_eq!(input, "no scheme here"),
            other => panic!("expected Address error, got {:?}", other),
        }
    }
}
