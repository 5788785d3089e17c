//! Fetch error taxonomy.
//!
//! No variant is retried or handled below the CLI boundary; every failure
//! propagates to `main`, which maps it to a diagnostic and a non-zero exit.

use thiserror::Error;

/// Error produced by a single fetch-and-print cycle.
#[derive(Debug, Error)]
pub enum FetchError {
    /// The supplied argument is not a structurally valid URL.
    #[error("malformed address {input:?}: {source}")]
    Address {
        input: String,
        #[source]
        source: url::ParseError,
    },
    /// Transport failure while establishing the session (DNS resolution,
    /// refused connection, TLS/protocol failure).
    #[error("connection to {url} failed: {source}")]
    Connect {
        url: String,
        #[source]
        source: curl::Error,
    },
    /// Transport failure while reading the body mid-transfer.
    #[error("read from {url} failed: {source}")]
    Read {
        url: String,
        #[source]
        source: curl::Error,
    },
    /// Server answered with a non-success status; none of the error body
    /// is printed.
    #[error("GET {url} returned HTTP {status}")]
    Http { url: String, status: u32 },
    /// Writing a completed line to the output sink failed.
    #[error("output write failed: {0}")]
    Output(#[from] std::io::Error),
}

/// True when a curl error belongs to session establishment rather than
/// mid-transfer reading.
pub(crate) fn is_connect_error(e: &curl::Error) -> bool {
    e.is_url_malformed()
        || e.is_unsupported_protocol()
        || e.is_couldnt_resolve_host()
        || e.is_couldnt_resolve_proxy()
        || e.is_couldnt_connect()
        || e.is_ssl_connect_error()
}
