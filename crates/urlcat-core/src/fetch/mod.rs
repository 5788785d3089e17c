//! Single-stream fetch-and-print engine.
//!
//! One GET per process: the response body streams through a line splitter
//! into the caller's sink as it arrives. The `Easy` handle and its
//! transfer drop on every exit path, so the connection is always released.

mod error;
mod lines;

pub use error::FetchError;
pub use lines::LinePrinter;

use crate::address;
use std::io::Write;

/// Fetches `raw_url` with a single GET and writes the response body to
/// `sink` one line at a time, in arrival order. Returns the number of
/// lines written.
///
/// Redirects are followed, matching the default behavior of a stock URL
/// connection. An HTTP error status aborts the transfer before any of the
/// error body reaches the sink. No timeout is armed; the call blocks until
/// data, end of stream, or a transport error.
pub fn fetch_lines<W: Write>(raw_url: &str, sink: W) -> Result<u64, FetchError> {
    let target = address::parse_target(raw_url)?;
    let url = target.as_str();
    let connect = |e: curl::Error| FetchError::Connect {
        url: url.to_string(),
        source: e,
    };

    tracing::debug!("GET {}", url);

    let mut easy = curl::easy::Easy::new();
    easy.url(url).map_err(connect)?;
    easy.follow_location(true).map_err(connect)?;
    easy.max_redirections(10).map_err(connect)?;
    easy.fail_on_error(true).map_err(connect)?;

    let mut printer = LinePrinter::new(sink);
    let mut sink_error: Option<std::io::Error> = None;

    let performed = {
        let mut transfer = easy.transfer();
        transfer
            .write_function(|data| match printer.push(data) {
                Ok(()) => Ok(data.len()),
                Err(e) => {
                    tracing::warn!("output write failed: {}", e);
                    sink_error = Some(e);
                    Ok(0) // abort transfer
                }
            })
            .map_err(connect)?;
        transfer.perform()
    };

    if let Some(e) = sink_error {
        return Err(FetchError::Output(e));
    }
    if let Err(e) = performed {
        if e.is_http_returned_error() {
            let status = easy.response_code().unwrap_or(0);
            return Err(FetchError::Http {
                url: url.to_string(),
                status,
            });
        }
        if error::is_connect_error(&e) {
            return Err(connect(e));
        }
        return Err(FetchError::Read {
            url: url.to_string(),
            source: e,
        });
    }

    let status = easy.response_code().map_err(|e| FetchError::Read {
        url: url.to_string(),
        source: e,
    })?;
    if status < 200 || status >= 300 {
        return Err(FetchError::Http {
            url: url.to_string(),
            status,
        });
    }

    printer.finish()?;
    let lines = printer.lines_written();
    tracing::debug!("drained {} lines from {}", lines, url);
    Ok(lines)
}
