//! Logging init: stderr-only structured logging.

use tracing_subscriber::EnvFilter;

/// Initialize structured logging to stderr.
///
/// Stdout is reserved for response body lines, so records go to stderr
/// with ANSI disabled. Filter defaults to `info,urlcat_core=debug` and can
/// be overridden through the standard `RUST_LOG` mechanism.
pub fn init_logging() {
    let env_filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new("info,urlcat_core=debug"));
    tracing_subscriber::fmt()
        .with_env_filter(env_filter)
        .with_writer(std::io::stderr)
        .with_ansi(false)
        .init();
}
