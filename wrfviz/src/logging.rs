//! Tracing setup for the wrfviz binary.
//!
//! # Separation of Concerns
//!
//! - **Tracing (this module)**: pipeline diagnostics via `RUST_LOG`,
//!   output to stderr.
//!
//! - **NCL log (`ncl_log` in the config)**: combined stdout/stderr of the
//!   plotting scripts, appended by the process layer. Always written,
//!   unaffected by `RUST_LOG`.

use tracing_subscriber::{EnvFilter, fmt, layer::SubscriberExt, util::SubscriberInitExt};

/// Initialize the tracing subscriber.
///
/// Reads `RUST_LOG`; defaults to `info` so run progress is visible from
/// an operator shell. Output: stderr, compact format.
pub fn init() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));

    tracing_subscriber::registry()
        .with(filter)
        .with(fmt::layer().with_writer(std::io::stderr).compact())
        .init();
}
