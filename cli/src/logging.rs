//! Logging configuration for the terminal host.
//!
//! Logs go to stderr so they never interleave with the rendered stopwatch
//! lines on stdout. Set `DEBUG_LOGGING=1` to enable debug output for the
//! stopwatch crates.

use tracing_subscriber::{
    EnvFilter,
    fmt::{self, format::FmtSpan},
    layer::SubscriberExt,
    util::SubscriberInitExt,
};

const DEBUG_DIRECTIVE: &str = "info,stopwatch_core=debug,stopwatch_cli=debug";

pub fn init() {
    let debug_logging = std::env::var("DEBUG_LOGGING").is_ok();

    let stderr_layer = fmt::layer()
        .with_writer(std::io::stderr)
        .with_target(true)
        .with_span_events(FmtSpan::NONE);

    let filter_directive = if debug_logging { DEBUG_DIRECTIVE } else { "info" };
    let filter = EnvFilter::new(filter_directive);

    tracing_subscriber::registry()
        .with(stderr_layer)
        .with(filter)
        .init();

    tracing::debug!(debug_logging, "Logging initialized");
}
