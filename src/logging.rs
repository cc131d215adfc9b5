use tracing_subscriber::{EnvFilter, fmt, prelude::*};

/// Install the session's tracing subscriber.
///
/// Diagnostics go to stderr only; stdout belongs to the report. `RUST_LOG`
/// overrides the default `info` filter.
pub fn init_logging() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));

    let stderr_layer = fmt::layer()
        .with_target(false)
        .with_writer(std::io::stderr);

    tracing_subscriber::registry()
        .with(filter)
        .with(stderr_layer)
        .init();
}
