//! Chain Contest entry point
//!
//! Takes no arguments: one full session per invocation. The report goes
//! to stdout, diagnostics to stderr, and the process exits 0
//! unconditionally; every failure is reported in-band as a row note.

use std::io;

use tracing::{error, info};

use chain_contest::config::SessionConfig;
use chain_contest::runner::BenchmarkRunner;
use chain_contest::{contenders, logging};

fn main() {
    logging::init_logging();

    let config = SessionConfig::default();
    info!(
        chain_len = config.chain_len,
        inputs = config.input_count,
        warmups = config.warmup_trials,
        "starting contest session"
    );

    let runner = BenchmarkRunner::new(config.clone());
    let report = runner.run(contenders::roster(&config));

    let mut stdout = io::stdout().lock();
    if let Err(err) = report.render(&mut stdout) {
        error!(error = %err, "failed to render report");
    }
}
