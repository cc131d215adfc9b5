//! Benchmark Runner - warm-up/measure loop with failure isolation
//!
//! Per contender: `Idle -> WarmingUp(k=1..W) -> Measuring -> Reported`.
//! The runner owns the canonical input chains plus a backup of each. Every
//! trial lends one input to the contender, times the call with a
//! high-resolution clock, catches failures (both `Err` and panics), and
//! compares the input byte-for-byte against its backup, restoring it on
//! any observed mutation. Only the final trial's result and timing reach
//! the checker and the report; the earlier trials exist to stabilize
//! caching effects and are discarded.
//!
//! The outer loop is strictly sequential, so no cross-contender
//! interference is possible at the harness level; intra-contender
//! parallelism is opaque and included in the measured wall-clock.

use std::any::Any;
use std::panic::{self, AssertUnwindSafe};
use std::time::{Duration, Instant};

use tracing::{debug, info, warn};

use crate::chain::Chain;
use crate::checker::{CorrectnessChecker, Note};
use crate::config::SessionConfig;
use crate::contender::{Contender, TransformError};
use crate::generator;
use crate::report::{BenchmarkReport, ReportRow};

/// Outcome of one (contender, input) trial. Only the last trial's value
/// survives the warm-up loop.
#[derive(Debug)]
pub struct TrialResult {
    pub output: Option<Chain>,
    pub elapsed: Duration,
    pub failure: Option<String>,
    pub breach: bool,
}

/// Orchestrates one full session: input generation, the warm-up/measure
/// loop per contender, verification, and report accumulation.
pub struct BenchmarkRunner {
    config: SessionConfig,
    inputs: Vec<Chain>,
    backups: Vec<Chain>,
    generation_time: Duration,
}

impl BenchmarkRunner {
    /// Generate the session's independent input chains. The reported
    /// generation time is that of the last chain, matching the header
    /// contract.
    pub fn new(config: SessionConfig) -> Self {
        let input_count = config.input_count.max(1);
        let mut inputs = Vec::with_capacity(input_count);
        let mut generation_time = Duration::ZERO;
        for slot in 0..input_count {
            let started = Instant::now();
            let chain = generator::generate(config.chain_len);
            generation_time = started.elapsed();
            debug!(
                slot,
                len = chain.len(),
                elapsed_ms = generation_time.as_millis() as u64,
                "generated input chain"
            );
            inputs.push(chain);
        }
        let backups = inputs.clone();
        Self {
            config,
            inputs,
            backups,
            generation_time,
        }
    }

    /// Run every contender and hand back the finished report.
    pub fn run(mut self, contenders: Vec<Box<dyn Contender>>) -> BenchmarkReport {
        let mut checker = CorrectnessChecker::new(self.config.chain_len);
        let mut report = BenchmarkReport::new(
            self.config.chain_len,
            self.generation_time,
            self.config.bar_graph_ms_divisor,
        );

        for contender in &contenders {
            let trial = self.run_trials(contender.as_ref());

            let had_reference = checker.reference().is_some();
            let mut notes = checker.verify(trial.output.as_ref(), trial.breach);
            if let Some(reason) = &trial.failure {
                notes.push(Note::Failure(reason.clone()));
            }
            if !had_reference && checker.reference().is_some() {
                if let Some(output) = &trial.output {
                    report.set_preview(output.preview(self.config.preview_symbols));
                }
            }

            info!(
                contender = contender.description(),
                elapsed_ms = trial.elapsed.as_millis() as u64,
                notes = notes.len(),
                "contender measured"
            );
            report.push_row(ReportRow {
                description: contender.description().to_string(),
                length: trial.output.as_ref().map(Chain::len),
                fingerprint: trial.output.as_ref().map(Chain::fingerprint),
                elapsed: trial.elapsed,
                notes,
            });
        }
        report
    }

    /// The warm-up/measure loop for one contender. Trial `k` uses the
    /// k-th pre-generated input; the last trial is the measured one.
    fn run_trials(&mut self, contender: &dyn Contender) -> TrialResult {
        let warmups = self.config.warmup_trials.max(1);
        let mut output = None;
        let mut failure = None;
        let mut elapsed = Duration::ZERO;
        let mut breach = false;

        for trial in 0..warmups {
            let slot = trial % self.inputs.len();

            let input = &mut self.inputs[slot];
            let started = Instant::now();
            let caught = panic::catch_unwind(AssertUnwindSafe(|| contender.transform(input)));
            elapsed = started.elapsed();

            match caught {
                Ok(Ok(result)) => {
                    output = result;
                    failure = None;
                }
                Ok(Err(err)) => {
                    warn!(
                        contender = contender.description(),
                        trial,
                        error = %err,
                        "transform failed"
                    );
                    output = None;
                    failure = Some(err.to_string());
                }
                Err(payload) => {
                    let err = TransformError::Panicked {
                        message: panic_message(payload),
                    };
                    warn!(
                        contender = contender.description(),
                        trial,
                        error = %err,
                        "transform panicked"
                    );
                    output = None;
                    failure = Some(err.to_string());
                }
            }

            if self.inputs[slot] != self.backups[slot] {
                if contender.mutates_input() {
                    debug!(
                        contender = contender.description(),
                        slot, "declared in-place contender, restoring input"
                    );
                } else {
                    breach = true;
                    warn!(
                        contender = contender.description(),
                        slot, "immutability breach, restoring input"
                    );
                }
                self.inputs[slot] = self.backups[slot].clone();
            }
        }

        TrialResult {
            output,
            elapsed,
            failure,
            breach,
        }
    }
}

fn panic_message(payload: Box<dyn Any + Send>) -> String {
    if let Some(message) = payload.downcast_ref::<&str>() {
        (*message).to_string()
    } else if let Some(message) = payload.downcast_ref::<String>() {
        message.clone()
    } else {
        "opaque panic payload".to_string()
    }
}
