//! Chain Contest - find the quickest transform of a symbol chain
//!
//! A micro-benchmark harness that runs many contender implementations of
//! one fixed transformation (pointwise complement over {A, T, C, G}),
//! cross-validates their results, measures the final warmed-up run, and
//! renders a comparative report.
//!
//! # Modules
//!
//! - [`chain`] - Chain type, alphabet, complement table, fingerprint
//! - [`generator`] - random benchmark inputs
//! - [`contender`] - the contest interface and failure type
//! - [`contenders`] - the strategy variants under contest
//! - [`checker`] - inter-contender consistency checks
//! - [`runner`] - warm-up/measure loop with failure isolation
//! - [`report`] - aligned table, preview and bar graph
//! - [`config`] - in-code session parameters
//! - [`logging`] - tracing setup

pub mod chain;
pub mod checker;
pub mod config;
pub mod contender;
pub mod contenders;
pub mod generator;
pub mod logging;
pub mod report;
pub mod runner;

// Convenient re-exports at crate root
pub use chain::{Chain, complement_of};
pub use checker::{CorrectnessChecker, Note};
pub use config::SessionConfig;
pub use contender::{Contender, TransformError, TransformOutcome};
pub use report::{BenchmarkReport, ReportRow};
pub use runner::{BenchmarkRunner, TrialResult};
