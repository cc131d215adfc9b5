//! Contender - the contest interface
//!
//! A contender is a pluggable strategy implementing the transform under
//! benchmark. Variants range from lookup-table substitution to fork-join
//! divide-and-conquer; the harness treats them uniformly through this
//! trait, dispatched from a named roster rather than anonymous closures.

use thiserror::Error;

use crate::chain::Chain;

/// Runtime failure inside a contender's `transform`.
///
/// Never fatal to the session: the runner converts it into a failure note
/// on that contender's report row and moves on.
#[derive(Debug, Error)]
pub enum TransformError {
    /// The contender gave up at runtime (resource exhaustion, internal bug).
    #[error("transform aborted: {reason}")]
    Aborted { reason: String },

    /// The contender panicked; caught at the harness boundary.
    #[error("transform panicked: {message}")]
    Panicked { message: String },
}

/// Outcome of one `transform` call.
///
/// `Ok(None)` is the declared "no result" outcome of a placeholder
/// contender; `Err` is a runtime failure.
pub type TransformOutcome = Result<Option<Chain>, TransformError>;

/// The contest interface: a description and a transform capability.
pub trait Contender {
    /// Human-readable description, unique within a session. Shown verbatim
    /// in the report, so it should name the strategy.
    fn description(&self) -> &str;

    /// Declared capability: does this contender rewrite the lent input?
    ///
    /// The runner restores its canonical input copy after any observed
    /// mutation; only an *undeclared* mutation counts as an immutability
    /// breach. Defaults to non-mutating.
    fn mutates_input(&self) -> bool {
        false
    }

    /// Transform the lent chain into its complement.
    ///
    /// The input is lent for the duration of this call only; a contender
    /// must not retain a reference. Contenders with internal parallelism
    /// must block until all workers have joined before returning, so the
    /// runner's wall-clock measurement spans fan-out and join.
    fn transform(&self, input: &mut Chain) -> TransformOutcome;
}
