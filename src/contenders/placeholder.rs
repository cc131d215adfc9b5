//! Placeholder contenders
//!
//! [`Unimplemented`] holds a reserved roster spot and returns no result;
//! the harness must render its row as "no data" without crashing.
//! [`AlwaysFails`] errors on every call and exists to prove that one
//! broken contender never takes the session down.

use crate::chain::Chain;
use crate::contender::{Contender, TransformError, TransformOutcome};

/// Reserved spot, to be coded.
pub struct Unimplemented;

impl Unimplemented {
    pub fn new() -> Self {
        Self
    }
}

impl Default for Unimplemented {
    fn default() -> Self {
        Self::new()
    }
}

impl Contender for Unimplemented {
    fn description(&self) -> &str {
        "(#4) look-ahead replace, reserved spot"
    }

    fn transform(&self, _input: &mut Chain) -> TransformOutcome {
        Ok(None)
    }
}

/// Fails on every call with the given reason.
pub struct AlwaysFails {
    reason: String,
}

impl AlwaysFails {
    pub fn new(reason: impl Into<String>) -> Self {
        Self {
            reason: reason.into(),
        }
    }
}

impl Contender for AlwaysFails {
    fn description(&self) -> &str {
        "(#x) always-fails, isolation probe"
    }

    fn transform(&self, _input: &mut Chain) -> TransformOutcome {
        Err(TransformError::Aborted {
            reason: self.reason.clone(),
        })
    }
}
