//! Contender roster - the strategy variants under contest
//!
//! # Variants
//!
//! - [`sequential`] - map-lookup, branch-chain and match-table substitution
//! - [`in_place`] - variants that rewrite the lent input buffer
//! - [`parallel`] - partitioned blocks and fork-join divide-and-conquer
//! - [`placeholder`] - reserved-spot and always-failing probes

pub mod in_place;
pub mod parallel;
pub mod placeholder;
pub mod sequential;

pub use in_place::{DirtyInPlace, OwnedBuffer};
pub use parallel::{ForkJoinCopy, ForkJoinInPlace, Partitioned};
pub use placeholder::{AlwaysFails, Unimplemented};
pub use sequential::{BranchChain, MapLookup, MatchTable};

use crate::config::SessionConfig;
use crate::contender::Contender;

/// Build the full session lineup in report order.
pub fn roster(config: &SessionConfig) -> Vec<Box<dyn Contender>> {
    vec![
        Box::new(MapLookup::new()),
        Box::new(BranchChain::new()),
        Box::new(MatchTable::new()),
        Box::new(Unimplemented::new()),
        Box::new(DirtyInPlace::new()),
        Box::new(OwnedBuffer::new(config.wide_partition_blocks)),
        Box::new(Partitioned::new(config.partition_blocks)),
        Box::new(Partitioned::new(config.wide_partition_blocks)),
        Box::new(ForkJoinCopy::new(config.fork_join_threshold)),
        Box::new(ForkJoinInPlace::new(config.fork_join_threshold)),
    ]
}
