//! Session parameters
//!
//! All in-code: the contest takes no arguments, reads no files and no
//! environment. These defaults mirror the original contest setup.

/// Parameters for one benchmark session.
#[derive(Debug, Clone)]
pub struct SessionConfig {
    /// Symbols per chain; constant across the session.
    pub chain_len: usize,
    /// Independently generated input chains (one per warm-up slot).
    pub input_count: usize,
    /// Warm-up trials per contender; the last one is the measured run.
    pub warmup_trials: usize,
    /// Sequential/parallel cutover for the divide-and-conquer contenders.
    pub fork_join_threshold: usize,
    /// Block count for the coarse partitioned contender.
    pub partition_blocks: usize,
    /// Block count for the fine-grained partitioned and in-place variants.
    pub wide_partition_blocks: usize,
    /// Milliseconds per bar-graph character.
    pub bar_graph_ms_divisor: u64,
    /// Symbols shown from each end of the output preview.
    pub preview_symbols: usize,
}

impl Default for SessionConfig {
    fn default() -> Self {
        Self {
            chain_len: 22_000_000,
            input_count: 5,
            warmup_trials: 5,
            fork_join_threshold: 100_000,
            partition_blocks: 8,
            wide_partition_blocks: 200,
            bar_graph_ms_divisor: 5,
            preview_symbols: crate::chain::PREVIEW_SYMBOLS,
        }
    }
}

impl SessionConfig {
    /// Small-session variant used by the end-to-end tests.
    pub fn with_chain_len(chain_len: usize) -> Self {
        Self {
            chain_len,
            ..Self::default()
        }
    }
}
