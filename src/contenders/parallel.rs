//! Parallel variants - partitioned blocks and fork-join divide-and-conquer
//!
//! Both shapes partition the destination into disjoint index ranges per
//! task, so no two workers ever write the same location and the output
//! needs no synchronization; only the join barrier coordinates. The
//! harness measures wall-clock across the whole call, fan-out and join
//! included, and reassembly is always in original index order regardless
//! of completion order.

use rayon::prelude::*;

use crate::chain::Chain;
use crate::contender::{Contender, TransformOutcome};
use crate::contenders::sequential::{complement_in_place, complement_into};

/// Split `buf` into `blocks` contiguous, non-overlapping ranges in index
/// order. The last block absorbs the remainder, so the ranges partition
/// `buf` exactly for any block count.
pub(crate) fn disjoint_blocks_mut(mut buf: &mut [u8], blocks: usize) -> Vec<&mut [u8]> {
    let blocks = blocks.max(1);
    let base = buf.len() / blocks;
    let mut out = Vec::with_capacity(blocks);
    for _ in 0..blocks - 1 {
        let (head, tail) = buf.split_at_mut(base);
        out.push(head);
        buf = tail;
    }
    out.push(buf);
    out
}

/// Read-only counterpart of [`disjoint_blocks_mut`].
pub(crate) fn disjoint_blocks(mut buf: &[u8], blocks: usize) -> Vec<&[u8]> {
    let blocks = blocks.max(1);
    let base = buf.len() / blocks;
    let mut out = Vec::with_capacity(blocks);
    for _ in 0..blocks - 1 {
        let (head, tail) = buf.split_at(base);
        out.push(head);
        buf = tail;
    }
    out.push(buf);
    out
}

/// Fixed block count, transformed concurrently, concatenated in original
/// block order.
pub struct Partitioned {
    blocks: usize,
    description: String,
}

impl Partitioned {
    pub fn new(blocks: usize) -> Self {
        let blocks = blocks.max(1);
        Self {
            description: format!("(#p) partitioned, {blocks} blocks via rayon"),
            blocks,
        }
    }
}

impl Contender for Partitioned {
    fn description(&self) -> &str {
        &self.description
    }

    fn transform(&self, input: &mut Chain) -> TransformOutcome {
        let src = input.as_bytes();
        let mut output = vec![0u8; src.len()];
        let sources = disjoint_blocks(src, self.blocks);
        let destinations = disjoint_blocks_mut(&mut output, self.blocks);
        sources
            .into_par_iter()
            .zip(destinations)
            .for_each(|(s, d)| complement_into(s, d));
        Ok(Some(Chain::from_bytes(output)))
    }
}

/// Recursive halving of a (source, destination) slice pair.
///
/// Tasks at or above the threshold split in half and run both halves
/// through the work-stealing pool; below it the sub-range is transformed
/// directly. `rayon::join` returns only after both halves complete, so
/// every result is visible to the joiner before the task finishes.
fn fork_join_copy(src: &[u8], dst: &mut [u8], threshold: usize) {
    if src.len() < threshold {
        complement_into(src, dst);
        return;
    }
    let mid = src.len() / 2;
    let (src_lo, src_hi) = src.split_at(mid);
    let (dst_lo, dst_hi) = dst.split_at_mut(mid);
    rayon::join(
        || fork_join_copy(src_lo, dst_lo, threshold),
        || fork_join_copy(src_hi, dst_hi, threshold),
    );
}

/// In-place counterpart of [`fork_join_copy`] over one owned buffer.
fn fork_join_in_place(buf: &mut [u8], threshold: usize) {
    if buf.len() < threshold {
        complement_in_place(buf);
        return;
    }
    let mid = buf.len() / 2;
    let (lo, hi) = buf.split_at_mut(mid);
    rayon::join(
        || fork_join_in_place(lo, threshold),
        || fork_join_in_place(hi, threshold),
    );
}

/// Divide-and-conquer into a separate destination buffer.
///
/// The threshold trades parallel overhead against granularity: too low
/// and scheduling dominates, too high and parallelism is lost. Clamped to
/// at least 2 so the recursion terminates on sub-symbol ranges.
pub struct ForkJoinCopy {
    threshold: usize,
    description: String,
}

impl ForkJoinCopy {
    pub fn new(threshold: usize) -> Self {
        let threshold = threshold.max(2);
        Self {
            description: format!("(#f) fork-join, threshold {threshold}, separate destination"),
            threshold,
        }
    }
}

impl Contender for ForkJoinCopy {
    fn description(&self) -> &str {
        &self.description
    }

    fn transform(&self, input: &mut Chain) -> TransformOutcome {
        let src = input.as_bytes();
        let mut output = vec![0u8; src.len()];
        fork_join_copy(src, &mut output, self.threshold);
        Ok(Some(Chain::from_bytes(output)))
    }
}

/// Divide-and-conquer rewriting its own copy of the input in place.
pub struct ForkJoinInPlace {
    threshold: usize,
    description: String,
}

impl ForkJoinInPlace {
    pub fn new(threshold: usize) -> Self {
        let threshold = threshold.max(2);
        Self {
            description: format!("(#g) fork-join, threshold {threshold}, in-place on owned copy"),
            threshold,
        }
    }
}

impl Contender for ForkJoinInPlace {
    fn description(&self) -> &str {
        &self.description
    }

    fn transform(&self, input: &mut Chain) -> TransformOutcome {
        let mut buf = input.as_bytes().to_vec();
        fork_join_in_place(&mut buf, self.threshold);
        Ok(Some(Chain::from_bytes(buf)))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::contenders::sequential::MatchTable;
    use crate::generator;

    fn whole_chain(input: &Chain) -> Chain {
        let mut copy = input.clone();
        MatchTable::new().transform(&mut copy).unwrap().unwrap()
    }

    #[test]
    fn test_disjoint_blocks_partition_exactly() {
        for len in [0usize, 1, 7, 8, 100, 101] {
            for blocks in [1usize, 3, 8, 200] {
                let buf: Vec<u8> = (0..len as u8).collect();
                let ranges = disjoint_blocks(&buf, blocks);
                assert_eq!(ranges.len(), blocks);
                let total: usize = ranges.iter().map(|r| r.len()).sum();
                assert_eq!(total, len, "gaps or overlaps for len {len} blocks {blocks}");
                let rejoined: Vec<u8> = ranges.concat();
                assert_eq!(rejoined, buf, "block order lost");
            }
        }
    }

    #[test]
    fn test_partitioned_matches_whole_chain_transform() {
        for len in [0usize, 1, 7, 8, 1000, 1003] {
            let input = generator::generate(len);
            let expected = whole_chain(&input);
            for blocks in [1usize, 3, 8, 200] {
                let mut chain = input.clone();
                let out = Partitioned::new(blocks)
                    .transform(&mut chain)
                    .unwrap()
                    .unwrap();
                assert_eq!(out, expected, "len {len} blocks {blocks}");
                assert_eq!(chain, input, "partitioned must not mutate input");
            }
        }
    }

    #[test]
    fn test_fork_join_parallel_and_sequential_paths_agree() {
        // Threshold below the 8-symbol input forces the split path; a
        // threshold at or above the length stays sequential. Both must be
        // bit-identical.
        let mut sequential_input = Chain::from("GATTACAT");
        let mut parallel_input = sequential_input.clone();
        let sequential = ForkJoinCopy::new(100)
            .transform(&mut sequential_input)
            .unwrap()
            .unwrap();
        let parallel = ForkJoinCopy::new(2)
            .transform(&mut parallel_input)
            .unwrap()
            .unwrap();
        assert_eq!(sequential, parallel);
        assert_eq!(sequential.as_bytes(), b"CTAATGTA");
    }

    #[test]
    fn test_fork_join_copy_matches_whole_chain_transform() {
        for len in [0usize, 1, 2, 9, 1000] {
            let input = generator::generate(len);
            let expected = whole_chain(&input);
            for threshold in [0usize, 2, 3, 64, 100_000] {
                let mut chain = input.clone();
                let out = ForkJoinCopy::new(threshold)
                    .transform(&mut chain)
                    .unwrap()
                    .unwrap();
                assert_eq!(out, expected, "len {len} threshold {threshold}");
                assert_eq!(chain, input, "fork-join copy must not mutate input");
            }
        }
    }

    #[test]
    fn test_fork_join_in_place_matches_copy_variant() {
        let input = generator::generate(1000);
        let mut a = input.clone();
        let mut b = input.clone();
        let copy = ForkJoinCopy::new(64).transform(&mut a).unwrap().unwrap();
        let in_place = ForkJoinInPlace::new(64).transform(&mut b).unwrap().unwrap();
        assert_eq!(copy, in_place);
        assert_eq!(b, input, "the owned-copy variant must not touch the input");
    }

    #[test]
    fn test_fork_join_empty_chain() {
        let mut chain = Chain::from("");
        let out = ForkJoinCopy::new(2).transform(&mut chain).unwrap().unwrap();
        assert!(out.is_empty());
    }
}
