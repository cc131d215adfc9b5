//! In-place variants - contenders that rewrite the lent input buffer
//!
//! [`DirtyInPlace`] does it without declaring the capability, which is an
//! immutability breach the runner must catch and repair. [`OwnedBuffer`]
//! declares it, so the runner restores its canonical copy silently.

use rayon::prelude::*;

use crate::chain::Chain;
use crate::contender::{Contender, TransformOutcome};
use crate::contenders::parallel::disjoint_blocks_mut;
use crate::contenders::sequential::complement_in_place;

/// Rewrites the lent input directly and returns a copy of it.
///
/// Deliberately does *not* declare `mutates_input`: this is the breach
/// path the harness has to detect, note, and repair before the next
/// contender sees the same input slot.
pub struct DirtyInPlace;

impl DirtyInPlace {
    pub fn new() -> Self {
        Self
    }
}

impl Default for DirtyInPlace {
    fn default() -> Self {
        Self::new()
    }
}

impl Contender for DirtyInPlace {
    fn description(&self) -> &str {
        "(#5) dirty, rewrites the lent input :)"
    }

    fn transform(&self, input: &mut Chain) -> TransformOutcome {
        complement_in_place(input.as_bytes_mut());
        Ok(Some(input.clone()))
    }
}

/// Declared in-place rewrite through disjoint parallel sub-ranges.
///
/// The lent buffer is split into `blocks` contiguous, non-overlapping
/// ranges rewritten concurrently; no two workers touch the same index, so
/// the buffer itself needs no synchronization. Declares `mutates_input`,
/// so the runner restores its canonical copy without flagging a breach.
pub struct OwnedBuffer {
    blocks: usize,
    description: String,
}

impl OwnedBuffer {
    pub fn new(blocks: usize) -> Self {
        let blocks = blocks.max(1);
        Self {
            description: format!("(#6) owned-buffer, in-place across {blocks} blocks"),
            blocks,
        }
    }
}

impl Contender for OwnedBuffer {
    fn description(&self) -> &str {
        &self.description
    }

    fn mutates_input(&self) -> bool {
        true
    }

    fn transform(&self, input: &mut Chain) -> TransformOutcome {
        let buf = input.as_bytes_mut();
        disjoint_blocks_mut(buf, self.blocks)
            .into_par_iter()
            .for_each(|block| complement_in_place(block));
        Ok(Some(input.clone()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_dirty_output_is_correct_but_input_is_mutated() {
        let c = DirtyInPlace::new();
        let mut chain = Chain::from("GATTACA");
        let out = c.transform(&mut chain).unwrap().unwrap();
        assert_eq!(out.as_bytes(), b"CTAATGT");
        assert_eq!(chain.as_bytes(), b"CTAATGT", "input should be rewritten");
        assert!(!c.mutates_input(), "dirty must stay undeclared");
    }

    #[test]
    fn test_owned_buffer_declares_mutation() {
        let c = OwnedBuffer::new(200);
        assert!(c.mutates_input());
        let mut chain = Chain::from("GATTACA");
        let out = c.transform(&mut chain).unwrap().unwrap();
        assert_eq!(out.as_bytes(), b"CTAATGT");
        assert_eq!(chain.as_bytes(), b"CTAATGT");
    }

    #[test]
    fn test_owned_buffer_more_blocks_than_symbols() {
        let c = OwnedBuffer::new(200);
        let mut chain = Chain::from("ATCG");
        let out = c.transform(&mut chain).unwrap().unwrap();
        assert_eq!(out.as_bytes(), b"TAGC");
    }

    #[test]
    fn test_owned_buffer_empty_chain() {
        let c = OwnedBuffer::new(8);
        let mut chain = Chain::from("");
        let out = c.transform(&mut chain).unwrap().unwrap();
        assert!(out.is_empty());
    }
}
