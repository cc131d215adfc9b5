//! Sequential substitution variants
//!
//! The baseline strategies: one pass over the chain, one output buffer,
//! no internal parallelism. They differ only in how the per-symbol
//! substitution is expressed, which is exactly what the contest measures.

use rustc_hash::FxHashMap;

use crate::chain::{COMPLEMENT, Chain, complement_of};
use crate::contender::{Contender, TransformOutcome};

/// Associative lookup per symbol.
///
/// Correctness rests on the four entries A->T, T->A, C->G, G->C; symbols
/// outside the closed alphabet pass through unchanged. The map is built
/// inside `transform` on purpose: construction cost is part of what this
/// variant pays.
pub struct MapLookup;

impl MapLookup {
    pub fn new() -> Self {
        Self
    }
}

impl Default for MapLookup {
    fn default() -> Self {
        Self::new()
    }
}

impl Contender for MapLookup {
    fn description(&self) -> &str {
        "(#1) map-lookup, FxHashMap per symbol"
    }

    fn transform(&self, input: &mut Chain) -> TransformOutcome {
        let mut complements = FxHashMap::default();
        complements.insert(b'A', b'T');
        complements.insert(b'T', b'A');
        complements.insert(b'C', b'G');
        complements.insert(b'G', b'C');

        let output = input
            .as_bytes()
            .iter()
            .map(|s| complements.get(s).copied().unwrap_or(*s))
            .collect();
        Ok(Some(Chain::from_bytes(output)))
    }
}

/// Explicit branch per symbol, appended to a growable buffer.
pub struct BranchChain;

impl BranchChain {
    pub fn new() -> Self {
        Self
    }
}

impl Default for BranchChain {
    fn default() -> Self {
        Self::new()
    }
}

impl Contender for BranchChain {
    fn description(&self) -> &str {
        "(#2) branch-chain, if/else into growable buffer"
    }

    fn transform(&self, input: &mut Chain) -> TransformOutcome {
        let src = input.as_bytes();
        let mut output = Vec::with_capacity(src.len());
        for &s in src {
            if s == b'A' {
                output.push(b'T');
            } else if s == b'T' {
                output.push(b'A');
            } else if s == b'C' {
                output.push(b'G');
            } else if s == b'G' {
                output.push(b'C');
            } else {
                output.push(s);
            }
        }
        Ok(Some(Chain::from_bytes(output)))
    }
}

/// Const 256-entry table into a preallocated buffer.
pub struct MatchTable;

impl MatchTable {
    pub fn new() -> Self {
        Self
    }
}

impl Default for MatchTable {
    fn default() -> Self {
        Self::new()
    }
}

impl Contender for MatchTable {
    fn description(&self) -> &str {
        "(#3) match-table, const table into preallocated buffer"
    }

    fn transform(&self, input: &mut Chain) -> TransformOutcome {
        let src = input.as_bytes();
        let mut output = vec![0u8; src.len()];
        for (dst, &s) in output.iter_mut().zip(src) {
            *dst = COMPLEMENT[s as usize];
        }
        Ok(Some(Chain::from_bytes(output)))
    }
}

/// Shared leaf: branch-free complement of `src` into `dst`.
///
/// Used by the parallel variants for their sub-range work; kept here so
/// the sequential and parallel paths share one substitution kernel.
#[inline]
pub(crate) fn complement_into(src: &[u8], dst: &mut [u8]) {
    debug_assert_eq!(src.len(), dst.len());
    for (d, &s) in dst.iter_mut().zip(src) {
        *d = complement_of(s);
    }
}

/// Shared leaf: complement `buf` in place.
#[inline]
pub(crate) fn complement_in_place(buf: &mut [u8]) {
    for s in buf {
        *s = complement_of(*s);
    }
}
