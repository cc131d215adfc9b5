//! Chain - the unit of work
//!
//! A chain is an owned, fixed-length sequence of symbols drawn from the
//! closed 4-symbol alphabet {A, T, C, G}. The contest transform replaces
//! every symbol by its complement: A by T, T by A, C by G, G by C.

use std::fmt;

/// The closed alphabet every chain is drawn from.
pub const ALPHABET: [u8; 4] = [b'C', b'A', b'T', b'G'];

/// How many symbols the reporter shows from each end of an output chain.
pub const PREVIEW_SYMBOLS: usize = 60;

const fn build_complement_table() -> [u8; 256] {
    let mut table = [0u8; 256];
    let mut i = 0;
    while i < 256 {
        // Symbols outside the alphabet pass through unchanged. The alphabet
        // is closed, so this path is never hit by generated inputs, but it
        // must not panic either.
        table[i] = i as u8;
        i += 1;
    }
    table[b'A' as usize] = b'T';
    table[b'T' as usize] = b'A';
    table[b'C' as usize] = b'G';
    table[b'G' as usize] = b'C';
    table
}

/// Pointwise complement lookup table, indexed by symbol byte.
pub const COMPLEMENT: [u8; 256] = build_complement_table();

/// Complement of a single symbol.
#[inline]
pub const fn complement_of(symbol: u8) -> u8 {
    COMPLEMENT[symbol as usize]
}

/// An owned symbol sequence.
///
/// The benchmark runner owns the canonical input chains and lends them to
/// contenders for the duration of one `transform` call; a contender must
/// never retain a reference beyond its call.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Chain {
    symbols: Vec<u8>,
}

impl Chain {
    pub fn from_bytes(symbols: Vec<u8>) -> Self {
        Self { symbols }
    }

    pub fn len(&self) -> usize {
        self.symbols.len()
    }

    pub fn is_empty(&self) -> bool {
        self.symbols.is_empty()
    }

    pub fn as_bytes(&self) -> &[u8] {
        &self.symbols
    }

    /// Mutable view of the backing storage.
    ///
    /// Lent to contenders so in-place variants are expressible; mutating a
    /// chain the contender did not declare `mutates_input` for is an
    /// immutability breach, detected and repaired by the runner.
    pub fn as_bytes_mut(&mut self) -> &mut [u8] {
        &mut self.symbols
    }

    pub fn into_bytes(self) -> Vec<u8> {
        self.symbols
    }

    /// Order-sensitive content hash (CRC32) used to cross-validate
    /// contenders against the session reference.
    pub fn fingerprint(&self) -> u32 {
        let mut hasher = crc32fast::Hasher::new();
        hasher.update(&self.symbols);
        hasher.finalize()
    }

    /// First and last `n` symbols, elided in the middle for long chains.
    pub fn preview(&self, n: usize) -> String {
        if self.symbols.len() <= 2 * n {
            return String::from_utf8_lossy(&self.symbols).into_owned();
        }
        let head = String::from_utf8_lossy(&self.symbols[..n]);
        let tail = String::from_utf8_lossy(&self.symbols[self.symbols.len() - n..]);
        format!("{head} ... {tail}")
    }
}

impl From<&str> for Chain {
    fn from(s: &str) -> Self {
        Self::from_bytes(s.as_bytes().to_vec())
    }
}

impl fmt::Display for Chain {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&String::from_utf8_lossy(&self.symbols))
    }
}
