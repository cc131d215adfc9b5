//! Chain Generator - random benchmark inputs
//!
//! Each call is independently randomized (no persisted seed), so a session
//! that generates one chain per input slot hands every warm-up trial a
//! different sequence. Contenders cannot exploit memoized results across
//! trials.

use rand::Rng;

use crate::chain::{ALPHABET, Chain};

/// Generate a chain of `len` symbols drawn uniformly and independently
/// from the alphabet. `len = 0` yields an empty chain; never fails.
pub fn generate(len: usize) -> Chain {
    let mut rng = rand::thread_rng();
    let symbols = (0..len).map(|_| ALPHABET[rng.gen_range(0..4)]).collect();
    Chain::from_bytes(symbols)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_generated_length() {
        assert_eq!(generate(0).len(), 0);
        assert_eq!(generate(1).len(), 1);
        assert_eq!(generate(10_000).len(), 10_000);
    }

    #[test]
    fn test_generated_symbols_are_in_alphabet() {
        let chain = generate(10_000);
        for &s in chain.as_bytes() {
            assert!(ALPHABET.contains(&s), "unexpected symbol {}", s as char);
        }
    }

    #[test]
    fn test_calls_are_independent() {
        // Two 10k-symbol draws colliding by chance is (1/4)^10000.
        let a = generate(10_000);
        let b = generate(10_000);
        assert_ne!(a, b);
    }
}
