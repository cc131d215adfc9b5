//! Correctness Checker - inter-contender consistency
//!
//! The harness does not validate the transform's semantics independently;
//! the first contender to produce a result is trusted as ground truth and
//! its fingerprint becomes the session reference. Every later result is
//! checked for length and fingerprint agreement. All findings are notes
//! on the report row, never fatal.

use std::fmt;

use crate::chain::Chain;

/// A diagnostic finding attached to a contender's report row.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Note {
    /// The contender produced no output.
    NoData,
    /// Output length differs from the session's chain length.
    LengthMismatch { expected: usize, actual: usize },
    /// Output fingerprint differs from the session reference.
    FingerprintMismatch { expected: u32, actual: u32 },
    /// The contender mutated input it did not own.
    ImmutabilityBreach,
    /// The transform failed at runtime; carries the failure description.
    Failure(String),
}

impl fmt::Display for Note {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Note::NoData => write!(f, "No data."),
            Note::LengthMismatch { expected, actual } => {
                write!(f, "Length mismatch (expected {expected}, got {actual}).")
            }
            Note::FingerprintMismatch { expected, actual } => {
                write!(
                    f,
                    "Fingerprint mismatch (expected {expected:08x}, got {actual:08x})."
                )
            }
            Note::ImmutabilityBreach => {
                write!(f, "Contender mutated the immutable input chain!")
            }
            Note::Failure(reason) => write!(f, "{reason}"),
        }
    }
}

/// Validates each contender's output against the session reference.
pub struct CorrectnessChecker {
    expected_len: usize,
    reference: Option<u32>,
}

impl CorrectnessChecker {
    pub fn new(expected_len: usize) -> Self {
        Self {
            expected_len,
            reference: None,
        }
    }

    /// Reference fingerprint fixed by the first successful contender, if
    /// one has run yet.
    pub fn reference(&self) -> Option<u32> {
        self.reference
    }

    /// Check one measured result. Absent output yields `NoData` and skips
    /// the length/fingerprint rules; the breach note is appended
    /// independently of everything else.
    pub fn verify(&mut self, output: Option<&Chain>, breach: bool) -> Vec<Note> {
        let mut notes = Vec::new();

        match output {
            None => notes.push(Note::NoData),
            Some(chain) => {
                if chain.len() != self.expected_len {
                    notes.push(Note::LengthMismatch {
                        expected: self.expected_len,
                        actual: chain.len(),
                    });
                }
                let fingerprint = chain.fingerprint();
                match self.reference {
                    Some(reference) if reference != fingerprint => {
                        notes.push(Note::FingerprintMismatch {
                            expected: reference,
                            actual: fingerprint,
                        });
                    }
                    Some(_) => {}
                    None => self.reference = Some(fingerprint),
                }
            }
        }

        if breach {
            notes.push(Note::ImmutabilityBreach);
        }
        notes
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_absent_output_is_no_data_only() {
        let mut checker = CorrectnessChecker::new(4);
        let notes = checker.verify(None, false);
        assert_eq!(notes, vec![Note::NoData]);
        assert_eq!(checker.reference(), None, "no data must not fix a reference");
    }

    #[test]
    fn test_first_success_fixes_the_reference() {
        let mut checker = CorrectnessChecker::new(4);
        let first = Chain::from("TAGC");
        assert!(checker.verify(Some(&first), false).is_empty());
        assert_eq!(checker.reference(), Some(first.fingerprint()));

        // Same content later: clean.
        assert!(checker.verify(Some(&Chain::from("TAGC")), false).is_empty());
    }

    #[test]
    fn test_fingerprint_mismatch() {
        let mut checker = CorrectnessChecker::new(4);
        checker.verify(Some(&Chain::from("TAGC")), false);
        let notes = checker.verify(Some(&Chain::from("TTTT")), false);
        assert!(matches!(notes[0], Note::FingerprintMismatch { .. }));
    }

    #[test]
    fn test_length_mismatch() {
        let mut checker = CorrectnessChecker::new(4);
        let notes = checker.verify(Some(&Chain::from("TAG")), false);
        assert!(notes.contains(&Note::LengthMismatch {
            expected: 4,
            actual: 3
        }));
    }

    #[test]
    fn test_breach_note_is_independent() {
        let mut checker = CorrectnessChecker::new(4);
        let notes = checker.verify(None, true);
        assert_eq!(notes, vec![Note::NoData, Note::ImmutabilityBreach]);

        let notes = checker.verify(Some(&Chain::from("TAGC")), true);
        assert_eq!(notes, vec![Note::ImmutabilityBreach]);
    }
}
