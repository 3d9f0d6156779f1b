//! Word comparison utilities
//!
//! Finds the single character substitution between two adjacent words, and
//! counts position-wise matches. Consumed by the priority calculator and by
//! statistics population during vocabulary ingestion.

use super::Word;
use std::fmt;

/// An ordered character substitution
///
/// `(from, to)` and `(to, from)` are distinct substitutions; the frequency
/// statistics key on the ordered pair.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Substitution {
    pub from: u8,
    pub to: u8,
}

/// Error type for word comparison
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DiffError {
    LengthMismatch { left: usize, right: usize },
    Identical,
    MultipleDifferences(usize),
}

impl fmt::Display for DiffError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::LengthMismatch { left, right } => {
                write!(f, "Words differ in length ({left} vs {right})")
            }
            Self::Identical => write!(f, "Words are identical"),
            Self::MultipleDifferences(count) => {
                write!(f, "Words differ in {count} positions, expected exactly 1")
            }
        }
    }
}

impl std::error::Error for DiffError {}

/// Find the single substitution that turns `from` into `to`
///
/// # Errors
/// Returns `DiffError` if the words differ in length, are equal, or differ
/// in more than one position.
///
/// # Examples
/// ```
/// use word_ladder::core::{Word, single_substitution};
///
/// let time = Word::new("time").unwrap();
/// let tame = Word::new("tame").unwrap();
///
/// let sub = single_substitution(&time, &tame).unwrap();
/// assert_eq!(sub.from, b'i');
/// assert_eq!(sub.to, b'a');
/// ```
pub fn single_substitution(from: &Word, to: &Word) -> Result<Substitution, DiffError> {
    if from.len() != to.len() {
        return Err(DiffError::LengthMismatch {
            left: from.len(),
            right: to.len(),
        });
    }

    let mut found: Option<Substitution> = None;
    let mut differences = 0;

    for (&a, &b) in from.bytes().iter().zip(to.bytes()) {
        if a != b {
            differences += 1;
            found = Some(Substitution { from: a, to: b });
        }
    }

    match (differences, found) {
        (0, _) => Err(DiffError::Identical),
        (1, Some(sub)) => Ok(sub),
        (count, _) => Err(DiffError::MultipleDifferences(count)),
    }
}

/// Count positions where the two words carry the same character
///
/// Positions beyond the shorter word never match; callers compare
/// equal-length words.
#[must_use]
pub fn matching_positions(left: &Word, right: &Word) -> usize {
    left.bytes()
        .iter()
        .zip(right.bytes())
        .filter(|(a, b)| a == b)
        .count()
}
