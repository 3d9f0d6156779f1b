//! Candidate priority scoring
//!
//! Combines up to four independently weighted heuristic components into one
//! scalar priority in [0.0, 1.0], where 0.0 is most desirable to explore.

use super::SubstitutionStats;
use crate::core::{DiffError, Word, matching_positions, single_substitution};
use std::fmt;

/// Component weights for the priority calculation
///
/// Weights are non-negative integers; at least one must be positive. The
/// weighted components are normalized by the weight sum, so only the ratios
/// matter.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Weights {
    /// Distance travelled from the source so far
    pub distance: u32,
    /// Position-wise character agreement with the destination
    pub destination_match: u32,
    /// Popularity of the character the candidate introduces
    pub change_popularity: u32,
    /// Popularity of the exact (from, to) substitution
    pub substitution_popularity: u32,
}

impl Weights {
    /// Create a weight configuration
    #[must_use]
    pub const fn new(
        distance: u32,
        destination_match: u32,
        change_popularity: u32,
        substitution_popularity: u32,
    ) -> Self {
        Self {
            distance,
            destination_match,
            change_popularity,
            substitution_popularity,
        }
    }

    /// Sum of all four weights
    #[must_use]
    pub const fn sum(&self) -> u32 {
        self.distance
            + self.destination_match
            + self.change_popularity
            + self.substitution_popularity
    }
}

impl Default for Weights {
    /// Equal weighting of all four components
    fn default() -> Self {
        Self::new(1, 1, 1, 1)
    }
}

/// Error type for priority calculation
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ScoreError {
    AllWeightsZero,
    ZeroMaxDistance,
    DistanceExceedsMax { distance: usize, max: usize },
    LengthMismatch,
    Diff(DiffError),
}

impl fmt::Display for ScoreError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::AllWeightsZero => write!(f, "At least one weight must be positive"),
            Self::ZeroMaxDistance => write!(f, "Maximum distance must be at least 1"),
            Self::DistanceExceedsMax { distance, max } => {
                write!(f, "Distance {distance} exceeds the configured maximum {max}")
            }
            Self::LengthMismatch => {
                write!(f, "Current, candidate and destination must share one length")
            }
            Self::Diff(e) => write!(f, "Word comparison failed: {e}"),
        }
    }
}

impl std::error::Error for ScoreError {}

impl From<DiffError> for ScoreError {
    fn from(e: DiffError) -> Self {
        Self::Diff(e)
    }
}

/// Scores candidate words during search
///
/// Holds the weight configuration, the maximum plausible source→candidate
/// distance, and a reference to the vocabulary's substitution statistics.
/// The statistics are threaded in explicitly so the calculator is testable
/// in isolation.
#[derive(Debug, Clone)]
pub struct PriorityCalculator<'a> {
    max_distance: usize,
    weights: Weights,
    stats: &'a SubstitutionStats,
}

impl<'a> PriorityCalculator<'a> {
    /// Create a calculator
    ///
    /// # Errors
    /// Returns `ScoreError::ZeroMaxDistance` if `max_distance` is 0, or
    /// `ScoreError::AllWeightsZero` if every weight is 0.
    pub fn new(
        max_distance: usize,
        weights: Weights,
        stats: &'a SubstitutionStats,
    ) -> Result<Self, ScoreError> {
        if max_distance == 0 {
            return Err(ScoreError::ZeroMaxDistance);
        }
        if weights.sum() == 0 {
            return Err(ScoreError::AllWeightsZero);
        }
        Ok(Self {
            max_distance,
            weights,
            stats,
        })
    }

    /// Score a candidate word, 0.0 best to 1.0 worst
    ///
    /// The result is the weighted average of four component scores:
    /// 1. `distance / max_distance`
    /// 2. `1 − matching positions(candidate, destination) / length`
    /// 3. `1 − from-count(character the candidate introduces) / max from-count`
    /// 4. `1 − pair-count(current → candidate substitution) / max pair-count`
    ///
    /// Components 3 and 4 require `current` and `candidate` to differ in
    /// exactly one position; they are only evaluated when their weight is
    /// positive.
    ///
    /// # Errors
    /// Returns `ScoreError` if `distance` exceeds the configured maximum, the
    /// three words disagree in length, or the current/candidate pair is not a
    /// single substitution while a popularity weight is active.
    pub fn calculate(
        &self,
        current: &Word,
        candidate: &Word,
        destination: &Word,
        distance: usize,
    ) -> Result<f64, ScoreError> {
        if current.len() != candidate.len() || candidate.len() != destination.len() {
            return Err(ScoreError::LengthMismatch);
        }
        if distance > self.max_distance {
            return Err(ScoreError::DistanceExceedsMax {
                distance,
                max: self.max_distance,
            });
        }

        let w = &self.weights;
        let mut score = 0.0;

        if w.distance > 0 {
            score += f64::from(w.distance) * (distance as f64 / self.max_distance as f64);
        }

        if w.destination_match > 0 {
            let matching = matching_positions(candidate, destination) as f64;
            score += f64::from(w.destination_match) * (1.0 - matching / candidate.len() as f64);
        }

        if w.change_popularity > 0 || w.substitution_popularity > 0 {
            let substitution = single_substitution(current, candidate)?;
            if w.change_popularity > 0 {
                score += f64::from(w.change_popularity) * self.stats.from_score(substitution.to);
            }
            if w.substitution_popularity > 0 {
                score +=
                    f64::from(w.substitution_popularity) * self.stats.pair_score(substitution);
            }
        }

        // Guard against float rounding pushing past the queue's range check
        Ok((score / f64::from(w.sum())).clamp(0.0, 1.0))
    }
}
