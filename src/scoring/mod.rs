//! Candidate scoring for the informed search
//!
//! Substitution frequency statistics plus the weighted priority calculator
//! that turns them into exploration priorities.

mod calculator;
mod stats;

pub use calculator::{PriorityCalculator, ScoreError, Weights};
pub use stats::SubstitutionStats;
