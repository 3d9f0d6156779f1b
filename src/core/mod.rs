//! Core domain types for word ladders
//!
//! This module contains the fundamental domain types with zero external dependencies.
//! All types here are pure, testable, and have clear mathematical properties.

mod diff;
mod word;

pub use diff::{DiffError, Substitution, matching_positions, single_substitution};
pub use word::{Word, WordError};
