//! Substitution frequency statistics
//!
//! Counts how often characters and ordered character pairs take part in
//! substitutions across the vocabulary's adjacency edges. The priority
//! calculator turns these counts into popularity scores.

use crate::core::Substitution;
use rustc_hash::FxHashMap;

/// Frequency tables over observed substitutions
///
/// `(a→b)` and `(b→a)` are distinct keys; the from-character table counts
/// how often a character is the "from" side of any substitution. Running
/// maxima are kept so popularity scores are O(1).
#[derive(Debug, Clone, Default)]
pub struct SubstitutionStats {
    from_counts: FxHashMap<u8, u64>,
    pair_counts: FxHashMap<(u8, u8), u64>,
    max_from: u64,
    max_pair: u64,
}

impl SubstitutionStats {
    /// Create empty tables
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Record one observed substitution
    pub fn record(&mut self, substitution: Substitution) {
        let from = self.from_counts.entry(substitution.from).or_insert(0);
        *from += 1;
        self.max_from = self.max_from.max(*from);

        let pair = self
            .pair_counts
            .entry((substitution.from, substitution.to))
            .or_insert(0);
        *pair += 1;
        self.max_pair = self.max_pair.max(*pair);
    }

    /// How often `character` was the "from" side of a substitution
    #[must_use]
    pub fn from_count(&self, character: u8) -> u64 {
        self.from_counts.get(&character).copied().unwrap_or(0)
    }

    /// How often the exact ordered substitution was observed
    #[must_use]
    pub fn pair_count(&self, substitution: Substitution) -> u64 {
        self.pair_counts
            .get(&(substitution.from, substitution.to))
            .copied()
            .unwrap_or(0)
    }

    /// Largest from-character count observed
    #[must_use]
    pub const fn max_from_count(&self) -> u64 {
        self.max_from
    }

    /// Largest ordered-pair count observed
    #[must_use]
    pub const fn max_pair_count(&self) -> u64 {
        self.max_pair
    }

    /// Popularity score for a character: 1 − count/max, in [0.0, 1.0]
    ///
    /// Scores 1.0 when the tables are empty (nothing is popular).
    #[must_use]
    pub fn from_score(&self, character: u8) -> f64 {
        if self.max_from == 0 {
            return 1.0;
        }
        1.0 - self.from_count(character) as f64 / self.max_from as f64
    }

    /// Popularity score for an ordered pair: 1 − count/max, in [0.0, 1.0]
    #[must_use]
    pub fn pair_score(&self, substitution: Substitution) -> f64 {
        if self.max_pair == 0 {
            return 1.0;
        }
        1.0 - self.pair_count(substitution) as f64 / self.max_pair as f64
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const fn sub(from: u8, to: u8) -> Substitution {
        Substitution { from, to }
    }

    #[test]
    fn record_counts_ordered_pairs() {
        let mut stats = SubstitutionStats::new();
        stats.record(sub(b'a', b'b'));
        stats.record(sub(b'a', b'b'));
        stats.record(sub(b'b', b'a'));

        assert_eq!(stats.pair_count(sub(b'a', b'b')), 2);
        assert_eq!(stats.pair_count(sub(b'b', b'a')), 1);
        assert_eq!(stats.pair_count(sub(b'a', b'c')), 0);
    }

    #[test]
    fn from_counts_aggregate_over_targets() {
        let mut stats = SubstitutionStats::new();
        stats.record(sub(b'a', b'b'));
        stats.record(sub(b'a', b'c'));
        stats.record(sub(b'b', b'c'));

        assert_eq!(stats.from_count(b'a'), 2);
        assert_eq!(stats.from_count(b'b'), 1);
        assert_eq!(stats.from_count(b'c'), 0);
    }

    #[test]
    fn maxima_track_the_busiest_entries() {
        let mut stats = SubstitutionStats::new();
        stats.record(sub(b'a', b'b'));
        stats.record(sub(b'a', b'b'));
        stats.record(sub(b'a', b'c'));

        assert_eq!(stats.max_from_count(), 3);
        assert_eq!(stats.max_pair_count(), 2);
    }

    #[test]
    fn scores_scale_against_maximum() {
        let mut stats = SubstitutionStats::new();
        stats.record(sub(b'a', b'b'));
        stats.record(sub(b'a', b'c'));
        stats.record(sub(b'b', b'c'));

        // 'a' is the most popular from-character: score 0
        assert!((stats.from_score(b'a') - 0.0).abs() < f64::EPSILON);
        assert!((stats.from_score(b'b') - 0.5).abs() < f64::EPSILON);
        assert!((stats.from_score(b'z') - 1.0).abs() < f64::EPSILON);
    }

    #[test]
    fn empty_tables_score_one() {
        let stats = SubstitutionStats::new();
        assert!((stats.from_score(b'a') - 1.0).abs() < f64::EPSILON);
        assert!((stats.pair_score(sub(b'a', b'b')) - 1.0).abs() < f64::EPSILON);
    }
}
