//! Decayed co-occurrence fold.

use std::collections::HashMap;

use crate::model::{HistoricalDraw, ParticipantId};

/// Default recency decay applied per history step.
pub const DEFAULT_DECAY: f64 = 0.85;

/// Canonical key for an unordered participant pair (smaller id first).
pub fn pair_key(a: ParticipantId, b: ParticipantId) -> (ParticipantId, ParticipantId) {
    if a <= b {
        (a, b)
    } else {
        (b, a)
    }
}

/// Sparse, symmetric map of decayed teammate co-occurrence weights.
///
/// Built fresh per invocation; pairs never seen together are absent and
/// read as 0. Participant counts are small but sparsity is high, so a hash
/// map keyed by the canonical pair beats a dense matrix.
#[derive(Debug, Clone, Default)]
pub struct AffinityMap {
    weights: HashMap<(ParticipantId, ParticipantId), f64>,
}

impl AffinityMap {
    /// Folds a history window into an affinity map.
    ///
    /// The draw at slice index `i` contributes `decay^i` to every unordered
    /// pair within each of its team rosters. Duplicate ids within one
    /// roster are deduplicated first, so malformed records cannot produce
    /// self pairs or double-count a pairing.
    pub fn from_history(history: &[HistoricalDraw], decay: f64) -> Self {
        let mut weights = HashMap::new();

        for (recency, draw) in history.iter().enumerate() {
            let contribution = decay.powi(recency as i32);

            for roster in &draw.teams {
                let mut seen: Vec<ParticipantId> = Vec::with_capacity(roster.len());
                for &id in roster {
                    if !seen.contains(&id) {
                        seen.push(id);
                    }
                }

                for (i, &a) in seen.iter().enumerate() {
                    for &b in &seen[i + 1..] {
                        *weights.entry(pair_key(a, b)).or_insert(0.0) += contribution;
                    }
                }
            }
        }

        Self { weights }
    }

    /// Accumulated weight for a pair; 0 for pairs never seen together.
    ///
    /// Symmetric: `weight(a, b) == weight(b, a)`.
    pub fn weight(&self, a: ParticipantId, b: ParticipantId) -> f64 {
        self.weights.get(&pair_key(a, b)).copied().unwrap_or(0.0)
    }

    /// Sum of affinities between `participant` and every listed teammate.
    ///
    /// This is the penalty term the assigner charges a candidate team.
    pub fn team_penalty<I>(&self, participant: ParticipantId, members: I) -> f64
    where
        I: IntoIterator<Item = ParticipantId>,
    {
        members
            .into_iter()
            .map(|m| self.weight(participant, m))
            .sum()
    }

    /// Number of pairs with non-zero accumulated weight.
    pub fn len(&self) -> usize {
        self.weights.len()
    }

    /// True when no pairing was ever recorded.
    pub fn is_empty(&self) -> bool {
        self.weights.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn draw(teams: &[&[ParticipantId]]) -> HistoricalDraw {
        HistoricalDraw::new(teams.iter().map(|t| t.to_vec()).collect())
    }

    #[test]
    fn test_empty_history() {
        let map = AffinityMap::from_history(&[], DEFAULT_DECAY);
        assert!(map.is_empty());
        assert!((map.weight(1, 2) - 0.0).abs() < 1e-15);
    }

    #[test]
    fn test_single_draw_pairs() {
        let history = [draw(&[&[1, 2, 3], &[4, 5]])];
        let map = AffinityMap::from_history(&history, DEFAULT_DECAY);

        // Most recent draw contributes decay^0 = 1.0 per pair.
        assert!((map.weight(1, 2) - 1.0).abs() < 1e-10);
        assert!((map.weight(1, 3) - 1.0).abs() < 1e-10);
        assert!((map.weight(2, 3) - 1.0).abs() < 1e-10);
        assert!((map.weight(4, 5) - 1.0).abs() < 1e-10);

        // Cross-team pairs were never teammates.
        assert!((map.weight(1, 4) - 0.0).abs() < 1e-15);
        assert_eq!(map.len(), 4);
    }

    #[test]
    fn test_symmetry() {
        let history = [draw(&[&[7, 9]]), draw(&[&[9, 7]])];
        let map = AffinityMap::from_history(&history, 0.5);
        assert!((map.weight(7, 9) - map.weight(9, 7)).abs() < 1e-15);
        assert!((map.weight(7, 9) - 1.5).abs() < 1e-10);
    }

    #[test]
    fn test_decay_monotonicity() {
        // The same pairing at index 0 must outweigh it at any index >= 1.
        for decay in [0.1, 0.5, 0.85, 0.99] {
            let recent = AffinityMap::from_history(&[draw(&[&[1, 2]])], decay);
            let old = AffinityMap::from_history(
                &[draw(&[&[3, 4]]), draw(&[&[1, 2]])],
                decay,
            );
            assert!(
                recent.weight(1, 2) > old.weight(1, 2),
                "decay {decay}: {} <= {}",
                recent.weight(1, 2),
                old.weight(1, 2)
            );
        }
    }

    #[test]
    fn test_accumulation_across_draws() {
        let history = [draw(&[&[1, 2]]), draw(&[&[1, 2]]), draw(&[&[1, 2]])];
        let map = AffinityMap::from_history(&history, 0.85);

        let expected = 1.0 + 0.85 + 0.85 * 0.85;
        assert!((map.weight(1, 2) - expected).abs() < 1e-10);
    }

    #[test]
    fn test_duplicate_ids_deduplicated() {
        // A malformed roster listing an id twice must not self-pair or
        // double-count.
        let history = [draw(&[&[1, 1, 2]])];
        let map = AffinityMap::from_history(&history, DEFAULT_DECAY);

        assert!((map.weight(1, 2) - 1.0).abs() < 1e-10);
        assert!((map.weight(1, 1) - 0.0).abs() < 1e-15);
        assert_eq!(map.len(), 1);
    }

    #[test]
    fn test_team_penalty_sums_members() {
        let history = [draw(&[&[1, 2, 3]])];
        let map = AffinityMap::from_history(&history, DEFAULT_DECAY);

        // affinity(1,2) + affinity(1,3) + affinity(1,4) = 1 + 1 + 0
        assert!((map.team_penalty(1, [2, 3, 4]) - 2.0).abs() < 1e-10);
    }

    #[test]
    fn test_pair_key_canonical() {
        assert_eq!(pair_key(5, 2), (2, 5));
        assert_eq!(pair_key(2, 5), (2, 5));
        assert_eq!(pair_key(3, 3), (3, 3));
    }
}
