//! Weighting policy.
//!
//! A pure lookup table keyed by two context numbers, kept as explicitly
//! enumerated tiers so individual thresholds are testable and tunable
//! without touching control flow.

use crate::model::DrawContext;

/// Relative weights of the two coefficient components. Always sums to 1.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct WeightPair {
    /// Weight of the subjective rating component.
    pub rating: f64,
    /// Weight of the performance-derived rank component.
    pub rank: f64,
}

/// Below this many published draws the season has too little history to
/// trust performance data at all.
const MIN_DRAWS_FOR_RANK: u32 = 8;

/// Weights used while `published_draws < MIN_DRAWS_FOR_RANK`.
const RATING_ONLY: WeightPair = WeightPair {
    rating: 1.0,
    rank: 0.0,
};

/// Tier table keyed by total matches played, highest threshold first.
/// The first tier whose threshold is met wins.
const MATCH_TIERS: [(u32, WeightPair); 3] = [
    (
        10,
        WeightPair {
            rating: 0.4,
            rank: 0.6,
        },
    ),
    (
        6,
        WeightPair {
            rating: 0.5,
            rank: 0.5,
        },
    ),
    (
        3,
        WeightPair {
            rating: 0.6,
            rank: 0.4,
        },
    ),
];

/// Weights when no match tier is reached.
const LOW_ACTIVITY: WeightPair = WeightPair {
    rating: 0.8,
    rank: 0.2,
};

/// Resolves the component weights for a draw.
///
/// Evaluated once per draw, never per participant.
pub fn resolve_weights(context: &DrawContext) -> WeightPair {
    if context.published_draws < MIN_DRAWS_FOR_RANK {
        return RATING_ONLY;
    }

    for (threshold, weights) in MATCH_TIERS {
        if context.total_matches >= threshold {
            return weights;
        }
    }

    LOW_ACTIVITY
}
