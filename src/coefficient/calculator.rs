//! Coefficient computation.

use super::policy::{resolve_weights, WeightPair};
use crate::model::{DrawContext, Participant};

/// Computes a participant's strength under already-resolved weights.
///
/// Bots return 0 unconditionally. For everyone else:
///
/// ```text
/// win_ratio      = wins / matches            (0 when no matches)
/// rank_component = 0.5 * ranking_points + 0.5 * win_ratio
/// strength       = w.rating * rating + w.rank * rank_component
/// ```
///
/// Always finite and >= 0 for non-negative inputs.
pub fn strength(participant: &Participant, weights: &WeightPair) -> f64 {
    if participant.is_bot {
        return 0.0;
    }

    let win_ratio = if participant.matches > 0 {
        f64::from(participant.wins) / f64::from(participant.matches)
    } else {
        0.0
    };

    let rank_component = 0.5 * participant.ranking_points + 0.5 * win_ratio;

    weights.rating * participant.rating + weights.rank * rank_component
}

/// Convenience composition: resolves the weights from `context` and scores
/// one participant.
///
/// The assigner resolves weights once per draw and calls [`strength`]
/// directly; this entry point suits one-off recomputation.
pub fn coefficient(participant: &Participant, context: &DrawContext) -> f64 {
    strength(participant, &resolve_weights(context))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::Position;

    fn player(rating: f64, points: f64, matches: u32, wins: u32) -> Participant {
        Participant::new(1, Position::Midfielder)
            .with_rating(rating)
            .with_ranking_points(points)
            .with_record(matches, wins)
    }

    #[test]
    fn test_bot_is_always_zero() {
        let bot = player(9.0, 500.0, 40, 30).as_bot();
        let ctx = DrawContext::new(10, 8);
        assert!((coefficient(&bot, &ctx) - 0.0).abs() < 1e-15);
    }

    #[test]
    fn test_rating_only_before_eight_draws() {
        // published_draws = 7 → coefficient equals the rating exactly.
        let p = player(6.5, 300.0, 20, 15);
        let ctx = DrawContext::new(10, 7);
        assert!((coefficient(&p, &ctx) - 6.5).abs() < 1e-10);
    }

    #[test]
    fn test_blended_coefficient() {
        // 8 draws, 10 matches → 0.4 rating / 0.6 rank.
        let p = player(6.0, 10.0, 10, 5);
        let ctx = DrawContext::new(10, 8);

        // rank_component = 0.5*10 + 0.5*0.5 = 5.25
        // coefficient    = 0.4*6 + 0.6*5.25 = 5.55
        assert!((coefficient(&p, &ctx) - 5.55).abs() < 1e-10);
    }

    #[test]
    fn test_zero_matches_means_zero_win_ratio() {
        let p = player(4.0, 8.0, 0, 0);
        let ctx = DrawContext::new(10, 8);

        // rank_component = 0.5*8 = 4.0; coefficient = 0.4*4 + 0.6*4 = 4.0
        assert!((coefficient(&p, &ctx) - 4.0).abs() < 1e-10);
    }

    #[test]
    fn test_non_negative_and_finite() {
        let ctx = DrawContext::new(10, 8);
        for rating in [0.0, 1.0, 10.0] {
            for points in [0.0, 50.0] {
                let c = coefficient(&player(rating, points, 12, 7), &ctx);
                assert!(c.is_finite());
                assert!(c >= 0.0);
            }
        }
    }
}
