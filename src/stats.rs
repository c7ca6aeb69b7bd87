//! Team aggregate recomputation and presentation order.
//!
//! Pure and idempotent: safe to call after the initial assignment or after
//! any manual roster edit to bring a team's aggregate fields back in line
//! with its members.

use crate::coefficient::{resolve_weights, strength};
use crate::model::{DrawContext, Team};

/// Recomputes every team's aggregates and presentation order in place.
///
/// Per team:
/// - `coefficient_total` — sum of member coefficients under `context`
///   (the same context used for the original draw);
/// - `mean_rank_score` / `mean_rating` — means over non-bot members; bots
///   are synthetic fillers and would only drag the averages toward zero;
/// - `members` — stable-sorted by position priority (goalkeepers first),
///   then coefficient descending.
pub fn recompute(teams: &mut [Team], context: &DrawContext) {
    let weights = resolve_weights(context);

    for team in teams.iter_mut() {
        let coefficients: Vec<f64> = team
            .members
            .iter()
            .map(|m| strength(m, &weights))
            .collect();

        team.coefficient_total = coefficients.iter().sum();

        let mut humans = 0usize;
        let mut rank_sum = 0.0;
        let mut rating_sum = 0.0;
        for member in team.members.iter().filter(|m| !m.is_bot) {
            humans += 1;
            rank_sum += member.ranking_points;
            rating_sum += member.rating;
        }
        if humans > 0 {
            team.mean_rank_score = rank_sum / humans as f64;
            team.mean_rating = rating_sum / humans as f64;
        } else {
            team.mean_rank_score = 0.0;
            team.mean_rating = 0.0;
        }

        let mut order: Vec<usize> = (0..team.members.len()).collect();
        order.sort_by(|&a, &b| {
            team.members[a]
                .position
                .priority()
                .cmp(&team.members[b].position.priority())
                .then_with(|| {
                    coefficients[b]
                        .partial_cmp(&coefficients[a])
                        .unwrap_or(std::cmp::Ordering::Equal)
                })
        });
        team.members = order.into_iter().map(|i| team.members[i].clone()).collect();
    }
}
