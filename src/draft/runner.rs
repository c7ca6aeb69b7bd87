//! Draft execution.

use std::collections::HashSet;
use std::fmt;

use log::debug;

use super::config::DraftConfig;
use super::strategy::{CandidateStrategy, SnakeWindow};
use crate::affinity::AffinityMap;
use crate::coefficient::{resolve_weights, strength};
use crate::error::DraftError;
use crate::model::{DrawContext, HistoricalDraw, Participant, ParticipantId, Team};
use crate::stats;

/// Everything one draw consumes. Owned by the caller; never mutated.
#[derive(Debug, Clone, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct DraftInput {
    /// The pool to partition, bots included.
    pub participants: Vec<Participant>,
    /// Season context for the weighting policy.
    pub context: DrawContext,
    /// Past draws, most recent first. The caller decides the window.
    pub history: Vec<HistoricalDraw>,
}

/// Human-readable notices attached to an otherwise successful draw.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Warning {
    /// Pool size is not evenly divisible by the team count.
    UnevenPool {
        participants: usize,
        team_count: usize,
    },
    /// This many participants exceeded total capacity and were benched.
    ReservesRequired(usize),
    /// History referenced this many ids absent from the pool.
    UnknownHistoryIds(usize),
}

impl fmt::Display for Warning {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Warning::UnevenPool {
                participants,
                team_count,
            } => write!(
                f,
                "{participants} participants do not divide evenly into {team_count} teams"
            ),
            Warning::ReservesRequired(n) => {
                write!(f, "{n} participant(s) placed in reserves: all teams at capacity")
            }
            Warning::UnknownHistoryIds(n) => {
                write!(f, "history references {n} id(s) not present in the pool")
            }
        }
    }
}

/// Result of one draw.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct DraftOutcome {
    /// The drafted teams, aggregates recomputed and rosters in
    /// presentation order.
    pub teams: Vec<Team>,
    /// Participants that could not be placed; manual resolution expected.
    pub reserves: Vec<Participant>,
    /// Notices for the caller. Never fatal.
    pub warnings: Vec<Warning>,
}

/// Executes the greedy balanced assignment.
pub struct DraftRunner;

impl DraftRunner {
    /// Runs a draw with the default snake ±1 candidate window.
    pub fn run(input: &DraftInput, config: &DraftConfig) -> Result<DraftOutcome, DraftError> {
        Self::run_with_strategy(input, config, &SnakeWindow::default())
    }

    /// Runs a draw with a custom candidate strategy.
    ///
    /// The strategy only biases which teams are tried first. The fixed
    /// search order is: preferred slots with capacity, then every team
    /// with capacity, then the reserve list — the widening step trades
    /// locality for correctness and materially changes who gets benched,
    /// so it is not strategy-controlled.
    pub fn run_with_strategy(
        input: &DraftInput,
        config: &DraftConfig,
        strategy: &dyn CandidateStrategy,
    ) -> Result<DraftOutcome, DraftError> {
        config.validate()?;

        let total = input.participants.len();
        debug!(
            "drafting {} participants into {} teams (capacity {}) via {}",
            total,
            config.team_count,
            config.max_roster_size,
            strategy.name()
        );

        let mut warnings = Vec::new();

        let unknown = count_unknown_history_ids(&input.participants, &input.history);
        if unknown > 0 {
            warnings.push(Warning::UnknownHistoryIds(unknown));
        }
        if total % config.team_count != 0 {
            warnings.push(Warning::UnevenPool {
                participants: total,
                team_count: config.team_count,
            });
        }

        // Resolved once per draw, never per participant.
        let weights = resolve_weights(&input.context);
        let coefficients: Vec<f64> = input
            .participants
            .iter()
            .map(|p| strength(p, &weights))
            .collect();

        // Strongest first; stable sort keeps input order on ties.
        let mut order: Vec<usize> = (0..total).collect();
        order.sort_by(|&a, &b| {
            coefficients[b]
                .partial_cmp(&coefficients[a])
                .unwrap_or(std::cmp::Ordering::Equal)
        });

        let affinity = AffinityMap::from_history(&input.history, config.decay_factor);

        let mut rosters: Vec<Vec<usize>> = vec![Vec::new(); config.team_count];
        let mut totals: Vec<f64> = vec![0.0; config.team_count];
        let mut reserve_indices: Vec<usize> = Vec::new();

        for (sorted_idx, &p_idx) in order.iter().enumerate() {
            let participant = &input.participants[p_idx];
            let coef = coefficients[p_idx];

            let mut candidates: Vec<usize> = strategy
                .preferred_slots(sorted_idx, config.team_count)
                .into_iter()
                .filter(|&t| t < config.team_count && rosters[t].len() < config.max_roster_size)
                .collect();

            if candidates.is_empty() {
                // Slot window exhausted: widen to every team with capacity
                // before giving up on placement.
                candidates = (0..config.team_count)
                    .filter(|&t| rosters[t].len() < config.max_roster_size)
                    .collect();
            }

            let mut best: Option<(usize, f64)> = None;
            for &t in &candidates {
                let penalty = affinity.team_penalty(
                    participant.id,
                    rosters[t].iter().map(|&i| input.participants[i].id),
                );
                let cost = config.imbalance_weight * (totals[t] + coef)
                    + config.affinity_weight * penalty;

                // Strict comparison: first-seen candidate wins ties.
                if best.is_none_or(|(_, c)| cost < c) {
                    best = Some((t, cost));
                }
            }

            match best {
                Some((t, _)) => {
                    rosters[t].push(p_idx);
                    totals[t] += coef;
                }
                None => {
                    debug!("participant {} to reserves: all teams full", participant.id);
                    reserve_indices.push(p_idx);
                }
            }
        }

        let reserves: Vec<Participant> = reserve_indices
            .iter()
            .map(|&i| input.participants[i].clone())
            .collect();
        if !reserves.is_empty() {
            warnings.push(Warning::ReservesRequired(reserves.len()));
        }

        let mut teams: Vec<Team> = rosters
            .iter()
            .enumerate()
            .map(|(t, roster)| {
                let mut team = Team::empty(format!("Team {}", t + 1));
                team.members = roster
                    .iter()
                    .map(|&i| input.participants[i].clone())
                    .collect();
                team
            })
            .collect();

        stats::recompute(&mut teams, &input.context);

        Ok(DraftOutcome {
            teams,
            reserves,
            warnings,
        })
    }
}

/// Distinct history ids with no matching pool participant.
fn count_unknown_history_ids(participants: &[Participant], history: &[HistoricalDraw]) -> usize {
    let known: HashSet<ParticipantId> = participants.iter().map(|p| p.id).collect();
    history
        .iter()
        .flat_map(|draw| draw.teams.iter())
        .flatten()
        .filter(|&&id| !known.contains(&id))
        .collect::<HashSet<_>>()
        .len()
}
