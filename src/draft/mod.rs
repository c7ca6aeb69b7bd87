//! Greedy balanced assignment.
//!
//! The engine iterates participants from strongest to weakest and commits
//! each one to the lowest-cost feasible team, where cost combines projected
//! strength imbalance with the decayed pair-affinity penalty. Candidate
//! teams are biased by a snake-order slot window so the strongest
//! participants do not all pile into team 0; when the window is full the
//! search widens to every team with capacity, and only when every team is
//! full does a participant land in the reserve list.
//!
//! Candidate generation is a pluggable [`CandidateStrategy`]; the cost
//! function and tie-break rules are fixed.

mod config;
mod runner;
mod snake;
mod strategy;

pub use config::DraftConfig;
pub use runner::{DraftInput, DraftOutcome, DraftRunner, Warning};
pub use snake::snake_sequence;
pub use strategy::{CandidateStrategy, SnakeWindow};
