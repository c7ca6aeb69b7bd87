//! Roster-balanced team drafting engine.
//!
//! Given a pool of participants, a draw context and a bounded window of
//! past draws, the engine partitions the pool into N teams such that:
//!
//! - **Strength balance**: aggregate skill is as even as possible across
//!   teams, using a per-participant coefficient that blends subjective
//!   rating with performance-derived ranking.
//! - **Clique diversification**: participants who were teammates in recent
//!   draws carry a decayed pair-affinity penalty, discouraging the same
//!   groups from reforming every session.
//!
//! # Components
//!
//! - [`coefficient`]: converts raw participant attributes into a single
//!   scalar strength score under a history-sensitive weighting policy.
//! - [`affinity`]: folds past draws into a sparse, recency-decayed
//!   pairwise co-occurrence map.
//! - [`draft`]: the greedy balanced assigner, with a snake-order candidate
//!   window behind a pluggable [`draft::CandidateStrategy`].
//! - [`stats`]: recomputes team aggregates and the position-based
//!   presentation order after any roster mutation.
//!
//! # Properties
//!
//! A draw is a pure, synchronous, deterministic computation: no I/O, no
//! randomness, no shared state. Running the engine twice with identical
//! inputs yields identical team compositions. Invalid configuration is
//! rejected up front with [`DraftError`]; capacity overflow is a normal
//! outcome surfaced through the reserve list and warnings, never an error.
//!
//! # Example
//!
//! ```
//! use team_draft::draft::{DraftConfig, DraftInput, DraftRunner};
//! use team_draft::model::{DrawContext, Participant, Position};
//!
//! let participants = (0..8)
//!     .map(|i| Participant::new(i, Position::Midfielder).with_rating(5.0 + i as f64))
//!     .collect();
//!
//! let input = DraftInput {
//!     participants,
//!     context: DrawContext::default(),
//!     history: Vec::new(),
//! };
//!
//! let outcome = DraftRunner::run(&input, &DraftConfig::new(2, 4)).unwrap();
//! assert_eq!(outcome.teams.len(), 2);
//! assert!(outcome.reserves.is_empty());
//! ```

pub mod affinity;
pub mod coefficient;
pub mod draft;
pub mod error;
pub mod model;
pub mod stats;

pub use error::DraftError;
