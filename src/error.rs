//! Engine error type.

use thiserror::Error;

/// Precondition failures reported to the caller before any assignment work.
///
/// These are configuration errors, not runtime faults: the engine never
/// retries and nothing here is fatal to the surrounding process. Capacity
/// exhaustion and malformed history are deliberately NOT errors — they
/// surface as reserves and [`Warning`](crate::draft::Warning)s instead.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum DraftError {
    /// Team count must be at least 1.
    #[error("team_count must be at least 1, got {0}")]
    InvalidTeamCount(usize),

    /// Roster capacity must be at least 1.
    #[error("max_roster_size must be at least 1, got {0}")]
    InvalidRosterSize(usize),

    /// Decay factor must lie in (0, 1].
    #[error("decay_factor must be in (0, 1], got {0}")]
    InvalidDecayFactor(f64),

    /// Cost weights must be non-negative and finite.
    #[error("cost weights must be non-negative and finite, got imbalance={imbalance}, affinity={affinity}")]
    InvalidCostWeights {
        /// The configured imbalance weight.
        imbalance: f64,
        /// The configured affinity weight.
        affinity: f64,
    },
}
