//! Pair-affinity aggregation over past draws.
//!
//! Folds a bounded, most-recent-first window of [`HistoricalDraw`] records
//! into a sparse map of decayed co-occurrence weights. A pairing from the
//! latest session is penalized far more than one from many sessions ago,
//! so the same two regulars can eventually be re-teamed without indefinite
//! punishment.
//!
//! [`HistoricalDraw`]: crate::model::HistoricalDraw

mod aggregator;

pub use aggregator::{pair_key, AffinityMap, DEFAULT_DECAY};
