//! Participant strength scoring.
//!
//! Converts raw attributes (subjective rating, ranking points, match
//! record) into a single scalar coefficient. The blend between the
//! subjective and the performance-derived components is decided once per
//! draw by a [`WeightPair`] resolved from the [`DrawContext`]: early in a
//! season the policy trusts subjective ratings entirely, and shifts toward
//! performance data as history accumulates.
//!
//! [`DrawContext`]: crate::model::DrawContext

mod calculator;
mod policy;

pub use calculator::{coefficient, strength};
pub use policy::{resolve_weights, WeightPair};
