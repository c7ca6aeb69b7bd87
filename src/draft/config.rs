//! Draft configuration.
//!
//! [`DraftConfig`] holds all parameters that control one draw.

use crate::affinity::DEFAULT_DECAY;
use crate::error::DraftError;

/// Default weight of projected team strength in the cost function.
pub(crate) const DEFAULT_IMBALANCE_WEIGHT: f64 = 1.0;

/// Default weight of the affinity penalty. Slightly above the imbalance
/// weight so recurring cliques are actively broken up.
pub(crate) const DEFAULT_AFFINITY_WEIGHT: f64 = 1.2;

/// Configuration for one draw.
///
/// Team count and roster capacity are decided by the caller (the engine
/// never infers them); decay and cost weights carry documented defaults.
///
/// # Builder Pattern
///
/// ```
/// use team_draft::draft::DraftConfig;
///
/// let config = DraftConfig::new(4, 5)
///     .with_decay_factor(0.9)
///     .with_affinity_weight(1.5);
/// assert!(config.validate().is_ok());
/// ```
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct DraftConfig {
    /// Number of teams to produce. Must be at least 1.
    pub team_count: usize,

    /// Maximum roster size per team. Must be at least 1.
    pub max_roster_size: usize,

    /// Per-step recency decay for the affinity fold, in (0, 1].
    ///
    /// Lower values forget past pairings faster. Default 0.85.
    pub decay_factor: f64,

    /// Cost weight of projected team strength (`W1`). Default 1.0.
    pub imbalance_weight: f64,

    /// Cost weight of the affinity penalty (`W2`). Default 1.2.
    ///
    /// The defaults have no derivation beyond calibration against real
    /// session data; both weights are exposed for tuning.
    pub affinity_weight: f64,
}

impl DraftConfig {
    /// Creates a configuration with default decay and cost weights.
    pub fn new(team_count: usize, max_roster_size: usize) -> Self {
        Self {
            team_count,
            max_roster_size,
            decay_factor: DEFAULT_DECAY,
            imbalance_weight: DEFAULT_IMBALANCE_WEIGHT,
            affinity_weight: DEFAULT_AFFINITY_WEIGHT,
        }
    }

    /// Sets the affinity decay factor.
    pub fn with_decay_factor(mut self, decay: f64) -> Self {
        self.decay_factor = decay;
        self
    }

    /// Sets the imbalance cost weight.
    pub fn with_imbalance_weight(mut self, weight: f64) -> Self {
        self.imbalance_weight = weight;
        self
    }

    /// Sets the affinity cost weight.
    pub fn with_affinity_weight(mut self, weight: f64) -> Self {
        self.affinity_weight = weight;
        self
    }

    /// Total roster capacity across all teams.
    pub fn total_capacity(&self) -> usize {
        self.team_count * self.max_roster_size
    }

    /// Validates the configuration.
    ///
    /// Invalid configuration is a caller error, rejected before any
    /// assignment work.
    pub fn validate(&self) -> Result<(), DraftError> {
        if self.team_count == 0 {
            return Err(DraftError::InvalidTeamCount(self.team_count));
        }
        if self.max_roster_size == 0 {
            return Err(DraftError::InvalidRosterSize(self.max_roster_size));
        }
        if !(self.decay_factor > 0.0 && self.decay_factor <= 1.0) {
            return Err(DraftError::InvalidDecayFactor(self.decay_factor));
        }
        let weights_valid = self.imbalance_weight >= 0.0
            && self.imbalance_weight.is_finite()
            && self.affinity_weight >= 0.0
            && self.affinity_weight.is_finite();
        if !weights_valid {
            return Err(DraftError::InvalidCostWeights {
                imbalance: self.imbalance_weight,
                affinity: self.affinity_weight,
            });
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let config = DraftConfig::new(4, 5);
        assert_eq!(config.team_count, 4);
        assert_eq!(config.max_roster_size, 5);
        assert!((config.decay_factor - 0.85).abs() < 1e-10);
        assert!((config.imbalance_weight - 1.0).abs() < 1e-10);
        assert!((config.affinity_weight - 1.2).abs() < 1e-10);
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_builder_pattern() {
        let config = DraftConfig::new(2, 6)
            .with_decay_factor(0.7)
            .with_imbalance_weight(2.0)
            .with_affinity_weight(0.5);

        assert!((config.decay_factor - 0.7).abs() < 1e-10);
        assert!((config.imbalance_weight - 2.0).abs() < 1e-10);
        assert!((config.affinity_weight - 0.5).abs() < 1e-10);
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_total_capacity() {
        assert_eq!(DraftConfig::new(4, 5).total_capacity(), 20);
        assert_eq!(DraftConfig::new(1, 1).total_capacity(), 1);
    }

    #[test]
    fn test_validate_zero_teams() {
        assert_eq!(
            DraftConfig::new(0, 5).validate(),
            Err(DraftError::InvalidTeamCount(0))
        );
    }

    #[test]
    fn test_validate_zero_roster() {
        assert_eq!(
            DraftConfig::new(3, 0).validate(),
            Err(DraftError::InvalidRosterSize(0))
        );
    }

    #[test]
    fn test_validate_decay_range() {
        assert!(DraftConfig::new(2, 4).with_decay_factor(0.0).validate().is_err());
        assert!(DraftConfig::new(2, 4).with_decay_factor(-0.5).validate().is_err());
        assert!(DraftConfig::new(2, 4).with_decay_factor(1.1).validate().is_err());
        assert!(DraftConfig::new(2, 4).with_decay_factor(1.0).validate().is_ok());
        assert!(DraftConfig::new(2, 4).with_decay_factor(f64::NAN).validate().is_err());
    }

    #[test]
    fn test_validate_negative_weights() {
        assert!(DraftConfig::new(2, 4).with_imbalance_weight(-1.0).validate().is_err());
        assert!(DraftConfig::new(2, 4).with_affinity_weight(-0.1).validate().is_err());
        assert!(DraftConfig::new(2, 4)
            .with_affinity_weight(f64::INFINITY)
            .validate()
            .is_err());
        assert!(DraftConfig::new(2, 4).with_affinity_weight(0.0).validate().is_ok());
    }
}
