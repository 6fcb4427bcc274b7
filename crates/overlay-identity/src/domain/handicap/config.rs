//! Handicap configuration.

use serde::{Deserialize, Serialize};

use crate::domain::errors::ConfigError;

/// Kind of operation a peer is being costed for.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum OperationKind {
    /// Store content on the peer ("put blob").
    PublishContent,
    /// Fetch content from the peer.
    RetrieveContent,
    /// Ask the peer for contact information.
    LookupContact,
    /// Route a message through the peer.
    Relay,
}

impl OperationKind {
    /// Publishing prefers more reliable peers.
    pub fn is_publish(&self) -> bool {
        matches!(self, Self::PublishContent)
    }
}

/// Tuning of the reliability-weighted cost.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct HandicapConfig {
    /// Cost of a perfectly reliable peer; also sets the reliability floor
    /// (`tuning_factor / max_distance`).
    pub tuning_factor: f64,
    /// Extra multiplier for publish operations.
    pub publish_boost: f64,
    /// Reliability assumed for a peer with no observations yet.
    pub unobserved_reliability: f64,
    /// Starting value for the first weighted observation.
    pub initial_reliability: f64,
    /// Weight of history in a weighted observation (0.0 ignores history,
    /// 1.0 ignores the new sample).
    pub history_weight: f64,
}

impl Default for HandicapConfig {
    fn default() -> Self {
        Self {
            tuning_factor: 256.0,
            publish_boost: 8.0,
            unobserved_reliability: 1.0,
            initial_reliability: 0.5,
            history_weight: 0.75,
        }
    }
}

impl HandicapConfig {
    /// Round numbers for hand-checked expectations.
    pub fn for_testing() -> Self {
        Self {
            tuning_factor: 4.0,
            publish_boost: 2.0,
            unobserved_reliability: 1.0,
            initial_reliability: 0.5,
            history_weight: 0.5,
        }
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        if !(self.tuning_factor.is_finite() && self.tuning_factor > 0.0) {
            return Err(invalid("handicap.tuning_factor", self.tuning_factor, "must be positive"));
        }
        if !(self.publish_boost.is_finite() && self.publish_boost > 0.0) {
            return Err(invalid("handicap.publish_boost", self.publish_boost, "must be positive"));
        }
        if !(self.unobserved_reliability.is_finite() && self.unobserved_reliability > 0.0) {
            return Err(invalid(
                "handicap.unobserved_reliability",
                self.unobserved_reliability,
                "must be positive",
            ));
        }
        if !(0.0..=1.0).contains(&self.initial_reliability) {
            return Err(invalid(
                "handicap.initial_reliability",
                self.initial_reliability,
                "must be within [0, 1]",
            ));
        }
        if !(0.0..=1.0).contains(&self.history_weight) {
            return Err(invalid(
                "handicap.history_weight",
                self.history_weight,
                "must be within [0, 1]",
            ));
        }
        Ok(())
    }
}

fn invalid(field: &'static str, value: f64, reason: &str) -> ConfigError {
    ConfigError::InvalidValue {
        field,
        reason: format!("{value} {reason}"),
    }
}
