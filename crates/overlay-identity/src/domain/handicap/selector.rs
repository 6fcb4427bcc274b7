//! Reliability-weighted cost of contacting a peer.

use tracing::debug;

use super::config::{HandicapConfig, OperationKind};
use super::reliability::ReliabilityHandle;
use crate::domain::address_space::AddressSpace;
use crate::domain::errors::ConfigError;
use crate::domain::identifier::Identifier;

/// Turns a peer's reliability into a cost; lower is preferred.
///
/// ```text
/// floor = tuning_factor / max_distance
/// cost  = tuning_factor / max(reliability, floor)    (x publish_boost for publishes)
/// ```
///
/// Tying the floor to the ring's maximum distance makes the least reliable peer
/// cost exactly `max_distance`, the same handicap as the farthest possible peer.
#[derive(Debug, Clone)]
pub struct ReliabilitySelector {
    local_id: Identifier,
    config: HandicapConfig,
    floor: f64,
}

impl ReliabilitySelector {
    pub fn new(
        local_id: Identifier,
        config: HandicapConfig,
        space: &AddressSpace,
    ) -> Result<Self, ConfigError> {
        config.validate()?;
        let floor = config.tuning_factor / space.max_distance() as f64;
        Ok(Self {
            local_id,
            config,
            floor,
        })
    }

    pub fn local_id(&self) -> &Identifier {
        &self.local_id
    }

    pub fn config(&self) -> &HandicapConfig {
        &self.config
    }

    /// Lowest reliability the cost function will use.
    pub fn floor(&self) -> f64 {
        self.floor
    }

    /// Cost of sending an operation of `kind` to `counterparty`.
    ///
    /// Zero for the local node. A stored reliability below the floor (or NaN)
    /// is raised to the floor in `record` under the record's lock before
    /// costing, so concurrent callers never lose the correction.
    pub fn cost(
        &self,
        counterparty: &Identifier,
        kind: OperationKind,
        record: &ReliabilityHandle,
    ) -> f64 {
        if *counterparty == self.local_id {
            return 0.0;
        }

        let reliability = {
            let mut stored = record.lock();
            let current = stored.get_or(self.config.unobserved_reliability);
            if current >= self.floor {
                current
            } else {
                debug!(
                    peer = %counterparty.abbrev(),
                    stored = current,
                    floor = self.floor,
                    "Raising reliability to floor"
                );
                stored.set(self.floor);
                self.floor
            }
        };

        let cost = self.config.tuning_factor / reliability;
        if kind.is_publish() {
            cost * self.config.publish_boost
        } else {
            cost
        }
    }
}
