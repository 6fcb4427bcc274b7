//! Reliability selector exposed as a chain member.

use std::sync::Arc;

use crate::domain::{
    Handicap, HandicapError, Handicapper, Identifier, OperationKind, ReliabilityHandle,
    ReliabilitySelector,
};
use crate::ports::CounterpartyRegistry;

/// [`Handicapper`] that costs a peer from its record in a
/// [`CounterpartyRegistry`].
#[derive(Clone)]
pub struct ReliabilityHandicapper {
    selector: ReliabilitySelector,
    registry: Arc<dyn CounterpartyRegistry>,
}

impl ReliabilityHandicapper {
    pub fn new(selector: ReliabilitySelector, registry: Arc<dyn CounterpartyRegistry>) -> Self {
        Self { selector, registry }
    }

    pub fn selector(&self) -> &ReliabilitySelector {
        &self.selector
    }

    /// Cost of `counterparty` for `kind`, possibly raising its stored
    /// reliability to the floor.
    ///
    /// A peer without a record is costed at the unobserved reliability and
    /// gets a record only if that value has to be raised to the floor.
    pub fn cost(&self, counterparty: &Identifier, kind: OperationKind) -> f64 {
        if counterparty == self.selector.local_id() {
            return 0.0;
        }
        let record = match self.registry.find_record(counterparty) {
            Some(record) => record,
            None if self.selector.config().unobserved_reliability >= self.selector.floor() => {
                ReliabilityHandle::default()
            }
            None => self.registry.reliability_record(counterparty),
        };
        self.selector.cost(counterparty, kind, &record)
    }
}

impl std::fmt::Debug for ReliabilityHandicapper {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ReliabilityHandicapper")
            .field("selector", &self.selector)
            .finish_non_exhaustive()
    }
}

impl Handicapper for ReliabilityHandicapper {
    fn name(&self) -> &str {
        "reliability"
    }

    fn handicap(
        &self,
        counterparty: &Identifier,
        kind: OperationKind,
    ) -> Result<Handicap, HandicapError> {
        Ok(Handicap::Cost(self.cost(counterparty, kind)))
    }
}
