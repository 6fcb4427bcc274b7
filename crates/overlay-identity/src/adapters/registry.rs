//! In-memory counterparty registry.

use std::collections::HashMap;

use parking_lot::RwLock;
use tracing::trace;

use crate::domain::{HandicapConfig, Identifier, Outcome, PeerReliability, ReliabilityHandle};
use crate::ports::CounterpartyRegistry;

/// Reliability records keyed by peer.
///
/// The map lock is only held to find or create a handle; updates to a record
/// take that record's own lock.
#[derive(Debug, Default)]
pub struct InMemoryCounterpartyRegistry {
    records: RwLock<HashMap<Identifier, ReliabilityHandle>>,
    config: HandicapConfig,
}

impl InMemoryCounterpartyRegistry {
    /// Registry whose observations use `config`'s history weight and initial
    /// reliability.
    pub fn new(config: HandicapConfig) -> Self {
        Self {
            records: RwLock::new(HashMap::new()),
            config,
        }
    }

    /// Number of peers with a record.
    pub fn len(&self) -> usize {
        self.records.read().len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.read().is_empty()
    }

    /// Overwrite `peer`'s reliability.
    pub fn set_reliability(&self, peer: &Identifier, value: f64) {
        self.reliability_record(peer).set(value);
    }

    /// Current reliability of `peer`, `None` if never observed or set.
    pub fn reliability(&self, peer: &Identifier) -> Option<f64> {
        self.records.read().get(peer).and_then(ReliabilityHandle::get)
    }

    /// Fold a successful interaction into `peer`'s record.
    pub fn record_success(&self, peer: &Identifier) -> f64 {
        self.observe(peer, Outcome::Success)
    }

    /// Fold a failed interaction into `peer`'s record.
    pub fn record_failure(&self, peer: &Identifier) -> f64 {
        self.observe(peer, Outcome::Failure)
    }

    /// Forget `peer`, returning its last record.
    pub fn remove(&self, peer: &Identifier) -> Option<PeerReliability> {
        self.records
            .write()
            .remove(peer)
            .map(|handle| handle.lock().clone())
    }

    fn observe(&self, peer: &Identifier, outcome: Outcome) -> f64 {
        let handle = self.reliability_record(peer);
        let updated = handle.lock().observe(
            outcome,
            self.config.history_weight,
            self.config.initial_reliability,
        );
        trace!(peer = %peer.abbrev(), ?outcome, reliability = updated, "Observed peer");
        updated
    }
}

impl CounterpartyRegistry for InMemoryCounterpartyRegistry {
    fn reliability_record(&self, peer: &Identifier) -> ReliabilityHandle {
        if let Some(handle) = self.records.read().get(peer) {
            return handle.clone();
        }
        self.records.write().entry(*peer).or_default().clone()
    }

    fn find_record(&self, peer: &Identifier) -> Option<ReliabilityHandle> {
        self.records.read().get(peer).cloned()
    }
}
