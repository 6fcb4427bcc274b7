//! Per-peer reliability records.
//!
//! Each counterparty owns one record behind its own lock, so a read-modify-write
//! on one peer never contends with another.

use std::sync::Arc;

use parking_lot::{Mutex, MutexGuard};

/// Result of one interaction with a peer.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Outcome {
    Success,
    Failure,
}

impl Outcome {
    fn sample(self) -> f64 {
        match self {
            Self::Success => 1.0,
            Self::Failure => 0.0,
        }
    }
}

/// Reliability statistic for one counterparty.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct PeerReliability {
    /// `None` until the first observation or explicit set
    value: Option<f64>,
    observations: u64,
}

impl PeerReliability {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_value(value: f64) -> Self {
        Self {
            value: Some(value),
            observations: 0,
        }
    }

    /// Stored value, if any.
    pub fn get(&self) -> Option<f64> {
        self.value
    }

    /// Stored value, or `default` for an unobserved peer.
    pub fn get_or(&self, default: f64) -> f64 {
        self.value.unwrap_or(default)
    }

    pub fn set(&mut self, value: f64) {
        self.value = Some(value);
    }

    /// Number of weighted observations folded in so far.
    pub fn observations(&self) -> u64 {
        self.observations
    }

    /// Fold one outcome into an exponentially weighted average.
    ///
    /// `new = history_weight * old + (1 - history_weight) * sample`, with `old`
    /// starting at `initial`. Returns the new value.
    pub fn observe(&mut self, outcome: Outcome, history_weight: f64, initial: f64) -> f64 {
        let old = self.value.unwrap_or(initial);
        let updated = history_weight * old + (1.0 - history_weight) * outcome.sample();
        self.value = Some(updated);
        self.observations += 1;
        updated
    }
}

/// Shared, independently lockable handle to one peer's record.
///
/// Clones refer to the same record.
#[derive(Debug, Clone, Default)]
pub struct ReliabilityHandle(Arc<Mutex<PeerReliability>>);

impl ReliabilityHandle {
    pub fn new(record: PeerReliability) -> Self {
        Self(Arc::new(Mutex::new(record)))
    }

    pub fn with_value(value: f64) -> Self {
        Self::new(PeerReliability::with_value(value))
    }

    /// Exclusive access for a read-modify-write.
    pub fn lock(&self) -> MutexGuard<'_, PeerReliability> {
        self.0.lock()
    }

    pub fn get(&self) -> Option<f64> {
        self.0.lock().get()
    }

    pub fn set(&self, value: f64) {
        self.0.lock().set(value);
    }

    /// Whether both handles refer to the same record.
    pub fn same_record(&self, other: &Self) -> bool {
        Arc::ptr_eq(&self.0, &other.0)
    }
}
