//! Composition of several handicappers into one preference order.

use std::collections::HashMap;
use std::fmt;
use std::sync::Arc;

use thiserror::Error;
use tracing::warn;

use super::config::OperationKind;
use crate::domain::identifier::Identifier;

/// Verdict of one handicapper on one candidate.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Handicap {
    /// Non-negative estimated cost.
    Cost(f64),
    /// Never use this candidate for this operation.
    Disqualified,
}

/// A handicapper could not cost a candidate.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum HandicapError {
    #[error("handicapper `{handicapper}` failed: {reason}")]
    Failed { handicapper: String, reason: String },
}

/// One estimate of the real cost (including risk of failure) of sending an
/// operation to a counterparty.
pub trait Handicapper: Send + Sync {
    /// Name used in logs.
    fn name(&self) -> &str {
        std::any::type_name::<Self>()
    }

    fn handicap(
        &self,
        counterparty: &Identifier,
        kind: OperationKind,
    ) -> Result<Handicap, HandicapError>;
}

impl<F> Handicapper for F
where
    F: Fn(&Identifier, OperationKind) -> Result<Handicap, HandicapError> + Send + Sync,
{
    fn handicap(
        &self,
        counterparty: &Identifier,
        kind: OperationKind,
    ) -> Result<Handicap, HandicapError> {
        self(counterparty, kind)
    }
}

/// Sum-of-squares combination of handicappers.
///
/// Handicappers registered for a specific operation kind run before the
/// generic ones. A candidate is disqualified if any handicapper disqualifies
/// it, fails, or returns a negative or non-finite cost.
#[derive(Default, Clone)]
pub struct HandicapperChain {
    generic: Vec<Arc<dyn Handicapper>>,
    by_kind: HashMap<OperationKind, Vec<Arc<dyn Handicapper>>>,
}

impl fmt::Debug for HandicapperChain {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("HandicapperChain")
            .field("generic", &self.generic.len())
            .field("by_kind", &self.by_kind.len())
            .finish()
    }
}

impl HandicapperChain {
    pub fn new() -> Self {
        Self::default()
    }

    /// Register a handicapper for every kind (`None`) or only the given kinds.
    pub fn add(&mut self, handicapper: Arc<dyn Handicapper>, kinds: Option<&[OperationKind]>) {
        match kinds {
            None => self.generic.push(handicapper),
            Some(kinds) => {
                for kind in kinds {
                    self.by_kind
                        .entry(*kind)
                        .or_default()
                        .push(Arc::clone(&handicapper));
                }
            }
        }
    }

    /// Total number of registrations.
    pub fn len(&self) -> usize {
        self.generic.len() + self.by_kind.values().map(Vec::len).sum::<usize>()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Combined handicap of `counterparty` for `kind`.
    pub fn compute(&self, counterparty: &Identifier, kind: OperationKind) -> Handicap {
        let specific = self.by_kind.get(&kind).map(Vec::as_slice).unwrap_or(&[]);
        let mut total = 0.0;
        for handicapper in specific.iter().chain(self.generic.iter()) {
            match handicapper.handicap(counterparty, kind) {
                Ok(Handicap::Cost(amount)) if amount.is_finite() && amount >= 0.0 => {
                    total += amount * amount;
                }
                Ok(Handicap::Cost(amount)) => {
                    warn!(
                        handicapper = handicapper.name(),
                        peer = %counterparty.abbrev(),
                        amount,
                        "Invalid handicap, disqualifying"
                    );
                    return Handicap::Disqualified;
                }
                Ok(Handicap::Disqualified) => return Handicap::Disqualified,
                Err(err) => {
                    warn!(
                        peer = %counterparty.abbrev(),
                        ?kind,
                        error = %err,
                        "Handicapper failed, disqualifying"
                    );
                    return Handicap::Disqualified;
                }
            }
        }
        Handicap::Cost(total)
    }

    /// Cheapest qualified candidate; the earliest one wins ties.
    pub fn pick_best(&self, candidates: &[Identifier], kind: OperationKind) -> Option<Identifier> {
        let mut best: Option<(f64, Identifier)> = None;
        for candidate in candidates {
            if let Handicap::Cost(cost) = self.compute(candidate, kind) {
                if best.map_or(true, |(best_cost, _)| cost < best_cost) {
                    best = Some((cost, *candidate));
                }
            }
        }
        best.map(|(_, id)| id)
    }

    /// Qualified candidates, cheapest first. Stable for equal costs.
    pub fn sort_by_preference(
        &self,
        candidates: &[Identifier],
        kind: OperationKind,
    ) -> Vec<Identifier> {
        let mut costed: Vec<(f64, Identifier)> = candidates
            .iter()
            .filter_map(|candidate| match self.compute(candidate, kind) {
                Handicap::Cost(cost) => Some((cost, *candidate)),
                Handicap::Disqualified => None,
            })
            .collect();
        costed.sort_by(|a, b| a.0.total_cmp(&b.0));
        costed.into_iter().map(|(_, id)| id).collect()
    }
}
