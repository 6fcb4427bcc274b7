//! # Reliability-Weighted Peer Selection
//!
//! Costs ("handicaps") used to rank candidate peers for an operation.
//!
//! - [`ReliabilitySelector`]: cost from a peer's reliability record, with a
//!   floor tied to the address space's maximum distance and a boost for
//!   publish operations
//! - [`HandicapperChain`]: sum-of-squares combination of several costs, with
//!   disqualification
//! - [`PeerReliability`] / [`ReliabilityHandle`]: the per-peer record, one lock
//!   per counterparty

mod chain;
mod config;
mod reliability;
mod selector;

pub use chain::{Handicap, HandicapError, Handicapper, HandicapperChain};
pub use config::{HandicapConfig, OperationKind};
pub use reliability::{Outcome, PeerReliability, ReliabilityHandle};
pub use selector::ReliabilitySelector;

#[cfg(test)]
mod tests;
